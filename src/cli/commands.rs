//! Command implementations for the lexisent CLI.

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::sync::Arc;

use crate::analysis::analyzer::SentimentAnalyzer;
use crate::analysis::types::Topic;
use crate::batch::{ReportStats, analyze_batch, read_records};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalyzerConfig;
use crate::error::{LexisentError, Result};
use crate::lexicon::Lexicon;
use crate::validation::validate_text;

/// Execute a CLI command.
pub fn execute_command(args: LexisentArgs) -> Result<()> {
    let config = load_config(&args)?;
    let lexicon = load_lexicon(&args)?;
    let analyzer = SentimentAnalyzer::from_config(lexicon, &config)?;

    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args, &analyzer, &config, &args),
        Command::Batch(batch_args) => analyze_file(batch_args, &analyzer, &config, &args),
        Command::Lexicon(lexicon_args) => show_lexicon(lexicon_args, analyzer.lexicon(), &args),
    }
}

fn load_config(args: &LexisentArgs) -> Result<AnalyzerConfig> {
    match &args.config {
        Some(path) => AnalyzerConfig::from_file(path),
        None => Ok(AnalyzerConfig::default()),
    }
}

fn load_lexicon(args: &LexisentArgs) -> Result<Arc<Lexicon>> {
    match &args.lexicon {
        Some(path) => Ok(Arc::new(Lexicon::from_file(path)?)),
        None => Ok(Lexicon::builtin()),
    }
}

/// Analyze a single text.
fn analyze_text(
    args: &AnalyzeArgs,
    analyzer: &SentimentAnalyzer,
    config: &AnalyzerConfig,
    cli_args: &LexisentArgs,
) -> Result<()> {
    let raw = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    // Trailing newlines come from files and pipes, not from the review.
    let text = raw.trim_end_matches(['\n', '\r']);

    let text = if args.no_validate {
        text
    } else {
        validate_text(text, &config.validation)?
    };

    if args.explain {
        output_result("Analysis", &analyzer.explain(text), cli_args)
    } else {
        output_result("Analysis", &analyzer.analyze(text), cli_args)
    }
}

/// Analyze every record of a file and summarize.
fn analyze_file(
    args: &BatchArgs,
    analyzer: &SentimentAnalyzer,
    config: &AnalyzerConfig,
    cli_args: &LexisentArgs,
) -> Result<()> {
    if let Some(threads) = args.threads {
        if threads == 0 {
            return Err(LexisentError::invalid_argument(
                "--threads must be at least 1",
            ));
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| anyhow::anyhow!("failed to start worker pool: {e}"))?;
    }

    let records = if args.reads_stdin() {
        read_records(io::stdin().lock())?
    } else {
        if cli_args.verbosity() > 1 {
            println!("Reading reviews from: {}", args.input.display());
        }
        read_records(BufReader::new(File::open(&args.input)?))?
    };

    let reviews = analyze_batch(analyzer, &records, &config.validation);
    let stats = ReportStats::from_reviews(&reviews);

    let batch = BatchOutput {
        reviews: (!args.stats_only).then_some(reviews),
        stats,
    };
    output_batch(&batch, cli_args)
}

/// Show lexicon tables.
fn show_lexicon(args: &LexiconArgs, lexicon: &Lexicon, cli_args: &LexisentArgs) -> Result<()> {
    if args.dump {
        return output_result("Lexicon", &lexicon.to_file_format(), cli_args);
    }

    if args.entries {
        let rows: Vec<EntryRow> = lexicon.entries().map(EntryRow::from).collect();
        return output_result("Lexicon entries", &rows, cli_args);
    }

    if let Some(topic) = args.topic {
        return output_result(
            &format!("Keywords for {topic}"),
            &topic_keywords(lexicon, topic),
            cli_args,
        );
    }

    let summary = LexiconSummary {
        positive_words: lexicon.positive_words().len(),
        negative_words: lexicon.negative_words().len(),
        intensifiers: lexicon.intensifiers().len(),
        topics: Topic::ALL
            .iter()
            .map(|topic| topic_keywords(lexicon, *topic))
            .collect(),
    };
    output_result("Lexicon", &summary, cli_args)
}

fn topic_keywords(lexicon: &Lexicon, topic: Topic) -> TopicKeywords {
    TopicKeywords {
        topic,
        keywords: lexicon.topic_keywords(topic).to_vec(),
    }
}
