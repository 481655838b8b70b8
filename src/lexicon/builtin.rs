//! Built-in French/English review vocabulary.
//!
//! Duplicate entries are intentional: each listed copy contributes its own
//! matches when counting.

use crate::analysis::types::Topic;

/// Words associated with favorable reviews.
pub const POSITIVE_WORDS: &[&str] = &[
    "excellent", "parfait", "super", "génial", "magnifique", "satisfait", "rapide", "qualité",
    "recommande", "merci", "bravo", "top", "incroyable", "fantastique", "impressionnant",
    "efficace", "professionnel", "agréable", "content", "ravi", "heureux", "bien", "bon", "bonne",
    "great", "good", "amazing", "wonderful", "happy", "love", "best", "superbe", "impeccable",
    "formidable", "extra", "nickel", "parfaite",
];

/// Words associated with unfavorable reviews.
pub const NEGATIVE_WORDS: &[&str] = &[
    "nul", "horrible", "mauvais", "déçu", "catastrophe", "lent", "problème", "erreur", "retard",
    "arnaque", "pire", "jamais", "inacceptable", "honteux", "scandaleux", "médiocre", "terrible",
    "décevant", "frustrant", "colère", "fâché", "mécontent", "bad", "worst", "terrible", "awful",
    "hate", "disappointed", "poor", "naze", "pourri", "incompétent", "inadmissible", "désastreux",
];

/// Words that amplify the score.
pub const INTENSIFIERS: &[&str] = &[
    "très", "vraiment", "tellement", "extrêmement", "super", "hyper", "ultra", "trop",
    "absolument", "totalement", "very", "really", "extremely", "absolutely", "totally",
];

const DELIVERY_KEYWORDS: &[&str] = &[
    "livraison", "livreur", "colis", "envoi", "expédition", "délai", "shipping", "delivery",
    "réception", "arrivée",
];

const PRICE_KEYWORDS: &[&str] = &[
    "prix", "coût", "cher", "économique", "tarif", "promotion", "réduction", "price", "expensive",
    "cheap", "abordable", "gratuit",
];

const QUALITY_KEYWORDS: &[&str] = &[
    "qualité", "matériau", "finition", "durable", "solide", "fragile", "quality", "material",
    "résistant", "robuste",
];

const SERVICE_KEYWORDS: &[&str] = &[
    "service", "client", "support", "aide", "assistance", "conseiller", "customer", "help",
    "accueil", "équipe",
];

const SPEED_KEYWORDS: &[&str] = &[
    "rapide", "vite", "lent", "attente", "immédiat", "fast", "slow", "quick", "vitesse",
    "rapidité",
];

const PACKAGING_KEYWORDS: &[&str] = &[
    "emballage", "carton", "protection", "packaging", "box", "colis", "paquet",
];

const EASE_OF_USE_KEYWORDS: &[&str] = &[
    "facile", "simple", "intuitif", "compliqué", "difficile", "easy", "simple", "hard",
    "pratique", "accessible",
];

/// Keywords for `topic`, in scanning order.
pub fn topic_keywords(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Delivery => DELIVERY_KEYWORDS,
        Topic::Price => PRICE_KEYWORDS,
        Topic::Quality => QUALITY_KEYWORDS,
        Topic::Service => SERVICE_KEYWORDS,
        Topic::Speed => SPEED_KEYWORDS,
        Topic::Packaging => PACKAGING_KEYWORDS,
        Topic::EaseOfUse => EASE_OF_USE_KEYWORDS,
    }
}
