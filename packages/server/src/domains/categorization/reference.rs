//! Lookup tables for rule-based categorization.
//!
//! Keyword lists mix French, English and transliterated Darija because ideas
//! arrive in all three. Every entry is lower-case; matching is plain substring
//! containment on lower-cased text, so stems like `agricultur` are intentional.

use super::models::MoroccanPriority;

/// Detection rule for one priority.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRule {
    pub priority: MoroccanPriority,
    /// Exact (lower-cased) idea categories that imply the priority.
    pub categories: &'static [&'static str],
    /// Substrings searched for in the combined idea text.
    pub keywords: &'static [&'static str],
    /// Hard-coded extra triggers checked after the keyword list.
    pub special_keywords: &'static [&'static str],
}

/// One rule per priority, in `MoroccanPriority::ALL` order.
pub const PRIORITY_RULES: [PriorityRule; 7] = [
    PriorityRule {
        priority: MoroccanPriority::GreenMorocco,
        categories: &["environment", "energy", "agriculture", "cleantech"],
        keywords: &[
            "solar", "solaire", "renewable", "renouvelable", "recycl", "environment",
            "environnement", "climat", "pollution", "déchet", "dechet", "waste", "éolien",
            "eolien", "sustainab", "durable", "irrigation", "sécheresse", "drought",
        ],
        special_keywords: &[],
    },
    PriorityRule {
        priority: MoroccanPriority::DigitalMorocco,
        categories: &["tech", "technology", "digital", "fintech", "administration"],
        keywords: &[
            "digital", "numérique", "numerique", "application", "platform", "plateforme",
            "online", "en ligne", "internet", "software", "logiciel", "website", "site web",
            "artificial intelligence", "intelligence artificielle", "e-commerce", "blockchain",
        ],
        special_keywords: &[],
    },
    PriorityRule {
        priority: MoroccanPriority::Vision2030,
        categories: &["tourism", "infrastructure", "sports", "transport"],
        keywords: &[
            "2030", "world cup", "coupe du monde", "mondial", "tourism", "tourisme", "stadium",
            "stade", "infrastructure", "high-speed", "tgv",
        ],
        special_keywords: &[],
    },
    PriorityRule {
        priority: MoroccanPriority::YouthEmployment,
        categories: &["employment", "education", "training"],
        keywords: &[
            "youth", "young people", "emploi", "employment", "unemploy", "chômage", "chomage",
            "internship", "apprenti", "formation professionnelle", "neet",
        ],
        special_keywords: &["genz", "jeune", "étudiant"],
    },
    PriorityRule {
        priority: MoroccanPriority::WomenEntrepreneurship,
        categories: &["women", "gender"],
        keywords: &[
            "women", "woman", "female", "girls", "gender", "coopérative féminine",
            "cooperative feminine", "mothers", "mères",
        ],
        special_keywords: &["femme", "femmes"],
    },
    PriorityRule {
        priority: MoroccanPriority::RuralDevelopment,
        categories: &["agriculture", "rural"],
        keywords: &[
            "rural", "village", "douar", "farmer", "agricultur", "fellah", "campagne",
            "countryside", "zones reculées", "argan",
        ],
        special_keywords: &[],
    },
    PriorityRule {
        priority: MoroccanPriority::HealthcareImprovement,
        categories: &["health", "healthcare", "santé", "sante"],
        keywords: &[
            "health", "santé", "sante", "hospital", "hôpital", "hopital", "clinic", "clinique",
            "medical", "médical", "médecin", "medecin", "doctor", "patient", "nurse", "infirmi",
            "pharmac", "maladie", "disease",
        ],
        special_keywords: &[],
    },
];

/// SDG numbers implied by each priority, most relevant first.
pub fn sdgs_for(priority: MoroccanPriority) -> &'static [u8] {
    match priority {
        MoroccanPriority::GreenMorocco => &[7, 13, 15],
        MoroccanPriority::DigitalMorocco => &[9, 4, 17],
        MoroccanPriority::Vision2030 => &[8, 9, 11],
        MoroccanPriority::YouthEmployment => &[8, 4],
        MoroccanPriority::WomenEntrepreneurship => &[5, 8, 10],
        MoroccanPriority::RuralDevelopment => &[1, 2, 6],
        MoroccanPriority::HealthcareImprovement => &[3],
    }
}

/// Confidence attached to every rule-derived SDG tag.
pub const RULE_SDG_CONFIDENCE: f64 = 0.9;

/// Problem-text markers for ideas aimed at rural areas.
pub const RURAL_MARKERS: &[&str] = &[
    "rural", "village", "douar", "campagne", "countryside", "farmer", "fellah", "bled",
    "zones reculées", "remote area",
];

/// Categories that lean rural regardless of the stated location.
pub const RURAL_CATEGORIES: &[&str] = &["agriculture", "rural"];

/// Problem-text markers for country-wide ideas.
pub const NATIONAL_MARKERS: &[&str] = &[
    "national", "tout le maroc", "all of morocco", "across morocco", "partout au maroc",
    "nationwide",
];
