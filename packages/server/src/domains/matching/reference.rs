//! Lookup tables and weights for the match scorer.
//!
//! Kept apart from the scoring code so the tables can be versioned and
//! localized without touching the arithmetic.

/// Anchor category and the expertise keywords considered related to it.
pub const RELATED_CATEGORIES: [(&str, &[&str]); 7] = [
    ("health", &["healthcare", "medical", "medicine", "santé", "nursing", "pharma", "public health"]),
    ("education", &["teaching", "training", "edtech", "enseignement", "formation", "pedagogy"]),
    ("agriculture", &["farming", "agritech", "agronomy", "food", "irrigation", "rural"]),
    ("tech", &["technology", "software", "digital", "engineering", "developer", "data"]),
    ("finance", &["fintech", "banking", "accounting", "investment", "microfinance"]),
    ("logistics", &["transport", "supply chain", "delivery", "shipping", "mobility"]),
    ("administration", &["government", "public sector", "e-gov", "civic", "policy"]),
];

/// Related keywords for a category, if it is one of the anchors.
pub fn related_keywords(category: &str) -> Option<&'static [&'static str]> {
    RELATED_CATEGORIES
        .iter()
        .find(|(anchor, _)| *anchor == category)
        .map(|(_, related)| *related)
}

// =============================================================================
// Weights (points out of 100)
// =============================================================================

pub const EXPERTISE_EXACT_POINTS: u8 = 40;
pub const EXPERTISE_RELATED_POINTS: u8 = 25;
pub const SKILL_MAX_POINTS: u8 = 30;
pub const LOCATION_SAME_CITY_POINTS: u8 = 15;
pub const LOCATION_BOTH_MOROCCO_POINTS: u8 = 10;
pub const MENTOR_POINTS: u8 = 8;
pub const COFUND_POINTS: u8 = 7;
pub const WORKSHOP_BONUS_POINTS: u8 = 2;
pub const WILLINGNESS_MAX_POINTS: u8 = 15;
pub const MAX_SCORE: u8 = 100;

/// Ranked results returned per idea.
pub const MAX_MATCHES: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_maxima_sum_to_max_score() {
        let total = EXPERTISE_EXACT_POINTS
            + SKILL_MAX_POINTS
            + LOCATION_SAME_CITY_POINTS
            + WILLINGNESS_MAX_POINTS;
        assert_eq!(total, MAX_SCORE);
    }

    #[test]
    fn related_keywords_only_for_anchors() {
        assert!(related_keywords("health").unwrap().contains(&"medical"));
        assert!(related_keywords("tourism").is_none());
    }
}
