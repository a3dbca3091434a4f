//! Budget tier from free-form cost estimates ("3K-5K", "<1K", "15 000 DH", "100K+").

use lazy_static::lazy_static;
use regex::Regex;

use crate::domains::categorization::models::BudgetTier;

lazy_static! {
    static ref AMOUNT_RE: Regex = Regex::new(r"(\d+(?:[.,]\d+)?)\s*(\p{L}*)").unwrap();
    static ref THOUSANDS_RE: Regex = Regex::new(r"(\d)[ .,'](\d{3})\b").unwrap();
    static ref CURRENCY_RE: Regex =
        Regex::new(r"dirhams?|dhs?\b|\bmad\b|\beur\b|\busd\b|€|\$").unwrap();
}

/// Upper tier boundaries in dirhams, inclusive.
const TIER_BOUNDS: [(f64, BudgetTier); 4] = [
    (1_000.0, BudgetTier::Micro),
    (5_000.0, BudgetTier::Small),
    (20_000.0, BudgetTier::Medium),
    (100_000.0, BudgetTier::Large),
];

/// The word following a number scales it only when it is a whole unit word,
/// so "6 mois" stays 6.
fn multiplier(word: &str) -> f64 {
    match word {
        "k" | "mille" => 1_000.0,
        "m" | "million" | "millions" => 1_000_000.0,
        _ => 1.0,
    }
}

const AT_MOST_MARKERS: &[&str] = &["less than", "moins de", "under", "max"];
const ABOVE_MARKERS: &[&str] = &["more than", "plus de", "over", "above"];

/// Parsed cost estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimate {
    /// Largest amount mentioned (upper bound of a range).
    pub upper: f64,
    /// The estimate means "strictly more than `upper`".
    pub open_ended: bool,
}

/// Parse a cost string. Returns `None` when no amount can be found.
pub fn parse_cost_estimate(estimated_cost: &str) -> Option<CostEstimate> {
    let lowered = estimated_cost.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    let mut cleaned = CURRENCY_RE.replace_all(&lowered, " ").into_owned();
    while THOUSANDS_RE.is_match(&cleaned) {
        cleaned = THOUSANDS_RE.replace_all(&cleaned, "$1$2").into_owned();
    }
    let cleaned = cleaned.trim();

    let upper = AMOUNT_RE
        .captures_iter(cleaned)
        .filter_map(|caps| {
            let number: f64 = caps[1].replace(',', ".").parse().ok()?;
            let unit = caps.get(2).map_or("", |m| m.as_str());
            Some(number * multiplier(unit))
        })
        .fold(None, |max: Option<f64>, value| Some(max.map_or(value, |m| m.max(value))))?;

    let at_most = cleaned.starts_with('<') || AT_MOST_MARKERS.iter().any(|m| cleaned.contains(m));
    let open_ended = !at_most
        && (cleaned.starts_with('>')
            || cleaned.ends_with('+')
            || ABOVE_MARKERS.iter().any(|m| cleaned.contains(m)));

    Some(CostEstimate { upper, open_ended })
}

/// Map a cost estimate to a budget tier, or `None` when unparseable.
pub fn map_budget_tier(estimated_cost: Option<&str>) -> Option<BudgetTier> {
    let estimate = parse_cost_estimate(estimated_cost?)?;

    let tier = TIER_BOUNDS
        .iter()
        .find(|(bound, _)| {
            if estimate.open_ended {
                estimate.upper < *bound
            } else {
                estimate.upper <= *bound
            }
        })
        .map(|(_, tier)| *tier)
        .unwrap_or(BudgetTier::Enterprise);

    Some(tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_cost_has_no_tier() {
        assert_eq!(map_budget_tier(None), None);
        assert_eq!(map_budget_tier(Some("   ")), None);
        assert_eq!(map_budget_tier(Some("je ne sais pas")), None);
    }

    #[test]
    fn less_than_one_k_is_micro() {
        assert_eq!(map_budget_tier(Some("<1K")), Some(BudgetTier::Micro));
        assert_eq!(map_budget_tier(Some("moins de 1000 DH")), Some(BudgetTier::Micro));
    }

    #[test]
    fn range_uses_upper_bound() {
        assert_eq!(map_budget_tier(Some("1K-5K")), Some(BudgetTier::Small));
        assert_eq!(map_budget_tier(Some("3K-5K")), Some(BudgetTier::Small));
        assert_eq!(map_budget_tier(Some("5K-20K")), Some(BudgetTier::Medium));
        assert_eq!(map_budget_tier(Some("20K-100K")), Some(BudgetTier::Large));
    }

    #[test]
    fn open_ended_amounts_move_up_a_tier() {
        assert_eq!(map_budget_tier(Some("100K+")), Some(BudgetTier::Enterprise));
        assert_eq!(map_budget_tier(Some(">100K")), Some(BudgetTier::Enterprise));
        assert_eq!(map_budget_tier(Some("100K")), Some(BudgetTier::Large));
    }

    #[test]
    fn thousands_separators_and_currency_are_ignored() {
        assert_eq!(map_budget_tier(Some("15 000 DH")), Some(BudgetTier::Medium));
        assert_eq!(map_budget_tier(Some("15,000 MAD")), Some(BudgetTier::Medium));
        assert_eq!(map_budget_tier(Some("1.200.000 dirhams")), Some(BudgetTier::Enterprise));
    }

    #[test]
    fn decimal_multipliers_are_supported() {
        let estimate = parse_cost_estimate("2.5k").unwrap();
        assert_eq!(estimate.upper, 2_500.0);
        assert!(!estimate.open_ended);

        assert_eq!(map_budget_tier(Some("1,5M")), Some(BudgetTier::Enterprise));
    }

    #[test]
    fn words_starting_with_m_are_not_millions() {
        let estimate = parse_cost_estimate("20K sur 6 mois").unwrap();
        assert_eq!(estimate.upper, 20_000.0);
        assert_eq!(map_budget_tier(Some("20K sur 6 mois")), Some(BudgetTier::Medium));
        assert_eq!(map_budget_tier(Some("3000 DH max")), Some(BudgetTier::Small));
    }

    #[test]
    fn french_unit_words_scale_the_amount() {
        assert_eq!(map_budget_tier(Some("10 mille DH")), Some(BudgetTier::Medium));
        assert_eq!(map_budget_tier(Some("2 millions de dirhams")), Some(BudgetTier::Enterprise));
        assert_eq!(parse_cost_estimate("1 million").unwrap().upper, 1_000_000.0);
    }

    #[test]
    fn currency_glued_to_the_amount() {
        assert_eq!(parse_cost_estimate("1500dh").unwrap().upper, 1_500.0);
        assert_eq!(map_budget_tier(Some("15kdh")), Some(BudgetTier::Medium));
    }
}
