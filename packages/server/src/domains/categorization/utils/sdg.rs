//! Priority → SDG mapping.

use std::collections::BTreeMap;

use crate::domains::categorization::models::MoroccanPriority;
use crate::domains::categorization::reference::{sdgs_for, RULE_SDG_CONFIDENCE};

/// At most this many SDG tags are attached to an idea.
pub const MAX_SDG_TAGS: usize = 5;

/// Union the SDGs of every priority in encounter order, de-duplicated and
/// truncated to five. Every tag gets the fixed rule confidence under `sdg_<n>`.
pub fn map_priorities_to_sdgs(priorities: &[MoroccanPriority]) -> (Vec<u8>, BTreeMap<String, f64>) {
    let mut tags: Vec<u8> = Vec::new();
    for sdg in priorities.iter().flat_map(|p| sdgs_for(*p)) {
        if tags.len() == MAX_SDG_TAGS {
            break;
        }
        if !tags.contains(sdg) {
            tags.push(*sdg);
        }
    }

    let confidence = tags
        .iter()
        .map(|n| (format!("sdg_{}", n), RULE_SDG_CONFIDENCE))
        .collect();

    (tags, confidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn green_morocco_maps_to_energy_climate_land() {
        let (tags, confidence) = map_priorities_to_sdgs(&[MoroccanPriority::GreenMorocco]);

        let set: BTreeSet<u8> = tags.iter().copied().collect();
        assert_eq!(set, BTreeSet::from([7, 13, 15]));
        assert_eq!(confidence.get("sdg_7"), Some(&0.9));
        assert_eq!(confidence.len(), 3);
    }

    #[test]
    fn empty_priorities_give_no_tags() {
        let (tags, confidence) = map_priorities_to_sdgs(&[]);
        assert!(tags.is_empty());
        assert!(confidence.is_empty());
    }

    #[test]
    fn shared_sdgs_are_deduplicated() {
        let (tags, _) = map_priorities_to_sdgs(&[
            MoroccanPriority::YouthEmployment,
            MoroccanPriority::WomenEntrepreneurship,
        ]);
        assert_eq!(tags, vec![8, 4, 5, 10]);
    }

    #[test]
    fn union_is_truncated_to_five_in_encounter_order() {
        let (tags, confidence) = map_priorities_to_sdgs(&[
            MoroccanPriority::GreenMorocco,
            MoroccanPriority::DigitalMorocco,
            MoroccanPriority::HealthcareImprovement,
        ]);

        assert_eq!(tags, vec![7, 13, 15, 9, 4]);
        assert!(!confidence.contains_key("sdg_17"));
        assert!(!confidence.contains_key("sdg_3"));
    }
}
