//! Location-type heuristic.

use crate::common::places::is_moroccan_city;
use crate::common::text::{contains_any, normalize};
use crate::domains::categorization::models::LocationType;
use crate::domains::categorization::reference::{NATIONAL_MARKERS, RURAL_CATEGORIES, RURAL_MARKERS};

/// Classify where an idea operates.
///
/// Checked in order: rural signals in the problem or category, country-wide
/// signals in the problem, a whitelisted city, any other named place. Returns
/// `None` when nothing is known (no location, or "other").
pub fn determine_location_type(
    location: Option<&str>,
    category: Option<&str>,
    problem: Option<&str>,
) -> Option<LocationType> {
    let location = normalize(location);
    let category = normalize(category);
    let problem = normalize(problem);

    if contains_any(&problem, RURAL_MARKERS) || RURAL_CATEGORIES.contains(&category.as_str()) {
        return Some(LocationType::Rural);
    }

    if contains_any(&problem, NATIONAL_MARKERS) {
        return Some(LocationType::National);
    }

    if location.is_empty() || location == "other" {
        return None;
    }

    if is_moroccan_city(&location) {
        Some(LocationType::Urban)
    } else {
        Some(LocationType::Regional)
    }
}
