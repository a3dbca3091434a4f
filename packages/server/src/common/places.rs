//! Moroccan city whitelist.
//!
//! Used both to classify an idea's location as urban and to give partial
//! proximity credit when an idea and a mentor are in different Moroccan cities.

pub const MOROCCAN_CITIES: [&str; 9] = [
    "casablanca",
    "rabat",
    "marrakech",
    "fes",
    "tangier",
    "agadir",
    "meknes",
    "oujda",
    "tetouan",
];

/// Case-insensitive whitelist check.
pub fn is_moroccan_city(location: &str) -> bool {
    let location = location.trim().to_lowercase();
    MOROCCAN_CITIES.contains(&location.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelist_is_case_insensitive() {
        assert!(is_moroccan_city("Casablanca"));
        assert!(is_moroccan_city(" rabat "));
    }

    #[test]
    fn unknown_places_are_not_cities() {
        assert!(!is_moroccan_city("paris"));
        assert!(!is_moroccan_city("other"));
        assert!(!is_moroccan_city(""));
    }
}
