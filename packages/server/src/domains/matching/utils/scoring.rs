//! Weighted mentor/idea compatibility scoring.
//!
//! Four independent factors, each capped, summed and capped at 100:
//! expertise (40), skills (30), location (15), willingness to help (15).
//! Pure functions; missing data scores zero for that factor only.

use crate::common::places::is_moroccan_city;
use crate::common::text::{contains_either_way, normalize};
use crate::domains::matching::models::{IdeaForMatching, MatchReasoning, MentorProfile};
use crate::domains::matching::reference::{
    related_keywords, COFUND_POINTS, EXPERTISE_EXACT_POINTS, EXPERTISE_RELATED_POINTS,
    LOCATION_BOTH_MOROCCO_POINTS, LOCATION_SAME_CITY_POINTS, MAX_SCORE, MENTOR_POINTS,
    SKILL_MAX_POINTS, WILLINGNESS_MAX_POINTS, WORKSHOP_BONUS_POINTS,
};

/// Points for one factor plus an optional explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorScore {
    pub points: u8,
    pub note: Option<String>,
}

impl FactorScore {
    fn zero() -> Self {
        Self { points: 0, note: None }
    }

    fn zero_because(note: impl Into<String>) -> Self {
        Self {
            points: 0,
            note: Some(note.into()),
        }
    }

    fn scored(points: u8, note: String) -> Self {
        Self {
            points,
            note: Some(note),
        }
    }
}

fn lowered(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Expertise: exact category match 40, related keyword 25, otherwise 0.
pub fn score_expertise(category: Option<&str>, expertise: &[String]) -> FactorScore {
    let category = normalize(category);
    if category.is_empty() {
        return FactorScore::zero_because("Idea has no category");
    }

    let expertise = lowered(expertise);
    if expertise.is_empty() {
        return FactorScore::zero_because("Profile lists no expertise");
    }

    if expertise.iter().any(|e| *e == category) {
        return FactorScore::scored(
            EXPERTISE_EXACT_POINTS,
            format!("Expertise matches category '{}'", category),
        );
    }

    let related = related_keywords(&category).and_then(|keywords| {
        keywords.iter().find_map(|keyword| {
            expertise
                .iter()
                .find(|e| contains_either_way(e, keyword))
                .map(|e| (*keyword, e.clone()))
        })
    });

    match related {
        Some((keyword, entry)) => FactorScore::scored(
            EXPERTISE_RELATED_POINTS,
            format!(
                "Related expertise '{}' for category '{}' (via '{}')",
                entry, category, keyword
            ),
        ),
        None => FactorScore::zero(),
    }
}

/// Skills: share of idea skills found (by substring, either way) in the
/// profile's skills, scaled to 30 over the longer of the two lists.
pub fn score_skills(idea_skills: &[String], profile_skills: &[String]) -> FactorScore {
    let idea_skills = lowered(idea_skills);
    let profile_skills = lowered(profile_skills);
    if idea_skills.is_empty() || profile_skills.is_empty() {
        return FactorScore::zero();
    }

    let matched: Vec<&String> = idea_skills
        .iter()
        .filter(|skill| profile_skills.iter().any(|p| contains_either_way(skill, p)))
        .collect();
    if matched.is_empty() {
        return FactorScore::zero();
    }

    let denominator = idea_skills.len().max(profile_skills.len());
    let points =
        (f64::from(SKILL_MAX_POINTS) * matched.len() as f64 / denominator as f64).round() as u8;

    FactorScore::scored(
        points.min(SKILL_MAX_POINTS),
        format!(
            "{} of {} skills overlap: {}",
            matched.len(),
            denominator,
            matched.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
        ),
    )
}

/// Location: same city 15, both in a Moroccan city 10, otherwise 0.
pub fn score_location(idea_location: Option<&str>, profile_location: Option<&str>) -> FactorScore {
    let idea_location = normalize(idea_location);
    let profile_location = normalize(profile_location);
    if idea_location.is_empty() || profile_location.is_empty() {
        return FactorScore::zero_because("Location unknown");
    }

    if idea_location == profile_location {
        return FactorScore::scored(
            LOCATION_SAME_CITY_POINTS,
            format!("Same city: {}", idea_location),
        );
    }

    if is_moroccan_city(&idea_location) && is_moroccan_city(&profile_location) {
        return FactorScore::scored(
            LOCATION_BOTH_MOROCCO_POINTS,
            format!("Both in Morocco: {} / {}", idea_location, profile_location),
        );
    }

    FactorScore::zero()
}

/// Willingness: mentor 8, co-fund 7, workshop attendee 2; capped at 15.
pub fn score_willingness(profile: &MentorProfile) -> FactorScore {
    let mut points = 0u8;
    let mut reasons = Vec::new();

    if profile.willing_to_mentor {
        points += MENTOR_POINTS;
        reasons.push("willing to mentor");
    }
    if profile.willing_to_cofund {
        points += COFUND_POINTS;
        reasons.push("willing to co-fund");
    }
    if profile.attended_workshop {
        points += WORKSHOP_BONUS_POINTS;
        reasons.push("attended the Fikra workshop");
    }

    if reasons.is_empty() {
        return FactorScore::zero();
    }

    FactorScore::scored(
        points.min(WILLINGNESS_MAX_POINTS),
        format!("Profile is {}", reasons.join(", ")),
    )
}

/// Score one profile against an idea.
pub fn score_profile(idea: &IdeaForMatching, profile: &MentorProfile) -> (u8, MatchReasoning) {
    let expertise = score_expertise(idea.category.as_deref(), &profile.expertise);
    let skills = score_skills(&idea.submitter_skills, &profile.skills);
    let location = score_location(idea.location.as_deref(), profile.location.as_deref());
    let willingness = score_willingness(profile);

    let total = u16::from(expertise.points)
        + u16::from(skills.points)
        + u16::from(location.points)
        + u16::from(willingness.points);
    let score = total.min(u16::from(MAX_SCORE)) as u8;

    let reasoning = MatchReasoning {
        expertise_overlap: expertise.points,
        skill_overlap: skills.points,
        location_proximity: location.points,
        willingness_to_help: willingness.points,
        details: [expertise.note, skills.note, location.note, willingness.note]
            .into_iter()
            .flatten()
            .collect(),
    };

    (score, reasoning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ProfileId;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn profile() -> MentorProfile {
        MentorProfile {
            id: ProfileId::new(),
            name: "Amina".to_string(),
            email: "amina@example.org".to_string(),
            expertise: Vec::new(),
            skills: Vec::new(),
            location: None,
            willing_to_mentor: false,
            willing_to_cofund: false,
            attended_workshop: false,
        }
    }

    #[test]
    fn exact_expertise_is_case_insensitive() {
        let score = score_expertise(Some("Health"), &strings(&["HEALTH"]));
        assert_eq!(score.points, 40);
    }

    #[test]
    fn related_expertise_scores_25() {
        let score = score_expertise(Some("health"), &strings(&["Medical devices"]));
        assert_eq!(score.points, 25);
        assert!(score.note.unwrap().contains("medical devices"));
    }

    #[test]
    fn related_match_works_in_both_directions() {
        // "data" is contained in "data science"; "engineering" contains "engineer"
        assert_eq!(score_expertise(Some("tech"), &strings(&["data science"])).points, 25);
        assert_eq!(score_expertise(Some("tech"), &strings(&["engineer"])).points, 25);
    }

    #[test]
    fn unrelated_expertise_scores_zero() {
        let score = score_expertise(Some("tech"), &strings(&["logistics"]));
        assert_eq!(score, FactorScore::zero());
    }

    #[test]
    fn missing_category_or_expertise_is_explained() {
        let no_category = score_expertise(None, &strings(&["health"]));
        assert_eq!(no_category.points, 0);
        assert_eq!(no_category.note.as_deref(), Some("Idea has no category"));

        let no_expertise = score_expertise(Some("health"), &[]);
        assert_eq!(no_expertise.points, 0);
        assert_eq!(no_expertise.note.as_deref(), Some("Profile lists no expertise"));
    }

    #[test]
    fn skills_scale_over_longer_list() {
        let idea = strings(&["nursing", "logistics"]);
        let mentor = strings(&["Nursing", "fundraising", "marketing", "sales"]);
        // 1 match over max(2, 4) = 4 -> 30 * 1/4 = 7.5 -> 8
        assert_eq!(score_skills(&idea, &mentor).points, 8);
    }

    #[test]
    fn skills_substring_match_either_way() {
        let score = score_skills(&strings(&["react"]), &strings(&["React Native"]));
        assert_eq!(score.points, 30);
    }

    #[test]
    fn empty_skill_lists_score_zero() {
        assert_eq!(score_skills(&[], &strings(&["nursing"])).points, 0);
        assert_eq!(score_skills(&strings(&["nursing"]), &[]).points, 0);
    }

    #[test]
    fn location_tiers() {
        assert_eq!(score_location(Some("Casablanca"), Some("casablanca")).points, 15);
        assert_eq!(score_location(Some("rabat"), Some("fes")).points, 10);
        assert_eq!(score_location(Some("rabat"), Some("paris")).points, 0);
        assert_eq!(score_location(None, Some("rabat")).points, 0);
    }

    #[test]
    fn same_non_moroccan_city_still_counts_as_same_city() {
        assert_eq!(score_location(Some("Paris"), Some("paris")).points, 15);
    }

    #[test]
    fn willingness_is_additive_and_capped() {
        let mut p = profile();
        p.willing_to_mentor = true;
        assert_eq!(score_willingness(&p).points, 8);

        p.willing_to_cofund = true;
        assert_eq!(score_willingness(&p).points, 15);

        p.attended_workshop = true;
        assert_eq!(score_willingness(&p).points, 15);

        let mut workshop_only = profile();
        workshop_only.attended_workshop = true;
        workshop_only.willing_to_mentor = true;
        assert_eq!(score_willingness(&workshop_only).points, 10);
    }

    #[test]
    fn full_profile_scores_93() {
        let idea = IdeaForMatching {
            category: Some("health".to_string()),
            location: Some("casablanca".to_string()),
            submitter_skills: strings(&["nursing"]),
        };
        let mut p = profile();
        p.expertise = strings(&["health"]);
        p.skills = strings(&["nursing"]);
        p.location = Some("casablanca".to_string());
        p.willing_to_mentor = true;

        let (score, reasoning) = score_profile(&idea, &p);

        assert_eq!(score, 93);
        assert_eq!(reasoning.expertise_overlap, 40);
        assert_eq!(reasoning.skill_overlap, 30);
        assert_eq!(reasoning.location_proximity, 15);
        assert_eq!(reasoning.willingness_to_help, 8);
        assert_eq!(reasoning.details.len(), 4);
    }

    #[test]
    fn perfect_profile_is_capped_at_100() {
        let idea = IdeaForMatching {
            category: Some("tech".to_string()),
            location: Some("rabat".to_string()),
            submitter_skills: strings(&["rust"]),
        };
        let mut p = profile();
        p.expertise = strings(&["tech"]);
        p.skills = strings(&["rust"]);
        p.location = Some("Rabat".to_string());
        p.willing_to_mentor = true;
        p.willing_to_cofund = true;
        p.attended_workshop = true;

        let (score, _) = score_profile(&idea, &p);
        assert_eq!(score, 100);
    }
}
