//! Rank mentor profiles for an idea.

use tracing::debug;

use crate::domains::matching::models::{IdeaForMatching, MatchResult, MentorProfile};
use crate::domains::matching::reference::MAX_MATCHES;
use crate::domains::matching::utils::score_profile;

/// Score every profile, keep positive scores, sort descending and return the
/// top five.
///
/// The sort is stable, so profiles with equal scores keep their input order.
pub fn match_idea_to_profiles(idea: &IdeaForMatching, profiles: &[MentorProfile]) -> Vec<MatchResult> {
    if profiles.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<MatchResult> = profiles
        .iter()
        .filter_map(|profile| {
            let (score, reasoning) = score_profile(idea, profile);
            debug!(profile_id = %profile.id, score, "Scored profile");
            (score > 0).then(|| MatchResult {
                profile_id: profile.id,
                profile_name: profile.name.clone(),
                score,
                reasoning,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(MAX_MATCHES);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ProfileId;

    fn mentor(name: &str, expertise: &[&str], willing_to_mentor: bool) -> MentorProfile {
        MentorProfile {
            id: ProfileId::new(),
            name: name.to_string(),
            email: format!("{}@example.org", name.to_lowercase()),
            expertise: expertise.iter().map(|s| s.to_string()).collect(),
            skills: Vec::new(),
            location: None,
            willing_to_mentor,
            willing_to_cofund: false,
            attended_workshop: false,
        }
    }

    fn idea(category: &str) -> IdeaForMatching {
        IdeaForMatching {
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_profiles_yield_empty() {
        assert!(match_idea_to_profiles(&idea("health"), &[]).is_empty());
        assert!(match_idea_to_profiles(&IdeaForMatching::default(), &[]).is_empty());
    }

    #[test]
    fn zero_scores_are_excluded() {
        let profiles = vec![mentor("Youssef", &["logistics"], false)];
        assert!(match_idea_to_profiles(&idea("tech"), &profiles).is_empty());
    }

    #[test]
    fn sorted_descending() {
        let profiles = vec![
            mentor("Willing", &[], true),
            mentor("Exact", &["health"], false),
            mentor("Related", &["medical"], false),
        ];

        let matches = match_idea_to_profiles(&idea("health"), &profiles);
        let names: Vec<&str> = matches.iter().map(|m| m.profile_name.as_str()).collect();

        assert_eq!(names, vec!["Exact", "Related", "Willing"]);
        assert_eq!(
            matches.iter().map(|m| m.score).collect::<Vec<_>>(),
            vec![40, 25, 8]
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let profiles = vec![
            mentor("First", &["health"], false),
            mentor("Second", &["medical"], false),
            mentor("Third", &["health"], false),
        ];

        let matches = match_idea_to_profiles(&idea("health"), &profiles);
        let names: Vec<&str> = matches.iter().map(|m| m.profile_name.as_str()).collect();

        assert_eq!(names, vec!["First", "Third", "Second"]);
    }

    #[test]
    fn capped_at_five() {
        let profiles: Vec<MentorProfile> = (0..8)
            .map(|i| mentor(&format!("M{}", i), &["health"], i % 2 == 0))
            .collect();

        let matches = match_idea_to_profiles(&idea("health"), &profiles);

        assert_eq!(matches.len(), 5);
        // the four willing mentors (48) first, then the first unwilling one (40)
        let names: Vec<&str> = matches.iter().map(|m| m.profile_name.as_str()).collect();
        assert_eq!(names, vec!["M0", "M2", "M4", "M6", "M1"]);
        assert!(matches.iter().all(|m| m.score > 0));
    }
}
