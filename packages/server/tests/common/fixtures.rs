//! Test fixtures for ideas and diaspora profiles.

use fikra_core::common::ProfileId;
use fikra_core::domains::ideas::models::{Idea, IdeaStatus};
use fikra_core::domains::matching::models::{IdeaForMatching, MentorProfile};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Mentor with no willingness flags set
pub fn mentor(name: &str, expertise: &[&str], skills: &[&str], location: Option<&str>) -> MentorProfile {
    MentorProfile {
        id: ProfileId::new(),
        name: name.to_string(),
        email: format!("{}@diaspora.test", name.to_lowercase()),
        expertise: strings(expertise),
        skills: strings(skills),
        location: location.map(String::from),
        willing_to_mentor: false,
        willing_to_cofund: false,
        attended_workshop: false,
    }
}

pub fn willing_mentor(name: &str, expertise: &[&str]) -> MentorProfile {
    MentorProfile {
        willing_to_mentor: true,
        ..mentor(name, expertise, &[], None)
    }
}

pub fn idea_for_matching(category: &str, location: Option<&str>, skills: &[&str]) -> IdeaForMatching {
    IdeaForMatching {
        category: Some(category.to_string()),
        location: location.map(String::from),
        submitter_skills: strings(skills),
    }
}

/// Stored health idea in Casablanca needing a nurse
pub fn health_idea(status: IdeaStatus) -> Idea {
    let mut idea = Idea::new("Suivi des patients diabétiques", status);
    idea.problem_statement = Some("Les patients diabétiques ratent leurs rendez-vous".to_string());
    idea.proposed_solution = Some("Rappels SMS et suivi par infirmière".to_string());
    idea.category = Some("health".to_string());
    idea.location = Some("Casablanca".to_string());
    idea.estimated_cost = Some("15,000 MAD".to_string());
    idea.submitter_skills = Some(strings(&["nursing"]));
    idea
}
