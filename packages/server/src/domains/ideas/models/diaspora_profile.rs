use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::ProfileId;
use crate::domains::matching::models::MentorProfile;

/// Diaspora member who offered to mentor or co-fund ideas
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DiasporaProfile {
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    pub expertise: Vec<String>,
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub willing_to_mentor: bool,
    pub willing_to_cofund: bool,
    /// Attended the in-person Fikra workshop
    pub attended_workshop: bool,
    pub created_at: DateTime<Utc>,
}

impl DiasporaProfile {
    /// All profiles in registration order.
    ///
    /// The order matters: equal match scores keep this relative order.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM diaspora_profiles ORDER BY created_at ASC, id ASC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}

impl From<DiasporaProfile> for MentorProfile {
    fn from(profile: DiasporaProfile) -> Self {
        MentorProfile {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            expertise: profile.expertise,
            skills: profile.skills,
            location: profile.location,
            willing_to_mentor: profile.willing_to_mentor,
            willing_to_cofund: profile.willing_to_cofund,
            attended_workshop: profile.attended_workshop,
        }
    }
}
