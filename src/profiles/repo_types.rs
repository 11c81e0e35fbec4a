use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use super::code::ProfileCode;

/// Profile record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub profile_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String, // trimmed + lowercased
    pub phone: String,
    pub current_height: f64,
    pub current_weight: f64,
    pub goal_weight: f64,
    pub created_at: OffsetDateTime,
}

impl Profile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated profile fields, before a code is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub current_height: f64,
    pub current_weight: f64,
    pub goal_weight: f64,
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub profile_code: ProfileCode,
    pub details: ProfileDetails,
}
