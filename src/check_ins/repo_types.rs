use serde::Serialize;
use sqlx::FromRow;
use strum::{AsRefStr, Display, EnumString};
use time::OffsetDateTime;
use uuid::Uuid;

/// Whether the calorie goal was met on the day being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CalorieGoalStatus {
    Yes,
    No,
    DidNotTrack,
    NoCalorieGoal,
}

impl TryFrom<String> for CalorieGoalStatus {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Check-in record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CheckIn {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub current_weight: f64,
    pub cravings_scale: i16, // 1..=5
    #[sqlx(try_from = "String")]
    pub calorie_goal_met: CalorieGoalStatus,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewCheckIn {
    pub profile_id: Uuid,
    pub current_weight: f64,
    pub cravings_scale: i16,
    pub calorie_goal_met: CalorieGoalStatus,
}
