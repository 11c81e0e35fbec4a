use serde::Deserialize;

use super::repo_types::CalorieGoalStatus;
use crate::profiles::code::ProfileCode;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckInForm {
    pub profile_code: String,
    pub current_weight: String,
    pub cravings_scale: String,
    pub calorie_goal_met: String,
}

/// A check-in that passed validation but is not yet tied to a profile row.
#[derive(Debug, Clone)]
pub struct CheckInSubmission {
    pub profile_code: ProfileCode,
    pub current_weight: f64,
    pub cravings_scale: i16,
    pub calorie_goal_met: CalorieGoalStatus,
}
