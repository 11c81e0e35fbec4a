use serde::Deserialize;

use super::code::ProfileCode;

/// Raw profile form fields; missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub current_height: String,
    pub current_weight: String,
    pub goal_weight: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LookupForm {
    pub email: String,
}

#[derive(Debug)]
pub struct ProfileCreated {
    pub code: ProfileCode,
}

#[derive(Debug)]
pub struct ProfileFound {
    pub code: String,
    pub display_name: String,
}
