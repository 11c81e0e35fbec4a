//! Per-form validation: raw submitted strings in, typed values or
//! field errors out.

use super::{fields, rules, FieldErrors};
use crate::check_ins::dto::{CheckInForm, CheckInSubmission};
use crate::contact::dto::ContactForm;
use crate::contact::repo_types::NewContactSubmission;
use crate::profiles::dto::{LookupForm, ProfileForm};
use crate::profiles::repo_types::ProfileDetails;

pub const PROFILE_NAME_MIN: usize = 2;
pub const PROFILE_NAME_MAX: usize = 50;
pub const CONTACT_NAME_MIN: usize = 2;
pub const CONTACT_NAME_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;

/// Emails are matched case-insensitively, so they are stored lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_profile(form: &ProfileForm) -> Result<ProfileDetails, FieldErrors> {
    let mut errors = FieldErrors::new();
    let first_name = errors.check(
        fields::FIRST_NAME,
        rules::bounded_text(&form.first_name, "First name", PROFILE_NAME_MIN, PROFILE_NAME_MAX),
    );
    let last_name = errors.check(
        fields::LAST_NAME,
        rules::bounded_text(&form.last_name, "Last name", PROFILE_NAME_MIN, PROFILE_NAME_MAX),
    );
    let email = errors.check(fields::EMAIL, rules::email(&form.email));
    let phone = errors.check(fields::PHONE, rules::phone(&form.phone));
    let current_height = errors.check(
        fields::CURRENT_HEIGHT,
        rules::measurement(&form.current_height, "Current height", "height"),
    );
    let current_weight = errors.check(
        fields::CURRENT_WEIGHT,
        rules::measurement(&form.current_weight, "Current weight", "weight"),
    );
    let goal_weight = errors.check(
        fields::GOAL_WEIGHT,
        rules::measurement(&form.goal_weight, "Goal weight", "weight"),
    );

    match (first_name, last_name, email, phone, current_height, current_weight, goal_weight) {
        (
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(phone),
            Some(current_height),
            Some(current_weight),
            Some(goal_weight),
        ) => Ok(ProfileDetails {
            first_name,
            last_name,
            email: normalize_email(&email),
            phone,
            current_height,
            current_weight,
            goal_weight,
        }),
        _ => Err(errors),
    }
}

pub fn validate_check_in(form: &CheckInForm) -> Result<CheckInSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();
    let profile_code = errors.check(
        fields::PROFILE_CODE,
        rules::profile_code(&form.profile_code),
    );
    let current_weight = errors.check(
        fields::CURRENT_WEIGHT,
        rules::measurement(&form.current_weight, "Current weight", "weight"),
    );
    let cravings_scale = errors.check(
        fields::CRAVINGS_SCALE,
        rules::cravings_scale(&form.cravings_scale),
    );
    let calorie_goal_met = errors.check(
        fields::CALORIE_GOAL_MET,
        rules::calorie_goal(&form.calorie_goal_met),
    );

    match (profile_code, current_weight, cravings_scale, calorie_goal_met) {
        (
            Some(profile_code),
            Some(current_weight),
            Some(cravings_scale),
            Some(calorie_goal_met),
        ) => Ok(CheckInSubmission {
            profile_code,
            current_weight,
            cravings_scale,
            calorie_goal_met,
        }),
        _ => Err(errors),
    }
}

pub fn validate_contact(form: &ContactForm) -> Result<NewContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = errors.check(
        fields::NAME,
        rules::bounded_text(&form.name, "Name", CONTACT_NAME_MIN, CONTACT_NAME_MAX),
    );
    let email = errors.check(fields::EMAIL, rules::email(&form.email));
    let message = errors.check(
        fields::MESSAGE,
        rules::bounded_text(&form.message, "Message", MESSAGE_MIN, MESSAGE_MAX),
    );

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Ok(NewContactSubmission {
            name,
            email,
            message,
        }),
        _ => Err(errors),
    }
}

/// Returns the normalized email to look the profile up by.
pub fn validate_lookup(form: &LookupForm) -> Result<String, FieldErrors> {
    rules::email(&form.email)
        .map(|email| normalize_email(&email))
        .map_err(|message| FieldErrors::single(fields::EMAIL, message))
}
