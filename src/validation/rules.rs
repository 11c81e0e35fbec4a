use lazy_static::lazy_static;
use regex::Regex;

use crate::check_ins::repo_types::CalorieGoalStatus;
use crate::profiles::code::ProfileCode;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9\s\-+()]+$").unwrap();
}

pub const MIN_PHONE_DIGITS: usize = 10;
pub const CRAVINGS_MIN: i16 = 1;
pub const CRAVINGS_MAX: i16 = 5;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
        && phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

/// Trimmed value, or "`label` is required" when blank.
pub fn required<'a>(value: &'a str, label: &str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    Ok(trimmed)
}

/// Required text whose trimmed length (in characters) is within `min..=max`.
pub fn bounded_text(value: &str, label: &str, min: usize, max: usize) -> Result<String, String> {
    let trimmed = required(value, label)?;
    let len = trimmed.chars().count();
    if len < min {
        return Err(format!("{label} must be at least {min} characters"));
    }
    if len > max {
        return Err(format!("{label} must be at most {max} characters"));
    }
    Ok(trimmed.to_string())
}

pub fn email(value: &str) -> Result<String, String> {
    let trimmed = required(value, "Email")?;
    if !is_valid_email(trimmed) {
        return Err("Please enter a valid email address".into());
    }
    Ok(trimmed.to_string())
}

pub fn phone(value: &str) -> Result<String, String> {
    let trimmed = required(value, "Phone number")?;
    if !is_valid_phone(trimmed) {
        return Err("Please enter a valid phone number".into());
    }
    Ok(trimmed.to_string())
}

/// Positive, finite measurement such as a weight or a height.
pub fn measurement(value: &str, label: &str, noun: &str) -> Result<f64, String> {
    let trimmed = required(value, label)?;
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(format!("Please enter a valid {noun}")),
    }
}

pub fn profile_code(value: &str) -> Result<ProfileCode, String> {
    let trimmed = required(value, "Profile code")?;
    ProfileCode::parse(trimmed).ok_or_else(|| "Profile code must be a 4-digit number".into())
}

pub fn cravings_scale(value: &str) -> Result<i16, String> {
    let trimmed = required(value, "Cravings scale")?;
    match trimmed.parse::<i16>() {
        Ok(v) if (CRAVINGS_MIN..=CRAVINGS_MAX).contains(&v) => Ok(v),
        _ => Err(format!(
            "Cravings scale must be between {CRAVINGS_MIN} and {CRAVINGS_MAX}"
        )),
    }
}

pub fn calorie_goal(value: &str) -> Result<CalorieGoalStatus, String> {
    let trimmed = required(value, "Calorie goal status")?;
    trimmed
        .parse::<CalorieGoalStatus>()
        .map_err(|_| "Invalid calorie goal status".into())
}
