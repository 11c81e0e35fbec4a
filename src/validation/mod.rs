//! Field validation shared by every form.
//!
//! Rules live in [`rules`] and return the message for a single failing
//! field; [`forms`] applies them per form and turns raw input into typed,
//! validated values. Nothing here touches the network or the database.

use std::collections::BTreeMap;

use serde::Serialize;

pub mod forms;
pub mod rules;

/// Reserved key for errors that belong to the whole form.
pub const FORM_KEY: &str = "_form";

/// Field names as they appear in the submitted forms.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const CURRENT_HEIGHT: &str = "currentHeight";
    pub const CURRENT_WEIGHT: &str = "currentWeight";
    pub const GOAL_WEIGHT: &str = "goalWeight";
    pub const PROFILE_CODE: &str = "profileCode";
    pub const CRAVINGS_SCALE: &str = "cravingsScale";
    pub const CALORIE_GOAL_MET: &str = "calorieGoalMet";
    pub const NAME: &str = "name";
    pub const MESSAGE: &str = "message";
}

/// Field name -> ordered, non-empty list of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn form(message: impl Into<String>) -> Self {
        Self::single(FORM_KEY, message)
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Records the message of a failed rule and passes a valid value through.
    pub fn check<T>(&mut self, field: &str, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
