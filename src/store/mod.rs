//! Persistence capability used by the form services.
//!
//! Services only ever talk to [`FormStore`]; production wires in
//! [`postgres::PgStore`], tests use the in-memory store.

use async_trait::async_trait;

use crate::check_ins::repo_types::{CheckIn, NewCheckIn};
use crate::contact::repo_types::{ContactSubmission, NewContactSubmission};
use crate::profiles::code::ProfileCode;
use crate::profiles::repo_types::{NewProfile, Profile};

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Column whose uniqueness constraint rejected an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UniqueField {
    ProfileCode,
    Email,
    Other(String),
}

impl UniqueField {
    pub fn from_constraint(name: Option<&str>) -> Self {
        match name {
            Some("profiles_profile_code_key") => Self::ProfileCode,
            Some("profiles_email_key") => Self::Email,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Other("unknown".to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated on {0:?}")]
    UniqueViolation(UniqueField),
    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),
}

impl StoreError {
    /// Splits unique violations out of raw sqlx errors.
    pub fn classify(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::UniqueViolation(UniqueField::from_constraint(db_err.constraint()));
            }
        }
        Self::Backend(err)
    }
}

/// Point lookups and single-row inserts; "not found" is `Ok(None)`.
#[async_trait]
pub trait FormStore: Send + Sync {
    async fn find_profile_by_code(
        &self,
        code: &ProfileCode,
    ) -> Result<Option<Profile>, StoreError>;
    async fn find_profile_by_email(&self, email: &str) -> Result<Option<Profile>, StoreError>;
    async fn insert_profile(&self, profile: &NewProfile) -> Result<Profile, StoreError>;
    async fn insert_check_in(&self, check_in: &NewCheckIn) -> Result<CheckIn, StoreError>;
    async fn insert_contact(
        &self,
        submission: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError>;
}

/// The only capability the code generator needs.
#[async_trait]
pub trait CodeRegistry: Send + Sync {
    async fn is_code_taken(&self, code: &ProfileCode) -> Result<bool, StoreError>;
}

#[async_trait]
impl<T: FormStore + ?Sized> CodeRegistry for T {
    async fn is_code_taken(&self, code: &ProfileCode) -> Result<bool, StoreError> {
        Ok(self.find_profile_by_code(code).await?.is_some())
    }
}
