use async_trait::async_trait;
use sqlx::PgPool;

use super::{FormStore, StoreError};
use crate::check_ins::repo_types::{CheckIn, NewCheckIn};
use crate::contact::repo_types::{ContactSubmission, NewContactSubmission};
use crate::profiles::code::ProfileCode;
use crate::profiles::repo_types::{NewProfile, Profile};

/// [`FormStore`] over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FormStore for PgStore {
    async fn find_profile_by_code(
        &self,
        code: &ProfileCode,
    ) -> Result<Option<Profile>, StoreError> {
        Profile::find_by_code(&self.db, code).await
    }

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<Profile>, StoreError> {
        Profile::find_by_email(&self.db, email).await
    }

    async fn insert_profile(&self, profile: &NewProfile) -> Result<Profile, StoreError> {
        Profile::create(&self.db, profile).await
    }

    async fn insert_check_in(&self, check_in: &NewCheckIn) -> Result<CheckIn, StoreError> {
        CheckIn::create(&self.db, check_in).await
    }

    async fn insert_contact(
        &self,
        submission: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        ContactSubmission::create(&self.db, submission).await
    }
}
