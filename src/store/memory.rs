//! In-memory [`FormStore`] for tests, with knobs for failure modes.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{FormStore, StoreError, UniqueField};
use crate::check_ins::repo_types::{CheckIn, NewCheckIn};
use crate::contact::repo_types::{ContactSubmission, NewContactSubmission};
use crate::profiles::code::ProfileCode;
use crate::profiles::repo_types::{NewProfile, Profile, ProfileDetails};

#[derive(Default)]
struct Tables {
    profiles: Vec<Profile>,
    check_ins: Vec<CheckIn>,
    contacts: Vec<ContactSubmission>,
    profile_insert_codes: Vec<ProfileCode>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    code_lookups: AtomicU32,
    code_conflicts_left: AtomicU32,
    unavailable: bool,
    failing_inserts: bool,
}

fn outage() -> StoreError {
    StoreError::Backend(sqlx::Error::PoolTimedOut)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the database were unreachable.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Reads work, inserts fail with a backend error.
    pub fn with_failing_inserts(mut self) -> Self {
        self.failing_inserts = true;
        self
    }

    /// The next `n` profile inserts lose their code to a concurrent writer.
    pub fn with_code_conflicts_on_insert(self, n: u32) -> Self {
        self.code_conflicts_left.store(n, Ordering::SeqCst);
        self
    }

    pub async fn seed_profile(&self, code: &str, email: &str) -> Profile {
        let profile_code = ProfileCode::parse(code).expect("seed code must be 4 digits");
        let new = NewProfile {
            profile_code,
            details: ProfileDetails {
                first_name: "Seed".into(),
                last_name: "Profile".into(),
                email: email.into(),
                phone: "5550000000".into(),
                current_height: 170.0,
                current_weight: 70.0,
                goal_weight: 65.0,
            },
        };
        let profile = self.insert_profile(&new).await.expect("seed insert");
        self.tables.lock().unwrap().profile_insert_codes.clear();
        profile
    }

    pub fn code_lookups(&self) -> u32 {
        self.code_lookups.load(Ordering::SeqCst)
    }

    /// Codes of every attempted profile insert, including rejected ones.
    pub fn profile_insert_codes(&self) -> Vec<ProfileCode> {
        self.tables.lock().unwrap().profile_insert_codes.clone()
    }

    pub fn check_ins(&self) -> Vec<CheckIn> {
        self.tables.lock().unwrap().check_ins.clone()
    }

    pub fn contacts(&self) -> Vec<ContactSubmission> {
        self.tables.lock().unwrap().contacts.clone()
    }

    fn check_insert(&self) -> Result<(), StoreError> {
        if self.unavailable || self.failing_inserts {
            return Err(outage());
        }
        Ok(())
    }

    fn take_code_conflict(&self) -> bool {
        self.code_conflicts_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl FormStore for MemoryStore {
    async fn find_profile_by_code(
        &self,
        code: &ProfileCode,
    ) -> Result<Option<Profile>, StoreError> {
        self.code_lookups.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(outage());
        }
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .profiles
            .iter()
            .find(|p| p.profile_code == code.as_str())
            .cloned())
    }

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<Profile>, StoreError> {
        if self.unavailable {
            return Err(outage());
        }
        let tables = self.tables.lock().unwrap();
        Ok(tables.profiles.iter().find(|p| p.email == email).cloned())
    }

    async fn insert_profile(&self, new: &NewProfile) -> Result<Profile, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        tables.profile_insert_codes.push(new.profile_code.clone());
        self.check_insert()?;
        if self.take_code_conflict()
            || tables
                .profiles
                .iter()
                .any(|p| p.profile_code == new.profile_code.as_str())
        {
            return Err(StoreError::UniqueViolation(UniqueField::ProfileCode));
        }
        if tables.profiles.iter().any(|p| p.email == new.details.email) {
            return Err(StoreError::UniqueViolation(UniqueField::Email));
        }
        let d = &new.details;
        let profile = Profile {
            id: Uuid::new_v4(),
            profile_code: new.profile_code.to_string(),
            first_name: d.first_name.clone(),
            last_name: d.last_name.clone(),
            email: d.email.clone(),
            phone: d.phone.clone(),
            current_height: d.current_height,
            current_weight: d.current_weight,
            goal_weight: d.goal_weight,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.profiles.push(profile.clone());
        Ok(profile)
    }

    async fn insert_check_in(&self, new: &NewCheckIn) -> Result<CheckIn, StoreError> {
        self.check_insert()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.profiles.iter().any(|p| p.id == new.profile_id) {
            return Err(StoreError::Backend(sqlx::Error::RowNotFound));
        }
        let check_in = CheckIn {
            id: Uuid::new_v4(),
            profile_id: new.profile_id,
            current_weight: new.current_weight,
            cravings_scale: new.cravings_scale,
            calorie_goal_met: new.calorie_goal_met,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.check_ins.push(check_in.clone());
        Ok(check_in)
    }

    async fn insert_contact(
        &self,
        new: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        self.check_insert()?;
        let submission = ContactSubmission {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            email: new.email.clone(),
            message: new.message.clone(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.tables.lock().unwrap().contacts.push(submission.clone());
        Ok(submission)
    }
}
