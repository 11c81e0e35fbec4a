use rand::Rng;
use tracing::{info, warn};

use super::code::{generate_unique_code, MAX_CODE_ATTEMPTS};
use super::dto::{LookupForm, ProfileCreated, ProfileForm, ProfileFound};
use super::repo_types::NewProfile;
use crate::forms::SubmitError;
use crate::store::{FormStore, StoreError, UniqueField};
use crate::validation::{
    fields,
    forms::{validate_lookup, validate_profile},
};

/// Inserts that lose a code race to a concurrent writer are retried this
/// many times in total.
pub const MAX_INSERT_ATTEMPTS: u32 = 3;

pub const EMAIL_NOT_FOUND: &str =
    "No profile found with this email address. Please check your email and try again.";

pub async fn create_profile<S, R>(
    store: &S,
    rng: &mut R,
    form: &ProfileForm,
) -> Result<ProfileCreated, SubmitError>
where
    S: FormStore + ?Sized,
    R: Rng + Send,
{
    let details = validate_profile(form).map_err(SubmitError::Invalid)?;

    for attempt in 1..=MAX_INSERT_ATTEMPTS {
        let code = generate_unique_code(store, rng, MAX_CODE_ATTEMPTS).await?;
        let new = NewProfile {
            profile_code: code.clone(),
            details: details.clone(),
        };
        match store.insert_profile(&new).await {
            Ok(profile) => {
                info!(profile_id = %profile.id, "profile created");
                return Ok(ProfileCreated { code });
            }
            Err(StoreError::UniqueViolation(UniqueField::ProfileCode)) => {
                warn!(attempt, "profile code taken between check and insert");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(SubmitError::CodeExhausted {
        attempts: MAX_INSERT_ATTEMPTS,
    })
}

pub async fn lookup_profile<S>(store: &S, form: &LookupForm) -> Result<ProfileFound, SubmitError>
where
    S: FormStore + ?Sized,
{
    let email = validate_lookup(form).map_err(SubmitError::Invalid)?;
    let profile = store
        .find_profile_by_email(&email)
        .await?
        .ok_or(SubmitError::NotFound {
            field: fields::EMAIL,
            message: EMAIL_NOT_FOUND,
        })?;
    Ok(ProfileFound {
        display_name: profile.display_name(),
        code: profile.profile_code,
    })
}
