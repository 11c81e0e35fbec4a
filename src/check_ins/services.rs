use tracing::info;

use super::dto::CheckInForm;
use super::repo_types::{CheckIn, NewCheckIn};
use crate::forms::SubmitError;
use crate::store::FormStore;
use crate::validation::{fields, forms::validate_check_in};

pub const CODE_NOT_FOUND: &str = "Profile code not found. Please check your code and try again.";

pub async fn submit_check_in<S>(store: &S, form: &CheckInForm) -> Result<CheckIn, SubmitError>
where
    S: FormStore + ?Sized,
{
    let submission = validate_check_in(form).map_err(SubmitError::Invalid)?;

    let profile = store
        .find_profile_by_code(&submission.profile_code)
        .await?
        .ok_or(SubmitError::NotFound {
            field: fields::PROFILE_CODE,
            message: CODE_NOT_FOUND,
        })?;

    let check_in = store
        .insert_check_in(&NewCheckIn {
            profile_id: profile.id,
            current_weight: submission.current_weight,
            cravings_scale: submission.cravings_scale,
            calorie_goal_met: submission.calorie_goal_met,
        })
        .await?;
    info!(profile_id = %profile.id, check_in_id = %check_in.id, "check-in recorded");
    Ok(check_in)
}
