use tracing::info;

use super::dto::ContactForm;
use super::repo_types::ContactSubmission;
use crate::forms::SubmitError;
use crate::store::FormStore;
use crate::validation::forms::validate_contact;

pub async fn submit_contact<S>(
    store: &S,
    form: &ContactForm,
) -> Result<ContactSubmission, SubmitError>
where
    S: FormStore + ?Sized,
{
    let submission = validate_contact(form).map_err(SubmitError::Invalid)?;
    let saved = store.insert_contact(&submission).await?;
    info!(submission_id = %saved.id, "contact message stored");
    Ok(saved)
}
