//! Result object shared by every form and the mapping from submission
//! errors to it.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    http::StatusCode,
    Form, Json,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, info, warn};

use crate::profiles::code::CodeError;
use crate::store::StoreError;
use crate::validation::FieldErrors;

pub const GENERIC_FAILURE: &str = "An unexpected error occurred. Please try again.";
pub const UNREADABLE_FORM: &str = "The submitted form could not be read. Please try again.";

/// What the page renders after a submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FormState {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn failed(errors: FieldErrors) -> Self {
        Self {
            success: false,
            errors: Some(errors),
            ..Self::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("validation failed for {} field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("{field} not found")]
    NotFound {
        field: &'static str,
        message: &'static str,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unable to generate unique profile code after {attempts} attempts")]
    CodeExhausted { attempts: u32 },
}

impl From<CodeError> for SubmitError {
    fn from(err: CodeError) -> Self {
        match err {
            CodeError::Exhausted { attempts } => Self::CodeExhausted { attempts },
            CodeError::Store(e) => Self::Store(e),
        }
    }
}

impl SubmitError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) | Self::NotFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) | Self::CodeExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SubmitError> for FormState {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(errors) => {
                let fields: Vec<&str> = errors.fields().collect();
                warn!(?fields, "form validation failed");
                FormState::failed(errors)
            }
            SubmitError::NotFound { field, message } => {
                info!(field, "no matching profile");
                FormState::failed(FieldErrors::single(field, message))
            }
            SubmitError::Store(e) => {
                error!(error = %e, "form persistence failed");
                FormState::failed(FieldErrors::form(GENERIC_FAILURE))
            }
            SubmitError::CodeExhausted { attempts } => {
                error!(attempts, "profile code generation exhausted");
                FormState::failed(FieldErrors::form(GENERIC_FAILURE))
            }
        }
    }
}

/// Urlencoded form body whose rejections still answer with a [`FormState`].
pub struct FormInput<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormInput<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = (StatusCode, Json<FormState>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(rejection) => Err(reject_form(rejection)),
        }
    }
}

fn reject_form(rejection: FormRejection) -> (StatusCode, Json<FormState>) {
    let status = rejection.status();
    warn!(%status, reason = %rejection.body_text(), "form body rejected");
    (status, Json(FormState::failed(FieldErrors::form(UNREADABLE_FORM))))
}

/// Turns a service outcome into the HTTP reply.
pub fn respond<T>(
    success: StatusCode,
    result: Result<T, SubmitError>,
    render: impl FnOnce(T) -> FormState,
) -> (StatusCode, Json<FormState>) {
    match result {
        Ok(value) => (success, Json(render(value))),
        Err(e) => (e.status(), Json(FormState::from(e))),
    }
}
