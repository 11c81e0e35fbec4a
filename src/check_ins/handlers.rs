use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use super::dto::CheckInForm;
use super::services;
use crate::forms::{respond, FormInput, FormState};
use crate::state::AppState;

pub fn check_in_routes() -> Router<AppState> {
    Router::new().route("/check-ins", post(submit_check_in))
}

#[instrument(skip(state, form))]
pub async fn submit_check_in(
    State(state): State<AppState>,
    FormInput(form): FormInput<CheckInForm>,
) -> (StatusCode, Json<FormState>) {
    let result = services::submit_check_in(&*state.store, &form).await;
    respond(StatusCode::CREATED, result, |_| {
        FormState::ok("Check-in submitted successfully! Keep up the great work!")
    })
}
