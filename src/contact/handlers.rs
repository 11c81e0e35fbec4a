use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use super::dto::ContactForm;
use super::services;
use crate::forms::{respond, FormInput, FormState};
use crate::state::AppState;

pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}

#[instrument(skip(state, form))]
pub async fn submit_contact(
    State(state): State<AppState>,
    FormInput(form): FormInput<ContactForm>,
) -> (StatusCode, Json<FormState>) {
    let result = services::submit_contact(&*state.store, &form).await;
    respond(StatusCode::CREATED, result, |_| {
        FormState::ok("Thank you for your message! We will get back to you soon.")
    })
}
