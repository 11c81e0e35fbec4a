use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use rand::{rngs::StdRng, SeedableRng};
use tracing::instrument;

use super::dto::{LookupForm, ProfileForm};
use super::services;
use crate::forms::{respond, FormInput, FormState};
use crate::state::AppState;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", post(create_profile))
        .route("/profiles/lookup", post(lookup_profile))
}

#[instrument(skip(state, form))]
pub async fn create_profile(
    State(state): State<AppState>,
    FormInput(form): FormInput<ProfileForm>,
) -> (StatusCode, Json<FormState>) {
    let mut rng = StdRng::from_entropy();
    let result = services::create_profile(&*state.store, &mut rng, &form).await;
    respond(StatusCode::CREATED, result, |created| {
        FormState::ok(format!(
            "Profile created successfully! Your profile code is: {}. \
             Please save this code for future reference.",
            created.code
        ))
        .with_code(created.code.to_string())
    })
}

#[instrument(skip(state, form))]
pub async fn lookup_profile(
    State(state): State<AppState>,
    FormInput(form): FormInput<LookupForm>,
) -> (StatusCode, Json<FormState>) {
    let result = services::lookup_profile(&*state.store, &form).await;
    respond(StatusCode::OK, result, |found| {
        FormState::ok(format!("Found profile for {}", found.display_name)).with_code(found.code)
    })
}
