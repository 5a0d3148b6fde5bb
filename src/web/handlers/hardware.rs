//! `/api/pc` routes.
//!
//! A missing profile is answered with `{}` instead of an error.

use crate::{
    core::hardware::{self, HardwareProfileInput},
    entities::hardware_profile,
    errors::Result,
    web::AppState,
};
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;

fn profile_response(profile: Option<hardware_profile::Model>) -> Response {
    match profile {
        Some(profile) => Json(profile).into_response(),
        None => Json(json!({})).into_response(),
    }
}

/// `GET /api/pc`
pub async fn get_profile(State(state): State<AppState>) -> Result<Response> {
    Ok(profile_response(hardware::get_profile(&state.database).await?))
}

/// `PUT /api/pc`
pub async fn update_profile(
    State(state): State<AppState>,
    Json(input): Json<HardwareProfileInput>,
) -> Result<Response> {
    Ok(profile_response(
        hardware::update_profile(&state.database, input).await?,
    ))
}
