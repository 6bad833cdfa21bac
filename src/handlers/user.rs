//! Profile detail handlers
//!
//! Thin glue over the user repository: a whole-profile replacement keyed by
//! email and a restricted projection for the authenticated caller.

use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{PrimaryDetailsResponse, UpdateDetailsRequest, UserResponse};
use crate::state::AppState;

/// Response body for a profile update
#[derive(Debug, serde::Serialize)]
pub struct UpdateDetailsResponse {
    pub user: UserResponse,
}

/// POST /details-submit - Replace the profile substructures for a user
pub async fn details_submit(
    State(state): State<AppState>,
    Json(req): Json<UpdateDetailsRequest>,
) -> Result<Json<UpdateDetailsResponse>, ApiError> {
    let user = state
        .users
        .update_details(&req.email, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UpdateDetailsResponse { user: user.into() }))
}

/// GET /creds-primary - Primary details of the authenticated user
pub async fn get_primary_details(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<PrimaryDetailsResponse>, ApiError> {
    let user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(PrimaryDetailsResponse {
        name: user.name,
        email: user.email,
        personal_info: user.personal_info,
    }))
}
