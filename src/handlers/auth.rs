//! Authentication HTTP handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
use crate::state::AppState;

/// POST /signup - Create an account and issue a token
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    // Email format check only when the field is present; a missing field
    // gets the canonical "All fields are required" from the service.
    if !req.email.trim().is_empty() {
        req.validate()?;
    }

    let response = state.auth_service.signup(req).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /login - Authenticate and issue a token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let response = state.auth_service.login(req).await?;

    Ok(Json(response))
}

/// Response body for the current-user endpoint
#[derive(Debug, serde::Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}

/// GET /me - Get the account behind the presented token
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<MeResponse>, ApiError> {
    let user = state
        .auth_service
        .current_user(auth.user_id, &auth.email)
        .await?;

    Ok(Json(MeResponse { user }))
}
