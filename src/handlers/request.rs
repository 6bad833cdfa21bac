//! Request management handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::error::ApiError;
use crate::models::{CreateRequestBody, ListRequestsBody, UserRequest};
use crate::state::AppState;

/// POST /createreq - Submit a new request
pub async fn create_request(
    State(state): State<AppState>,
    Json(req): Json<CreateRequestBody>,
) -> Result<(StatusCode, Json<UserRequest>), ApiError> {
    let user_id = match req.user_id {
        Some(id)
            if !req.full_name.trim().is_empty()
                && !req.request_details.trim().is_empty()
                && !req.short_writeup.trim().is_empty() =>
        {
            id
        }
        _ => return Err(ApiError::Validation("All fields are required".to_string())),
    };

    let request = state
        .requests
        .insert(
            user_id,
            &req.full_name,
            &req.request_details,
            &req.short_writeup,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// POST /getreqs - List all requests for a user
pub async fn get_user_requests(
    State(state): State<AppState>,
    Json(req): Json<ListRequestsBody>,
) -> Result<Json<Vec<UserRequest>>, ApiError> {
    let user_id = req
        .user_id
        .ok_or_else(|| ApiError::Validation("User ID is required".to_string()))?;

    let requests = state.requests.list_for_user(user_id).await?;

    Ok(Json(requests))
}
