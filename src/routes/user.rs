//! Profile detail routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::user;
use crate::state::AppState;

/// Create user profile routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/details-submit", post(user::details_submit))
        .route("/creds-primary", get(user::get_primary_details))
}
