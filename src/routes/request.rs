//! Request management routes

use axum::{routing::post, Router};

use crate::handlers::request;
use crate::state::AppState;

/// Create request management routes
pub fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/createreq", post(request::create_request))
        .route("/getreqs", post(request::get_user_requests))
}
