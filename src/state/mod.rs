//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthService;
use crate::db::{RequestRepository, UserRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub users: UserRepository,
    pub requests: RequestRepository,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        users: UserRepository,
        requests: RequestRepository,
    ) -> Self {
        Self {
            auth_service,
            users,
            requests,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}
