//! Middleware for the portal API
//!
//! Request tracing, security headers, and token-based authentication.

pub mod auth;
mod security;
mod tracing;

pub use auth::AuthenticatedUser;
pub use security::security_headers;
pub use tracing::request_tracing;
