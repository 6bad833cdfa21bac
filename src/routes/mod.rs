//! Route definitions for the portal API

mod auth;
mod request;
mod user;

pub use auth::auth_routes;
pub use request::request_routes;
pub use user::user_routes;
