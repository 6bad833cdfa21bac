//! HTTP handlers for the portal API

pub mod auth;
pub mod request;
pub mod user;
