//! Data models for the portal backend

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod auth;
pub use auth::*;

/// User model
///
/// The profile substructures are free-form JSONB documents. They default to
/// `{}` at signup and are only populated by the details-submit endpoint.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub personal_info: Value,
    pub enrollment_details: Value,
    pub academic_background: Value,
    pub academic_info: Value,
    pub curricular_info: Value,
    pub career_progression: Value,
    pub miscellaneous: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            personal_info: user.personal_info,
            enrollment_details: user.enrollment_details,
            academic_background: user.academic_background,
            academic_info: user.academic_info,
            curricular_info: user.curricular_info,
            career_progression: user.career_progression,
            miscellaneous: user.miscellaneous,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Support request submitted by a user
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct UserRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub request_details: String,
    pub short_writeup: String,
    pub created_at: DateTime<Utc>,
}
