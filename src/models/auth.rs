//! Authentication and API request/response DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

/// Signup request body
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Token plus user view, returned by signup and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// User response (sanitized for API -- no password hash)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
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

/// Empty profile substructure; absent fields must stay `{}`, not `null`
fn empty_object() -> Value {
    Value::Object(Default::default())
}

/// Full profile replacement, keyed by email
#[derive(Debug, Deserialize)]
pub struct UpdateDetailsRequest {
    pub email: String,
    #[serde(default = "empty_object")]
    pub personal_info: Value,
    #[serde(default = "empty_object")]
    pub enrollment_details: Value,
    #[serde(default = "empty_object")]
    pub academic_background: Value,
    #[serde(default = "empty_object")]
    pub academic_info: Value,
    #[serde(default = "empty_object")]
    pub curricular_info: Value,
    #[serde(default = "empty_object")]
    pub career_progression: Value,
    #[serde(default = "empty_object")]
    pub miscellaneous: Value,
}

/// Primary details projection for the authenticated user
#[derive(Debug, Serialize)]
pub struct PrimaryDetailsResponse {
    pub name: String,
    pub email: String,
    pub personal_info: Value,
}

/// Request creation body
#[derive(Debug, Deserialize)]
pub struct CreateRequestBody {
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub request_details: String,
    #[serde(default)]
    pub short_writeup: String,
}

/// Request listing body
#[derive(Debug, Deserialize)]
pub struct ListRequestsBody {
    pub user_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_details_absent_fields_default_to_empty_object() {
        let req: UpdateDetailsRequest = serde_json::from_value(json!({
            "email": "a@x.com",
            "personal_info": {"phone": "555-0100"}
        }))
        .unwrap();

        assert_eq!(req.personal_info, json!({"phone": "555-0100"}));
        assert_eq!(req.enrollment_details, json!({}));
        assert_eq!(req.academic_background, json!({}));
        assert_eq!(req.academic_info, json!({}));
        assert_eq!(req.curricular_info, json!({}));
        assert_eq!(req.career_progression, json!({}));
        assert_eq!(req.miscellaneous, json!({}));
    }
}
