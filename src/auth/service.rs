//! Authentication service
//!
//! Core business logic for signup, login, and token-gated user lookup.

use thiserror::Error;
use uuid::Uuid;

use crate::db::{self, NewUser, UserRepository};
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, SignupRequest, UserResponse};

use super::jwt::{issue_token, JwtError};
use super::password::{hash_password, verify_password, PasswordError};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("All fields are required")]
    MissingFields,

    #[error("User already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Token email does not match account")]
    EmailMismatch,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Hashing error: {0}")]
    HashError(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        AuthError::DatabaseError(e.to_string())
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        AuthError::TokenError(e.to_string())
    }
}

impl From<PasswordError> for AuthError {
    fn from(e: PasswordError) -> Self {
        AuthError::HashError(e.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingFields => ApiError::Validation(e.to_string()),
            AuthError::EmailTaken => ApiError::Conflict(e.to_string()),
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::UserNotFound => ApiError::NotFound(e.to_string()),
            AuthError::EmailMismatch => ApiError::Forbidden(e.to_string()),
            AuthError::DatabaseError(msg) => ApiError::Database(msg),
            AuthError::TokenError(msg) | AuthError::HashError(msg) => ApiError::Internal(msg),
        }
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    jwt_secret: String,
    token_ttl_hours: i64,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(
        users: UserRepository,
        jwt_secret: String,
        token_ttl_hours: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            jwt_secret,
            token_ttl_hours,
            bcrypt_cost,
        }
    }

    /// Register a new user and issue a token
    pub async fn signup(&self, req: SignupRequest) -> Result<AuthResponse, AuthError> {
        if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = hash_password(req.password, self.bcrypt_cost).await?;

        // The existence check above can race a concurrent signup; the unique
        // index on users.email is the authoritative guard.
        let user = self
            .users
            .insert(NewUser {
                name: req.name,
                email: req.email,
                password_hash,
            })
            .await
            .map_err(|e| {
                if db::is_unique_violation(&e) {
                    AuthError::EmailTaken
                } else {
                    AuthError::from(e)
                }
            })?;

        let token = issue_token(&user, &self.jwt_secret, self.token_ttl_hours)?;

        tracing::info!(user_id = %user.id, "New user signed up");

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Authenticate a user by email and password and issue a token
    ///
    /// An unknown email and a wrong password both come back as
    /// `InvalidCredentials`; callers must not be able to tell which field
    /// was wrong.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, AuthError> {
        if req.email.trim().is_empty() || req.password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let user = self
            .users
            .find_by_email(&req.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = verify_password(req.password, user.password_hash.clone()).await?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let token = issue_token(&user, &self.jwt_secret, self.token_ttl_hours)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Resolve the account behind a verified token
    ///
    /// Cross-checks the stored email against the token's embedded email so
    /// a stale token naming an old address is rejected.
    pub async fn current_user(
        &self,
        user_id: Uuid,
        token_email: &str,
    ) -> Result<UserResponse, AuthError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.email != token_email {
            return Err(AuthError::EmailMismatch);
        }

        Ok(user.into())
    }

    /// Get JWT secret (for middleware access)
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
