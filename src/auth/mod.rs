//! Authentication module
//!
//! Provides email/password authentication:
//! - Salted password hashing with bcrypt
//! - JWT token generation and validation
//! - Signup/login orchestration over the user repository

mod jwt;
mod password;
mod service;

pub use jwt::{issue_token, verify_token, Claims, JwtError};
pub use password::{hash_password, verify_password, PasswordError};
pub use service::{AuthError, AuthService};
