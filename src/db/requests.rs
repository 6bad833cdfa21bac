//! Request repository

use sqlx::types::chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::UserRequest;

/// Repository for user-submitted requests
#[derive(Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new request and return the stored record
    pub async fn insert(
        &self,
        user_id: Uuid,
        full_name: &str,
        request_details: &str,
        short_writeup: &str,
    ) -> Result<UserRequest, sqlx::Error> {
        sqlx::query_as(
            r#"
            INSERT INTO requests (id, user_id, full_name, request_details, short_writeup, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, full_name, request_details, short_writeup, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(full_name)
        .bind(request_details)
        .bind(short_writeup)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    /// List all requests for a user, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserRequest>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, user_id, full_name, request_details, short_writeup, created_at
            FROM requests
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}
