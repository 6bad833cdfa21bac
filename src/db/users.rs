//! User repository

use sqlx::types::chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::User;

const USER_COLUMNS: &str = "id, name, email, password_hash, personal_info, enrollment_details, \
     academic_background, academic_info, curricular_info, career_progression, miscellaneous, \
     created_at, updated_at";

/// Fields needed to create a user; the repository assigns the identifier
/// and the profile substructures start empty.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Repository for user records
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        sqlx::query_as(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await
    }

    /// Insert a new user and return the stored record
    ///
    /// A duplicate email trips the unique index; callers distinguish that
    /// case with [`crate::db::is_unique_violation`].
    pub async fn insert(&self, new_user: NewUser) -> Result<User, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as(&sql)
            .bind(Uuid::new_v4())
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
    }

    /// Replace the profile substructures of the user with the given email
    pub async fn update_details(
        &self,
        email: &str,
        details: &crate::models::UpdateDetailsRequest,
    ) -> Result<Option<User>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE users
            SET personal_info = $2,
                enrollment_details = $3,
                academic_background = $4,
                academic_info = $5,
                curricular_info = $6,
                career_progression = $7,
                miscellaneous = $8,
                updated_at = NOW()
            WHERE email = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as(&sql)
            .bind(email)
            .bind(&details.personal_info)
            .bind(&details.enrollment_details)
            .bind(&details.academic_background)
            .bind(&details.academic_info)
            .bind(&details.curricular_info)
            .bind(&details.career_progression)
            .bind(&details.miscellaneous)
            .fetch_optional(&self.pool)
            .await
    }
}
