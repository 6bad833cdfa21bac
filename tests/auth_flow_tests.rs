//! End-to-end tests for the authentication flow

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use sqlx::PgPool;
    use tower::ServiceExt;
    use uuid::Uuid;

    use portal_server::auth::{AuthError, AuthService};
    use portal_server::db::{RequestRepository, UserRepository};
    use portal_server::middleware;
    use portal_server::models::{LoginRequest, SignupRequest};
    use portal_server::routes;
    use portal_server::state::AppState;

    const TEST_SECRET: &str = "test-secret-key";
    // Bcrypt minimum cost; keeps the suite fast.
    const TEST_COST: u32 = 4;

    /// Helper to create a test database pool
    async fn setup_test_db() -> PgPool {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/portal_test".to_string());

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    /// Pool that never actually connects; fine for tests that are rejected
    /// before any query runs.
    fn lazy_pool() -> PgPool {
        sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgresql://localhost/portal_unreachable")
            .expect("Failed to build lazy pool")
    }

    fn build_service(pool: PgPool) -> AuthService {
        AuthService::new(
            UserRepository::new(pool),
            TEST_SECRET.to_string(),
            24,
            TEST_COST,
        )
    }

    fn build_app(pool: PgPool) -> Router {
        let users = UserRepository::new(pool.clone());
        let requests = RequestRepository::new(pool.clone());
        let auth_service = Arc::new(build_service(pool));

        let state = AppState::new(auth_service, users, requests);

        Router::new()
            .merge(routes::auth_routes())
            .merge(routes::user_routes())
            .merge(routes::request_routes())
            .with_state(state)
            .layer(axum::middleware::from_fn(middleware::security_headers))
            .layer(axum::middleware::from_fn(middleware::request_tracing))
    }

    fn signup_request(email: &str) -> SignupRequest {
        SignupRequest {
            name: "A".to_string(),
            email: email.to_string(),
            password: "pw123456".to_string(),
        }
    }

    fn fresh_email() -> String {
        format!("user-{}@example.com", Uuid::new_v4())
    }

    // ------------------------------------------------------------------
    // Router-level tests that never reach the database
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_me_without_header_is_unauthorized() {
        let app = build_app(lazy_pool());

        let response = app
            .oneshot(Request::get("/me").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // Responses pass through the logging and security-header layers
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], serde_json::json!(false));
    }

    #[tokio::test]
    async fn test_me_with_garbage_token_is_unauthorized() {
        let app = build_app(lazy_pool());

        let response = app
            .oneshot(
                Request::get("/me")
                    .header(header::AUTHORIZATION, "Bearer not.a.token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_signup_missing_fields() {
        let app = build_app(lazy_pool());

        let response = app
            .oneshot(
                Request::post("/signup")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"A","email":"","password":""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "All fields are required");
    }

    #[tokio::test]
    async fn test_login_missing_fields_uses_generic_message() {
        let app = build_app(lazy_pool());

        let response = app
            .oneshot(
                Request::post("/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"email":"","password":""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Invalid email or password");
    }

    // ------------------------------------------------------------------
    // Database-backed flow tests
    // ------------------------------------------------------------------

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_signup_succeeds_once_then_conflicts() {
        let pool = setup_test_db().await;
        let service = build_service(pool);
        let email = fresh_email();

        let response = service.signup(signup_request(&email)).await.unwrap();
        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, email);
        assert_eq!(response.user.personal_info, serde_json::json!({}));

        // Duplicate email conflicts regardless of password
        let mut dup = signup_request(&email);
        dup.password = "another-password".to_string();
        let result = service.signup(dup).await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_login_failures_are_indistinguishable() {
        let pool = setup_test_db().await;
        let service = build_service(pool);
        let email = fresh_email();

        service.signup(signup_request(&email)).await.unwrap();

        let wrong_password = service
            .login(LoginRequest {
                email: email.clone(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        let unknown_email = service
            .login(LoginRequest {
                email: fresh_email(),
                password: "pw123456".to_string(),
            })
            .await
            .unwrap_err();

        // Same variant, same outward message, byte for byte
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_login_with_correct_credentials() {
        let pool = setup_test_db().await;
        let service = build_service(pool);
        let email = fresh_email();

        service.signup(signup_request(&email)).await.unwrap();

        let response = service
            .login(LoginRequest {
                email: email.clone(),
                password: "pw123456".to_string(),
            })
            .await
            .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, email);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_current_user_rejects_stale_email() {
        let pool = setup_test_db().await;
        let service = build_service(pool);
        let email = fresh_email();

        let response = service.signup(signup_request(&email)).await.unwrap();
        let user_id = response.user.id;

        // Matching email resolves
        let user = service.current_user(user_id, &email).await.unwrap();
        assert_eq!(user.id, user_id);

        // A token naming an old email is rejected
        let result = service.current_user(user_id, "stale@example.com").await;
        assert!(matches!(result, Err(AuthError::EmailMismatch)));

        // Unknown identifier is not found
        let result = service.current_user(Uuid::new_v4(), &email).await;
        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }
}
