pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod validation;

use axum::{
    Router,
    extract::Request,
    middleware::{self as axum_middleware, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::utils::app_config::AppConfig;
use config::ApiConfig;
use error::ApiError;
use handlers::{categories::*, expenses::*, health, reports::*, users::*};
use middleware::auth::{is_public_path, validate_auth};

pub fn router(app_config: AppConfig, api_config: &ApiConfig) -> Router {
    let secret_key = api_config.secret_key.clone();

    let auth_layer = axum_middleware::from_fn(move |req: Request, next: Next| {
        let secret = secret_key.clone();
        async move {
            if let Some(secret) = secret {
                if !is_public_path(req.uri().path()) {
                    validate_auth(req.headers(), &secret)?;
                }
            }
            Ok::<Response, ApiError>(next.run(req).await)
        }
    });

    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        // Identity
        .route("/api/auth/register", post(register_user))
        .route("/api/auth/user/:firebase_uid", get(get_user))
        // Categories
        .route("/api/categories", post(add_category))
        .route(
            "/api/categories/:id",
            get(get_categories).put(update_category).delete(delete_category),
        )
        .route(
            "/api/categories/initialize/:user_id",
            post(initialize_default_categories),
        )
        // Expenses
        .route("/api/expenses", post(add_expense))
        .route(
            "/api/expenses/:id",
            get(get_expenses).put(update_expense).delete(delete_expense),
        )
        // Reports
        .route(
            "/api/expenses/by-category/:user_id/:category_id",
            get(get_expenses_by_category),
        )
        .route(
            "/api/expenses/monthly-summary/:user_id/:year/:month",
            get(get_monthly_summary),
        )
        .layer(auth_layer)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use diesel::r2d2::{ConnectionManager, Pool};
    use diesel::PgConnection;
    use serde_json::Value;
    use tower::ServiceExt;

    /// Handlers under test reject before checking out a connection, so the pool never dials.
    fn test_router(secret_key: Option<&str>) -> Router {
        let manager = ConnectionManager::<PgConnection>::new("postgres://localhost:1/unused");
        let pool = Pool::builder().min_idle(Some(0)).build_unchecked(manager);

        let api_config = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            secret_key: secret_key.map(String::from),
        };

        router(AppConfig::new(pool), &api_config)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_and_index() {
        let (status, body) = send(test_router(None), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = send(test_router(None), get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Expense Tracker API is running!");
    }

    #[tokio::test]
    async fn test_monthly_summary_rejects_bad_month() {
        let (status, body) = send(
            test_router(None),
            get_request("/api/expenses/monthly-summary/1/2024/13"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "month must be between 1 and 12");

        let (status, _) = send(
            test_router(None),
            get_request("/api/expenses/monthly-summary/1/2024/0"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reports_reject_malformed_ids() {
        let (status, body) = send(
            test_router(None),
            get_request("/api/expenses/by-category/abc/2"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid user_id format");

        let (status, _) = send(
            test_router(None),
            get_request("/api/expenses/monthly-summary/1/twenty/3"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_add_expense_validation() {
        let (status, body) = send(
            test_router(None),
            json_request(
                Method::POST,
                "/api/expenses",
                r#"{"user_id": 1, "category_id": 2, "date": "2024-03-05"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "amount is required");

        let (status, body) = send(
            test_router(None),
            json_request(
                Method::POST,
                "/api/expenses",
                r#"{"user_id": 1, "category_id": 2, "amount": -5, "date": "2024-03-05"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "amount must be greater than zero");

        let (status, _) = send(
            test_router(None),
            json_request(
                Method::POST,
                "/api/expenses",
                r#"{"user_id": 1, "category_id": 2, "amount": 5, "date": "05/03/2024"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_bad_request() {
        let (status, body) = send(
            test_router(None),
            json_request(Method::POST, "/api/categories", "{not json"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Failed to parse JSON"));
    }

    #[tokio::test]
    async fn test_auth_required_when_key_configured() {
        let (status, _) = send(test_router(Some("s3cret")), get_request("/api/categories/1")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .uri("/api/categories/1")
            .header(header::AUTHORIZATION, "Bearer wrong")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(test_router(Some("s3cret")), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid authentication token");

        let (status, _) = send(test_router(Some("s3cret")), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_rejected_requests_are_traced() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (status, _) = send(test_router(Some("s3cret")), get_request("/api/categories/1")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("finished processing request"));
        assert!(output.contains("401"));
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let request = Request::builder()
            .uri("/api/expenses/monthly-summary/1/2024/13")
            .header(header::AUTHORIZATION, "Bearer s3cret")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(test_router(Some("s3cret")), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
