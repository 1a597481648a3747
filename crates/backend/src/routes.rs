use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::shared::app_state::AppState;
use crate::shared::config::CorsConfig;
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, cors: &CorsConfig) -> Router {
    let api_v1 = Router::new()
        // ========================================
        // USERS
        // ========================================
        .route(
            "/users",
            get(system::handlers::users::list).post(system::handlers::users::create),
        )
        .route(
            "/users/:id",
            get(system::handlers::users::get_by_id)
                .put(system::handlers::users::update)
                .delete(system::handlers::users::delete),
        )
        .route(
            "/users/:id/transactions",
            get(handlers::a001_transaction::list_by_user),
        )
        // ========================================
        // A001 TRANSACTIONS
        // ========================================
        .route(
            "/transactions",
            axum::routing::post(handlers::a001_transaction::create),
        )
        .route(
            "/transactions/:id",
            get(handlers::a001_transaction::get_by_id),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_v1)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors_layer(cors))
        .with_state(state)
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "message": "Server is running"}))
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origin = if cors.allows_any() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!("Skipping invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .max_age(Duration::from_secs(86400))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        configure_routes(AppState::in_memory(), &CorsConfig::default())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(b) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(b.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_transaction_and_fetch() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/transactions",
            Some(r#"{"amount":250,"participants":[4,5],"description":"Lunch"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["creator_id"], 1);
        assert_eq!(body["data"]["participants"][0]["amount"], 125);
        assert_eq!(body["data"]["participants"][1]["user_id"], 5);

        let (status, body) = send(&app, "GET", "/api/v1/transactions/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["description"], "Lunch");

        let (status, body) = send(&app, "GET", "/api/v1/users/4/transactions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_create_transaction_validation() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/transactions",
            Some(r#"{"amount":0,"participants":[1]}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "amount must be positive");

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/transactions",
            Some(r#"{"amount":10,"participants":[]}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "participants required");

        let (status, body) =
            send(&app, "POST", "/api/v1/transactions", Some("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid JSON format");
    }

    #[tokio::test]
    async fn test_transaction_lookup_errors() {
        let app = app();
        let (status, _) = send(&app, "GET", "/api/v1/transactions/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, "GET", "/api/v1/transactions/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid transaction ID");
    }

    #[tokio::test]
    async fn test_users_crud() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/users",
            Some(r#"{"name":"Анна","email":"anna@example.com"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Resource created successfully");
        assert_eq!(body["data"]["id"], 1);

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/users",
            Some(r#"{"name":"Другая Анна","email":"anna@example.com"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "user with this email already exists");

        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/users",
            Some(r#"{"name":"Борис","email":"boris"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(
            &app,
            "PUT",
            "/api/v1/users/1",
            Some(r#"{"name":"Анна К.","email":"anna.k@example.com"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "anna.k@example.com");

        let (status, body) = send(&app, "GET", "/api/v1/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

        let (status, body) = send(&app, "DELETE", "/api/v1/users/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["message"], "User deleted successfully");

        let (status, body) = send(&app, "GET", "/api/v1/users/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "user not found");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/v1/transactions")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
