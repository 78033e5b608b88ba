use axum::http::{header, HeaderValue, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::{Config, CorsConfig};
use crate::system::middleware::request_logger::request_logger;

/// API routes of the enquiry collector
pub fn api_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api", get(handlers::root::info))
        .route("/api/", get(handlers::root::info))
        // ========================================
        // A001 CONTACT ENQUIRIES
        // ========================================
        .route(
            "/api/enquiries/contact",
            get(handlers::a001_contact_enquiry::list_all)
                .post(handlers::a001_contact_enquiry::create),
        )
        .route(
            "/api/enquiries/contact/:id",
            get(handlers::a001_contact_enquiry::get_by_id),
        )
        // ========================================
        // A002 EVENT ENQUIRIES (weddings, corporate)
        // ========================================
        .route(
            "/api/enquiries/event",
            get(handlers::a002_event_enquiry::list_all)
                .post(handlers::a002_event_enquiry::create),
        )
        .route(
            "/api/enquiries/event/:id",
            get(handlers::a002_event_enquiry::get_by_id),
        )
}

pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if cors.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Full application: API, optional static site, request logging, CORS
pub fn configure_routes(config: &Config) -> Router {
    let mut app = api_routes();

    if let Some(dir) = &config.server.static_dir {
        tracing::info!("Serving static site from {}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(middleware::from_fn(request_logger))
        .layer(cors_layer(&config.cors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_info() {
        let request = Request::builder().uri("/api/").body(Body::empty()).unwrap();
        let (status, body) = call(api_routes(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Silver Stone Park Resort API" }));
    }

    #[tokio::test]
    async fn test_invalid_contact_enquiry_is_rejected_before_storage() {
        let request = post_json(
            "/api/enquiries/contact",
            json!({
                "name": "Meera",
                "email": "meera-at-example.com",
                "subject": "Feedback",
                "message": "Lovely stay"
            }),
        );
        let (status, body) = call(api_routes(), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "email");
    }

    #[tokio::test]
    async fn test_event_enquiry_with_bad_date_is_rejected() {
        let request = post_json(
            "/api/enquiries/event",
            json!({
                "name": "Priya",
                "phone": "9999999999",
                "event_type": "Wedding",
                "event_date": "someday"
            }),
        );
        let (status, body) = call(api_routes(), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "event_date");
    }

    #[tokio::test]
    async fn test_unknown_subject_fails_deserialization() {
        let request = post_json(
            "/api/enquiries/contact",
            json!({
                "name": "Meera",
                "email": "meera@example.com",
                "subject": "Complaint",
                "message": "?"
            }),
        );
        let (status, _) = call(api_routes(), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    /// The only test that opens the database: the connection is process-global.
    #[tokio::test]
    async fn test_enquiries_are_stored_and_listed() {
        let db_file = std::env::temp_dir()
            .join(format!("resort-test-{}", uuid::Uuid::new_v4()))
            .join("resort.db");
        crate::shared::data::db::initialize_database(&db_file)
            .await
            .unwrap();

        let (status, created) = call(
            api_routes(),
            post_json(
                "/api/enquiries/event",
                json!({
                    "name": "Priya",
                    "phone": "9999999999",
                    "event_type": "Wedding",
                    "event_date": "2026-03-10",
                    "guest_count": "100-200",
                    "message": ""
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["event_type"], "Wedding");
        assert_eq!(created["guest_count"], "100-200");
        assert_eq!(created["message"], Value::Null);
        assert!(created["created_at"].is_string());
        let event_id = created["id"].as_str().unwrap().to_string();

        let (status, created) = call(
            api_routes(),
            post_json(
                "/api/enquiries/contact",
                json!({
                    "name": "Meera",
                    "email": "meera@example.com",
                    "subject": "Weddings & Events",
                    "message": "Is the lawn available in March?"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["subject"], "Weddings & Events");
        assert_eq!(created["phone"], Value::Null);

        let request = Request::builder()
            .uri("/api/enquiries/contact")
            .body(Body::empty())
            .unwrap();
        let (status, listed) = call(api_routes(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["name"], "Meera");

        let request = Request::builder()
            .uri(format!("/api/enquiries/event/{}", event_id))
            .body(Body::empty())
            .unwrap();
        let (status, fetched) = call(api_routes(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], "Priya");

        let request = Request::builder()
            .uri(format!("/api/enquiries/event/{}", uuid::Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();
        let (status, _) = call(api_routes(), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_cors_layer_accepts_explicit_origins() {
        let cors = CorsConfig {
            allowed_origins: vec!["https://silverstonepark.com".into(), "bad\norigin".into()],
        };
        // Invalid header values are skipped instead of panicking
        let _ = cors_layer(&cors);
    }
}
