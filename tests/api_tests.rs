// tests/api_tests.rs
// Requests served while the database is unreachable.
mod common;
use common::*;

use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn index_serves_management_page() {
    let app = unreachable_app();

    let res = get(&app, "/").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.content_type.as_deref().unwrap().starts_with("text/html"));
    let page = res.text();
    assert!(page.contains("/api/products"));
    assert!(page.contains("id=\"name\""));
}

#[tokio::test]
async fn health_reports_unhealthy_without_database() {
    let app = unreachable_app();

    let res = get(&app, "/health").await;

    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        res.json(),
        json!({ "status": "unhealthy", "database": "disconnected" })
    );
}

#[tokio::test]
async fn data_endpoints_report_connection_failure() {
    let app = unreachable_app();
    let expected = json!({ "error": "Database connection failed" });

    let cases = [
        (Method::GET, "/api/products", None),
        (Method::GET, "/api/products/1", None),
        (
            Method::POST,
            "/api/products",
            Some(json!({ "name": "Widget", "price": 9.99 })),
        ),
        (
            Method::PUT,
            "/api/products/1",
            Some(json!({ "name": "Widget", "price": 9.99 })),
        ),
        (Method::DELETE, "/api/products/1", None),
    ];

    for (method, uri, body) in cases {
        let res = send(&app, method.clone(), uri, body).await;

        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
        assert_eq!(res.json(), expected, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn create_checks_required_fields_before_touching_database() {
    let app = unreachable_app();

    for body in [
        json!({ "price": 1.5 }),
        json!({ "name": "Widget" }),
        json!({ "description": "only a description" }),
    ] {
        let res = send(&app, Method::POST, "/api/products", Some(body)).await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json(), json!({ "error": "Name and price are required" }));
    }
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = unreachable_app();

    let res = send(&app, Method::POST, "/api/products", Some(json!([1, 2, 3]))).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.json()["error"].is_string());
}

#[tokio::test]
async fn non_integer_id_is_rejected_by_router() {
    let app = unreachable_app();

    let res = get(&app, "/api/products/abc").await;

    assert!(res.status.is_client_error());
}

#[tokio::test]
async fn id_beyond_int4_range_reaches_handler() {
    let app = unreachable_app();

    let res = get(&app, "/api/products/3000000000").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json(), json!({ "error": "Database connection failed" }));
}

#[tokio::test]
async fn wrongly_typed_field_is_a_bad_request() {
    let app = unreachable_app();

    let res = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "W", "price": "9.99", "stock": "5" })),
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let message = res.json()["error"].as_str().expect("message").to_string();
    assert!(message.contains("stock"), "{}", message);
}
