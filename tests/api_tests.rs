//! HTTP-level tests for `/generate`, `/health` and the shared layers.
//!
//! The router is driven in-process through `tower::ServiceExt::oneshot`.

use axum::{body::Body, Router};
use http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use repitchbook::config::AppConfig;
use repitchbook::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    create_router(AppState::from_config(AppConfig::default()).unwrap())
}

fn generate_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn generate_returns_three_slides_in_order() {
    let body = json!({ "propertyType": "apartment", "location": "Mumbai", "price": "50,00,000" });
    let (status, json) = send(test_app(), generate_request(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(
        json["data"]["property_details"],
        json!({ "type": "apartment", "location": "Mumbai", "price": "50,00,000" })
    );

    let slides = json["data"]["slides"].as_array().unwrap();
    assert_eq!(slides.len(), 3);
    let ids: Vec<u64> = slides.iter().map(|s| s["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let titles: Vec<&str> = slides.iter().map(|s| s["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec!["Executive Summary", "Market Dynamics", "Investment Potential"]
    );
    assert!(slides[0]["content"].as_str().unwrap().contains(
        "premium apartment opportunity located in the heart of Mumbai, offered at ₹50,00,000"
    ));
}

#[tokio::test]
async fn generate_trims_echoed_details() {
    let body = json!({ "propertyType": " villa ", "location": " Goa", "price": "1 crore  " });
    let (status, json) = send(test_app(), generate_request(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["property_details"],
        json!({ "type": "villa", "location": "Goa", "price": "1 crore" })
    );
}

#[tokio::test]
async fn generate_accepts_numeric_price() {
    let body = json!({ "propertyType": "plot", "location": "Nashik", "price": 1250000 });
    let (status, json) = send(test_app(), generate_request(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["property_details"]["price"], "1250000");
    assert!(json["data"]["slides"][2]["content"]
        .as_str()
        .unwrap()
        .starts_with("At the attractive price point of ₹1250000, this plot"));
}

#[tokio::test]
async fn generate_keeps_large_numeric_price_digits() {
    let body = r#"{"propertyType": "estate", "location": "Ooty", "price": 18446744073709551616}"#;
    let (status, json) = send(test_app(), generate_request(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["property_details"]["price"], "18446744073709551616");
    assert_eq!(
        json["data"]["slides"][0]["content"],
        "A premium estate opportunity located in the heart of Ooty, offered at ₹18446744073709551616."
    );
}

#[tokio::test]
async fn generate_accepts_out_of_range_float_price() {
    let body = r#"{"propertyType": "estate", "location": "Ooty", "price": 1e400}"#;
    let (status, json) = send(test_app(), generate_request(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["property_details"]["price"], "1e400");
}

#[tokio::test]
async fn generate_is_idempotent() {
    let body = json!({ "propertyType": "office", "location": "Pune", "price": "75,00,000" });
    let (_, first) = send(test_app(), generate_request(body.to_string())).await;
    let (_, second) = send(test_app(), generate_request(body.to_string())).await;

    assert_eq!(
        serde_json::to_vec(&first["data"]["slides"]).unwrap(),
        serde_json::to_vec(&second["data"]["slides"]).unwrap()
    );
}

#[tokio::test]
async fn generate_names_all_missing_fields() {
    let body = json!({ "location": "Chennai" });
    let (status, json) = send(test_app(), generate_request(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({
            "error": "Missing Required Fields",
            "message": "Please provide: propertyType, price"
        })
    );
}

#[tokio::test]
async fn generate_with_empty_object_lists_every_field() {
    let (status, json) = send(test_app(), generate_request("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Please provide: propertyType, location, price");
}

#[tokio::test]
async fn generate_rejects_blank_field() {
    let body = json!({ "propertyType": "apartment", "location": "   ", "price": "100" });
    let (status, json) = send(test_app(), generate_request(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({ "error": "Validation Error", "message": "Fields cannot be empty." })
    );
}

#[tokio::test]
async fn generate_rejects_invalid_json() {
    for body in ["", "{not json", "[\"propertyType\", \"location\", \"price\"]", "42"] {
        let (status, json) = send(test_app(), generate_request(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(json["error"], "Invalid JSON");
        assert_eq!(json["message"], "The request body must be a valid JSON object.");
    }
}

#[tokio::test]
async fn generate_sets_no_store_and_request_id() {
    let body = json!({ "propertyType": "shop", "location": "Surat", "price": "10" });
    let response = test_app()
        .oneshot(generate_request(body.to_string()))
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store, max-age=0"
    );
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = test_app();

    // Prior traffic must not change the liveness answer
    let _ = send(app.clone(), generate_request("{}")).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "https://pitch.example.com")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
}

#[tokio::test]
async fn cors_preflight_succeeds() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/generate")
        .header(header::ORIGIN, "https://pitch.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/slides")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not Found");
}
