use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use shiftpay::config::Config;
use shiftpay::db::pool::DbPool;
use shiftpay::http::{AppState, build_router};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let pool = DbPool::in_memory().expect("in-memory db");
    build_router(Arc::new(AppState::new(Config::default(), pool)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let v = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, v)
}

async fn add(app: &Router, date: &str, start: &str, end: &str) -> Value {
    let (status, v) = send_json(
        app,
        "POST",
        "/entries",
        Some(json!({ "date": date, "start_time": start, "end_time": end })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    v
}

#[tokio::test]
async fn test_health_reports_ok() {
    let app = app();
    let (status, v) = send_json(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["status"], "ok");
}

#[tokio::test]
async fn test_create_entry_computes_pay() {
    let app = app();
    let v = add(&app, "2025-09-01", "09:00", "17:30").await;

    assert_eq!(v["entry"]["sequence_number"], 1);
    assert_eq!(v["entry"]["total_minutes"], 510);
    assert_eq!(v["entry"]["total_hours"], "8.50");
    assert_eq!(v["entry"]["total_pay"], "212.50");
    assert_eq!(v["entry"]["is_paid"], false);
    assert_eq!(v["message"], "Time entry #1 saved! Total: 8.50h, Pay: $212.50");
}

#[tokio::test]
async fn test_create_overnight_entry() {
    let app = app();
    let v = add(&app, "2025-09-01", "22:00", "06:00").await;

    assert_eq!(v["entry"]["is_overnight"], true);
    assert_eq!(v["entry"]["total_minutes"], 480);
}

#[tokio::test]
async fn test_create_entry_with_equal_times_is_unprocessable() {
    let app = app();
    let (status, v) = send_json(
        &app,
        "POST",
        "/entries",
        Some(json!({ "date": "2025-09-01", "start_time": "09:00", "end_time": "09:00" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(v["error"].as_str().unwrap().contains("End time must differ"));
}

#[tokio::test]
async fn test_create_entry_with_bad_date_is_bad_request() {
    let app = app();
    let (status, _) = send_json(
        &app,
        "POST",
        "/entries",
        Some(json!({ "date": "2025-13-40", "start_time": "09:00", "end_time": "17:00" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_defaults_use_configured_shift() {
    let app = app();
    let (status, v) = send_json(&app, "GET", "/entries/defaults", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["start_time"], "09:00");
    assert_eq!(v["end_time"], "17:00");
}

#[tokio::test]
async fn test_list_filters_paid_entries() {
    let app = app();
    add(&app, "2025-09-01", "09:00", "17:00").await;
    add(&app, "2025-09-02", "09:00", "17:00").await;

    let (status, _) = send_json(&app, "POST", "/entries/1/paid", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, all) = send_json(&app, "GET", "/entries", None).await;
    assert_eq!(all["entries"].as_array().unwrap().len(), 2);
    assert_eq!(all["stats"]["unpaid_pay"], "200.00");

    let (_, unpaid) = send_json(&app, "GET", "/entries?show_paid=false", None).await;
    let entries = unpaid["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["date"], "2025-09-02");
}

#[tokio::test]
async fn test_toggle_and_missing_entry() {
    let app = app();
    add(&app, "2025-09-01", "09:00", "17:00").await;

    let (_, v) = send_json(&app, "POST", "/entries/1/toggle_paid", None).await;
    assert_eq!(v["is_paid"], true);
    let (_, v) = send_json(&app, "POST", "/entries/1/toggle_paid", None).await;
    assert_eq!(v["is_paid"], false);

    let (status, v) = send_json(&app, "POST", "/entries/99/toggle_paid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["error"], "Time entry 99 not found");
}

#[tokio::test]
async fn test_delete_entry() {
    let app = app();
    add(&app, "2025-09-01", "09:00", "17:00").await;

    let (status, _) = send(&app, "DELETE", "/entries/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", "/entries/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pay_all_twice() {
    let app = app();
    add(&app, "2025-09-01", "09:00", "17:00").await;
    add(&app, "2025-09-02", "09:00", "17:30").await;

    let (status, v) = send_json(&app, "POST", "/pay_all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["count"], 2);
    assert_eq!(v["message"], "Marked 2 entries as paid. Total: $412.50");

    let (_, v) = send_json(&app, "POST", "/pay_all", None).await;
    assert_eq!(v["count"], 0);
    assert_eq!(v["message"], "No unpaid entries found to mark as paid.");
}

#[tokio::test]
async fn test_settings_update_keeps_existing_pay() {
    let app = app();
    add(&app, "2025-09-01", "09:00", "17:00").await;

    let (status, v) = send_json(
        &app,
        "PUT",
        "/settings",
        Some(json!({ "hourly_rate": "30.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["hourly_rate"], "30.00");

    let (_, v) = send_json(&app, "GET", "/entries/1", None).await;
    assert_eq!(v["total_pay"], "200.00");
    assert_eq!(v["rate_at_entry"], "25.00");

    let v = add(&app, "2025-09-02", "09:00", "17:00").await;
    assert_eq!(v["entry"]["total_pay"], "240.00");
}

#[tokio::test]
async fn test_settings_reject_invalid_rate() {
    let app = app();
    let (status, _) = send_json(&app, "PUT", "/settings", Some(json!({ "hourly_rate": 0 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send_json(
        &app,
        "PUT",
        "/settings",
        Some(json!({ "hourly_rate": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_pdf_download() {
    let app = app();
    add(&app, "2025-09-01", "09:00", "17:00").await;

    let req = Request::builder()
        .uri("/export/pdf")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/pdf");
    let disposition = res.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.contains("unpaid_entries_"));

    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_create_entry_with_seconds_uses_whole_minutes() {
    let app = app();
    let v = add(&app, "2025-09-01", "09:00:30", "17:00:00").await;
    assert_eq!(v["entry"]["start_time"], "09:00");
    assert_eq!(v["entry"]["total_minutes"], 480);
    assert_eq!(v["entry"]["total_pay"], "200.00");

    let (status, _) = send_json(
        &app,
        "POST",
        "/entries",
        Some(json!({ "date": "2025-09-02", "start_time": "09:00:00", "end_time": "09:00:30" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_input_is_json_bad_request() {
    let app = app();
    add(&app, "2025-09-01", "09:00", "17:00").await;

    let cases = [
        ("POST", "/entries", Some(json!({ "date": 5 }))),
        ("GET", "/entries?show_paid=", None),
        ("POST", "/entries/abc/paid", None),
        ("PUT", "/settings", Some(json!({ "currency_symbol": 7 }))),
    ];

    for (method, uri, body) in cases {
        let (status, v) = send_json(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        let msg = v["error"].as_str().unwrap_or_default();
        assert!(msg.starts_with("Invalid request:"), "{method} {uri}: {msg}");
    }
}

#[tokio::test]
async fn test_missing_json_body_is_bad_request() {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri("/entries")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let v: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(v["error"].is_string());
}
