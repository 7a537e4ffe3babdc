// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /analyze (fields, empty-input no-op)
// - GET /history
// - POST /report (CSV headers + content)

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as Json};
use tower::ServiceExt as _; // for `oneshot`

use toxiguard::api::{self, AppState};
use toxiguard::history::History;
use toxiguard::model::{corpus, AbuseModel, FitParams};
use toxiguard::normalize::normalize;

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

/// Build the same Router the binary uses, with a model trained in-process on
/// the shipped sample corpus.
fn test_state() -> AppState {
    let examples = corpus::load(Path::new("data/sample_data.csv")).expect("sample corpus");
    let texts: Vec<String> = examples.iter().map(|ex| normalize(&ex.text)).collect();
    let labels: Vec<bool> = examples.iter().map(|ex| ex.label).collect();
    let model = AbuseModel::fit(&texts, &labels, FitParams::default());

    AppState {
        model: Arc::new(model),
        history: Arc::new(History::with_capacity(100)),
    }
}

fn test_router(state: AppState) -> Router {
    api::router(state, Path::new("static"))
}

fn post_json(uri: &str, payload: &Json) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build request")
}

async fn read_json(resp: axum::response::Response) -> Json {
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    serde_json::from_slice(&bytes).expect("parse json")
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let app = test_router(test_state());

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = app.oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    assert_eq!(String::from_utf8(bytes).expect("utf8").trim(), "ok");
}

#[tokio::test]
async fn api_analyze_returns_expected_json_fields() {
    let app = test_router(test_state());

    let payload = json!({ "text": "You are stupid and an idiot" });
    let resp = app
        .oneshot(post_json("/analyze", &payload))
        .await
        .expect("oneshot /analyze");
    assert!(resp.status().is_success());

    let v = read_json(resp).await;

    // Contract checks for UI consumers
    assert_eq!(v["label"], json!("abusive"));
    assert!(v.get("probability").is_some(), "missing 'probability'");
    assert!(v.get("sentiment").is_some(), "missing 'sentiment'");
    assert!(v.get("polarity").is_some(), "missing 'polarity'");
    assert!(v.get("severity").is_some(), "missing 'severity'");
    assert!(v.get("highlighted").is_some(), "missing 'highlighted'");
    assert_eq!(v["abusive_tokens"], json!(["stupid", "idiot"]));
    assert_eq!(v["abusive_words"], json!(2));
}

#[tokio::test]
async fn api_analyze_empty_input_is_a_null_no_op() {
    let state = test_state();
    let app = test_router(state.clone());

    let resp = app
        .oneshot(post_json("/analyze", &json!({ "text": "   " })))
        .await
        .expect("oneshot /analyze");
    assert!(resp.status().is_success());
    assert_eq!(read_json(resp).await, Json::Null);

    // Nothing recorded.
    assert!(state.history.snapshot_last_n(10).is_empty());
}

#[tokio::test]
async fn api_history_lists_analyzed_inputs_newest_first() {
    let state = test_state();

    for text in ["first input", "second input"] {
        let app = test_router(state.clone());
        let resp = app
            .oneshot(post_json("/analyze", &json!({ "text": text })))
            .await
            .expect("oneshot /analyze");
        assert!(resp.status().is_success());
    }

    let app = test_router(state);
    let req = Request::builder()
        .method("GET")
        .uri("/history")
        .body(Body::empty())
        .expect("build GET /history");
    let resp = app.oneshot(req).await.expect("oneshot /history");
    assert!(resp.status().is_success());

    let v = read_json(resp).await;
    assert_eq!(v, json!(["second input", "first input"]));
}

#[tokio::test]
async fn api_report_returns_csv_attachment() {
    let app = test_router(test_state());

    let resp = app
        .oneshot(post_json("/report", &json!({ "text": "you idiot, you IDIOT" })))
        .await
        .expect("oneshot /report");
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/csv"), "got {content_type}");

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read csv")
        .to_vec();
    let csv = String::from_utf8(bytes).expect("utf8 csv");
    let lines: Vec<&str> = csv.trim_end().lines().collect();
    assert_eq!(lines[0], "Abusive Word,Suggestion,Severity");
    // Duplicates collapse to one row.
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("idiot,"));
}

#[tokio::test]
async fn api_report_empty_input_is_no_content() {
    let app = test_router(test_state());

    let resp = app
        .oneshot(post_json("/report", &json!({ "text": "" })))
        .await
        .expect("oneshot /report");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
