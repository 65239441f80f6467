//! Router tests driven through `tower::ServiceExt::oneshot`

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::*;
use crate::config::SubmissionConfig;
use crate::content::SchoolContent;
use crate::forms::NewsletterInput;
use crate::theme::ThemeMode;

fn state_with(submission: SubmissionConfig) -> SiteState {
    let content = Arc::new(SchoolContent::embedded().unwrap());
    SiteState::new(content, ThemeMode::Light, submission)
}

fn instant() -> SubmissionConfig {
    SubmissionConfig {
        delay_ms: 0,
        simulate_failure: false,
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

fn post_json(uri: &str, visitor: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(visitor) = visitor {
        builder = builder.header(VISITOR_HEADER, visitor);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Content
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_site_overview_lists_pages_and_catalogs() {
    let (status, body) = get(router(state_with(instant())), "/api/site").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["school"]["name"], "Riverside Academy");
    assert_eq!(body["theme"], "light");
    assert_eq!(body["catalogs"].as_array().unwrap().len(), 5);
    assert!(body["pages"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["id"] == "privacy"));
}

#[tokio::test]
async fn test_page_lookup() {
    let app = router(state_with(instant()));

    let (status, body) = get(app.clone(), "/api/pages/about").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "about");

    let (status, body) = get(app, "/api/pages/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_catalog_defaults_to_first_category() {
    let (status, body) = get(router(state_with(instant())), "/api/catalogs/subjects").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_category"], "core");
    assert_eq!(body["categories"][0]["selected"], true);
    assert_eq!(body["items"][0]["id"], "mathematics");
    assert_eq!(body["inspected"], Value::Null);
}

#[tokio::test]
async fn test_catalog_selects_category_and_inspects_item() {
    let (status, body) = get(
        router(state_with(instant())),
        "/api/catalogs/subjects?category=sciences&item=physics",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_category"], "sciences");
    let items: Vec<_> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(items, vec!["biology", "chemistry", "physics"]);
    assert_eq!(body["inspected"]["id"], "physics");
}

#[tokio::test]
async fn test_catalog_unknown_category_keeps_default() {
    let (status, body) = get(
        router(state_with(instant())),
        "/api/catalogs/subjects?category=astrology",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_category"], "core");
}

#[tokio::test]
async fn test_catalog_item_outside_selected_category_stays_closed() {
    // physics lives in sciences, not core
    let (_, body) = get(
        router(state_with(instant())),
        "/api/catalogs/subjects?item=physics",
    )
    .await;

    assert_eq!(body["inspected"], Value::Null);
}

#[tokio::test]
async fn test_unknown_catalog_and_route() {
    let app = router(state_with(instant()));

    let (status, _) = get(app.clone(), "/api/catalogs/sports").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app, "/api/nothing-here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_theme_tokens_follow_mode() {
    let app = router(state_with(instant()));

    let (status, light) = get(app.clone(), "/api/theme").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(light["mode"], "light");

    let (_, dark) = get(app.clone(), "/api/theme?mode=dark").await;
    assert_eq!(dark["mode"], "dark");
    assert_ne!(light["surface"], dark["surface"]);
    assert!(dark["surface"].as_str().unwrap().starts_with('#'));

    let (status, _) = get(app, "/api/theme?mode=sepia").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ─────────────────────────────────────────────────────────────────────────────
// Forms
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_newsletter_success() {
    let app = router(state_with(instant()));

    let (status, body) = send(
        app,
        post_json("/api/newsletter", None, json!({ "email": "a@b.co" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "succeeded");
    assert_eq!(body["message"], crate::forms::SUBSCRIBED);
}

#[tokio::test]
async fn test_newsletter_invalid_email_is_unprocessable() {
    let app = router(state_with(instant()));

    let (status, body) = send(
        app.clone(),
        post_json("/api/newsletter", Some("v1"), json!({ "email": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], crate::forms::INVALID_EMAIL);

    let (_, state) = get_with_visitor(app, "/api/forms/newsletter/status", "v1").await;
    assert_eq!(state["status"], "failed");
    assert_eq!(state["cause"], "validation");
}

#[tokio::test]
async fn test_contact_effect_failure_is_bad_gateway() {
    let app = router(state_with(SubmissionConfig {
        delay_ms: 0,
        simulate_failure: true,
    }));

    let (status, body) = send(
        app,
        post_json(
            "/api/contact",
            None,
            json!({ "name": "Ana", "email": "ana@example.com", "message": "Hello" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], crate::forms::TRY_AGAIN);
}

#[tokio::test]
async fn test_second_post_while_submitting_is_conflict() {
    let state = state_with(instant());
    let app = router(state.clone());

    // Admission is eager: this leaves the visitor's handle in Submitting
    let handle = state.newsletter.handle("busy-visitor").unwrap();
    let _in_flight = handle.submit(NewsletterInput {
        email: "a@b.co".to_string(),
    });
    assert!(handle.is_submitting());

    let (status, body) = send(
        app.clone(),
        post_json(
            "/api/newsletter",
            Some("busy-visitor"),
            json!({ "email": "a@b.co" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "busy");

    // Other visitors are unaffected
    let (status, _) = send(
        app,
        post_json("/api/newsletter", Some("other"), json!({ "email": "a@b.co" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_form_status_defaults_to_idle() {
    let state = state_with(instant());
    let app = router(state.clone());

    let (status, body) = get(app.clone(), "/api/forms/contact/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "idle");
    // Reading status never allocates a handle
    assert_eq!(state.contact.len(), 0);

    let (status, _) = get(app, "/api/forms/survey/status").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_new_visitor_refused_when_every_slot_is_in_flight() {
    let state = state_with(SubmissionConfig {
        delay_ms: 60_000,
        simulate_failure: false,
    });
    let app = router(state.clone());

    let attempts: Vec<_> = (0..state::MAX_VISITORS)
        .map(|i| {
            state
                .newsletter
                .handle(&format!("visitor-{i}"))
                .unwrap()
                .submit(NewsletterInput {
                    email: "a@b.co".to_string(),
                })
        })
        .collect();
    assert!(state.newsletter.handle("latecomer").is_none());

    let (status, body) = send(
        app.clone(),
        post_json("/api/newsletter", Some("latecomer"), json!({ "email": "a@b.co" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
    assert_eq!(state.newsletter.len(), state::MAX_VISITORS);

    // Abandoned attempts settle, so their slots can be reclaimed
    drop(attempts);
    assert!(state.newsletter.handle("latecomer").is_some());
    assert_eq!(state.newsletter.len(), 1);
}

#[test]
fn test_visitor_id_falls_back_to_anonymous() {
    use axum::http::{HeaderMap, HeaderValue};

    let mut headers = HeaderMap::new();
    assert_eq!(state::visitor_id(&headers), "anonymous");

    headers.insert(VISITOR_HEADER, HeaderValue::from_static("   "));
    assert_eq!(state::visitor_id(&headers), "anonymous");

    headers.insert(VISITOR_HEADER, HeaderValue::from_static(" tab-7 "));
    assert_eq!(state::visitor_id(&headers), "tab-7");
}

async fn get_with_visitor(app: Router, uri: &str, visitor: &str) -> (StatusCode, Value) {
    let request = Request::get(uri)
        .header(VISITOR_HEADER, visitor)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
