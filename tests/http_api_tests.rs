#![cfg(feature = "http_api")]

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use pickup_schedule::{Schedule, http_api};
use serde_json::{Value, json};
use tower::util::ServiceExt;

fn new_router() -> axum::Router {
    let mut schedule = Schedule::new();
    schedule.add_week();
    schedule.add_week();
    let state = http_api::AppState::new(schedule);
    http_api::router(state)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn current_weeks(app: &axum::Router) -> Vec<Value> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/schedule.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn form_post(uri: &str, form_body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form_body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn index_page_renders_the_schedule() {
    let app = new_router();
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("Monday"));
    assert!(page.contains("<select name='status'"));
}

#[tokio::test]
async fn set_status_via_form_updates_the_shared_store() {
    let app = new_router();

    let response = app
        .clone()
        .oneshot(form_post("/set_status", "week=1&day=2&status=available"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("<option value='available' selected>"));

    let weeks = current_weeks(&app).await;
    assert_eq!(weeks[1]["days"][2]["status"], json!("available"));
    assert_eq!(weeks[1]["days"][1]["status"], json!("holiday"));
}

#[tokio::test]
async fn unknown_status_is_rejected_and_store_unchanged() {
    let app = new_router();
    let before = current_weeks(&app).await;

    let response = app
        .clone()
        .oneshot(form_post("/set_status", "week=0&day=0&status=banana"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let page = body_string(response).await;
    assert!(page.contains("unknown pickup status 'banana'"));

    assert_eq!(current_weeks(&app).await, before);
}

#[tokio::test]
async fn out_of_range_week_returns_not_found() {
    let app = new_router();
    let before = current_weeks(&app).await;

    let response = app
        .clone()
        .oneshot(form_post("/set_status", "week=9&day=0&status=available"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let page = body_string(response).await;
    assert!(page.contains("week index 9 is out of range"));

    assert_eq!(current_weeks(&app).await, before);
}

#[tokio::test]
async fn add_and_remove_week_round_trip() {
    let app = new_router();
    assert_eq!(current_weeks(&app).await.len(), 2);

    let response = app
        .clone()
        .oneshot(form_post("/add_week", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(current_weeks(&app).await.len(), 3);

    let second_start = current_weeks(&app).await[1]["start"].clone();
    let response = app
        .clone()
        .oneshot(form_post("/remove_week/0", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let weeks = current_weeks(&app).await;
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0]["start"], second_start);
}

#[tokio::test]
async fn remove_week_out_of_range_returns_not_found() {
    let app = new_router();

    let response = app
        .clone()
        .oneshot(form_post("/remove_week/9", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(current_weeks(&app).await.len(), 2);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = new_router();
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload["status"], json!("ok"));
}
