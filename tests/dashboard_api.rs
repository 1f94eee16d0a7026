use axum::{body::Body, http::Request, routing::get, Router};
use serde_json::Value;
use tower::ServiceExt;

use qms_backend::{
    handlers,
    models::entity::EntityKind,
    repositories::entity::EntityRepository,
    state::AppState,
};

mod support;

fn test_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/dashboard",
            get(handlers::dashboard::dashboard_summary),
        )
        .with_state(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn count_for(body: &Value, kind: &str) -> i64 {
    body["counts"]
        .as_array()
        .expect("counts")
        .iter()
        .find(|entry| entry["kind"] == kind)
        .expect("kind present")["count"]
        .as_i64()
        .expect("count")
}

#[tokio::test]
async fn counts_reflect_active_records_per_kind() {
    let state = support::test_state().await;

    let employees = EntityRepository::new(EntityKind::Employees);
    let first = employees.create(&state.pool, "Alice").await.expect("create");
    employees.create(&state.pool, "Bob").await.expect("create");
    EntityRepository::new(EntityKind::Areas)
        .create(&state.pool, "Paint shop")
        .await
        .expect("create");
    assert!(employees.delete(&state.pool, &first.id).await.expect("delete"));

    let response = test_router(state)
        .oneshot(
            Request::builder()
                .uri("/api/dashboard")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("response");
    let body = body_json(response).await;

    assert_eq!(count_for(&body, "employees"), 1);
    assert_eq!(count_for(&body, "areas"), 1);
    assert_eq!(count_for(&body, "levels"), 0);
    assert_eq!(count_for(&body, "partnumbers"), 0);
    assert_eq!(count_for(&body, "calibrations"), 0);

    // Four mutations so far: three creates and one delete.
    let activity = body["recent_activity"].as_array().expect("activity");
    assert_eq!(activity.len(), 4);
    assert_eq!(activity[0]["action"], "DELETE");
}

#[tokio::test]
async fn recent_activity_is_capped_at_ten() {
    let state = support::test_state().await;
    let repo = EntityRepository::new(EntityKind::Levels);

    for i in 0..12 {
        repo.create(&state.pool, &format!("L{}", i))
            .await
            .expect("create");
    }

    let response = test_router(state)
        .oneshot(
            Request::builder()
                .uri("/api/dashboard")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("response");
    let body = body_json(response).await;
    assert_eq!(body["recent_activity"].as_array().expect("activity").len(), 10);
}
