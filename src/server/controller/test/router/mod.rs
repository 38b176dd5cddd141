use crate::{
    model::api::ResponseEnvelope,
    server::{
        router::router,
        service::{notification::NotificationQueue, token::TokenService},
        state::AppState,
    },
};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

mod auth;

fn app(db: &DatabaseConnection) -> (Router, AppState) {
    let tokens = TokenService::new("test-secret", chrono::Duration::minutes(5));
    let (notifications, _outbox) = NotificationQueue::channel();
    let state = AppState::new(db.clone(), tokens, notifications, 5);

    (router().with_state(state.clone()), state)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, ResponseEnvelope) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
