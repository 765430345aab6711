//! Shared helpers for the HTTP integration tests.
//!
//! Every test gets its own in-memory database behind the full router.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use products_api::{database, routes, state::AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub db: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_body_limit(50 * 1024 * 1024).await
    }

    pub async fn with_body_limit(body_limit_bytes: usize) -> Self {
        let db = database::create_memory_pool()
            .await
            .expect("failed to create in-memory pool");
        let app = routes::build_app(AppState::new(db.clone()), body_limit_bytes);
        Self { app, db }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::delete(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, body.to_string())).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(json_request("PUT", uri, body.to_string())).await
    }

    pub async fn product_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db)
            .await
            .unwrap()
    }

    pub async fn stored_photo(&self, id: i64) -> Option<Vec<u8>> {
        sqlx::query_scalar("SELECT photo FROM products WHERE id = $1")
            .bind(id)
            .fetch_one(&self.db)
            .await
            .unwrap()
    }

    /// Creates a product and returns its id.
    pub async fn create(&self, body: &Value) -> i64 {
        let (status, json) = self.post_json("/add-products", body).await;
        assert_eq!(status, StatusCode::OK, "create failed: {json}");
        json["id"].as_i64().expect("id should be an integer")
    }
}

pub fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}
