//! Common test utilities.

#![allow(dead_code)]

use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use http_body_util::BodyExt;

use postboard::{app, IdStrategy, PostStore, Router};

/// A fresh seeded store and the router serving it.
pub fn test_app() -> (Arc<PostStore>, Router) {
    test_app_with(IdStrategy::CountPlusOne)
}

pub fn test_app_with(ids: IdStrategy) -> (Arc<PostStore>, Router) {
    let store = Arc::new(PostStore::seeded(ids));
    (Arc::clone(&store), app(store))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

/// Sends one request through the router and buffers the response.
pub async fn send(router: &Router, req: http::Request<Bytes>) -> TestResponse {
    let response = router.call(req).await;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse { status, headers, body }
}

pub fn get(path: &str) -> http::Request<Bytes> {
    request("GET", path, Bytes::new())
}

pub fn delete(path: &str) -> http::Request<Bytes> {
    request("DELETE", path, Bytes::new())
}

pub fn post_json(path: &str, body: &str) -> http::Request<Bytes> {
    http::Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Bytes::from(body.to_owned()))
        .unwrap()
}

pub fn request(method: &str, path: &str, body: Bytes) -> http::Request<Bytes> {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(body)
        .unwrap()
}
