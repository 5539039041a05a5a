//! Test helper utilities for dashboard integration tests

#![allow(dead_code)]

use std::path::Path;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode},
};
use dashboard::{Dashboard, DashboardConfig, RealAssetStore};
use tower::ServiceExt;

/// Router over a real asset store rooted at `assets_dir`
pub fn create_test_router(assets_dir: &Path) -> Router {
    let config = DashboardConfig::new("127.0.0.1", 0, assets_dir, "debug").unwrap();
    Dashboard::new(config, RealAssetStore::new(assets_dir)).build_router()
}

/// Response parts collected from a one-shot request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Send a GET through the router without binding a socket
pub async fn get(router: Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();

    TestResponse { status, headers, body }
}
