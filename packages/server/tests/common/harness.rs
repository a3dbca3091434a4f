//! Router harness: builds the app over in-memory dependencies and sends
//! requests with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use fikra_core::kernel::test_dependencies::{
    InMemoryIdeaStore, MockPrioritySuggester, TestDependencies,
};
use fikra_core::server::build_app;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestHarness {
    pub app: Router,
    pub store: Arc<InMemoryIdeaStore>,
    pub suggester: Option<Arc<MockPrioritySuggester>>,
}

impl TestHarness {
    pub fn new(store: InMemoryIdeaStore) -> Self {
        Self::from_deps(TestDependencies::new(store))
    }

    pub fn with_suggester(store: InMemoryIdeaStore, suggester: MockPrioritySuggester) -> Self {
        Self::from_deps(TestDependencies::new(store).with_suggester(suggester))
    }

    fn from_deps(deps: TestDependencies) -> Self {
        let app = build_app(deps.server_deps(), &[]);
        Self {
            app,
            store: deps.store,
            suggester: deps.suggester,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }
}
