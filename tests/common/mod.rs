#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use contact_form::config::{Config, StoreBackend, DEFAULT_TABLE_NAME};
use contact_form::models::Submission;
use contact_form::store::{MemoryStore, StoreError, SubmissionStore};

/// A running test server instance backed by the given store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

/// Response pieces the tests look at.
pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub allow_origin: Option<String>,
    pub body: Value,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON value to `/submit`.
    pub async fn submit_json(&self, body: &Value) -> Reply {
        self.submit_raw(body.to_string()).await
    }

    /// POST a raw body to `/submit`.
    pub async fn submit_raw(&self, body: impl Into<reqwest::Body>) -> Reply {
        let resp = self
            .client
            .post(self.url("/submit"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("submit request failed");
        Reply::read(resp).await
    }

    /// POST with no body at all.
    pub async fn submit_empty(&self) -> Reply {
        let resp = self
            .client
            .post(self.url("/submit"))
            .send()
            .await
            .expect("submit request failed");
        Reply::read(resp).await
    }
}

impl Reply {
    async fn read(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let header = |name: &str| {
            resp.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string())
        };
        let content_type = header("content-type");
        let allow_origin = header("access-control-allow-origin");
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        Reply {
            status,
            content_type,
            allow_origin,
            body,
        }
    }

    pub fn assert_json_cors(&self) {
        assert_eq!(self.content_type.as_deref(), Some("application/json"));
        assert_eq!(self.allow_origin.as_deref(), Some("*"));
    }
}

pub fn test_config() -> Config {
    Config {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        store: StoreBackend::Memory,
        database_url: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 4096,
        db_max_connections: 1,
        log_level: "warn".to_string(),
    }
}

pub async fn spawn_app(store: Arc<dyn SubmissionStore>) -> TestApp {
    spawn_app_with_config(store, &test_config()).await
}

pub async fn spawn_app_with_config(store: Arc<dyn SubmissionStore>, config: &Config) -> TestApp {
    let app = contact_form::build_app(store, config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// Spawn against a fresh in-memory store and hand the store back for inspection.
pub async fn spawn_memory_app() -> (TestApp, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = spawn_app(store.clone()).await;
    (app, store)
}

/// Store whose writes always fail, as if the database were unreachable.
pub struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn put(&self, _submission: &Submission) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Store that panics on write.
pub struct PanickingStore;

#[async_trait]
impl SubmissionStore for PanickingStore {
    async fn put(&self, _submission: &Submission) -> Result<(), StoreError> {
        panic!("store exploded");
    }
}
