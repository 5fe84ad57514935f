#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use people_service::config::{MongoConfig, PeopleConfig, StoreBackend};
use people_service::models::Person;
use people_service::services::{
    InMemoryPersonStore, MongoPersonStore, PersonStore, ReplaceOutcome,
};
use people_service::startup::Application;
use people_service::{build_router, AppState};
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::Arc;
use tower::ServiceExt;

/// Router over a fresh in-memory store, with the store handle for assertions.
pub fn memory_app() -> (Router, Arc<InMemoryPersonStore>) {
    let store = Arc::new(InMemoryPersonStore::new());
    let router = build_router(AppState::new(store.clone()));
    (router, store)
}

pub fn memory_app_with(people: Vec<Person>) -> (Router, Arc<InMemoryPersonStore>) {
    let store = Arc::new(InMemoryPersonStore::with_people(people));
    let router = build_router(AppState::new(store.clone()));
    (router, store)
}

/// Router whose store fails every call, as if the database were unreachable.
pub fn failing_app() -> Router {
    build_router(AppState::new(Arc::new(FailingStore)))
}

pub struct FailingStore;

fn unreachable_db() -> AppError {
    AppError::DatabaseError(anyhow::anyhow!("no reachable servers"))
}

#[async_trait]
impl PersonStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        Err(unreachable_db())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Person>, AppError> {
        Err(unreachable_db())
    }

    async fn insert(&self, _person: &Person) -> Result<(), AppError> {
        Err(unreachable_db())
    }

    async fn replace_by_name(
        &self,
        _name: &str,
        _person: &Person,
    ) -> Result<ReplaceOutcome, AppError> {
        Err(unreachable_db())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(unreachable_db())
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("Response body is not JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// A live server on a random port backed by a throwaway MongoDB database.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: MongoPersonStore,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("people_test_{}", uuid::Uuid::new_v4());
        let uri = std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let config = PeopleConfig {
            common: CoreConfig {
                port: 0, // Random port
                ..CoreConfig::default()
            },
            mongodb: MongoConfig {
                uri,
                database: db_name.clone(),
            },
            store: StoreBackend::Mongo,
            otlp_endpoint: None,
        };

        let store = MongoPersonStore::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .expect("Failed to connect to MongoDB");
        store
            .initialize_indexes()
            .await
            .expect("Failed to create indexes");

        let app = Application::build_with_store(&config, Arc::new(store.clone()))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            db_name,
        }
    }

    /// Cleanup test database after test completes.
    pub async fn cleanup(&self) {
        self.store
            .database()
            .drop(None)
            .await
            .expect("Failed to drop test database");
    }
}
