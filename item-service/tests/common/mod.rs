#![allow(dead_code)]

use item_service::config::{ItemConfig, MongoConfig, StoreBackend};
use item_service::services::ItemStore;
use item_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<dyn ItemStore>,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on a random port backed by the in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with(StoreBackend::Memory, MongoConfig::new("mongodb://localhost:27017"))
            .await
    }

    /// Spawn the service against a live MongoDB, in a throwaway database.
    pub async fn spawn_with_mongo() -> Self {
        let uri = std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let mut mongodb = MongoConfig::new(uri);
        mongodb.database = Some(format!("item_test_{}", uuid::Uuid::new_v4().simple()));
        Self::spawn_with(StoreBackend::Mongo, mongodb).await
    }

    async fn spawn_with(store: StoreBackend, mongodb: MongoConfig) -> Self {
        let config = ItemConfig {
            common: CoreConfig { port: 0 }, // Random port for testing
            mongodb,
            store,
            otlp_endpoint: None,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_with_shutdown(std::future::pending()).await.ok();
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
            client,
        }
    }

    pub async fn create_item(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/items", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list_items(&self) -> Vec<serde_json::Value> {
        let response = self
            .client
            .get(format!("{}/items", self.address))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());
        response.json().await.expect("Failed to parse JSON")
    }

    pub async fn get_item(&self, id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/items/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_item(&self, id: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}/items/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
