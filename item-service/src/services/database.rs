use crate::config::{MongoConfig, DEFAULT_DATABASE};
use crate::models::{Item, NewItem};
use crate::services::{ConnectionEventLogger, ItemStore};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    event::{cmap::CmapEventHandler, sdam::SdamEventHandler},
    options::{ClientOptions, FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Connect and verify the server answers a ping within the configured
    /// server selection timeout.
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let mut client_options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        client_options.app_name = Some("item-service".to_string());
        client_options.server_selection_timeout = Some(config.server_selection_timeout);
        client_options.connect_timeout = Some(config.connect_timeout);

        let events = Arc::new(ConnectionEventLogger);
        let sdam_handler: Arc<dyn SdamEventHandler> = events.clone();
        let cmap_handler: Arc<dyn CmapEventHandler> = events;
        client_options.sdam_event_handler = Some(sdam_handler);
        client_options.cmap_event_handler = Some(cmap_handler);

        let database = config
            .database
            .clone()
            .or_else(|| client_options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(&database);

        let mongo = Self { client, db };
        mongo.ping().await?;
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(mongo)
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for item-service");

        // Serves the newest-first listing
        let created_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_idx".to_string())
                    .build(),
            )
            .build();

        self.items()
            .create_index(created_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create createdAt index on items collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on items.createdAt");

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn items(&self) -> Collection<Item> {
        self.db.collection("items")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ItemStore for MongoDb {
    async fn list(&self) -> Result<Vec<Item>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .build();

        let cursor = self.items().find(doc! {}, find_options).await.map_err(|e| {
            tracing::error!("Failed to list items: {}", e);
            AppError::from(e)
        })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect items: {}", e);
            AppError::from(e)
        })
    }

    async fn create(&self, new_item: NewItem) -> Result<Item, AppError> {
        let item = Item::new(new_item);
        self.items().insert_one(&item, None).await.map_err(|e| {
            tracing::error!("Failed to insert item: {}", e);
            AppError::from(e)
        })?;
        Ok(item)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Item>, AppError> {
        self.items()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find item: {}", e);
                AppError::from(e)
            })
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<Item>, AppError> {
        self.items()
            .find_one_and_delete(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete item: {}", e);
                AppError::from(e)
            })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.ping().await
    }

    async fn shutdown(&self) {
        tracing::info!("Closing MongoDB connection");
        self.client.clone().shutdown().await;
    }
}
