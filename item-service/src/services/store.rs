use crate::models::{Item, NewItem};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Persistence handle for items. Constructed once at startup and shared by
/// every request handler through the router state.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, newest first.
    async fn list(&self) -> Result<Vec<Item>, AppError>;

    /// Persist a new item, assigning its id and creation time.
    async fn create(&self, new_item: NewItem) -> Result<Item, AppError>;

    async fn get(&self, id: ObjectId) -> Result<Option<Item>, AppError>;

    /// Remove an item, returning it if it existed.
    async fn delete(&self, id: ObjectId) -> Result<Option<Item>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    /// Release the underlying connection. Called once during graceful shutdown.
    async fn shutdown(&self) {}
}
