use crate::models::{newest_first, Item, NewItem};
use crate::services::ItemStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process store, selected with `ITEM_STORE=memory`. Contents are lost on
/// restart.
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<HashMap<ObjectId, Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, AppError> {
        let mut items: Vec<Item> = self.items.read().await.values().cloned().collect();
        items.sort_by(newest_first);
        Ok(items)
    }

    async fn create(&self, new_item: NewItem) -> Result<Item, AppError> {
        let item = Item::new(new_item);
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Item>, AppError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<Item>, AppError> {
        Ok(self.items.write().await.remove(&id))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
