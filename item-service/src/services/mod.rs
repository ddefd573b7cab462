pub mod database;
pub mod events;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::MongoDb;
pub use events::ConnectionEventLogger;
pub use memory::MemoryItemStore;
pub use metrics::{get_metrics, init_metrics, record_item_operation};
pub use store::ItemStore;
