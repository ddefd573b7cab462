pub mod items;
pub mod service;

pub use items::{CreateItemRequest, ItemResponse, NumericInput};
pub use service::{EndpointDescription, ServiceDescription};
