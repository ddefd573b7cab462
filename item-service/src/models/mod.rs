pub mod item;

pub use item::{newest_first, Item, NewItem};
