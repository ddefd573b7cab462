use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

/// A persisted item, as stored in the `items` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub value: f64,
    #[serde(
        rename = "createdAt",
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new item. The id and timestamp are assigned by the
/// store when the item is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub value: f64,
}

impl Item {
    pub fn new(new_item: NewItem) -> Self {
        Self {
            id: ObjectId::new(),
            name: new_item.name,
            value: new_item.value,
            // Millisecond precision, matching what BSON dates round-trip.
            created_at: BsonDateTime::now().to_chrono(),
        }
    }
}

/// Newest first: `created_at` descending, ties broken by id descending.
pub fn newest_first(a: &Item, b: &Item) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(name: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            value: 1.0,
        }
    }

    #[test]
    fn new_assigns_unique_ids() {
        let a = Item::new(new_item("a"));
        let b = Item::new(new_item("b"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn created_at_has_millisecond_precision() {
        let item = Item::new(new_item("a"));
        assert_eq!(item.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn newest_first_orders_by_timestamp_then_id() {
        let older = Item::new(new_item("older"));
        let mut newer = Item::new(new_item("newer"));
        newer.created_at = older.created_at + chrono::Duration::seconds(1);

        let mut items = vec![older.clone(), newer.clone()];
        items.sort_by(newest_first);
        assert_eq!(items[0].name, "newer");

        // Same timestamp: the later-generated id wins.
        let mut tied = Item::new(new_item("tied"));
        tied.created_at = older.created_at;
        let mut items = vec![older, tied];
        items.sort_by(newest_first);
        assert_eq!(items[0].name, "tied");
    }

    #[test]
    fn stored_document_uses_mongo_field_names() {
        let item = Item::new(new_item("doc"));
        let document = mongodb::bson::to_document(&item).unwrap();
        assert!(document.contains_key("_id"));
        assert!(document.contains_key("createdAt"));
        assert_eq!(document.get_str("name").unwrap(), "doc");
        assert_eq!(document.get_f64("value").unwrap(), 1.0);
    }
}
