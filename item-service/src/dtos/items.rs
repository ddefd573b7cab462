use crate::models::{Item, NewItem};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

/// A `value` as clients may send it: a JSON number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Coerce to a finite number. `Ok(None)` means the input counts as absent.
    fn coerce(&self) -> Result<Option<f64>, AppError> {
        let number = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<f64>().map_err(|_| {
                    AppError::BadRequest(anyhow::anyhow!("value must be a number, got {:?}", s))
                })?
            }
        };

        if !number.is_finite() {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "value must be a finite number"
            )));
        }
        Ok(Some(number))
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,
    #[validate(required(message = "value is required"))]
    pub value: Option<NumericInput>,
}

impl CreateItemRequest {
    /// Trim the name and coerce the value. Blank names and empty value strings
    /// count as missing.
    pub fn into_new_item(self) -> Result<NewItem, AppError> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let value = match self.value {
            Some(value) => value.coerce()?,
            None => None,
        };

        match (name, value) {
            (Some(name), Some(value)) => Ok(NewItem { name, value }),
            _ => Err(AppError::BadRequest(anyhow::anyhow!(
                "name and value are required"
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub created_at: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_hex(),
            name: item.name,
            value: item.value,
            created_at: item.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: serde_json::Value) -> CreateItemRequest {
        serde_json::from_value(body).expect("request should deserialize")
    }

    #[test]
    fn accepts_name_and_numeric_value() {
        let new_item = request(serde_json::json!({"name": "foo", "value": 5}))
            .into_new_item()
            .unwrap();
        assert_eq!(
            new_item,
            NewItem {
                name: "foo".to_string(),
                value: 5.0
            }
        );
    }

    #[test]
    fn trims_name() {
        let new_item = request(serde_json::json!({"name": "  padded \t", "value": 1.5}))
            .into_new_item()
            .unwrap();
        assert_eq!(new_item.name, "padded");
    }

    #[test]
    fn coerces_numeric_strings() {
        let new_item = request(serde_json::json!({"name": "foo", "value": " 42.5 "}))
            .into_new_item()
            .unwrap();
        assert_eq!(new_item.value, 42.5);
    }

    #[test]
    fn present_fields_pass_validation() {
        let req = request(serde_json::json!({"name": "foo", "value": "5"}));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn missing_value_fails_validation() {
        let req = request(serde_json::json!({"name": "foo"}));
        assert!(req.validate().is_err());
    }

    #[test]
    fn missing_name_fails_validation() {
        let req = request(serde_json::json!({"value": 3}));
        assert!(req.validate().is_err());
    }

    #[test]
    fn blank_name_is_treated_as_missing() {
        let err = request(serde_json::json!({"name": "   ", "value": 3}))
            .into_new_item()
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn empty_value_string_is_treated_as_missing() {
        let err = request(serde_json::json!({"name": "foo", "value": ""}))
            .into_new_item()
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn rejects_non_numeric_and_non_finite_strings() {
        for value in ["abc", "NaN", "inf"] {
            let err = request(serde_json::json!({"name": "foo", "value": value}))
                .into_new_item()
                .unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{value} accepted");
        }
    }

    #[test]
    fn rejects_non_numeric_json_types() {
        let parsed: Result<CreateItemRequest, _> =
            serde_json::from_value(serde_json::json!({"name": "foo", "value": true}));
        assert!(parsed.is_err());
    }

    #[test]
    fn response_uses_hex_id_and_camel_case() {
        let item = Item::new(NewItem {
            name: "foo".to_string(),
            value: 5.0,
        });
        let id = item.id.to_hex();
        let json = serde_json::to_value(ItemResponse::from(item)).unwrap();
        assert_eq!(json["id"], id);
        assert_eq!(json["name"], "foo");
        assert_eq!(json["value"].as_f64(), Some(5.0));
        assert!(json["createdAt"].is_string());
    }
}
