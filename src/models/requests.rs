use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::models::domain::CatalogEntry;

/// Request to build a shopping route
///
/// When `catalog` is present it is used as the catalog snapshot and the
/// catalog provider is not consulted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BuildRouteRequest {
    #[serde(alias = "store_id", rename = "storeId", default)]
    pub store_id: Option<String>,
    #[serde(default, deserialize_with = "string_items")]
    pub items: Vec<String>,
    #[serde(default)]
    pub catalog: Option<Vec<CatalogEntry>>,
}

/// Keep only the string elements of a JSON item list
///
/// Numbers, nulls and objects sent as items are dropped, not rejected.
fn string_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;

    Ok(values
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(item) => Some(item),
            _ => None,
        })
        .collect())
}

/// Request to locate a single item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchItemRequest {
    #[serde(alias = "store_id", rename = "storeId", default)]
    pub store_id: Option<String>,
    #[validate(length(min = 1))]
    pub item: String,
    #[serde(default)]
    pub catalog: Option<Vec<CatalogEntry>>,
}

/// Request to turn receipt OCR text into item names
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExtractReceiptRequest {
    #[validate(length(min = 1, max = 65536))]
    pub text: String,
    #[serde(alias = "store_id", rename = "storeId", default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub catalog: Option<Vec<CatalogEntry>>,
    /// Narrow the extracted words against the store catalog
    #[serde(default = "default_refine")]
    pub refine: bool,
}

fn default_refine() -> bool {
    true
}

/// Query string for aisle search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAislesQuery {
    #[serde(alias = "store_id", rename = "storeId", default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_string_items_dropped() {
        let req: BuildRouteRequest =
            serde_json::from_value(json!({ "items": ["arroz", null, 5, { "a": 1 }, "feijão"] }))
                .expect("request");

        assert_eq!(req.items, vec!["arroz", "feijão"]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_items_is_empty() {
        let req: BuildRouteRequest =
            serde_json::from_value(json!({ "storeId": "loja" })).expect("request");

        assert!(req.items.is_empty());
        assert!(req.validate().is_ok());
    }
}
