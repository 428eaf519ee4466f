use serde::{Deserialize, Serialize};
use crate::models::domain::{CatalogEntry, MatchResult, RouteEntry};

/// Response for the build route endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRouteResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(rename = "storeId")]
    pub store_id: Option<String>,
    pub route: Vec<RouteEntry>,
    pub unmatched: Vec<String>,
    #[serde(rename = "totalItems")]
    pub total_items: usize,
}

/// Response for the single item lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchItemResponse {
    #[serde(rename = "storeId")]
    pub store_id: Option<String>,
    pub result: MatchResult,
}

/// Response for receipt extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractReceiptResponse {
    pub items: Vec<String>,
    pub refined: bool,
}

/// Response for aisle search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAislesResponse {
    #[serde(rename = "storeId")]
    pub store_id: Option<String>,
    pub aisles: Vec<CatalogEntry>,
}

/// Known stores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoresResponse {
    pub stores: Vec<String>,
    #[serde(rename = "defaultStore")]
    pub default_store: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
