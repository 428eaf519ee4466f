use crate::models::CatalogEntry;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching catalog snapshots
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Catalog provider is not configured")]
    NotConfigured,
}

/// Row of the hosted aisle table
#[derive(Debug, Clone, Deserialize)]
struct CatalogRow {
    corredor: i64,
    #[serde(default)]
    produto: Option<String>,
    #[serde(default)]
    loja: Option<String>,
}

impl CatalogRow {
    fn into_entry(self, store_id: &str) -> Option<CatalogEntry> {
        let aisle_id = match u32::try_from(self.corredor) {
            Ok(id) if id >= 1 => id,
            _ => {
                tracing::warn!("Skipping catalog row with invalid aisle {}", self.corredor);
                return None;
            }
        };

        Some(CatalogEntry {
            aisle_id,
            product_text: self.produto.unwrap_or_default(),
            store_id: self.loja.unwrap_or_else(|| store_id.to_string()),
        })
    }
}

/// Read-only client for the hosted aisle catalog (PostgREST API)
///
/// Every call fetches a fresh snapshot; nothing is cached between calls.
pub struct CatalogClient {
    base_url: String,
    api_key: String,
    table: String,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(
        base_url: String,
        api_key: String,
        table: String,
        timeout_secs: u64,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            table,
            client,
        })
    }

    fn table_url(&self) -> Result<String, CatalogError> {
        if self.base_url.trim().is_empty() {
            return Err(CatalogError::NotConfigured);
        }

        Ok(format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        ))
    }

    /// Fetch the catalog snapshot of one store, ordered by aisle
    pub async fn fetch_catalog(&self, store_id: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
        let url = format!(
            "{}?select=corredor,produto,loja&loja=eq.{}&order=corredor.asc",
            self.table_url()?,
            urlencoding::encode(store_id)
        );

        tracing::debug!("Fetching catalog for store: {}", store_id);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch catalog for {}: {} - {}", store_id, status, body);
            return Err(CatalogError::ApiError { status, body });
        }

        let rows: Vec<CatalogRow> = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(format!("Failed to parse catalog: {}", e)))?;

        let entries: Vec<CatalogEntry> = rows
            .into_iter()
            .filter_map(|row| row.into_entry(store_id))
            .collect();

        tracing::debug!("Fetched {} catalog entries for {}", entries.len(), store_id);

        Ok(entries)
    }

    /// Check that the catalog table is reachable
    pub async fn health_check(&self) -> Result<bool, CatalogError> {
        let url = format!("{}?select=corredor&limit=1", self.table_url()?);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}
