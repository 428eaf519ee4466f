use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{MatchPolicy, MatchingConfig, MirrorBlock, StoreLayout};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub stores: StoreSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_catalog_table")]
    pub table: String,
    #[serde(default = "default_catalog_timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: default_catalog_table(),
            timeout_secs: default_catalog_timeout(),
        }
    }
}

fn default_catalog_table() -> String { "produto".to_string() }
fn default_catalog_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_names")]
    pub names: Vec<String>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            names: default_store_names(),
        }
    }
}

impl StoreSettings {
    /// Store used when a request names none
    pub fn default_store(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

fn default_store_names() -> Vec<String> {
    vec![
        "Dal Pozzo Vila Bela".to_string(),
        "Dal Pozzo Cidade dos Lagos".to_string(),
        "Dal Pozzo Home Center".to_string(),
    ]
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    #[serde(default = "default_min_keyword_len")]
    pub min_keyword_len: usize,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    #[serde(default)]
    pub policy: MatchPolicy,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            min_keyword_len: default_min_keyword_len(),
            max_items: default_max_items(),
            policy: MatchPolicy::default(),
        }
    }
}

impl From<&MatchingSettings> for MatchingConfig {
    fn from(settings: &MatchingSettings) -> Self {
        Self {
            similarity_threshold: settings.similarity_threshold,
            min_keyword_len: settings.min_keyword_len,
            policy: settings.policy,
        }
    }
}

fn default_similarity_threshold() -> f64 { 0.6 }
fn default_min_keyword_len() -> usize { crate::core::MIN_KEYWORD_LEN }
fn default_max_items() -> usize { 500 }

/// Store layout, currently a single optional mirrored block
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSettings {
    #[serde(default = "default_mirror_enabled")]
    pub mirror_enabled: bool,
    #[serde(default = "default_mirror_start")]
    pub mirror_start: u32,
    #[serde(default = "default_mirror_end")]
    pub mirror_end: u32,
    #[serde(default = "default_mirror_sum")]
    pub mirror_sum: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            mirror_enabled: default_mirror_enabled(),
            mirror_start: default_mirror_start(),
            mirror_end: default_mirror_end(),
            mirror_sum: default_mirror_sum(),
        }
    }
}

impl From<&LayoutSettings> for StoreLayout {
    fn from(settings: &LayoutSettings) -> Self {
        if !settings.mirror_enabled {
            return StoreLayout::linear();
        }

        StoreLayout::with_mirror_block(MirrorBlock {
            start: settings.mirror_start,
            end: settings.mirror_end,
            sum: settings.mirror_sum,
        })
    }
}

fn default_mirror_enabled() -> bool { true }
fn default_mirror_start() -> u32 { 25 }
fn default_mirror_end() -> u32 { 81 }
fn default_mirror_sum() -> u32 { 106 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with AISLE_)
    /// 5. SUPABASE_URL / SUPABASE_KEY for the catalog provider
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., AISLE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("AISLE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("AISLE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn matching_config(&self) -> MatchingConfig {
        MatchingConfig::from(&self.matching)
    }

    pub fn store_layout(&self) -> StoreLayout {
        StoreLayout::from(&self.layout)
    }
}

/// Apply the hosted catalog's conventional environment variables
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("SUPABASE_URL") {
        builder = builder.set_override("catalog.url", url)?;
    }
    if let Ok(key) = env::var("SUPABASE_KEY") {
        builder = builder.set_override("catalog.api_key", key)?;
    }

    builder.build()
}
