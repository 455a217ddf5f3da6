use crate::enrichment::RecipePolicy;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main importer configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ImporterConfig {
    /// Brand appended to generated SEO titles
    #[serde(default = "default_site_name")]
    pub site_name: String,
    /// Remote import endpoint settings
    #[serde(default)]
    pub upload: UploadConfig,
    /// Batch behaviour
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Configuration for the remote content store
#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Import endpoint URL (can also be set via WORKER_ENDPOINT)
    pub endpoint: Option<String>,
    /// Access key sent as X-API-Key (can also be set via WORKER_API_KEY)
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout: default_timeout(),
        }
    }
}

/// Configuration for batch runs
#[derive(Debug, Deserialize, Clone)]
pub struct BatchConfig {
    /// Pause between two submissions in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Where the run summary is written
    #[serde(default = "default_summary_path")]
    pub summary_path: PathBuf,
    /// Directory for per-pairing JSON backups; no backups when unset
    pub backup_dir: Option<PathBuf>,
    /// Whether side dishes always get a synthetic recipe
    #[serde(default)]
    pub recipe_policy: RecipePolicy,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            summary_path: default_summary_path(),
            backup_dir: None,
            recipe_policy: RecipePolicy::default(),
        }
    }
}

impl BatchConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            upload: UploadConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

// Default value functions
fn default_site_name() -> String {
    "PairDish".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_delay_ms() -> u64 {
    500
}

fn default_summary_path() -> PathBuf {
    PathBuf::from("import_log.json")
}

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8787/api/import-dishes";

impl ImporterConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PAIRDISH__ prefix
    /// 2. pairdish.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PAIRDISH__UPLOAD__ENDPOINT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ImporterConfig::load`] for the source priority.
pub fn load_config() -> Result<ImporterConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("pairdish").required(false))
        // Use double underscore for nested: PAIRDISH__BATCH__DELAY_MS
        .add_source(
            Environment::with_prefix("PAIRDISH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        assert_eq!(default_site_name(), "PairDish");
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_delay_ms(), 500);
        assert_eq!(default_summary_path(), PathBuf::from("import_log.json"));
    }

    #[test]
    fn test_batch_config_default() {
        let batch = BatchConfig::default();
        assert_eq!(batch.delay(), Duration::from_millis(500));
        assert!(batch.backup_dir.is_none());
        assert_eq!(batch.recipe_policy, RecipePolicy::Always);
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config: ImporterConfig = Config::builder()
            .add_source(File::from_str("", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.site_name, "PairDish");
        assert!(config.upload.endpoint.is_none());
        assert_eq!(config.upload.timeout, 30);
        assert_eq!(config.batch.delay_ms, 500);
    }

    #[test]
    fn test_toml_overrides() {
        let toml = r#"
            site_name = "SideKick"

            [upload]
            endpoint = "https://example.com/api/import-dishes"
            api_key = "secret"
            timeout = 5

            [batch]
            delay_ms = 2000
            backup_dir = "backups"
            recipe_policy = "when_prepared"
        "#;

        let config: ImporterConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.site_name, "SideKick");
        assert_eq!(
            config.upload.endpoint.as_deref(),
            Some("https://example.com/api/import-dishes")
        );
        assert_eq!(config.upload.api_key.as_deref(), Some("secret"));
        assert_eq!(config.upload.timeout, 5);
        assert_eq!(config.batch.delay(), Duration::from_secs(2));
        assert_eq!(config.batch.backup_dir, Some(PathBuf::from("backups")));
        assert_eq!(config.batch.recipe_policy, RecipePolicy::WhenPrepared);
    }
}
