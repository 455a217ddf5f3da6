use crate::config::{UploadConfig, DEFAULT_ENDPOINT};
use crate::error::{ImportError, UploadError};
use crate::model::PairingGroup;
use crate::uploader::Uploader;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

const API_KEY_HEADER: &str = "X-API-Key";

/// Posts each pairing group as JSON to the import endpoint
pub struct HttpUploader {
    client: Client,
    endpoint: String,
    timeout_secs: u64,
}

impl HttpUploader {
    /// Create an uploader from configuration
    pub fn new(config: &UploadConfig) -> Result<Self, ImportError> {
        // Try config first, then fall back to environment variables
        let endpoint = config
            .endpoint
            .clone()
            .or_else(|| std::env::var("WORKER_ENDPOINT").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("WORKER_API_KEY").ok());

        Self::with_endpoint(endpoint, api_key, config.timeout)
    }

    #[doc(hidden)]
    pub fn with_endpoint(
        endpoint: String,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, ImportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            headers.insert(API_KEY_HEADER, HeaderValue::from_str(&key)?);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_error(&self, err: reqwest::Error) -> UploadError {
        if err.is_timeout() {
            UploadError::Timeout(self.timeout_secs)
        } else {
            UploadError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl Uploader for HttpUploader {
    fn name(&self) -> &str {
        "http"
    }

    async fn upload(&self, group: &PairingGroup) -> Result<(), UploadError> {
        debug!("POST {} for {}", self.endpoint, group.main_dish.name);

        let response = self
            .client
            .post(&self.endpoint)
            .json(group)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(UploadError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
