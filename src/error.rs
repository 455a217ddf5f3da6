use thiserror::Error;

/// Errors that can occur while reading inputs, assembling pairings or persisting a run
#[derive(Error, Debug)]
pub enum ImportError {
    /// A source row could not be resolved to a main dish
    #[error("missing dish identifier")]
    MissingDish,

    /// A source row could not be read or decoded
    #[error("Malformed input row: {0}")]
    MalformedRow(String),

    /// Failed to read a CSV master list
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Failed to encode or decode JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Filesystem error while reading inputs or writing backups and summaries
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to build the HTTP client used for uploads
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Invalid builder usage
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to persist the run summary
    #[error("Failed to persist import summary to {path}: {source}")]
    SummaryError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors returned by an [`Uploader`](crate::uploader::Uploader) for a single pairing group
#[derive(Error, Debug)]
pub enum UploadError {
    /// The endpoint answered with a non-success status
    #[error("API error: {status} - {body}")]
    Rejected { status: u16, body: String },

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// The request could not be sent or the response could not be read
    #[error("Request error: {0}")]
    Transport(String),
}
