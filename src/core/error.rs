use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FmpError {
    /// An error occurred during an HTTP request (including timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body or cache file was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the cache, the symbol list or the output file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path being read or written.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The caller provided invalid parameters.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The run completed but no symbol produced any rows.
    #[error("No data was collected. Check API key and symbols.")]
    NoData,
}

impl FmpError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        FmpError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
