use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The insider table could not be located in the document, or it has no usable header row.
    #[error("table extraction failed: {0}")]
    Extraction(String),

    /// No usable rows were left to build a dataset from.
    #[error("no data: {0}")]
    EmptyData(String),

    /// A column required to build records is not present in the header row.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A column could not be coerced into its typed representation.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// A market-cap lookup failed. Never escapes the resolver.
    #[error("market cap lookup for {ticker} failed: {message}")]
    Lookup {
        /// The ticker being looked up.
        ticker: String,
        /// What went wrong.
        message: String,
    },
}

impl TrackerError {
    pub(crate) fn lookup(ticker: &str, message: impl Into<String>) -> Self {
        TrackerError::Lookup {
            ticker: ticker.to_string(),
            message: message.into(),
        }
    }
}

/// Drop the query string from anything that prints a URL; provider keys travel as query params.
pub(crate) fn redact_query(msg: &str) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg.to_string(),
    }
}
