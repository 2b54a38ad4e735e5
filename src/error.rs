use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The page loaded but the required DOM marker never appeared.
    #[error("{url}: required marker `{selector}` not found")]
    MissingMarker { url: String, selector: String },

    #[error("{url}: navigation timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("{url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("failed to write {}: {source}", path.display())]
    WriteDataset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Classify a transport failure: timeouts get their own variant so the
    /// driver can report them distinctly from other HTTP failures.
    pub(crate) fn from_reqwest(url: &str, timeout_ms: u64, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ScrapeError::Timeout {
                url: url.to_string(),
                timeout_ms,
            }
        } else {
            ScrapeError::Http {
                url: url.to_string(),
                source: e,
            }
        }
    }
}
