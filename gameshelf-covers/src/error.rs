/// Errors that can occur while loading cover overrides or probing sources.
///
/// Candidate generation itself never fails; these only surface from I/O.
#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid override map: {0}")]
    InvalidMap(String),

    #[error("Invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
