use thiserror::Error;

/// Failure modes of the remote catalog. All variants are retryable from the
/// caller's point of view; the swipe engine leaves its state untouched on
/// any of them.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog returned {status} for {endpoint}: {body}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("page numbers start at 1, got {0}")]
    InvalidPage(u32),
}
