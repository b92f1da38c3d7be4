//! Access kernel error types.

use thiserror::Error;

/// Errors raised while building a menu registry from a manifest.
///
/// Access decisions themselves never error: unknown keys, unmapped paths,
/// and empty permission sets all resolve to deterministic denials.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("failed to read menu manifest")]
    Io(#[from] std::io::Error),

    #[error("invalid menu JSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid menu manifest")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using AccessError.
pub type AccessResult<T> = Result<T, AccessError>;
