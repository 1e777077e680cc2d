//! Error types shared across the crate.

use thiserror::Error;

/// Failures from the theme backends.
///
/// None of these reach a caller of [`crate::theme::ThemeResolver`]: each one has
/// a local fallback and is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("preference store read failed: {0}")]
    StoreRead(String),

    #[error("preference store write failed: {0}")]
    StoreWrite(String),

    #[error("color scheme preference query unavailable")]
    PreferenceQueryUnavailable,
}

/// Errors from loading the navigation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid navigation config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("navigation config declares no routes")]
    NoRoutes,

    #[error("route href must start with '/': {0:?}")]
    InvalidHref(String),

    #[error("route href declared twice: {0:?}")]
    DuplicateHref(String),
}
