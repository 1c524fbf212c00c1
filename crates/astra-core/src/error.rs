use astra_i18n::LocaleError;
use thiserror::Error;

/// Top-level error type for the astra skill.
///
/// Every variant is local to a single request; no error state survives
/// into the next request.
#[derive(Debug, Error)]
pub enum SkillError {
    /// Locale resolution or message lookup failed.
    #[error("locale error: {0}")]
    Locale(#[from] LocaleError),

    /// No registered handler's predicate matched the request.
    /// A configuration defect, not an expected production path.
    #[error("no handler matched request type '{0}'")]
    NoHandlerMatched(String),

    /// A handler action failed for a reason of its own.
    #[error("handler error: {0}")]
    Handler(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
