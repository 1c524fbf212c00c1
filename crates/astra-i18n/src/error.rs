use crate::key::MessageKey;
use thiserror::Error;

/// Errors from locale resolution and message lookup.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The requested locale's base language has no bundle.
    #[error("unsupported locale: no bundle for base language '{0}'")]
    UnsupportedLocale(String),

    /// A message key did not resolve (or resolved to the wrong shape).
    #[error("message key {key:?} does not resolve for locale '{locale}'")]
    MissingKey { locale: String, key: MessageKey },

    /// A selection was requested from an empty list.
    #[error("cannot pick from an empty list")]
    EmptyList,

    /// A bundle failed validation or could not be loaded.
    #[error("invalid bundle '{locale}': {reason}")]
    InvalidBundle { locale: String, reason: String },
}
