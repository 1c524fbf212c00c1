//! # astra-i18n
//!
//! Localized message tables for the astra skill: a closed set of message
//! keys, per-locale translation bundles, region-over-base fallback
//! resolution, and the uniform random pick used for fact selection.

mod bundle;
mod data;
mod error;
mod key;
mod loader;
mod pick;
mod resolve;
mod table;

pub use bundle::TranslationBundle;
pub use error::LocaleError;
pub use key::{MessageKey, MessageValue};
pub use loader::{BuiltinSource, BundleSource, DirSource};
pub use pick::pick_random;
pub use resolve::{base_language, resolve, ResolvedView};
pub use table::LocaleTable;
