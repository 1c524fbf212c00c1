use crate::bundle::TranslationBundle;
use crate::data;
use crate::error::LocaleError;
use crate::key::{MessageKey, MessageValue};
use crate::resolve::base_language;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All known locale bundles, keyed by tag ("en", "en-US", ...).
///
/// Built once at startup and read-only afterwards; safe to share across
/// in-flight requests by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    bundles: HashMap<String, TranslationBundle>,
}

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table of bundled translations shipped with the skill.
    pub fn builtin() -> Self {
        data::builtin()
    }

    pub fn insert(&mut self, tag: impl Into<String>, bundle: TranslationBundle) {
        self.bundles.insert(tag.into(), bundle);
    }

    pub fn get(&self, tag: &str) -> Option<&TranslationBundle> {
        self.bundles.get(tag)
    }

    /// Locale tags in the table, unordered.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Validate the table at the construction boundary.
    ///
    /// Every base-language bundle (tag without a region) must define all
    /// of [`MessageKey::REQUIRED`]: string keys as non-empty text, and
    /// `FACTS` as a non-empty list. Region bundles may be sparse, but
    /// their base language must be present or resolution could never
    /// succeed for them.
    pub fn validate(&self) -> Result<(), LocaleError> {
        if self.bundles.is_empty() {
            return Err(LocaleError::InvalidBundle {
                locale: "*".to_string(),
                reason: "table contains no bundles".to_string(),
            });
        }

        for (tag, bundle) in &self.bundles {
            let base = base_language(tag);
            if base != tag {
                if !self.bundles.contains_key(base) {
                    return Err(LocaleError::InvalidBundle {
                        locale: tag.clone(),
                        reason: format!("base language '{base}' has no bundle"),
                    });
                }
                continue;
            }

            for key in MessageKey::REQUIRED {
                match bundle.get(key) {
                    None => {
                        return Err(LocaleError::MissingKey {
                            locale: tag.clone(),
                            key,
                        })
                    }
                    Some(value) if value.is_empty() => {
                        return Err(LocaleError::InvalidBundle {
                            locale: tag.clone(),
                            reason: format!("key {} is empty", key.as_str()),
                        })
                    }
                    Some(MessageValue::List(_)) if key != MessageKey::Facts => {
                        return Err(LocaleError::InvalidBundle {
                            locale: tag.clone(),
                            reason: format!("key {} must be a string", key.as_str()),
                        })
                    }
                    Some(MessageValue::Text(_)) if key == MessageKey::Facts => {
                        return Err(LocaleError::InvalidBundle {
                            locale: tag.clone(),
                            reason: "FACTS must be a list".to_string(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }
}
