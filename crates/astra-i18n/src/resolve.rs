use crate::error::LocaleError;
use crate::key::{MessageKey, MessageValue};
use crate::table::LocaleTable;
use std::collections::HashMap;

/// The base language of a locale tag: "en-US" -> "en".
pub fn base_language(tag: &str) -> &str {
    match tag.split_once('-') {
        Some((base, _)) => base,
        None => tag,
    }
}

/// The effective message view for one request's locale.
///
/// Produced by layering the full-locale bundle over its base-language
/// bundle; request-scoped and never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedView {
    locale: String,
    messages: HashMap<MessageKey, MessageValue>,
}

impl ResolvedView {
    /// The locale tag this view was resolved for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, key: MessageKey) -> Option<&MessageValue> {
        self.messages.get(&key)
    }

    /// Look up a single-string message.
    pub fn text(&self, key: MessageKey) -> Result<&str, LocaleError> {
        self.get(key)
            .and_then(MessageValue::as_text)
            .ok_or_else(|| LocaleError::MissingKey {
                locale: self.locale.clone(),
                key,
            })
    }

    /// Look up a string-list message.
    pub fn list(&self, key: MessageKey) -> Result<&[String], LocaleError> {
        self.get(key)
            .and_then(MessageValue::as_list)
            .ok_or_else(|| LocaleError::MissingKey {
                locale: self.locale.clone(),
                key,
            })
    }
}

/// Resolve `locale_tag` against `table` into an effective view.
///
/// The base-language bundle must exist; the full-locale bundle is
/// optional and its non-empty values win over the base values. Pure and
/// deterministic: identical inputs always yield an identical view.
pub fn resolve(locale_tag: &str, table: &LocaleTable) -> Result<ResolvedView, LocaleError> {
    let base = base_language(locale_tag);
    let base_bundle = table
        .get(base)
        .ok_or_else(|| LocaleError::UnsupportedLocale(locale_tag.to_string()))?;

    let mut messages: HashMap<MessageKey, MessageValue> = base_bundle
        .iter()
        .map(|(key, value)| (key, value.clone()))
        .collect();

    if base != locale_tag {
        if let Some(region_bundle) = table.get(locale_tag) {
            for (key, value) in region_bundle.iter() {
                if !value.is_empty() {
                    messages.insert(key, value.clone());
                }
            }
        }
    }

    Ok(ResolvedView {
        locale: locale_tag.to_string(),
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::TranslationBundle;

    fn table() -> LocaleTable {
        LocaleTable::builtin()
    }

    #[test]
    fn test_base_language_split() {
        assert_eq!(base_language("en-US"), "en");
        assert_eq!(base_language("en"), "en");
        assert_eq!(base_language("pt-BR"), "pt");
    }

    #[test]
    fn test_view_contains_every_base_key() {
        let table = table();
        let base = table.get("en").unwrap();
        let view = resolve("en-GB", &table).unwrap();
        for (key, _) in base.iter() {
            assert!(view.get(key).is_some(), "key {key:?} missing from en-GB view");
        }
    }

    #[test]
    fn test_region_override_wins() {
        let view = resolve("en-US", &table()).unwrap();
        assert_eq!(
            view.text(MessageKey::SkillName).unwrap(),
            "American Space Facts"
        );
    }

    #[test]
    fn test_unoverridden_keys_inherit_from_base() {
        let table = table();
        let view = resolve("en-US", &table).unwrap();
        let base = resolve("en", &table).unwrap();
        assert_eq!(
            view.text(MessageKey::StopMessage).unwrap(),
            base.text(MessageKey::StopMessage).unwrap()
        );
        assert_eq!(
            view.list(MessageKey::Facts).unwrap(),
            base.list(MessageKey::Facts).unwrap()
        );
    }

    #[test]
    fn test_unknown_region_falls_back_to_base_only() {
        let table = table();
        let view = resolve("en-NZ", &table).unwrap();
        assert_eq!(view.text(MessageKey::SkillName).unwrap(), "Space Facts");
    }

    #[test]
    fn test_unsupported_base_language_fails() {
        assert!(matches!(
            resolve("xx-XX", &table()),
            Err(LocaleError::UnsupportedLocale(_))
        ));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let table = table();
        let first = resolve("de-DE", &table).unwrap();
        let second = resolve("de-DE", &table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_region_duplicate_resolves_complete() {
        // pt-BR ships as a full copy of pt.
        let view = resolve("pt-BR", &table()).unwrap();
        assert_eq!(view.text(MessageKey::SkillName).unwrap(), "Fatos Espaciais");
        assert!(!view.list(MessageKey::Facts).unwrap().is_empty());
    }

    #[test]
    fn test_empty_region_value_does_not_shadow_base() {
        let mut table = LocaleTable::new();
        let mut base = TranslationBundle::new();
        base.set_text(MessageKey::SkillName, "Base Name");
        table.insert("en", base);
        let mut region = TranslationBundle::new();
        region.set_text(MessageKey::SkillName, "");
        table.insert("en-US", region);

        let view = resolve("en-US", &table).unwrap();
        assert_eq!(view.text(MessageKey::SkillName).unwrap(), "Base Name");
    }

    #[test]
    fn test_missing_key_reports_locale() {
        // ja has no fallback strings.
        let view = resolve("ja-JP", &table()).unwrap();
        match view.text(MessageKey::FallbackMessage) {
            Err(LocaleError::MissingKey { locale, key }) => {
                assert_eq!(locale, "ja-JP");
                assert_eq!(key, MessageKey::FallbackMessage);
            }
            other => panic!("expected MissingKey, got {other:?}"),
        }
    }
}
