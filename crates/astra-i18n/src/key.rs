use serde::{Deserialize, Serialize};

/// The closed set of message keys a bundle may define.
///
/// Unknown keys in loaded bundle JSON fail deserialization instead of
/// silently resolving to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKey {
    SkillName,
    GetFactMessage,
    HelpMessage,
    HelpReprompt,
    FallbackMessage,
    FallbackReprompt,
    ErrorMessage,
    StopMessage,
    Facts,
}

impl MessageKey {
    /// Every known key.
    pub const ALL: [MessageKey; 9] = [
        MessageKey::SkillName,
        MessageKey::GetFactMessage,
        MessageKey::HelpMessage,
        MessageKey::HelpReprompt,
        MessageKey::FallbackMessage,
        MessageKey::FallbackReprompt,
        MessageKey::ErrorMessage,
        MessageKey::StopMessage,
        MessageKey::Facts,
    ];

    /// Keys every base-language bundle must define.
    ///
    /// The fallback pair is optional: the platform's fallback intent was
    /// not available in all locales, and some shipped bundles (ja) never
    /// carried those strings.
    pub const REQUIRED: [MessageKey; 7] = [
        MessageKey::SkillName,
        MessageKey::GetFactMessage,
        MessageKey::HelpMessage,
        MessageKey::HelpReprompt,
        MessageKey::ErrorMessage,
        MessageKey::StopMessage,
        MessageKey::Facts,
    ];

    /// The key's wire name, as it appears in bundle JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::SkillName => "SKILL_NAME",
            MessageKey::GetFactMessage => "GET_FACT_MESSAGE",
            MessageKey::HelpMessage => "HELP_MESSAGE",
            MessageKey::HelpReprompt => "HELP_REPROMPT",
            MessageKey::FallbackMessage => "FALLBACK_MESSAGE",
            MessageKey::FallbackReprompt => "FALLBACK_REPROMPT",
            MessageKey::ErrorMessage => "ERROR_MESSAGE",
            MessageKey::StopMessage => "STOP_MESSAGE",
            MessageKey::Facts => "FACTS",
        }
    }
}

/// A localized message value: a single string or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageValue {
    Text(String),
    List(Vec<String>),
}

impl MessageValue {
    /// Empty values never shadow a base-language value during resolution.
    pub fn is_empty(&self) -> bool {
        match self {
            MessageValue::Text(s) => s.is_empty(),
            MessageValue::List(items) => items.is_empty(),
        }
    }

    /// The text form, if this is a single string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageValue::Text(s) => Some(s),
            MessageValue::List(_) => None,
        }
    }

    /// The list form, if this is a string list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MessageValue::Text(_) => None,
            MessageValue::List(items) => Some(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_wire_names_round_trip() {
        for key in MessageKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
            let back: MessageKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: Result<MessageKey, _> = serde_json::from_str("\"NO_SUCH_KEY\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_value_untagged_shapes() {
        let text: MessageValue = serde_json::from_str("\"Goodbye!\"").unwrap();
        assert_eq!(text.as_text(), Some("Goodbye!"));

        let list: MessageValue = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(list.as_list().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_emptiness() {
        assert!(MessageValue::Text(String::new()).is_empty());
        assert!(MessageValue::List(Vec::new()).is_empty());
        assert!(!MessageValue::Text("x".into()).is_empty());
    }
}
