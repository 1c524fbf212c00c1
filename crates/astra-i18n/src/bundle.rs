use crate::key::{MessageKey, MessageValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The messages for one locale tag. Immutable once the table is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationBundle {
    messages: HashMap<MessageKey, MessageValue>,
}

impl TranslationBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: MessageKey) -> Option<&MessageValue> {
        self.messages.get(&key)
    }

    /// Set a single-string message.
    pub fn set_text(&mut self, key: MessageKey, text: impl Into<String>) {
        self.messages.insert(key, MessageValue::Text(text.into()));
    }

    /// Set a string-list message.
    pub fn set_list<I, S>(&mut self, key: MessageKey, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages.insert(
            key,
            MessageValue::List(items.into_iter().map(Into::into).collect()),
        );
    }

    pub fn iter(&self) -> impl Iterator<Item = (MessageKey, &MessageValue)> {
        self.messages.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
