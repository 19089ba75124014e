//! Localized command labels

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::command::{CommandInfo, NICKNAME_PLACEHOLDER_KEY};

/// Resolves a string key to user-facing text.
pub trait Localizer: Send + Sync {
    fn localize(&self, key: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn localize(&self, key: &str) -> String {
        self(key)
    }
}

/// Flat key → string table, e.g. loaded from a `{"content.commands.who": "..."}` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English labels for every command key
    pub fn english() -> Self {
        let mut table = Self::new();
        for command in CommandInfo::ALL {
            let text = match command {
                CommandInfo::Block => "block a peer",
                CommandInfo::Clear => "clear chat messages",
                CommandInfo::Hug => "send someone a warm hug",
                CommandInfo::Message => "send private message",
                CommandInfo::Slap => "slap someone with a trout",
                CommandInfo::Unblock => "unblock a peer",
                CommandInfo::Who => "see who's online",
                CommandInfo::Favorite => "add to favorites",
                CommandInfo::Unfavorite => "remove from favorites",
            };
            table.insert(command.description_key(), text);
        }
        table.insert(NICKNAME_PLACEHOLDER_KEY, "<nickname>");
        table
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Overlay `other` on top of this table; its entries win.
    pub fn merge(&mut self, other: StringTable) {
        self.strings.extend(other.strings);
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Localizer for StringTable {
    fn localize(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(key = %key, "Missing localized string");
                key.to_string()
            }
        }
    }
}
