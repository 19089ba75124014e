//! Slash command vocabulary
//!
//! The closed set of chat commands:
//! - `/block`, `/unblock` — mute or unmute a peer
//! - `/clear` — clear the current conversation
//! - `/hug`, `/slap` — emotes aimed at a peer
//! - `/m`, `/msg` — open a private message
//! - `/w`, `/who` — list who is around
//! - `/favorite`, `/unfavorite` — manage favorite peers (hidden in geo chats)

use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::localize::Localizer;

/// Localization key shared by every command that takes a nickname.
pub const NICKNAME_PLACEHOLDER_KEY: &str = "content.input.nickname_placeholder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandInfo {
    /// Hide a peer's messages
    Block,
    /// Clear the conversation
    Clear,
    /// Hug a peer
    Hug,
    /// Open a private conversation
    Message,
    /// Slap a peer with a trout
    Slap,
    /// Show a blocked peer's messages again
    Unblock,
    /// List peers in the channel
    Who,
    /// Mark a peer as favorite
    Favorite,
    /// Remove a peer from favorites
    Unfavorite,
}

impl CommandInfo {
    /// Every command in declaration order.
    pub const ALL: [CommandInfo; 9] = [
        CommandInfo::Block,
        CommandInfo::Clear,
        CommandInfo::Hug,
        CommandInfo::Message,
        CommandInfo::Slap,
        CommandInfo::Unblock,
        CommandInfo::Who,
        CommandInfo::Favorite,
        CommandInfo::Unfavorite,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandInfo::Block => "block",
            CommandInfo::Clear => "clear",
            CommandInfo::Hug => "hug",
            CommandInfo::Message => "message",
            CommandInfo::Slap => "slap",
            CommandInfo::Unblock => "unblock",
            CommandInfo::Who => "who",
            CommandInfo::Favorite => "favorite",
            CommandInfo::Unfavorite => "unfavorite",
        }
    }

    /// Accepted triggers, primary first
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CommandInfo::Block => &["/block"],
            CommandInfo::Clear => &["/clear"],
            CommandInfo::Hug => &["/hug"],
            CommandInfo::Message => &["/m", "/msg"],
            CommandInfo::Slap => &["/slap"],
            CommandInfo::Unblock => &["/unblock"],
            CommandInfo::Who => &["/w", "/who"],
            CommandInfo::Favorite => &["/favorite"],
            CommandInfo::Unfavorite => &["/unfavorite"],
        }
    }

    /// Alias used when displaying the command
    pub fn primary_alias(&self) -> &'static str {
        self.aliases()[0]
    }

    /// Whether the command expects a trailing nickname
    pub fn requires_argument(&self) -> bool {
        match self {
            CommandInfo::Block
            | CommandInfo::Hug
            | CommandInfo::Message
            | CommandInfo::Slap
            | CommandInfo::Unblock
            | CommandInfo::Favorite
            | CommandInfo::Unfavorite => true,
            CommandInfo::Clear | CommandInfo::Who => false,
        }
    }

    pub fn placeholder_key(&self) -> Option<&'static str> {
        if self.requires_argument() {
            Some(NICKNAME_PLACEHOLDER_KEY)
        } else {
            None
        }
    }

    pub fn description_key(&self) -> &'static str {
        match self {
            CommandInfo::Block => "content.commands.block",
            CommandInfo::Clear => "content.commands.clear",
            CommandInfo::Hug => "content.commands.hug",
            CommandInfo::Message => "content.commands.message",
            CommandInfo::Slap => "content.commands.slap",
            CommandInfo::Unblock => "content.commands.unblock",
            CommandInfo::Who => "content.commands.who",
            CommandInfo::Favorite => "content.commands.favorite",
            CommandInfo::Unfavorite => "content.commands.unfavorite",
        }
    }

    pub fn description(&self, localizer: &dyn Localizer) -> String {
        localizer.localize(self.description_key())
    }

    pub fn placeholder(&self, localizer: &dyn Localizer) -> Option<String> {
        self.placeholder_key().map(|key| localizer.localize(key))
    }
}

impl std::fmt::Display for CommandInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.primary_alias())
    }
}

/// Exact canonical-name lookup. Case must already be folded.
impl std::str::FromStr for CommandInfo {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandInfo::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(CommandInfo::Message.aliases(), &["/m", "/msg"]);
        assert_eq!(CommandInfo::Who.aliases(), &["/w", "/who"]);

        for command in CommandInfo::ALL {
            if matches!(command, CommandInfo::Message | CommandInfo::Who) {
                continue;
            }
            assert_eq!(command.aliases(), &[format!("/{}", command.as_str()).as_str()]);
        }
    }

    #[test]
    fn test_primary_alias() {
        assert_eq!(CommandInfo::Message.primary_alias(), "/m");
        assert_eq!(CommandInfo::Who.primary_alias(), "/w");
        assert_eq!(CommandInfo::Unfavorite.primary_alias(), "/unfavorite");
        assert_eq!(CommandInfo::Slap.to_string(), "/slap");
    }

    #[test]
    fn test_requires_argument() {
        assert!(!CommandInfo::Clear.requires_argument());
        assert!(!CommandInfo::Who.requires_argument());
        assert!(CommandInfo::Clear.placeholder_key().is_none());

        let with_argument: Vec<_> = CommandInfo::ALL
            .into_iter()
            .filter(|c| c.requires_argument())
            .collect();
        assert_eq!(with_argument.len(), 7);
        assert!(with_argument
            .iter()
            .all(|c| c.placeholder_key() == Some(NICKNAME_PLACEHOLDER_KEY)));
    }

    #[test]
    fn test_description_uses_localizer() {
        let localizer = |key: &str| format!("<{}>", key);
        assert_eq!(
            CommandInfo::Hug.description(&localizer),
            "<content.commands.hug>"
        );
        assert_eq!(CommandInfo::Who.placeholder(&localizer), None);
        assert_eq!(
            CommandInfo::Block.placeholder(&localizer),
            Some("<content.input.nickname_placeholder>".to_string())
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("favorite".parse::<CommandInfo>().unwrap(), CommandInfo::Favorite);
        assert_eq!("message".parse::<CommandInfo>().unwrap(), CommandInfo::Message);
        assert!("msg".parse::<CommandInfo>().is_err());
        assert!("Block".parse::<CommandInfo>().is_err());
        assert!("".parse::<CommandInfo>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&CommandInfo::Unblock).unwrap();
        assert_eq!(json, "\"unblock\"");
        let parsed: CommandInfo = serde_json::from_str("\"who\"").unwrap();
        assert_eq!(parsed, CommandInfo::Who);
    }
}
