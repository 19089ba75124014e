//! Command catalog
//!
//! Which commands are listed depends on where the user is chatting:
//! ```text
//! mesh / private chat   → mandatory + optional
//! geo public / geo DM   → mandatory only
//! ```

use serde::{Deserialize, Serialize};

use crate::command::CommandInfo;

const MANDATORY: [CommandInfo; 7] = [
    CommandInfo::Block,
    CommandInfo::Clear,
    CommandInfo::Hug,
    CommandInfo::Message,
    CommandInfo::Slap,
    CommandInfo::Unblock,
    CommandInfo::Who,
];

const OPTIONAL: [CommandInfo; 2] = [CommandInfo::Favorite, CommandInfo::Unfavorite];

/// Conversation context the command list is computed for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandContext {
    /// Location-scoped public channel
    pub is_geo_public: bool,
    /// Location-scoped direct message
    pub is_geo_dm: bool,
}

impl CommandContext {
    pub fn new(is_geo_public: bool, is_geo_dm: bool) -> Self {
        Self {
            is_geo_public,
            is_geo_dm,
        }
    }

    pub fn includes_optional(&self) -> bool {
        !(self.is_geo_public || self.is_geo_dm)
    }
}

/// Static facts about a single command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub command: CommandInfo,
    pub aliases: &'static [&'static str],
    pub requires_argument: bool,
    pub description_key: &'static str,
    pub placeholder_key: Option<&'static str>,
}

impl CommandDescriptor {
    pub fn primary_alias(&self) -> &'static str {
        self.aliases[0]
    }
}

/// Commands available for listing, in display order.
pub fn active_commands(context: CommandContext) -> Vec<CommandInfo> {
    let mut commands = MANDATORY.to_vec();
    if context.includes_optional() {
        commands.extend(OPTIONAL);
    }
    commands
}

pub fn descriptor(command: CommandInfo) -> CommandDescriptor {
    CommandDescriptor {
        command,
        aliases: command.aliases(),
        requires_argument: command.requires_argument(),
        description_key: command.description_key(),
        placeholder_key: command.placeholder_key(),
    }
}

pub fn descriptors(context: CommandContext) -> Vec<CommandDescriptor> {
    active_commands(context).into_iter().map(descriptor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_contexts() -> [CommandContext; 4] {
        [
            CommandContext::new(false, false),
            CommandContext::new(true, false),
            CommandContext::new(false, true),
            CommandContext::new(true, true),
        ]
    }

    #[test]
    fn test_active_commands_outside_geo() {
        let commands = active_commands(CommandContext::default());
        assert_eq!(commands.len(), 9);
        assert_eq!(commands, CommandInfo::ALL.to_vec());
        assert_eq!(
            &commands[7..],
            &[CommandInfo::Favorite, CommandInfo::Unfavorite]
        );
    }

    #[test]
    fn test_active_commands_in_geo() {
        for context in all_contexts().into_iter().skip(1) {
            let commands = active_commands(context);
            assert_eq!(commands.len(), 7);
            assert_eq!(commands, MANDATORY.to_vec());
            assert!(!commands.contains(&CommandInfo::Favorite));
            assert!(!commands.contains(&CommandInfo::Unfavorite));
        }
    }

    #[test]
    fn test_aliases_unique_per_context() {
        for context in all_contexts() {
            let mut seen = HashSet::new();
            for command in active_commands(context) {
                for alias in command.aliases() {
                    let key = alias.replace('/', "").to_lowercase();
                    assert!(seen.insert(key), "duplicate alias {}", alias);
                }
            }
        }
    }

    #[test]
    fn test_descriptors() {
        let listed = descriptors(CommandContext::new(false, true));
        assert_eq!(listed.len(), 7);

        let message = &listed[3];
        assert_eq!(message.command, CommandInfo::Message);
        assert_eq!(message.primary_alias(), "/m");
        assert!(message.requires_argument);
        assert_eq!(message.description_key, "content.commands.message");

        let who = descriptor(CommandInfo::Who);
        assert!(!who.requires_argument);
        assert!(who.placeholder_key.is_none());
    }
}
