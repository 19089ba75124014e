//! Command menu suggestions while the user is typing

use crate::catalog::{active_commands, CommandContext};
use crate::command::CommandInfo;

/// Listed commands with an alias starting with `draft`.
///
/// Only a bare `/token` draft produces suggestions; once the user types a
/// space the menu closes.
pub fn suggest(draft: &str, context: CommandContext) -> Vec<CommandInfo> {
    let draft = draft.trim_start().to_lowercase();
    if !draft.starts_with('/') || draft.contains(char::is_whitespace) {
        return Vec::new();
    }

    active_commands(context)
        .into_iter()
        .filter(|command| {
            command
                .aliases()
                .iter()
                .any(|alias| alias.to_lowercase().starts_with(&draft))
        })
        .collect()
}
