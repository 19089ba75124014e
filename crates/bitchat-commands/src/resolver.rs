//! Command resolution
//!
//! Input → command:
//! 1. Text not starting with `/` → not a command
//! 2. Alias of a command listed in the current context → that command
//! 3. Exact command name → that command, even when hidden in this context

use crate::catalog::{active_commands, CommandContext};
use crate::command::CommandInfo;

impl CommandInfo {
    /// Resolve raw composer text. Only `/`-prefixed text is considered.
    pub fn from_input(input: &str, context: CommandContext) -> Option<Self> {
        let trimmed = input.trim();
        if !trimmed.starts_with('/') {
            return None;
        }

        Self::from_alias(trimmed, context)
    }

    /// Resolve a command token, with or without its leading `/`.
    pub fn from_alias(input: &str, context: CommandContext) -> Option<Self> {
        let cleaned = input.to_lowercase();
        let cleaned = cleaned.trim();
        let raw_input = cleaned.strip_prefix('/').unwrap_or(cleaned).trim();

        active_commands(context)
            .into_iter()
            .find(|command| {
                command
                    .aliases()
                    .iter()
                    .any(|alias| alias.replace('/', "").to_lowercase() == raw_input)
            })
            .or_else(|| raw_input.parse().ok())
    }
}

/// Resolve `input` for the given context flags.
pub fn resolve(input: &str, is_geo_public: bool, is_geo_dm: bool) -> Option<CommandInfo> {
    CommandInfo::from_input(input, CommandContext::new(is_geo_public, is_geo_dm))
}

/// Resolver bound to the conversation the composer is in
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandResolver {
    context: CommandContext,
}

impl CommandResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: CommandContext) -> Self {
        Self { context }
    }

    pub fn set_context(&mut self, context: CommandContext) {
        self.context = context;
    }

    pub fn context(&self) -> CommandContext {
        self.context
    }

    pub fn resolve(&self, input: &str) -> Option<CommandInfo> {
        let resolved = CommandInfo::from_input(input, self.context);
        tracing::trace!(input = %input, command = ?resolved, "Resolved command input");
        resolved
    }
}
