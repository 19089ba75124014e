//! Input resolution for the chat composer
//!
//! 1. Blank input → nothing to send
//! 2. `/command [nickname]` → command mode
//! 3. Anything else, including unknown `/words` → plain message

use serde::{Deserialize, Serialize};

use crate::catalog::CommandContext;
use crate::command::CommandInfo;
use crate::error::CommandError;
use crate::Result;

/// Result of resolving composer input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// Nothing but whitespace
    Empty,
    /// Send as a chat message
    Message(String),
    /// Run a command
    Command(ParsedCommand),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub command: CommandInfo,
    /// Nickname (or other trailing text) after the command token
    pub argument: Option<String>,
}

impl ParsedCommand {
    /// Check that argument-taking commands were given one
    pub fn validate(&self) -> Result<()> {
        if self.command.requires_argument() && self.argument.is_none() {
            return Err(CommandError::MissingArgument {
                command: self.command,
            });
        }
        Ok(())
    }

    /// Canonical text form, e.g. `/m alice`
    pub fn to_text(&self) -> String {
        match &self.argument {
            Some(argument) => format!("{} {}", self.command.primary_alias(), argument),
            None => self.command.primary_alias().to_string(),
        }
    }
}

pub struct ChatInput;

impl ChatInput {
    pub fn parse(input: &str, context: CommandContext) -> InputResolution {
        let input = input.trim();

        if input.is_empty() {
            return InputResolution::Empty;
        }

        if !input.starts_with('/') {
            return InputResolution::Message(input.to_string());
        }

        // `/ who` names the same command as `/who`
        let body = input[1..].trim_start();
        let mut parts = body.splitn(2, char::is_whitespace);
        let token = format!("/{}", parts.next().unwrap_or_default());

        match CommandInfo::from_input(&token, context) {
            Some(command) => InputResolution::Command(ParsedCommand {
                command,
                argument: parts.next().and_then(Self::normalize_argument),
            }),
            None => InputResolution::Message(input.to_string()),
        }
    }

    fn normalize_argument(raw: &str) -> Option<String> {
        let raw = raw.trim();
        let raw = raw.strip_prefix('@').unwrap_or(raw);
        Some(raw.to_string()).filter(|s| !s.is_empty())
    }
}
