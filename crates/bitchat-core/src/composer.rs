//! Chat composer state
//!
//! Owns the command resolver and the localized labels the UI shows next to
//! each command. The conversation context changes when the user switches
//! channels, so it lives behind a lock and every method takes `&self`.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use bitchat_commands::{
    active_commands, suggest, ChatInput, CommandContext, CommandInfo, CommandResolver,
    InputResolution, Localizer,
};

use crate::config::Config;
use crate::Result;

/// One row of the command menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub command: CommandInfo,
    pub alias: &'static str,
    pub placeholder: Option<String>,
    pub description: String,
}

pub struct Composer {
    resolver: Arc<RwLock<CommandResolver>>,
    localizer: Arc<dyn Localizer>,
}

impl Composer {
    pub fn new(context: CommandContext, localizer: Arc<dyn Localizer>) -> Self {
        Self {
            resolver: Arc::new(RwLock::new(CommandResolver::with_context(context))),
            localizer,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let localizer = config.localizer()?;
        Ok(Self::new(config.context(), Arc::new(localizer)))
    }

    pub fn context(&self) -> CommandContext {
        self.resolver.read().context()
    }

    pub fn set_context(&self, context: CommandContext) {
        self.resolver.write().set_context(context);
        tracing::debug!(
            is_geo_public = context.is_geo_public,
            is_geo_dm = context.is_geo_dm,
            "Switched command context"
        );
    }

    /// Classify submitted text. Commands missing their nickname are rejected.
    pub fn submit(&self, text: &str) -> Result<InputResolution> {
        let resolution = ChatInput::parse(text, self.context());

        if let InputResolution::Command(parsed) = &resolution {
            parsed.validate()?;
            tracing::debug!(
                command = %parsed.command,
                has_argument = parsed.argument.is_some(),
                "Resolved command"
            );
        }

        Ok(resolution)
    }

    /// Menu rows for the current draft
    pub fn menu(&self, draft: &str) -> Vec<MenuEntry> {
        suggest(draft, self.context())
            .into_iter()
            .map(|command| self.entry(command))
            .collect()
    }

    /// Every listed command, for help output
    pub fn help(&self) -> Vec<MenuEntry> {
        active_commands(self.context())
            .into_iter()
            .map(|command| self.entry(command))
            .collect()
    }

    fn entry(&self, command: CommandInfo) -> MenuEntry {
        MenuEntry {
            command,
            alias: command.primary_alias(),
            placeholder: command.placeholder(self.localizer.as_ref()),
            description: command.description(self.localizer.as_ref()),
        }
    }
}

impl Clone for Composer {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            localizer: Arc::clone(&self.localizer),
        }
    }
}
