//! bitchat Core
//!
//! Configuration, logging and the composer façade over the command crate.

mod composer;
mod config;
mod error;

pub use composer::{Composer, MenuEntry};
pub use config::Config;
pub use error::CoreError;

// Re-export command components
pub use bitchat_commands::{
    active_commands, descriptor, descriptors, resolve, suggest, ChatInput, CommandContext,
    CommandDescriptor, CommandError, CommandInfo, CommandResolver, InputResolution, Localizer,
    ParsedCommand, StringTable,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. `RUST_LOG` takes precedence over `default_filter`.
pub fn init_logging(default_filter: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_filter)?,
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| CoreError::Config(e.to_string()))
}

pub(crate) fn parse_filter(filter: &str) -> Result<tracing_subscriber::EnvFilter> {
    tracing_subscriber::EnvFilter::try_new(filter).map_err(|e| CoreError::Config(e.to_string()))
}
