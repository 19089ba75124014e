//! Command error types

use thiserror::Error;

use crate::command::CommandInfo;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command {command} requires a nickname")]
    MissingArgument { command: CommandInfo },
}
