//! bitchat slash commands
//!
//! Composer input resolution:
//!   1. `/alias` of a listed command → that command
//!   2. `/name` of any command → that command, even when hidden
//!   3. Anything else → plain message text
//!
//! Commands:
//! - `/block`, `/unblock`, `/hug`, `/slap` — act on a peer
//! - `/m`, `/msg` — private message
//! - `/w`, `/who` — who is around
//! - `/clear` — clear the conversation
//! - `/favorite`, `/unfavorite` — not listed in geo chats

mod catalog;
mod command;
mod error;
mod input;
mod localize;
mod resolver;
mod suggest;

pub use catalog::{active_commands, descriptor, descriptors, CommandContext, CommandDescriptor};
pub use command::{CommandInfo, NICKNAME_PLACEHOLDER_KEY};
pub use error::CommandError;
pub use input::{ChatInput, InputResolution, ParsedCommand};
pub use localize::{Localizer, StringTable};
pub use resolver::{resolve, CommandResolver};
pub use suggest::suggest;

pub type Result<T> = std::result::Result<T, CommandError>;
