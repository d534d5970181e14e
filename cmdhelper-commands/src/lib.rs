pub mod dispatch;
pub mod error;
pub mod help;
pub mod registry;
pub mod tokenize;
pub mod types;

pub use dispatch::{CommandContext, CommandDispatcher, CommandHandler, Outbound};
pub use error::RegistryError;
pub use help::HelpHandler;
pub use registry::{CommandRegistry, CommandToken, OverridePolicy};
pub use tokenize::tokenize;
pub use types::{
    CommandDef, EmbedField, EmbedMessage, HelpEntry, Invocation, MessageEvent, Outgoing,
};
