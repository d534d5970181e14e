/// Core data types shared by the registry, tokenizer and dispatcher.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::dispatch::CommandHandler;

// ---------------------------------------------------------------------------
// Inbound event
// ---------------------------------------------------------------------------

/// An inbound message event as delivered by a chat client.
#[derive(Debug, Clone)]
pub struct MessageEvent {
    /// Identity of the channel the message was posted in.
    pub channel_id: String,
    /// Identity of the sender.
    pub sender_id: String,
    /// Display name of the sender, for logging.
    pub sender_name: String,
    /// Whether the sender is an automated (bot) account.
    pub sender_is_bot: bool,
    /// Raw message text.
    pub content: String,
}

// ---------------------------------------------------------------------------
// Handler record
// ---------------------------------------------------------------------------

/// A registered command: the invocable action plus its display metadata.
///
/// The record is immutable once registered; re-registering a name replaces
/// the record wholesale. Cloning shares the underlying handler, which is how
/// one handler is registered under several alias names.
#[derive(Clone)]
pub struct CommandDef {
    pub handler: Arc<dyn CommandHandler>,
    pub usage: String,
    pub description: String,
}

impl CommandDef {
    pub fn new(
        handler: impl CommandHandler + 'static,
        usage: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            handler: Arc::new(handler),
            usage: usage.into(),
            description: description.into(),
        }
    }
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("usage", &self.usage)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Parsed invocation
// ---------------------------------------------------------------------------

/// The tokenized form of a prefixed message: command word plus arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// First token after the prefix. Empty when the message was prefix-only
    /// or blank; that is a valid state, not an error.
    pub command: String,
    /// Remaining tokens. Consecutive spaces in the source yield empty
    /// strings here.
    pub args: Vec<String>,
}

impl Invocation {
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }
}

// ---------------------------------------------------------------------------
// Help catalog
// ---------------------------------------------------------------------------

/// One row of the help listing: the prefixed command name plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpEntry {
    /// Prefix + command name, e.g. `!say`.
    pub name: String,
    pub usage: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Outbound body
// ---------------------------------------------------------------------------

/// An outbound message body: plain text or a structured embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Text(String),
    Embed(EmbedMessage),
}

/// Platform-neutral embed: a title and a list of name/value fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedMessage {
    pub title: String,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_entry_serialization_roundtrip() {
        let entry = HelpEntry {
            name: "!say".to_string(),
            usage: "!say <text>".to_string(),
            description: "Say something".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: HelpEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }

    #[test]
    fn arg_count_matches_args() {
        let invocation = Invocation {
            command: "say".to_string(),
            args: vec!["hello".to_string(), "world".to_string()],
        };
        assert_eq!(invocation.arg_count(), 2);
        assert_eq!(Invocation::default().arg_count(), 0);
    }
}
