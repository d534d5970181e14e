/// Command registry: a guarded mapping from command name to handler record.
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::RegistryError;
use crate::types::CommandDef;

// ---------------------------------------------------------------------------
// Override policy
// ---------------------------------------------------------------------------

/// What `register` does when the name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverridePolicy {
    /// Fail with [`RegistryError::CommandAlreadyExists`].
    Reject,
    /// Replace the existing record wholesale.
    Replace,
}

// ---------------------------------------------------------------------------
// Deregistration token
// ---------------------------------------------------------------------------

/// Opaque capability returned by a successful registration.
///
/// Consuming it via [`CommandRegistry::deregister`] removes the command it
/// was issued for, regardless of what has happened to other entries since.
/// The token is bound to the name: if the record under that name was
/// replaced by an override in the meantime, the token removes the
/// replacement.
#[derive(Debug)]
pub struct CommandToken {
    name: String,
}

impl CommandToken {
    /// The command name this token removes.
    pub fn command(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Thread-safe mapping from command name to [`CommandDef`].
///
/// A name maps to at most one record at any time. Reads and mutations go
/// through an internal lock; records are handed out as `Arc` clones so no
/// guard is ever held while a handler runs.
#[derive(Default, Clone)]
pub struct CommandRegistry {
    commands: Arc<RwLock<HashMap<String, Arc<CommandDef>>>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `def` under `name` and return the token that removes it.
    ///
    /// Fails with `EmptyCommandName` for a blank name, and with
    /// `CommandAlreadyExists` when the name is taken and `policy` is
    /// [`OverridePolicy::Reject`].
    pub async fn register(
        &self,
        name: &str,
        def: CommandDef,
        policy: OverridePolicy,
    ) -> Result<CommandToken, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyCommandName);
        }

        let mut map = self.commands.write().await;
        if policy == OverridePolicy::Reject && map.contains_key(name) {
            return Err(RegistryError::CommandAlreadyExists(name.to_string()));
        }

        map.insert(name.to_string(), Arc::new(def));
        debug!(command = %name, "registered command");
        Ok(CommandToken {
            name: name.to_string(),
        })
    }

    /// Register a batch of commands atomically.
    ///
    /// The write guard is held while every entry is validated, so the batch
    /// is all-or-nothing: the first conflict is returned and nothing at all
    /// is inserted. On success, one token per name.
    pub async fn register_batch(
        &self,
        defs: HashMap<String, CommandDef>,
        policy: OverridePolicy,
    ) -> Result<HashMap<String, CommandToken>, RegistryError> {
        let mut map = self.commands.write().await;

        for name in defs.keys() {
            if name.is_empty() {
                return Err(RegistryError::EmptyCommandName);
            }
            if policy == OverridePolicy::Reject && map.contains_key(name) {
                return Err(RegistryError::CommandAlreadyExists(name.clone()));
            }
        }

        let mut tokens = HashMap::with_capacity(defs.len());
        for (name, def) in defs {
            map.insert(name.clone(), Arc::new(def));
            debug!(command = %name, "registered command");
            tokens.insert(name.clone(), CommandToken { name });
        }
        Ok(tokens)
    }

    /// Consume a token, removing the command it was issued for.
    pub async fn deregister(&self, token: CommandToken) {
        self.remove(&token.name).await;
    }

    /// Remove a command by name. Idempotent: no error if already absent.
    pub async fn remove(&self, name: &str) {
        if self.commands.write().await.remove(name).is_some() {
            debug!(command = %name, "deregistered command");
        }
    }

    /// Look up a command record.
    ///
    /// A miss is not an error; the dispatcher treats it as "route to the
    /// default handler".
    pub async fn lookup(&self, name: &str) -> Option<Arc<CommandDef>> {
        self.commands.read().await.get(name).cloned()
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.commands.read().await.contains_key(name)
    }

    pub async fn len(&self) -> usize {
        self.commands.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.commands.read().await.is_empty()
    }

    /// Snapshot of all entries, in no particular order.
    pub async fn snapshot(&self) -> Vec<(String, Arc<CommandDef>)> {
        self.commands
            .read()
            .await
            .iter()
            .map(|(name, def)| (name.clone(), def.clone()))
            .collect()
    }
}
