use thiserror::Error;

/// Errors surfaced by command registration.
///
/// Both are local validation failures returned synchronously to the caller;
/// neither is retried. Dispatch-time misses are not errors: an unknown
/// command routes to the default handler instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Registration was attempted with an empty command name.
    #[error("command name is empty")]
    EmptyCommandName,

    /// The name is already taken and the caller did not ask to replace it.
    #[error("command `{0}` is already registered")]
    CommandAlreadyExists(String),
}
