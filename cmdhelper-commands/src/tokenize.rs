/// Message tokenization: prefix stripping and whitespace splitting.
use crate::types::Invocation;

/// Split a prefixed message into a command word and its arguments.
///
/// The caller is expected to have confirmed that `content` starts with
/// `prefix`; the prefix length is simply stripped. The remainder is trimmed
/// and split on single spaces, so consecutive spaces produce empty-string
/// arguments and quoting is not interpreted. A prefix-only or blank message
/// yields an empty command word and no arguments.
pub fn tokenize(content: &str, prefix: &str) -> Invocation {
    // If the caller broke the contract (content shorter than the prefix, or
    // a non-boundary offset), fall back to an empty body rather than panic.
    let body = content.get(prefix.len()..).unwrap_or("").trim();

    let mut tokens = body.split(' ');
    let command = tokens.next().unwrap_or("").to_string();
    let args: Vec<String> = tokens.map(str::to_string).collect();

    Invocation { command, args }
}
