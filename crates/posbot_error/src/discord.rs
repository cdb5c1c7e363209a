//! Discord integration error types.

/// Kinds of Discord errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DiscordErrorKind {
    /// Failed to build or start the gateway client
    #[display("Connection failed: {}", _0)]
    ConnectionFailed(String),
    /// Sending a message or embed failed
    #[display("Send failed: {}", _0)]
    SendFailed(String),
    /// The configured guild or channel could not be found
    #[display("Target not found: {}", _0)]
    TargetNotFound(String),
}

/// Discord error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Discord Error: {} at line {} in {}", kind, line, file)]
pub struct DiscordError {
    /// The kind of error that occurred
    pub kind: DiscordErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DiscordError {
    /// Create a new Discord error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
