//! Upstream fetch error types.

/// Kinds of upstream fetch failures.
///
/// A fetch failure is never retried at this layer; callers decide whether to
/// skip-and-continue (bulk refresh) or surface the failure (command path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FetchErrorKind {
    /// Transport-level failure (connect, TLS, timeout)
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// Upstream returned a non-success HTTP status
    #[display("Unexpected status {}: {}", status, body)]
    Status {
        /// HTTP status code returned by the upstream
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },
    /// Response payload could not be deserialized
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
    /// The API itself declared an error in its payload
    #[display("API error {}: {}", code, message)]
    Api {
        /// API-declared error code
        code: i32,
        /// API-declared error message
        message: String,
    },
}

/// Upstream fetch error with location tracking.
///
/// # Examples
///
/// ```
/// use posbot_error::{FetchError, FetchErrorKind};
///
/// let err = FetchError::new(FetchErrorKind::Decode("unexpected EOF".to_string()));
/// assert!(format!("{}", err).contains("decode"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The kind of error that occurred
    pub kind: FetchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FetchError {
    /// Create a new fetch error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
