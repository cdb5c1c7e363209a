//! Cache backend error types.

/// Kinds of cache backend errors.
///
/// A miss is not represented here: `get` returns `Ok(None)` for both absent
/// and expired entries. These kinds cover genuine backend failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CacheErrorKind {
    /// The backing store rejected the operation
    #[display("Backend failure: {}", _0)]
    Backend(String),
    /// Value could not be serialized for storage
    #[display("Failed to encode value: {}", _0)]
    Encode(String),
    /// Stored blob could not be deserialized
    #[display("Failed to decode cached value: {}", _0)]
    Decode(String),
}

/// Cache error with location tracking.
///
/// Write-side cache errors are best-effort in POSbot: callers log them and
/// degrade to always-fetch. The notification store treats read-side errors
/// as "should notify" (fail open).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cache Error: {} at line {} in {}", kind, line, file)]
pub struct CacheError {
    /// The kind of error that occurred
    pub kind: CacheErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CacheError {
    /// Create a new cache error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CacheErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
