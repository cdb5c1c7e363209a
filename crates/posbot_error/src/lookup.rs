//! Display-name lookup error types.

/// Display-name resolution failure.
///
/// Raised when a type, location or owner ID cannot be resolved to a display
/// name. Composite construction propagates fuel-row name failures (the
/// composite is not cached); location and owner failures degrade to a
/// placeholder name instead.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Lookup Error: no name for {} {} at line {} in {}", subject, id, line, file)]
pub struct LookupError {
    /// What kind of identifier was being resolved (e.g. "type", "corporation")
    pub subject: &'static str,
    /// The identifier that could not be resolved
    pub id: i64,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl LookupError {
    /// Create a new LookupError at the current location.
    #[track_caller]
    pub fn new(subject: &'static str, id: i64) -> Self {
        let location = std::panic::Location::caller();
        Self {
            subject,
            id,
            line: location.line(),
            file: location.file(),
        }
    }
}
