//! Not-found error types.

/// Requested starbase is absent from the current listing.
///
/// Terminal for the request that raised it; the listing itself remains
/// cached and valid.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Starbase {} not found in listing at line {} in {}", starbase_id, line, file)]
pub struct NotFoundError {
    /// The starbase ID that was requested
    pub starbase_id: i64,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl NotFoundError {
    /// Create a new NotFoundError at the current location.
    #[track_caller]
    pub fn new(starbase_id: i64) -> Self {
        let location = std::panic::Location::caller();
        Self {
            starbase_id,
            line: location.line(),
            file: location.file(),
        }
    }
}
