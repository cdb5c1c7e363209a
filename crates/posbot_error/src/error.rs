//! Top-level error wrapper types.

use crate::{
    CacheError, ConfigError, DatabaseError, DiscordError, FetchError, LookupError, NotFoundError,
};

/// Foundation error enum for the POSbot workspace.
///
/// # Examples
///
/// ```
/// use posbot_error::{PosbotError, NotFoundError};
///
/// let err: PosbotError = NotFoundError::new(60000001).into();
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PosbotErrorKind {
    /// Upstream API fetch failed
    #[from(FetchError)]
    Fetch(FetchError),
    /// Starbase absent from the current listing
    #[from(NotFoundError)]
    NotFound(NotFoundError),
    /// Display-name resolution failed
    #[from(LookupError)]
    Lookup(LookupError),
    /// Cache backend failure
    #[from(CacheError)]
    Cache(CacheError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Discord integration error
    #[from(DiscordError)]
    Discord(DiscordError),
}

/// POSbot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use posbot_error::{PosbotResult, ConfigError};
///
/// fn might_fail() -> PosbotResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("POSbot Error: {}", _0)]
pub struct PosbotError(Box<PosbotErrorKind>);

impl PosbotError {
    /// Create a new error from a kind.
    pub fn new(kind: PosbotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PosbotErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PosbotErrorKind
impl<T> From<T> for PosbotError
where
    T: Into<PosbotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for POSbot operations.
pub type PosbotResult<T> = std::result::Result<T, PosbotError>;
