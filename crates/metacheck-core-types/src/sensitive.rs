//! Redaction wrapper for values that must never reach logs
//!
//! Connection targets routinely embed credentials (`user:password@host`), so
//! the CLI and store carry them as `Sensitive<String>`.

use std::fmt;

/// Wrapper that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use metacheck_core_types::Sensitive;
///
/// let url = Sensitive::new("sqlite://user:pw@/tmp/snapshot.db");
/// assert_eq!(format!("{}", url), "***REDACTED***");
/// assert_eq!(url.expose(), &"sqlite://user:pw@/tmp/snapshot.db");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    ///
    /// Only call this at the point where the value is actually consumed,
    /// e.g. when opening the database.
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}
