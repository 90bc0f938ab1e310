//! Sensitive data marker for automatic redaction
//!
//! Recorded snapshots carry whatever headers the endpoint was probed with,
//! including bearer tokens and API keys. The `Sensitive<T>` wrapper ensures
//! those values are never accidentally logged or rendered into alert text.

use std::fmt;

/// Marker printed in place of a sensitive value
pub const REDACTED: &str = "***REDACTED***";

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use driftwatch_core_types::Sensitive;
///
/// let token = Sensitive::new("Bearer eyJhbGciOi...");
/// println!("{:?}", token); // Prints: ***REDACTED***
/// println!("{}", token);   // Prints: ***REDACTED***
///
/// // Access the actual value when needed
/// assert_eq!(token.expose(), &"Bearer eyJhbGciOi...");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Use this method sparingly and only when the sensitive data
    /// must be accessed (e.g., to replay an authenticated probe).
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
