//! Sensitive data marker for automatic redaction
//!
//! Medicine names and symptom descriptions are health data. Wrapping them in
//! `Sensitive<T>` keeps them out of `Debug`/`Display` output, and therefore
//! out of structured logs.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use mediq_core_types::Sensitive;
///
/// let symptoms = Sensitive::new("chest pain since morning");
/// assert_eq!(format!("{:?}", symptoms), "***REDACTED***");
/// assert_eq!(symptoms.expose(), &"chest pain since morning");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    ///
    /// Only the transport payload builder should need this.
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

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: PartialEq> PartialEq for Sensitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
