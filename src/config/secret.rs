//! Secret string wrapper for sensitive data.
//!
//! This module provides a wrapper type that prevents accidental logging
//! of sensitive data like passwords and access tokens.

use std::fmt;

/// A wrapper for sensitive strings that redacts the value in Debug/Display
/// output.
///
/// # Example
///
/// ```
/// use bcx_client::config::SecretString;
///
/// let secret = SecretString::new("p@$$w0rd!");
/// assert_eq!(format!("{:?}", secret), "<REDACTED>");
/// assert_eq!(secret.expose(), "p@$$w0rd!");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new `SecretString` from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exposes the underlying secret value.
    ///
    /// Use this method only where the secret is actually needed, such as
    /// when building an authentication header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the secret is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the length of the secret.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts() {
        let secret = SecretString::new("token-123");
        assert_eq!(format!("{secret:?}"), "<REDACTED>");
    }

    #[test]
    fn test_display_redacts() {
        let secret = SecretString::new("token-123");
        assert_eq!(format!("{secret}"), "<REDACTED>");
    }

    #[test]
    fn test_expose_returns_value() {
        let secret = SecretString::new("token-123");
        assert_eq!(secret.expose(), "token-123");
    }

    #[test]
    fn test_is_empty_and_len() {
        assert!(SecretString::new("").is_empty());
        assert_eq!(SecretString::new("abc").len(), 3);
    }

    #[test]
    fn test_eq_compares_contents() {
        assert_eq!(SecretString::new("a"), SecretString::new("a"));
        assert_ne!(SecretString::new("a"), SecretString::new("b"));
    }

    #[test]
    fn test_from_str() {
        let secret: SecretString = "abc".into();
        assert_eq!(secret.expose(), "abc");
    }
}
