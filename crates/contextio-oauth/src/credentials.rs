//! Consumer credentials.

use std::fmt;

/// OAuth consumer key/secret pair.
///
/// The key identifies the application and is readable; the secret only
/// participates in signing and is never exposed through an accessor.
/// `Debug` output redacts it.
#[derive(Clone)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    /// Creates a new credential pair.
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Returns the consumer key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_accessor() {
        let credentials = Credentials::new("key123", "secret456");
        assert_eq!(credentials.key(), "key123");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials::new("key123", "secret456");
        let output = format!("{credentials:?}");

        assert!(output.contains("key123"));
        assert!(!output.contains("secret456"));
        assert!(output.contains("[redacted]"));
    }
}
