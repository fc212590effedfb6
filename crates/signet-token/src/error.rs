//! Token issuance error types.
//!
//! This module defines all error types that can occur while issuing or
//! validating signed access tokens.

/// Boxed error type carried by caller-supplied hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during token issuance and claim validation.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// A caller-supplied hook (authority resolver or claims builder) failed.
    #[error("Hook failed: {source}")]
    Hook {
        /// The underlying error returned by the hook.
        #[source]
        source: BoxError,
    },

    /// The configured key bytes could not be parsed for the algorithm family.
    #[error("Invalid signing key: {message}")]
    KeyParse {
        /// Description of why the key could not be parsed.
        message: String,
    },

    /// The algorithm identifier does not name a supported signing algorithm.
    #[error("Unsupported signing algorithm: {algorithm}")]
    UnsupportedAlgorithm {
        /// The unrecognized algorithm identifier.
        algorithm: String,
    },

    /// The signature computation failed despite valid key material.
    #[error("Failed to sign token: {message}")]
    Signing {
        /// Description of the signing failure.
        message: String,
    },

    /// The claim set has expired.
    #[error("Token expired")]
    Expired,
}

impl TokenError {
    /// Creates a new `Hook` error from the underlying hook failure.
    #[must_use]
    pub fn hook(source: impl Into<BoxError>) -> Self {
        Self::Hook {
            source: source.into(),
        }
    }

    /// Creates a new `KeyParse` error.
    #[must_use]
    pub fn key_parse(message: impl Into<String>) -> Self {
        Self::KeyParse {
            message: message.into(),
        }
    }

    /// Creates a new `UnsupportedAlgorithm` error.
    #[must_use]
    pub fn unsupported_algorithm(algorithm: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm {
            algorithm: algorithm.into(),
        }
    }

    /// Creates a new `Signing` error.
    #[must_use]
    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }

    /// Returns `true` if this error stems from generator configuration
    /// (key material or algorithm selection) rather than from the request.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::KeyParse { .. } | Self::UnsupportedAlgorithm { .. }
        )
    }

    /// Returns `true` if this error was produced by a caller-supplied hook.
    #[must_use]
    pub fn is_hook_error(&self) -> bool {
        matches!(self, Self::Hook { .. })
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidRsaKey(_)
            | ErrorKind::InvalidEcdsaKey
            | ErrorKind::InvalidKeyFormat => Self::key_parse(err.to_string()),
            _ => Self::signing(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_predicates() {
        assert!(TokenError::key_parse("bad pem").is_configuration_error());
        assert!(TokenError::unsupported_algorithm("XX256").is_configuration_error());
        assert!(!TokenError::Expired.is_configuration_error());

        assert!(TokenError::hook("resolver down").is_hook_error());
        assert!(!TokenError::signing("mismatch").is_hook_error());
    }

    #[test]
    fn test_hook_error_preserves_cause() {
        let err = TokenError::hook("directory unavailable");
        assert_eq!(err.to_string(), "Hook failed: directory unavailable");
    }
}
