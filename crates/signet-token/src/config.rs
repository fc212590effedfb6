//! Token signing configuration.
//!
//! Declarative configuration for the generator, meant to be embedded in a
//! server's configuration tree and bridged into a [`TokenGenerator`] at
//! startup. Algorithm names are resolved here, so a misconfigured
//! algorithm fails when the configuration is loaded rather than on the
//! first issuance call.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::token::algorithm::SigningAlgorithm;
use crate::token::generator::TokenGenerator;

/// Token signing configuration.
///
/// # Example (TOML)
///
/// ```toml
/// [signing]
/// algorithm = "ES384"
/// key_id = "key-2024"
/// key_file = "/etc/signet/signing-key.pem"
/// access_token_ttl = "1h"
/// refresh_token_ttl = "90d"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SigningConfig {
    /// JOSE signing algorithm name, e.g. "RS256", "ES384", "EdDSA".
    pub algorithm: String,

    /// Key identifier placed in the token header for key rotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// Inline key material: PEM for asymmetric algorithms, the secret
    /// itself for HMAC. Takes precedence over `key_file`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Path to a file holding the key material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,

    /// Default access token lifetime.
    #[serde(with = "humantime_serde")]
    pub access_token_ttl: std::time::Duration,

    /// Default refresh token lifetime.
    #[serde(with = "humantime_serde")]
    pub refresh_token_ttl: std::time::Duration,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            algorithm: "RS256".to_string(),
            key_id: None,
            key: None,
            key_file: None,
            access_token_ttl: std::time::Duration::from_secs(3600),
            refresh_token_ttl: std::time::Duration::from_secs(90 * 24 * 3600),
        }
    }
}

impl SigningConfig {
    /// Builds a generator from this configuration.
    ///
    /// # Errors
    ///
    /// - `UnsupportedAlgorithm` when the algorithm name is unknown
    /// - `KeyParse` when no key is configured or `key_file` is unreadable
    pub fn build_generator(&self) -> Result<TokenGenerator, TokenError> {
        let algorithm = SigningAlgorithm::from_name(&self.algorithm)?;

        let key = if let Some(inline) = &self.key {
            inline.clone().into_bytes()
        } else if let Some(path) = &self.key_file {
            std::fs::read(path).map_err(|e| {
                TokenError::key_parse(format!("cannot read {}: {e}", path.display()))
            })?
        } else {
            return Err(TokenError::key_parse("no signing key configured"));
        };

        Ok(TokenGenerator::new(self.key_id.clone(), key, algorithm))
    }

    /// Default access token TTL as a `time::Duration`, for building
    /// [`TokenTiming`](crate::types::request::TokenTiming) descriptors.
    #[must_use]
    pub fn access_ttl(&self) -> time::Duration {
        time::Duration::try_from(self.access_token_ttl).unwrap_or(time::Duration::MAX)
    }

    /// Default refresh token TTL as a `time::Duration`.
    #[must_use]
    pub fn refresh_ttl(&self) -> time::Duration {
        time::Duration::try_from(self.refresh_token_ttl).unwrap_or(time::Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SigningConfig::default();
        assert_eq!(config.algorithm, "RS256");
        assert!(config.key_id.is_none());
        assert_eq!(config.access_ttl(), time::Duration::hours(1));
        assert_eq!(config.refresh_ttl(), time::Duration::days(90));
    }

    #[test]
    fn test_deserialize_with_humantime_lifetimes() {
        let config: SigningConfig = serde_json::from_value(json!({
            "algorithm": "HS256",
            "key": "shared-secret",
            "access_token_ttl": "30m",
            "refresh_token_ttl": "7d",
        }))
        .unwrap();

        assert_eq!(config.access_ttl(), time::Duration::minutes(30));
        assert_eq!(config.refresh_ttl(), time::Duration::days(7));

        let generator = config.build_generator().unwrap();
        assert_eq!(generator.algorithm(), SigningAlgorithm::HS256);
    }

    #[test]
    fn test_unknown_algorithm_rejected_at_load_time() {
        let config = SigningConfig {
            algorithm: "XS256".to_string(),
            key: Some("secret".to_string()),
            ..SigningConfig::default()
        };
        let err = config.build_generator().unwrap_err();
        assert!(matches!(err, TokenError::UnsupportedAlgorithm { .. }));
    }

    #[test]
    fn test_missing_key_rejected() {
        let config = SigningConfig {
            algorithm: "HS256".to_string(),
            ..SigningConfig::default()
        };
        let err = config.build_generator().unwrap_err();
        assert!(matches!(err, TokenError::KeyParse { .. }));
    }
}
