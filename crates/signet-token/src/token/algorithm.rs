//! Signing algorithm selection.
//!
//! The algorithm identifier is resolved once, when the generator is
//! configured, into a closed [`SigningAlgorithm`] variant. A typo in the
//! identifier therefore fails at configuration time instead of silently
//! falling through to "unsupported" on the first issuance call.

use std::fmt;

use jsonwebtoken::Algorithm;

use crate::error::TokenError;

/// Algorithm families sharing a key-encoding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// HMAC with a raw symmetric secret.
    Hmac,
    /// RSA PKCS#1 v1.5 with a PEM-encoded private key.
    Rsa,
    /// RSA-PSS with a PEM-encoded private key.
    RsaPss,
    /// ECDSA with a PEM-encoded private key.
    EllipticCurve,
    /// EdDSA (Ed25519) with a PEM-encoded private key.
    EdDsa,
}

/// Supported JOSE signing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum SigningAlgorithm {
    /// HMAC with SHA-256.
    HS256,
    /// HMAC with SHA-384.
    HS384,
    /// HMAC with SHA-512.
    HS512,
    /// RSA PKCS#1 v1.5 with SHA-256.
    RS256,
    /// RSA PKCS#1 v1.5 with SHA-384.
    RS384,
    /// RSA PKCS#1 v1.5 with SHA-512.
    RS512,
    /// RSA-PSS with SHA-256.
    PS256,
    /// RSA-PSS with SHA-384.
    PS384,
    /// RSA-PSS with SHA-512.
    PS512,
    /// ECDSA with P-256 and SHA-256.
    ES256,
    /// ECDSA with P-384 and SHA-384.
    ES384,
    /// Ed25519 signature.
    EdDSA,
}

impl SigningAlgorithm {
    /// Resolves a JOSE algorithm name into a supported algorithm.
    ///
    /// # Errors
    /// Returns `UnsupportedAlgorithm` for any name outside the closed set,
    /// so misconfiguration surfaces before the first token is issued.
    pub fn from_name(name: &str) -> Result<Self, TokenError> {
        match name {
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            "RS256" => Ok(Self::RS256),
            "RS384" => Ok(Self::RS384),
            "RS512" => Ok(Self::RS512),
            "PS256" => Ok(Self::PS256),
            "PS384" => Ok(Self::PS384),
            "PS512" => Ok(Self::PS512),
            "ES256" => Ok(Self::ES256),
            "ES384" => Ok(Self::ES384),
            "EdDSA" => Ok(Self::EdDSA),
            other => Err(TokenError::unsupported_algorithm(other)),
        }
    }

    /// Returns the family this algorithm belongs to.
    #[must_use]
    pub fn family(&self) -> AlgorithmFamily {
        match self {
            Self::HS256 | Self::HS384 | Self::HS512 => AlgorithmFamily::Hmac,
            Self::RS256 | Self::RS384 | Self::RS512 => AlgorithmFamily::Rsa,
            Self::PS256 | Self::PS384 | Self::PS512 => AlgorithmFamily::RsaPss,
            Self::ES256 | Self::ES384 => AlgorithmFamily::EllipticCurve,
            Self::EdDSA => AlgorithmFamily::EdDsa,
        }
    }

    /// Converts to the `jsonwebtoken` Algorithm type.
    #[must_use]
    pub fn to_jwt_algorithm(self) -> Algorithm {
        match self {
            Self::HS256 => Algorithm::HS256,
            Self::HS384 => Algorithm::HS384,
            Self::HS512 => Algorithm::HS512,
            Self::RS256 => Algorithm::RS256,
            Self::RS384 => Algorithm::RS384,
            Self::RS512 => Algorithm::RS512,
            Self::PS256 => Algorithm::PS256,
            Self::PS384 => Algorithm::PS384,
            Self::PS512 => Algorithm::PS512,
            Self::ES256 => Algorithm::ES256,
            Self::ES384 => Algorithm::ES384,
            Self::EdDSA => Algorithm::EdDSA,
        }
    }

    /// Returns the algorithm name as used in JWT headers.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
            Self::RS256 => "RS256",
            Self::RS384 => "RS384",
            Self::RS512 => "RS512",
            Self::PS256 => "PS256",
            Self::PS384 => "PS384",
            Self::PS512 => "PS512",
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
            Self::EdDSA => "EdDSA",
        }
    }

    /// Returns `true` if the key material is a symmetric secret.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.family() == AlgorithmFamily::Hmac
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for name in [
            "HS256", "HS384", "HS512", "RS256", "RS384", "RS512", "PS256", "PS384", "PS512",
            "ES256", "ES384", "EdDSA",
        ] {
            let alg = SigningAlgorithm::from_name(name).unwrap();
            assert_eq!(alg.as_str(), name);
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        let err = SigningAlgorithm::from_name("XX999").unwrap_err();
        assert!(matches!(
            err,
            TokenError::UnsupportedAlgorithm { ref algorithm } if algorithm == "XX999"
        ));

        // Case matters in JOSE names
        assert!(SigningAlgorithm::from_name("hs256").is_err());
        assert!(SigningAlgorithm::from_name("").is_err());
    }

    #[test]
    fn test_families() {
        assert_eq!(SigningAlgorithm::HS512.family(), AlgorithmFamily::Hmac);
        assert_eq!(SigningAlgorithm::RS384.family(), AlgorithmFamily::Rsa);
        assert_eq!(SigningAlgorithm::PS256.family(), AlgorithmFamily::RsaPss);
        assert_eq!(
            SigningAlgorithm::ES384.family(),
            AlgorithmFamily::EllipticCurve
        );
        assert_eq!(SigningAlgorithm::EdDSA.family(), AlgorithmFamily::EdDsa);

        assert!(SigningAlgorithm::HS256.is_symmetric());
        assert!(!SigningAlgorithm::EdDSA.is_symmetric());
    }
}
