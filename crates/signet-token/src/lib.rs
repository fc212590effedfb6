//! # signet-token
//!
//! Access-token issuance core for an OAuth 2.0-style authorization server.
//!
//! This crate provides:
//! - Signed access token generation across HMAC, RSA, RSA-PSS, ECDSA and
//!   EdDSA algorithm families
//! - Claim-set construction with pluggable authority and claims hooks
//! - Refresh token derivation from freshly issued access tokens
//! - Declarative signing configuration
//!
//! ## Overview
//!
//! A [`TokenGenerator`] is configured once with key material, an algorithm
//! and optional hooks, then shared freely; [`TokenGenerator::issue`]
//! converts a [`GenerationRequest`] into a compact signed token and, on
//! request, a companion refresh token. The grant flows, client registry
//! and token storage that surround the generator live in the server built
//! on top of this crate.
//!
//! ## Modules
//!
//! - [`config`] - Declarative signing configuration
//! - [`token`] - Claim set, algorithm selection, generator and hooks
//! - [`types`] - Client registration and request types
//!
//! ## Example
//!
//! ```
//! use time::{Duration, OffsetDateTime};
//! use signet_token::{
//!     Client, GenerationRequest, SigningAlgorithm, TokenGenerator, TokenTiming,
//! };
//!
//! let generator = TokenGenerator::new(
//!     None,
//!     b"shared-secret".to_vec(),
//!     SigningAlgorithm::HS256,
//! );
//!
//! let timing = TokenTiming::new(OffsetDateTime::now_utc(), Duration::hours(1));
//! let request = GenerationRequest::new(Client::new("c1"), "u1", timing);
//!
//! let issued = generator.issue(&request, true)?;
//! assert!(issued.refresh_token.is_some());
//! # Ok::<(), signet_token::TokenError>(())
//! ```

pub mod config;
pub mod error;
pub mod token;
pub mod types;

pub use config::SigningConfig;
pub use error::{BoxError, TokenError};
pub use token::{
    AccessClaims, AlgorithmFamily, AuthorityResolver, ClaimsBuilder, IssuedTokens,
    SigningAlgorithm, TokenGenerator, verify_claims,
};
pub use types::{Client, GenerationRequest, GrantType, TokenTiming};

/// Type alias for token issuance results.
pub type TokenResult<T> = Result<T, TokenError>;
