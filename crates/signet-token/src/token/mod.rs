//! Token issuance core.
//!
//! This module provides:
//!
//! - Access token claim construction and temporal validation
//! - Algorithm selection resolved at configuration time
//! - Signed token generation with pluggable hooks
//! - Refresh token derivation

pub mod algorithm;
pub mod claims;
pub mod generator;
pub mod hooks;

pub use algorithm::{AlgorithmFamily, SigningAlgorithm};
pub use claims::AccessClaims;
pub use generator::{IssuedTokens, TokenGenerator, verify_claims};
pub use hooks::{AuthorityResolver, ClaimsBuilder};
