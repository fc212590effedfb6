//! Common types consumed by the token issuance core.
//!
//! ## Domain Types
//!
//! - [`Client`] - OAuth 2.0 client registration (read-only here)
//! - [`GrantType`] - Supported OAuth grant types
//! - [`GenerationRequest`] - One token issuance request
//! - [`TokenTiming`] - Creation instant, TTL and binding string

pub mod client;
pub mod request;

pub use client::{Client, GrantType};
pub use request::{GenerationRequest, TokenTiming};
