//! Token generation request types.
//!
//! A [`GenerationRequest`] aggregates everything the generator needs to
//! issue one access token: the client registration, the subject, and the
//! timing descriptor for the token being created. The generator treats the
//! whole request as read-only.

use time::{Duration, OffsetDateTime};

use crate::types::client::Client;

/// Timing descriptor for the access token being issued.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTiming {
    /// Instant the access token is created at.
    pub access_created_at: OffsetDateTime,

    /// Access token time-to-live, added to `access_created_at` to form
    /// the expiry claim.
    pub access_ttl: Duration,

    /// Opaque binding string copied into the claims for anti-tampering
    /// linkage with stored token metadata.
    pub sign: String,
}

impl TokenTiming {
    /// Creates a timing descriptor with an empty binding string.
    #[must_use]
    pub fn new(access_created_at: OffsetDateTime, access_ttl: Duration) -> Self {
        Self {
            access_created_at,
            access_ttl,
            sign: String::new(),
        }
    }

    /// Sets the opaque binding string.
    #[must_use]
    pub fn with_sign(mut self, sign: impl Into<String>) -> Self {
        self.sign = sign.into();
        self
    }

    /// Returns the expiry instant for this descriptor.
    #[must_use]
    pub fn expires_at(&self) -> OffsetDateTime {
        self.access_created_at + self.access_ttl
    }
}

/// A request to issue an access token.
///
/// Owned by the caller and never mutated by the generator.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The client the token is issued to.
    pub client: Client,

    /// Identifier of the authenticated user (subject claim).
    pub user_id: String,

    /// Timing for the token being issued.
    pub timing: TokenTiming,
}

impl GenerationRequest {
    /// Creates a new generation request.
    #[must_use]
    pub fn new(client: Client, user_id: impl Into<String>, timing: TokenTiming) -> Self {
        Self {
            client,
            user_id: user_id.into(),
            timing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_creation_plus_ttl() {
        let created = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let timing = TokenTiming::new(created, Duration::seconds(3600));
        assert_eq!(
            timing.expires_at().unix_timestamp(),
            1_700_000_000 + 3600
        );
    }
}
