//! Access token claim set.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::TokenError;
use crate::types::request::GenerationRequest;

/// The claim set embedded in a signed access token.
///
/// Registered claims (`aud`, `sub`, `exp`) follow RFC 7519; the remaining
/// fields are extension claims carried for the surrounding authorization
/// server. The expiry is fixed at construction and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// Audience: the client the token was issued to.
    pub aud: String,

    /// Subject: the authenticated user.
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,

    /// Roles granted to the bearer, in resolution order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorities: Vec<String>,

    /// Opaque binding string linking the token to stored metadata.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sign: String,

    /// Client identifier, duplicated from `aud` for convenience.
    #[serde(rename = "cid", default, skip_serializing_if = "String::is_empty")]
    pub client_id: String,

    /// Username, duplicated from `sub` for convenience.
    #[serde(rename = "user_name", default, skip_serializing_if = "String::is_empty")]
    pub username: String,
}

impl AccessClaims {
    /// Builds the default claim set for a generation request.
    ///
    /// Pure and deterministic: expiry is the request's access creation
    /// instant plus its TTL, audience/subject come straight from the
    /// request, and `authorities` is taken as resolved by the caller.
    #[must_use]
    pub fn from_request(request: &GenerationRequest, authorities: Vec<String>) -> Self {
        Self {
            aud: request.client.client_id.clone(),
            sub: request.user_id.clone(),
            exp: request.timing.expires_at().unix_timestamp(),
            authorities,
            sign: request.timing.sign.clone(),
            client_id: request.client.client_id.clone(),
            username: request.user_id.clone(),
        }
    }

    /// Checks temporal validity against the current instant.
    ///
    /// Independent of signature verification; callers run this after the
    /// signature has been checked.
    ///
    /// # Errors
    /// Returns `Expired` iff the expiry is strictly in the past.
    pub fn validate(&self) -> Result<(), TokenError> {
        self.validate_at(OffsetDateTime::now_utc())
    }

    /// Checks temporal validity against an explicit instant.
    ///
    /// An expiry equal to `now` is still valid.
    ///
    /// # Errors
    /// Returns `Expired` iff the expiry is strictly before `now`.
    pub fn validate_at(&self, now: OffsetDateTime) -> Result<(), TokenError> {
        if self.exp < now.unix_timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;
    use crate::types::client::Client;
    use crate::types::request::{GenerationRequest, TokenTiming};

    fn request_at(created: i64, ttl_secs: i64) -> GenerationRequest {
        let created = OffsetDateTime::from_unix_timestamp(created).unwrap();
        let timing = TokenTiming::new(created, Duration::seconds(ttl_secs)).with_sign("s-1");
        let mut client = Client::new("c1");
        client.user_id = "owner".to_string();
        GenerationRequest::new(client, "u1", timing)
    }

    #[test]
    fn test_default_claim_construction() {
        let request = request_at(1_700_000_000, 3600);
        let claims = AccessClaims::from_request(&request, vec!["ROLE_USER".to_string()]);

        assert_eq!(claims.aud, "c1");
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.exp, 1_700_000_000 + 3600);
        assert_eq!(claims.authorities, vec!["ROLE_USER".to_string()]);
        assert_eq!(claims.sign, "s-1");
        assert_eq!(claims.client_id, "c1");
        assert_eq!(claims.username, "u1");
    }

    #[test]
    fn test_empty_extension_claims_omitted() {
        let mut request = request_at(1_700_000_000, 60);
        request.timing.sign = String::new();
        let claims = AccessClaims::from_request(&request, Vec::new());

        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("authorities"));
        assert!(!json.contains("sign"));
        assert!(json.contains("\"cid\":\"c1\""));
        assert!(json.contains("\"user_name\":\"u1\""));
    }

    #[test]
    fn test_validity_boundary() {
        let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let request = request_at(1_700_000_000 - 3600, 3600);
        let claims = AccessClaims::from_request(&request, Vec::new());

        // Expiry exactly equal to now is still valid
        assert!(claims.validate_at(now).is_ok());
        assert!(claims.validate_at(now - Duration::seconds(1)).is_ok());
        assert!(matches!(
            claims.validate_at(now + Duration::seconds(1)),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_validate_against_wall_clock() {
        let request = request_at(OffsetDateTime::now_utc().unix_timestamp(), 3600);
        let claims = AccessClaims::from_request(&request, Vec::new());
        assert!(claims.validate().is_ok());

        let stale = request_at(OffsetDateTime::now_utc().unix_timestamp() - 7200, 3600);
        let claims = AccessClaims::from_request(&stale, Vec::new());
        assert!(matches!(claims.validate(), Err(TokenError::Expired)));
    }
}
