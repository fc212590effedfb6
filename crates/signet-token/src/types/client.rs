//! OAuth 2.0 client domain types.
//!
//! The generator only reads from a [`Client`]; registration, persistence
//! and policy enforcement belong to the surrounding authorization server.

use serde::{Deserialize, Serialize};

// =============================================================================
// Grant Type
// =============================================================================

/// OAuth 2.0 grant types.
///
/// Defines the authorization flows a client is allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Authorization Code flow (with PKCE for public clients).
    AuthorizationCode,
    /// Implicit flow (legacy browser-based clients).
    Implicit,
    /// Client Credentials flow (confidential clients only).
    ClientCredentials,
    /// Refresh Token flow.
    RefreshToken,
    /// Resource Owner Password Credentials flow.
    /// WARNING: legacy grant, only for trusted first-party applications.
    Password,
}

impl GrantType {
    /// Returns the OAuth 2.0 grant_type parameter value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::Implicit => "implicit",
            Self::ClientCredentials => "client_credentials",
            Self::RefreshToken => "refresh_token",
            Self::Password => "password",
        }
    }
}

impl std::fmt::Display for GrantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Client
// =============================================================================

/// OAuth 2.0 client registration.
///
/// The issuance core consumes this read-only: only `client_id` flows into
/// the token claims; the remaining fields are read by the grant flows that
/// sit in front of the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique client identifier used in OAuth flows (audience claim).
    pub client_id: String,

    /// Client secret (for confidential clients).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Base domain for redirect URI validation.
    pub domain: String,

    /// Whether this is a public client (no secret).
    pub public: bool,

    /// Identifier of the user that owns this registration.
    pub user_id: String,

    /// Roles granted to tokens issued for this client.
    #[serde(default)]
    pub authorities: Vec<String>,

    /// Access token lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_lifetime: Option<i64>,

    /// Refresh token lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_lifetime: Option<i64>,

    /// OAuth scopes this client is allowed to request.
    /// Empty list means all scopes are allowed.
    #[serde(default)]
    pub scopes: Vec<String>,

    /// OAuth 2.0 grant types this client is allowed to use.
    #[serde(default)]
    pub grant_types: Vec<GrantType>,
}

impl Client {
    /// Creates a minimal client registration with the given identifier.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            domain: String::new(),
            public: false,
            user_id: String::new(),
            authorities: Vec::new(),
            access_token_lifetime: None,
            refresh_token_lifetime: None,
            scopes: Vec::new(),
            grant_types: Vec::new(),
        }
    }
}
