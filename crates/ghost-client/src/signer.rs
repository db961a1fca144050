//! Short-lived Admin API token signing.
//!
//! Ghost authenticates Admin API calls with an HS256 JWT built from the admin
//! key (`{id}:{secret}`):
//!
//! - header: `alg = HS256`, `typ = JWT`, `kid = {id}`
//! - claims: `iat`, `exp`, `aud = "/admin/"`
//! - key: the hex-decoded `{secret}`
//!
//! A token is minted for every request and never reused.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::GhostError;

/// Lifetime of a signed token.
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(60);

/// Audience claim expected by the Admin API.
pub const ADMIN_AUDIENCE: &str = "/admin/";

/// Admin API key split into its id and secret halves.
///
/// Parsing is the only place the key format is checked; a constructed value is
/// always well formed.
#[derive(Clone)]
pub struct AdminApiKey {
    id: String,
    secret: SecretString,
}

impl AdminApiKey {
    /// Parses a `{id}:{secret}` admin key.
    ///
    /// The string is split on its first colon. Both halves must be non-empty
    /// and the secret must be hex encoded.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError::Configuration`] if the key is malformed.
    pub fn parse(raw: &str) -> Result<Self, GhostError> {
        let (id, secret) = raw.trim().split_once(':').ok_or_else(|| {
            GhostError::Configuration(
                "admin API key must have the form '{id}:{secret}'".to_string(),
            )
        })?;

        if id.is_empty() {
            return Err(GhostError::Configuration(
                "admin API key id is empty".to_string(),
            ));
        }
        if secret.is_empty() {
            return Err(GhostError::Configuration(
                "admin API key secret is empty".to_string(),
            ));
        }
        if hex::decode(secret).is_err() {
            return Err(GhostError::Configuration(
                "admin API key secret is not valid hex".to_string(),
            ));
        }

        Ok(Self {
            id: id.to_string(),
            secret: SecretString::from(secret.to_string()),
        })
    }

    /// The key id, sent as the token's `kid` header.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

// Custom Debug implementation to avoid exposing the secret
impl fmt::Debug for AdminApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminApiKey")
            .field("id", &self.id)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl std::str::FromStr for AdminApiKey {
    type Err = GhostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    iat: u64,
    exp: u64,
    aud: String,
}

/// A signed bearer token with its validity window.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedToken {
    token: String,
    issued_at: u64,
    expires_at: u64,
}

impl SignedToken {
    /// The encoded JWT.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Issued-at, in seconds since the Unix epoch.
    #[must_use]
    pub const fn issued_at(&self) -> u64 {
        self.issued_at
    }

    /// Expiry, in seconds since the Unix epoch.
    #[must_use]
    pub const fn expires_at(&self) -> u64 {
        self.expires_at
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Ghost {}", self.token)
    }
}

impl fmt::Debug for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedToken")
            .field("token", &"[REDACTED]")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Mints Admin API tokens from an [`AdminApiKey`].
///
/// Holds only read-only state, so one signer can be shared by any number of
/// concurrent requests.
#[derive(Clone)]
pub struct TokenSigner {
    key_id: String,
    encoding_key: EncodingKey,
}

impl TokenSigner {
    /// Creates a signer for the given key.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError::Configuration`] if the secret cannot be decoded.
    pub fn new(key: &AdminApiKey) -> Result<Self, GhostError> {
        let secret = hex::decode(key.secret.expose_secret()).map_err(|e| {
            GhostError::Configuration(format!("admin API key secret is not valid hex: {e}"))
        })?;

        Ok(Self {
            key_id: key.id.clone(),
            encoding_key: EncodingKey::from_secret(&secret),
        })
    }

    /// Signs a token valid from now for [`TOKEN_LIFETIME`].
    ///
    /// # Errors
    ///
    /// Returns an error if the system clock is before the Unix epoch or
    /// encoding fails.
    pub fn sign(&self) -> Result<SignedToken, GhostError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| GhostError::Configuration(format!("system clock error: {e}")))?;
        self.sign_at(now.as_secs())
    }

    /// Signs a token issued at `issued_at` (seconds since the Unix epoch).
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn sign_at(&self, issued_at: u64) -> Result<SignedToken, GhostError> {
        let expires_at = issued_at.saturating_add(TOKEN_LIFETIME.as_secs());

        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some(self.key_id.clone());

        let claims = Claims {
            iat: issued_at,
            exp: expires_at,
            aud: ADMIN_AUDIENCE.to_string(),
        };

        let token = jsonwebtoken::encode(&header, &claims, &self.encoding_key)?;

        Ok(SignedToken {
            token,
            issued_at,
            expires_at,
        })
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}
