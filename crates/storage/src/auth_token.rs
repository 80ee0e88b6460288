//! Persisted authentication-token slot
//!
//! A single opaque string under the `"token"` key marks a prior successful
//! login. Presence is the only signal: there is no expiry and no validation.
//! The slot is written by the login-success handler and read once per
//! activation of the gated tab area.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::kv::{KvError, KvStore};

/// Key under which the authentication token is persisted
pub const TOKEN_KEY: &str = "token";

/// Read capability for the persisted authentication token.
///
/// A failed read is reported as absence: the session gate must fail open to
/// the login screen, never to the gated area.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Read the persisted token, if any.
    async fn token(&self) -> Option<String>;
}

/// Key-value backed token store
#[derive(Clone)]
pub struct TokenStore {
    kv: KvStore,
}

impl TokenStore {
    /// Create a token store over an existing key-value store
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Persist a token after a successful login
    pub fn write(&self, token: &str) -> Result<(), KvError> {
        self.kv.set(TOKEN_KEY, &token.to_string())
    }

    /// Remove the persisted token (logout)
    pub fn clear(&self) -> Result<bool, KvError> {
        self.kv.remove(TOKEN_KEY)
    }
}

#[async_trait]
impl TokenSource for TokenStore {
    async fn token(&self) -> Option<String> {
        match self.kv.get::<String>(TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                // Unreadable is treated as absent so the gate fails open to login.
                tracing::warn!(error = %err, "token read failed, treating as absent");
                None
            }
        }
    }
}
