//! Session lifecycle.
//!
//! A [`SessionContext`] owns the storage the session token lives in and is
//! passed explicitly to whatever needs the signed-in user. It is created with
//! [`SessionContext::init`], which loads the stored token and discards it if
//! it has expired, and torn down with [`SessionContext::logout`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Actor, AuthUser};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized [`AuthUser`].
pub const USER_KEY: &str = "user";

/// Key-value storage a session is persisted in (browser local storage, a file...).
pub trait SessionStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);
    /// Removes `key` if present.
    fn remove(&mut self, key: &str);
}

/// An in-memory [`SessionStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    exp: i64,
}

/// Reads the `exp` claim of a JWT without verifying its signature.
///
/// Signatures are checked by the server on every API call; the client only
/// needs the expiry to decide whether a stored token is worth keeping.
pub fn token_expiry(token: &str) -> EngineResult<i64> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<ExpiryClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims.exp)
        .map_err(|e| EngineError::InvalidSession {
            message: format!("unreadable token: {}", e),
        })
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: AuthUser,
    expires_at: i64,
}

impl Session {
    /// Builds a session from a token, rejecting tokens that expired before `now`.
    pub fn new(token: impl Into<String>, user: AuthUser, now: DateTime<Utc>) -> EngineResult<Self> {
        let token = token.into();
        let expires_at = token_expiry(&token)?;
        if expires_at < now.timestamp() {
            return Err(EngineError::SessionExpired {
                expired_at: expires_at,
            });
        }
        Ok(Self {
            token,
            user,
            expires_at,
        })
    }

    /// The bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The signed-in user.
    pub fn user(&self) -> &AuthUser {
        &self.user
    }

    /// Expiry in seconds since the Unix epoch.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Returns true if the token has expired by `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now.timestamp()
    }
}

/// Holds the current session and the store it is persisted in.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use leave_engine::auth::{MemoryStore, SessionContext};
///
/// let context = SessionContext::init(MemoryStore::new(), Utc::now());
/// assert!(!context.is_authenticated());
/// ```
#[derive(Debug)]
pub struct SessionContext<S: SessionStore> {
    store: S,
    current: Option<Session>,
}

impl<S: SessionStore> SessionContext<S> {
    /// Loads the session persisted in `store`.
    ///
    /// An expired or unreadable session is removed from the store and the
    /// context starts signed out.
    pub fn init(mut store: S, now: DateTime<Utc>) -> Self {
        let current = match Self::restore(&store, now) {
            Ok(Some(session)) => {
                info!(user_id = %session.user.id, "Restored session");
                Some(session)
            }
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "Discarding stored session");
                store.remove(TOKEN_KEY);
                store.remove(USER_KEY);
                None
            }
        };

        Self { store, current }
    }

    fn restore(store: &S, now: DateTime<Utc>) -> EngineResult<Option<Session>> {
        let (Some(token), Some(user_json)) = (store.get(TOKEN_KEY), store.get(USER_KEY)) else {
            return Ok(None);
        };

        let user: AuthUser =
            serde_json::from_str(&user_json).map_err(|e| EngineError::InvalidSession {
                message: format!("unreadable user record: {}", e),
            })?;

        Session::new(token, user, now).map(Some)
    }

    /// Starts a session for a freshly issued token and persists it.
    pub fn login(
        &mut self,
        token: impl Into<String>,
        user: AuthUser,
        now: DateTime<Utc>,
    ) -> EngineResult<&Session> {
        let session = Session::new(token, user, now)?;
        let user_json =
            serde_json::to_string(&session.user).map_err(|e| EngineError::InvalidSession {
                message: e.to_string(),
            })?;

        self.store.set(TOKEN_KEY, session.token.clone());
        self.store.set(USER_KEY, user_json);
        info!(user_id = %session.user.id, role = %session.user.role, "Signed in");

        Ok(&*self.current.insert(session))
    }

    /// Ends the session and clears the store.
    pub fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            info!(user_id = %session.user.id, "Signed out");
        }
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    /// Updates the stored display name after a profile edit.
    pub fn update_name(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> EngineResult<()> {
        let Some(session) = self.current.as_mut() else {
            return Err(EngineError::InvalidSession {
                message: "not signed in".to_string(),
            });
        };

        session.user.first_name = first_name.into();
        session.user.last_name = last_name.into();

        let user_json =
            serde_json::to_string(&session.user).map_err(|e| EngineError::InvalidSession {
                message: e.to_string(),
            })?;
        self.store.set(USER_KEY, user_json);
        Ok(())
    }

    /// The current session, if signed in.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// The signed-in user acting as an [`Actor`].
    pub fn actor(&self) -> Option<Actor> {
        self.current.as_ref().map(|s| s.user.actor())
    }

    /// Returns true if a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
