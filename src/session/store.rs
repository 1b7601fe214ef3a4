//! Session store.

use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, info, warn};

use super::auth::AuthService;
use super::storage::SessionStorage;
use super::types::{Credential, Session, UserIdentity};
use crate::config::{MSG_LOGIN_FAILED, SESSION_TOKEN_KEY, SESSION_USER_KEY};
use crate::error_handling::AuthError;

/// Holds the authenticated identity and gates access to the lookup core.
///
/// The store is the only writer of the session keys in its `SessionStorage`.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Creates a store, reading any session already present in `storage`.
    ///
    /// This is the single read of the persistence boundary. A missing or
    /// unreadable identity leaves the store signed out; the consuming
    /// application is expected to send the user to re-authenticate.
    pub fn restore(storage: Arc<dyn SessionStorage>) -> Self {
        let current = read_persisted(storage.as_ref());
        match &current {
            Some(session) => info!("Restored session for {}", session.identity.email),
            None => debug!("No persisted session; authentication required"),
        }
        Self {
            storage,
            current: RwLock::new(current),
        }
    }

    /// The active session, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Authenticates once against `auth` and stores the resulting session.
    ///
    /// No retry is attempted; retry policy belongs to the caller. On failure
    /// any existing session is left untouched.
    ///
    /// # Errors
    ///
    /// - `AuthError::InvalidCredentials` when the authority rejects the pair
    ///   (including a 2xx body with `success: false` or no user)
    /// - `AuthError::Transport` when the authority cannot be reached
    pub async fn authenticate(
        &self,
        auth: &dyn AuthService,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let response = match auth.login(email, password).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Login failed for {}: {}", email, e);
                return Err(e);
            }
        };

        let identity = match (response.success, response.user) {
            (true, Some(user)) => user,
            _ => {
                warn!("Login rejected for {}", email);
                return Err(AuthError::InvalidCredentials(
                    response
                        .message
                        .unwrap_or_else(|| MSG_LOGIN_FAILED.to_string()),
                ));
            }
        };

        let session = Session {
            identity,
            token: response.token.map(Credential::new),
        };
        self.persist(&session);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());

        info!("Signed in as {}", session.identity.email);
        Ok(session)
    }

    /// Ends the session and clears it from storage.
    pub fn terminate(&self) {
        let previous = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.storage.remove(SESSION_USER_KEY);
        self.storage.remove(SESSION_TOKEN_KEY);
        if let Some(session) = previous {
            info!("Signed out {}", session.identity.email);
        }
    }

    fn persist(&self, session: &Session) {
        match serde_json::to_string(&session.identity) {
            Ok(json) => self.storage.set(SESSION_USER_KEY, json),
            Err(e) => warn!("Failed to serialize identity for session storage: {}", e),
        }
        match &session.token {
            Some(token) => self
                .storage
                .set(SESSION_TOKEN_KEY, token.expose().to_string()),
            None => self.storage.remove(SESSION_TOKEN_KEY),
        }
    }
}

fn read_persisted(storage: &dyn SessionStorage) -> Option<Session> {
    let raw = storage.get(SESSION_USER_KEY)?;
    let identity: UserIdentity = match serde_json::from_str(&raw) {
        Ok(identity) => identity,
        Err(e) => {
            warn!("Ignoring malformed persisted identity: {}", e);
            return None;
        }
    };
    Some(Session {
        identity,
        token: storage.get(SESSION_TOKEN_KEY).map(Credential::new),
    })
}
