//! Session store.
//!
//! Lifecycle:
//!
//! ```text
//!   Initializing ──rehydrate──► Authenticated ◄──login──┐
//!        │                          │                    │
//!        └──────rehydrate──────►  Unauthenticated ───────┘
//!                          logout / 401 ▲
//! ```
//!
//! Persisted values and the in-memory state change under one lock, so a
//! reader can never observe storage cleared while the in-memory session is
//! still set (or the reverse).

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::models::{Role, Session, PLACEHOLDER_USERNAME};
use crate::routes::{landing_route, Route};
use crate::storage::{
    SessionStorage, StorageResult, ROLE_KEY, SESSION_KEYS, TOKEN_KEY, USERNAME_KEY,
};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted values have not been read yet
    Initializing,
    Authenticated(Session),
    Unauthenticated,
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

struct Inner {
    storage: Box<dyn SessionStorage>,
    state: SessionState,
}

struct Shared {
    inner: Mutex<Inner>,
    changes: watch::Sender<SessionState>,
}

/// Cloneable handle to the session of this client process.
///
/// Pages, navigation and the HTTP client all hold clones of the same store;
/// tests build one over [`crate::storage::MemoryStorage`].
#[derive(Clone)]
pub struct SessionStore {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state())
            .finish()
    }
}

impl SessionStore {
    /// Create a store in the `Initializing` state. Call [`Self::rehydrate`]
    /// before first use, or use [`Self::open`].
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        let (changes, _) = watch::channel(SessionState::Initializing);
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    storage: Box::new(storage),
                    state: SessionState::Initializing,
                }),
                changes,
            }),
        }
    }

    /// Create a store and immediately rehydrate it from storage.
    pub fn open(storage: impl SessionStorage + 'static) -> StorageResult<Self> {
        let store = Self::new(storage);
        store.rehydrate()?;
        Ok(store)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.shared
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn publish(&self, state: &SessionState) {
        self.shared.changes.send_replace(state.clone());
    }

    /// Rebuild the in-memory session from persisted values.
    ///
    /// A session exists only when both a token and a recognised role are
    /// stored; the username falls back to a placeholder. No server call is
    /// made to check that the token is still accepted.
    pub fn rehydrate(&self) -> StorageResult<Option<Session>> {
        let mut inner = self.lock();

        let token = non_empty(inner.storage.get(TOKEN_KEY)?);
        let role = non_empty(inner.storage.get(ROLE_KEY)?);
        let username = non_empty(inner.storage.get(USERNAME_KEY)?);

        let state = match (token, role) {
            (Some(_), Some(role_name)) => match Role::from_external(&role_name) {
                Some(role) => SessionState::Authenticated(Session::new(
                    username.unwrap_or_else(|| PLACEHOLDER_USERNAME.to_string()),
                    role,
                )),
                None => {
                    warn!(role = %role_name, "Persisted role not recognised, starting unauthenticated");
                    SessionState::Unauthenticated
                }
            },
            _ => SessionState::Unauthenticated,
        };

        debug!(?state, "Session rehydrated");
        inner.state = state.clone();
        drop(inner);
        self.publish(&state);
        Ok(state.session().cloned())
    }

    /// Record a successful login and return the role's landing route.
    ///
    /// All three values are written in one storage batch; if that fails the
    /// previous session is left exactly as it was.
    pub fn login(&self, token: &str, role: Role, username: &str) -> StorageResult<Route> {
        let mut inner = self.lock();
        inner.storage.set_many(&[
            (TOKEN_KEY, token),
            (ROLE_KEY, role.as_str()),
            (USERNAME_KEY, username),
        ])?;

        let state = SessionState::Authenticated(Session::new(username, role));
        inner.state = state.clone();
        drop(inner);
        self.publish(&state);

        info!(username, role = %role, "Logged in");
        Ok(landing_route(Some(role)))
    }

    /// Clear the session and return the login route. Safe to call when no
    /// one is logged in.
    pub fn logout(&self) -> StorageResult<Route> {
        if self.clear()? {
            info!("Logged out");
        }
        Ok(Route::Login)
    }

    /// Drop credentials the server rejected (HTTP 401).
    ///
    /// Returns whether a session was active.
    pub fn invalidate(&self) -> StorageResult<bool> {
        let was_active = self.clear()?;
        if was_active {
            warn!("Session rejected by server, credentials cleared");
        }
        Ok(was_active)
    }

    fn clear(&self) -> StorageResult<bool> {
        let mut inner = self.lock();
        inner.storage.remove_many(&SESSION_KEYS)?;
        let was_active = matches!(inner.state, SessionState::Authenticated(_));
        inner.state = SessionState::Unauthenticated;
        drop(inner);
        self.publish(&SessionState::Unauthenticated);
        Ok(was_active)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    /// Current session; `None` means unauthenticated (or not yet loaded).
    pub fn current(&self) -> Option<Session> {
        self.lock().state.session().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.current().map(|s| s.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Persisted bearer token, replayed verbatim on outgoing requests.
    pub fn token(&self) -> Option<String> {
        match self.lock().storage.get(TOKEN_KEY) {
            Ok(token) => non_empty(token),
            Err(e) => {
                warn!(error = %e, "Could not read persisted token");
                None
            }
        }
    }

    /// Watch session changes (login, logout, invalidation).
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.shared.changes.subscribe()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
