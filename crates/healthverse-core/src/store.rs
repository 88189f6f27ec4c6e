//! The session store: single source of truth for who is logged in and as what.
//!
//! The store owns the `Session` and exposes exactly four mutators:
//!
//!   login / register → Session (role Unset) → set_role → Session (role R) → logout
//!
//! Every mutation is mirrored to the injected `KeyValueStore` under the
//! configured key, so a store opened later over the same backend resumes the
//! same session. Backend failures never reach callers: a failed write is
//! logged and the in-memory session stays authoritative for this process.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use healthverse_contracts::{
    guard::GuardState,
    role::Role,
    session::{display_name_from_email, Session},
};

use crate::{
    config::SessionConfig,
    record::{decode_session, encode_session},
    traits::KeyValueStore,
};

/// An injectable session store.
///
/// Construct one per application instance with `SessionStore::open`; tests
/// build isolated stores over their own backends.
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
    config: SessionConfig,
    session: Mutex<Option<Session>>,
}

impl SessionStore {
    /// Open a store over `backend`, restoring any persisted session.
    ///
    /// The record is read exactly once. A record that is present but cannot
    /// be decoded is removed from the backend and the store starts with no
    /// session.
    pub fn open(backend: Arc<dyn KeyValueStore>, config: SessionConfig) -> Self {
        let restored = load_session(backend.as_ref(), &config.storage_key);
        Self {
            backend,
            config,
            session: Mutex::new(restored),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// A snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.lock().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    /// The access state the route guard will see.
    pub fn state(&self) -> GuardState {
        GuardState::of(self.lock().as_ref())
    }

    /// Authenticate with `email` and `password`.
    ///
    /// Always resolves after the configured artificial delay. Succeeds when
    /// the email is non-blank and the password meets the minimum length; the
    /// new session starts with `Role::Unset`. On failure the existing state is
    /// left untouched and `false` is returned.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        tokio::time::sleep(self.config.auth_delay()).await;

        let email = email.trim();
        if email.is_empty() || !self.password_acceptable(password) {
            info!(email = %email, "login rejected: invalid credentials");
            return false;
        }

        let name = if email == self.config.demo_email {
            self.config.demo_name.clone()
        } else {
            display_name_from_email(email).to_string()
        };

        let session = Session::new(name, email);
        info!(user_id = %session.id.0, email = %email, "login succeeded");
        self.replace(Some(session));
        true
    }

    /// Create an account and sign it in.
    ///
    /// Same delay and password rule as `login`; `name` must also be non-blank.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        tokio::time::sleep(self.config.auth_delay()).await;

        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || !self.password_acceptable(password) {
            info!(email = %email, "registration rejected: invalid details");
            return false;
        }

        let session = Session::new(name, email);
        info!(user_id = %session.id.0, email = %email, "registration succeeded");
        self.replace(Some(session));
        true
    }

    /// Clear the session unconditionally.
    pub fn logout(&self) {
        if let Some(previous) = self.lock().as_ref() {
            info!(user_id = %previous.id.0, "logging out");
        }
        self.replace(None);
    }

    /// Assign `role` to the current session.
    ///
    /// No-op without a session. `Role::Unset` is ignored: once routed, a
    /// session never returns to the unrouted state. Setting the role the
    /// session already holds changes nothing and writes nothing.
    pub fn set_role(&self, role: Role) {
        if !role.is_set() {
            warn!("ignoring request to unset the session role");
            return;
        }

        let mut guard = self.lock();
        let Some(session) = guard.as_mut() else {
            debug!(role = %role, "set_role without a session; ignoring");
            return;
        };

        if session.role == role {
            debug!(role = %role, "role already set");
            return;
        }

        info!(user_id = %session.id.0, from = %session.role, to = %role, "role assigned");
        session.role = role;
        self.persist(Some(&*session));
    }

    fn password_acceptable(&self, password: &str) -> bool {
        !password.is_empty() && password.chars().count() >= self.config.min_password_length
    }

    fn replace(&self, next: Option<Session>) {
        let mut guard = self.lock();
        *guard = next;
        self.persist(guard.as_ref());
    }

    /// Mirror `session` into the backend: write it, or remove the record.
    ///
    /// Callers hold the session lock, so the backend sees writes in the same
    /// order as the in-memory changes.
    fn persist(&self, session: Option<&Session>) {
        let key = &self.config.storage_key;
        let result = match session {
            Some(session) => {
                encode_session(session).and_then(|raw| self.backend.set(key, &raw))
            }
            None => self.backend.remove(key),
        };

        if let Err(e) = result {
            warn!(key = %key, error = %e, "failed to persist session record");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Read and decode the persisted record, discarding it if corrupted.
fn load_session(backend: &dyn KeyValueStore, key: &str) -> Option<Session> {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key = %key, "no persisted session");
            return None;
        }
        Err(e) => {
            warn!(key = %key, error = %e, "could not read persisted session; starting signed out");
            return None;
        }
    };

    match decode_session(&raw) {
        Ok(session) => {
            info!(user_id = %session.id.0, role = %session.role, "restored persisted session");
            Some(session)
        }
        Err(e) => {
            warn!(key = %key, error = %e, "discarding corrupted session record");
            if let Err(e) = backend.remove(key) {
                warn!(key = %key, error = %e, "failed to remove corrupted session record");
            }
            None
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
