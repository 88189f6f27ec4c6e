//! Route guard state and verdict types.
//!
//! The guard consumes the current `Session` (if any) and a requested path and
//! produces a `GuardVerdict`. Nothing here is persisted: the state is derived
//! from the session on every evaluation.

use serde::{Deserialize, Serialize};

use crate::{
    role::Role,
    screen::{NavBar, Screen},
    session::Session,
};

/// The access state of the visitor, derived from the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardState {
    /// No session exists.
    Unauthenticated,
    /// A session exists but no role has been chosen yet.
    AuthenticatedUnrouted,
    /// A session exists and acts under the given concrete role.
    AuthenticatedRouted(Role),
}

impl GuardState {
    pub fn of(session: Option<&Session>) -> Self {
        match session {
            None => GuardState::Unauthenticated,
            Some(s) if s.role.is_set() => GuardState::AuthenticatedRouted(s.role),
            Some(_) => GuardState::AuthenticatedUnrouted,
        }
    }
}

/// Why the guard sent the visitor elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedirectReason {
    /// The screen needs a session and there is none.
    Unauthenticated,
    /// The session has not picked a role yet.
    RoleUnset,
    /// The screen belongs to a different role than the session's.
    RoleMismatch { required: Role, actual: Role },
    /// The screen is for visitors only (the landing page) and a session exists.
    AlreadyAuthenticated,
}

/// The decision emitted by the route guard for a single screen visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardVerdict {
    /// Render `screen`. Protected screens carry the session role's nav bar.
    Proceed { screen: Screen, nav: Option<NavBar> },

    /// Do not render; navigate to `to` instead.
    Redirect { to: Screen, reason: RedirectReason },
}

impl GuardVerdict {
    pub fn redirect_target(&self) -> Option<Screen> {
        match self {
            GuardVerdict::Redirect { to, .. } => Some(*to),
            GuardVerdict::Proceed { .. } => None,
        }
    }
}
