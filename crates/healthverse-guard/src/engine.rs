//! Table-driven route guard implementation.
//!
//! `RoleRouteGuard` loads a `RouteTable` from a TOML string or file and
//! implements the `RouteGuard` trait from healthverse-core.
//!
//! Evaluation algorithm for a visit to `path`:
//!
//! 1. Resolve the path to a `Screen`; paths the table does not list render
//!    the not-found screen.
//! 2. Public routes render, except that `redirect_authenticated` routes send
//!    session holders to their dashboard.
//! 3. Authenticated routes redirect to login without a session.
//! 4. Protected routes apply, in order:
//!    a. no session             → login
//!    b. role unset             → role selection
//!    c. required role mismatch → the session role's dashboard
//!    d. otherwise render, with the session role's navigation bar.

use std::path::Path;

use tracing::debug;

use healthverse_contracts::{
    error::{HealthverseError, HealthverseResult},
    guard::{GuardState, GuardVerdict, RedirectReason},
    screen::{NavBar, Screen},
    session::Session,
};
use healthverse_core::traits::RouteGuard;

use crate::table::{RouteAccess, RouteEntry, RouteTable};

/// The route table shipped with the application.
pub const BUILTIN_ROUTES: &str = include_str!("../routes/healthverse.toml");

/// A `RouteGuard` implementation driven by a TOML route table.
///
/// ```rust,ignore
/// use healthverse_guard::RoleRouteGuard;
///
/// let guard = RoleRouteGuard::builtin()?;
/// let verdict = guard.evaluate("/doctor/dashboard", store.current().as_ref());
/// ```
#[derive(Debug, Clone)]
pub struct RoleRouteGuard {
    table: RouteTable,
}

impl RoleRouteGuard {
    /// Parse `s` as TOML and build a validated guard.
    ///
    /// Returns `HealthverseError::Config` if the TOML is malformed, does not
    /// match the `RouteTable` schema, or fails `RouteTable::validate`.
    pub fn from_toml_str(s: &str) -> HealthverseResult<Self> {
        let table: RouteTable = toml::from_str(s).map_err(|e| HealthverseError::Config {
            reason: format!("failed to parse route table TOML: {}", e),
        })?;
        table.validate()?;
        Ok(Self { table })
    }

    /// Read the file at `path` and parse it as a route table.
    pub fn from_file(path: &Path) -> HealthverseResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HealthverseError::Config {
            reason: format!("failed to read route table '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The guard over the built-in route table.
    pub fn builtin() -> HealthverseResult<Self> {
        Self::from_toml_str(BUILTIN_ROUTES)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    fn evaluate_protected(&self, route: &RouteEntry, state: GuardState) -> GuardVerdict {
        let role = match state {
            GuardState::Unauthenticated => {
                return redirect(Screen::Login, RedirectReason::Unauthenticated)
            }
            GuardState::AuthenticatedUnrouted => {
                return redirect(Screen::RoleSelection, RedirectReason::RoleUnset)
            }
            GuardState::AuthenticatedRouted(role) => role,
        };

        if let Some(required) = route.required_role {
            if required != role {
                return redirect(
                    role.dashboard(),
                    RedirectReason::RoleMismatch {
                        required,
                        actual: role,
                    },
                );
            }
        }

        GuardVerdict::Proceed {
            screen: route.screen,
            nav: Some(NavBar {
                role,
                items: self.table.nav_items(role, route.screen),
            }),
        }
    }
}

impl RouteGuard for RoleRouteGuard {
    fn evaluate(&self, path: &str, session: Option<&Session>) -> GuardVerdict {
        let state = GuardState::of(session);
        let screen = Screen::from_path(path);

        let Some(route) = self.table.entry(screen) else {
            debug!(path = %path, "no route for path; rendering not-found");
            return GuardVerdict::Proceed {
                screen: Screen::NotFound,
                nav: None,
            };
        };

        let verdict = match route.access {
            RouteAccess::Public => match session {
                Some(s) if route.redirect_authenticated => {
                    redirect(s.role.dashboard(), RedirectReason::AlreadyAuthenticated)
                }
                _ => GuardVerdict::Proceed { screen, nav: None },
            },

            RouteAccess::Authenticated => match state {
                GuardState::Unauthenticated => {
                    redirect(Screen::Login, RedirectReason::Unauthenticated)
                }
                _ => GuardVerdict::Proceed { screen, nav: None },
            },

            RouteAccess::Protected => self.evaluate_protected(route, state),
        };

        debug!(
            path = %path,
            state = ?state,
            redirect = ?verdict.redirect_target(),
            "route evaluated"
        );

        verdict
    }
}

fn redirect(to: Screen, reason: RedirectReason) -> GuardVerdict {
    GuardVerdict::Redirect { to, reason }
}
