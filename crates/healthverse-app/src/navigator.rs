//! The application navigator.
//!
//! `App` wires the session store to a route guard and plays the part of the
//! router: every screen visit is evaluated by the guard, and redirects are
//! followed until some screen is allowed to render.

use tracing::{debug, info};

use healthverse_contracts::{
    error::{HealthverseError, HealthverseResult},
    guard::{GuardVerdict, RedirectReason},
    role::Role,
    screen::{NavBar, Screen},
};
use healthverse_core::{traits::RouteGuard, SessionStore};

/// Upper bound on redirects followed for a single visit.
pub const MAX_REDIRECTS: usize = 4;

/// Where a visit ended up and how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub requested: String,
    pub screen: Screen,
    /// Each hop taken, in order: the target screen and why the guard sent us.
    pub redirects: Vec<(Screen, RedirectReason)>,
    pub nav: Option<NavBar>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

pub struct App {
    store: SessionStore,
    guard: Box<dyn RouteGuard>,
}

impl App {
    pub fn new(store: SessionStore, guard: Box<dyn RouteGuard>) -> Self {
        Self { store, guard }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Visit `path`, following guard redirects.
    ///
    /// Fails only when the route table sends the visitor around in circles.
    pub fn visit(&self, path: &str) -> HealthverseResult<Navigation> {
        let session = self.store.current();
        let mut redirects = Vec::new();
        let mut target = path.to_string();

        loop {
            match self.guard.evaluate(&target, session.as_ref()) {
                GuardVerdict::Proceed { screen, nav } => {
                    debug!(requested = %path, screen = %screen.path(), hops = redirects.len(), "screen rendered");
                    return Ok(Navigation {
                        requested: path.to_string(),
                        screen,
                        redirects,
                        nav,
                    });
                }
                GuardVerdict::Redirect { to, reason } => {
                    debug!(from = %target, to = %to.path(), ?reason, "redirect");
                    if redirects.len() == MAX_REDIRECTS {
                        return Err(HealthverseError::Config {
                            reason: format!(
                                "redirect loop visiting '{path}': gave up after {MAX_REDIRECTS} hops"
                            ),
                        });
                    }
                    target = to.path().to_string();
                    redirects.push((to, reason));
                }
            }
        }
    }

    /// Log in and land on role selection. `None` when the credentials are rejected.
    pub async fn login(&self, email: &str, password: &str) -> HealthverseResult<Option<Navigation>> {
        if !self.store.login(email, password).await {
            return Ok(None);
        }
        self.visit(Screen::RoleSelection.path()).map(Some)
    }

    /// Register and land on role selection. `None` when the input is rejected.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> HealthverseResult<Option<Navigation>> {
        if !self.store.register(name, email, password).await {
            return Ok(None);
        }
        self.visit(Screen::RoleSelection.path()).map(Some)
    }

    /// The role-selection handler: record the role, then open its dashboard.
    pub fn choose_role(&self, role: Role) -> HealthverseResult<Navigation> {
        if !role.is_set() {
            return Err(HealthverseError::Validation {
                reason: "choose patient, doctor or pharmacy".to_string(),
            });
        }
        self.store.set_role(role);
        info!(%role, "role chosen");
        self.visit(role.dashboard().path())
    }

    pub fn logout(&self) -> HealthverseResult<Navigation> {
        self.store.logout();
        self.visit(Screen::Login.path())
    }
}
