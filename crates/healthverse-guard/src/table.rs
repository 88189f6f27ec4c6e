//! Route table types and configuration schema.
//!
//! A `RouteTable` is deserialized from TOML and holds an ordered list of
//! `RouteEntry`s, one per screen. The table decides *how* each screen is
//! guarded; the paths themselves are fixed by `Screen`.

use serde::{Deserialize, Serialize};

use healthverse_contracts::{
    error::{HealthverseError, HealthverseResult},
    role::Role,
    screen::{NavItem, Screen},
};

/// How much of a session a screen demands.
///
/// Expressed in TOML as a lowercase string:
/// ```toml
/// access = "public"
/// access = "authenticated"
/// access = "protected"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAccess {
    /// Rendered for everyone.
    Public,
    /// Needs a session; the role may still be unset.
    Authenticated,
    /// Needs a session with a concrete role, matching `required_role` if set.
    Protected,
}

/// A single route loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Must equal `screen.path()`.
    pub path: String,

    pub screen: Screen,

    pub access: RouteAccess,

    /// Only meaningful for protected routes.
    #[serde(default)]
    pub required_role: Option<Role>,

    /// Label in the role's navigation bar. Routes without one are reachable
    /// but not listed.
    #[serde(default)]
    pub nav_label: Option<String>,

    /// Send visitors who already hold a session to their dashboard (or to
    /// role selection if unrouted). Used by the landing page.
    #[serde(default)]
    pub redirect_authenticated: bool,
}

/// The top-level structure deserialized from a TOML route file.
///
/// Example:
/// ```toml
/// [[routes]]
/// path = "/patient/dashboard"
/// screen = "patient-dashboard"
/// access = "protected"
/// required_role = "patient"
/// nav_label = "Home"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteTable {
    pub routes: Vec<RouteEntry>,
}

impl RouteTable {
    /// The entry guarding `screen`, if the table lists it.
    pub fn entry(&self, screen: Screen) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.screen == screen)
    }

    /// Navigation items for `role`, in table order, marking `active`.
    pub fn nav_items(&self, role: Role, active: Screen) -> Vec<NavItem> {
        self.routes
            .iter()
            .filter(|r| r.access == RouteAccess::Protected && r.required_role == Some(role))
            .filter_map(|r| {
                r.nav_label.as_ref().map(|label| NavItem {
                    label: label.clone(),
                    path: r.path.clone(),
                    active: r.screen == active,
                })
            })
            .collect()
    }

    /// Check the table for internal consistency.
    ///
    /// A valid table lists each screen once at its own path, pins roles and
    /// nav labels only on protected routes, and contains the screens the
    /// guard redirects to: login, role selection, and every role's dashboard.
    pub fn validate(&self) -> HealthverseResult<()> {
        let config_err = |reason: String| Err(HealthverseError::Config { reason });

        for (idx, route) in self.routes.iter().enumerate() {
            if route.path != route.screen.path() {
                return config_err(format!(
                    "route '{}' is declared for screen {:?}, whose path is '{}'",
                    route.path,
                    route.screen,
                    route.screen.path()
                ));
            }

            if self.routes[..idx].iter().any(|earlier| earlier.screen == route.screen) {
                return config_err(format!("route '{}' is declared more than once", route.path));
            }

            if route.access != RouteAccess::Protected {
                if route.required_role.is_some() {
                    return config_err(format!(
                        "route '{}' sets required_role but is not protected",
                        route.path
                    ));
                }
                if route.nav_label.is_some() {
                    return config_err(format!(
                        "route '{}' sets nav_label but is not protected",
                        route.path
                    ));
                }
            }

            if route.required_role == Some(Role::Unset) {
                return config_err(format!("route '{}' requires the unset role", route.path));
            }
        }

        for screen in [Screen::Login, Screen::RoleSelection] {
            if self.entry(screen).is_none() {
                return config_err(format!("route table is missing '{}'", screen.path()));
            }
        }

        for role in Role::CONCRETE {
            let dashboard = role.dashboard();
            match self.entry(dashboard) {
                Some(r) if r.access == RouteAccess::Protected && r.required_role == Some(role) => {}
                _ => {
                    return config_err(format!(
                        "route table needs '{}' protected for role {}",
                        dashboard.path(),
                        role
                    ))
                }
            }
        }

        Ok(())
    }
}
