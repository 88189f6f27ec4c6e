//! # healthverse-guard
//!
//! A TOML-driven route guard for the HealthVerse runtime.
//!
//! ## Overview
//!
//! This crate provides [`RoleRouteGuard`], which implements the
//! [`RouteGuard`](healthverse_core::traits::RouteGuard) trait. The route
//! table declares, per screen, whether it is public, needs a session, or
//! needs a session routed to a specific role. The built-in table lives in
//! `routes/healthverse.toml`.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use healthverse_guard::RoleRouteGuard;
//!
//! let guard = RoleRouteGuard::builtin()?;
//! match guard.evaluate("/pharmacy/orders", session.as_ref()) {
//!     GuardVerdict::Proceed { screen, nav } => render(screen, nav),
//!     GuardVerdict::Redirect { to, .. } => navigate(to.path()),
//! }
//! ```

pub mod engine;
pub mod table;

pub use engine::{RoleRouteGuard, BUILTIN_ROUTES};
pub use table::{RouteAccess, RouteEntry, RouteTable};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use healthverse_contracts::{
        error::HealthverseError,
        guard::{GuardVerdict, RedirectReason},
        role::Role,
        screen::Screen,
        session::Session,
    };
    use healthverse_core::traits::RouteGuard;

    use crate::RoleRouteGuard;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn guard() -> RoleRouteGuard {
        RoleRouteGuard::builtin().expect("built-in route table must be valid")
    }

    fn session(role: Role) -> Session {
        let mut s = Session::new("Ana", "ana@x.com");
        s.role = role;
        s
    }

    const ROLE_SCREENS: [Screen; 14] = [
        Screen::PatientDashboard,
        Screen::PatientDiet,
        Screen::PatientRecipes,
        Screen::PatientMedications,
        Screen::PatientAppointments,
        Screen::PatientMedicineOrder,
        Screen::DoctorDashboard,
        Screen::DoctorAppointments,
        Screen::DoctorAvailability,
        Screen::DoctorConsultation,
        Screen::DoctorPatientNotes,
        Screen::PharmacyDashboard,
        Screen::PharmacyInventory,
        Screen::PharmacyOrders,
    ];

    fn redirect_of(verdict: &GuardVerdict) -> Screen {
        match verdict {
            GuardVerdict::Redirect { to, .. } => *to,
            other => panic!("expected Redirect, got {:?}", other),
        }
    }

    // ── 1. unauthenticated ────────────────────────────────────────────────────

    /// Every role screen sends a visitor without a session to login.
    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let guard = guard();
        for screen in ROLE_SCREENS.into_iter().chain([Screen::RoleSelection]) {
            let verdict = guard.evaluate(screen.path(), None);
            assert_eq!(redirect_of(&verdict), Screen::Login, "screen {:?}", screen);
        }
    }

    // ── 2. unrouted ───────────────────────────────────────────────────────────

    /// A session with no role is sent to role selection from any role screen.
    #[test]
    fn test_unset_role_redirects_to_role_selection() {
        let guard = guard();
        let unrouted = session(Role::Unset);
        for screen in ROLE_SCREENS {
            match guard.evaluate(screen.path(), Some(&unrouted)) {
                GuardVerdict::Redirect { to, reason } => {
                    assert_eq!(to, Screen::RoleSelection);
                    assert_eq!(reason, RedirectReason::RoleUnset);
                }
                other => panic!("expected Redirect for {:?}, got {:?}", screen, other),
            }
        }

        // Role selection itself renders for an unrouted session.
        assert!(matches!(
            guard.evaluate("/role-selection", Some(&unrouted)),
            GuardVerdict::Proceed { screen: Screen::RoleSelection, nav: None }
        ));
    }

    // ── 3. role mismatch ──────────────────────────────────────────────────────

    /// A routed session visiting another role's screen lands on its own
    /// dashboard, never on the requested role's.
    #[test]
    fn test_role_mismatch_redirects_to_own_dashboard() {
        let guard = guard();
        for role in Role::CONCRETE {
            let s = session(role);
            for screen in ROLE_SCREENS {
                let verdict = guard.evaluate(screen.path(), Some(&s));
                if screen.namespace() == Some(role) {
                    assert!(
                        matches!(verdict, GuardVerdict::Proceed { .. }),
                        "{role} should see {:?}, got {:?}",
                        screen,
                        verdict
                    );
                } else {
                    assert_eq!(redirect_of(&verdict), role.dashboard());
                    match verdict {
                        GuardVerdict::Redirect {
                            reason: RedirectReason::RoleMismatch { required, actual },
                            ..
                        } => {
                            assert_eq!(Some(required), screen.namespace());
                            assert_eq!(actual, role);
                        }
                        other => panic!("expected RoleMismatch, got {:?}", other),
                    }
                }
            }
        }
    }

    // ── 4. proceed with navigation ────────────────────────────────────────────

    /// Rendering a role screen carries that role's nav bar with the current
    /// item marked active.
    #[test]
    fn test_proceed_carries_role_navigation() {
        let guard = guard();
        let doctor = session(Role::Doctor);

        match guard.evaluate("/doctor/availability", Some(&doctor)) {
            GuardVerdict::Proceed { screen, nav: Some(nav) } => {
                assert_eq!(screen, Screen::DoctorAvailability);
                assert_eq!(nav.role, Role::Doctor);
                let labels: Vec<&str> = nav.items.iter().map(|i| i.label.as_str()).collect();
                assert_eq!(
                    labels,
                    ["Home", "Appointments", "Availability", "Consultation", "Patient Notes"]
                );
                let active: Vec<&str> = nav
                    .items
                    .iter()
                    .filter(|i| i.active)
                    .map(|i| i.path.as_str())
                    .collect();
                assert_eq!(active, ["/doctor/availability"]);
            }
            other => panic!("expected Proceed with nav, got {:?}", other),
        }
    }

    #[test]
    fn test_nav_bar_sizes_per_role() {
        let guard = guard();
        let table = guard.table();
        assert_eq!(table.nav_items(Role::Patient, Screen::PatientDashboard).len(), 6);
        assert_eq!(table.nav_items(Role::Doctor, Screen::DoctorDashboard).len(), 5);
        assert_eq!(table.nav_items(Role::Pharmacy, Screen::PharmacyDashboard).len(), 3);
        assert!(table.nav_items(Role::Unset, Screen::RoleSelection).is_empty());
    }

    // ── 5. shared screens ─────────────────────────────────────────────────────

    #[test]
    fn test_public_screens_always_render() {
        let guard = guard();
        for role in [Role::Unset, Role::Patient] {
            let s = session(role);
            for path in ["/login", "/register"] {
                assert!(matches!(guard.evaluate(path, Some(&s)), GuardVerdict::Proceed { .. }));
                assert!(matches!(guard.evaluate(path, None), GuardVerdict::Proceed { .. }));
            }
        }
    }

    /// The landing page forwards session holders to where they belong.
    #[test]
    fn test_landing_forwards_authenticated_visitors() {
        let guard = guard();
        assert!(matches!(
            guard.evaluate("/", None),
            GuardVerdict::Proceed { screen: Screen::Landing, .. }
        ));
        assert_eq!(
            redirect_of(&guard.evaluate("/", Some(&session(Role::Unset)))),
            Screen::RoleSelection
        );
        assert_eq!(
            redirect_of(&guard.evaluate("/", Some(&session(Role::Pharmacy)))),
            Screen::PharmacyDashboard
        );
    }

    #[test]
    fn test_unknown_paths_render_not_found() {
        let guard = guard();
        for s in [None, Some(session(Role::Doctor))] {
            assert_eq!(
                guard.evaluate("/admin", s.as_ref()),
                GuardVerdict::Proceed { screen: Screen::NotFound, nav: None }
            );
        }
    }

    // ── 6. purity ─────────────────────────────────────────────────────────────

    #[test]
    fn test_evaluation_is_deterministic() {
        let guard = guard();
        let s = session(Role::Patient);
        let first = guard.evaluate("/doctor/consultation", Some(&s));
        let second = guard.evaluate("/doctor/consultation", Some(&s));
        assert_eq!(first, second);
    }

    // ── 7. table validation ───────────────────────────────────────────────────

    fn expect_config_error(toml: &str, needle: &str) {
        match RoleRouteGuard::from_toml_str(toml) {
            Err(HealthverseError::Config { reason }) => {
                assert!(reason.contains(needle), "expected {needle:?} in: {reason}");
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        expect_config_error("routes = ][", "failed to parse route table TOML");
    }

    #[test]
    fn test_table_missing_dashboard_is_rejected() {
        expect_config_error(
            r#"
            [[routes]]
            path = "/login"
            screen = "login"
            access = "public"

            [[routes]]
            path = "/role-selection"
            screen = "role-selection"
            access = "authenticated"
        "#,
            "/patient/dashboard",
        );
    }

    #[test]
    fn test_path_must_match_screen() {
        let bad = crate::BUILTIN_ROUTES.replacen(
            "path = \"/patient/diet\"",
            "path = \"/patient/food\"",
            1,
        );
        expect_config_error(&bad, "/patient/food");
    }

    #[test]
    fn test_duplicate_route_is_rejected() {
        let bad = format!(
            "{}\n[[routes]]\npath = \"/login\"\nscreen = \"login\"\naccess = \"public\"\n",
            crate::BUILTIN_ROUTES
        );
        expect_config_error(&bad, "more than once");
    }

    #[test]
    fn test_required_role_on_public_route_is_rejected() {
        let bad = crate::BUILTIN_ROUTES.replacen(
            "screen = \"register\"\naccess = \"public\"",
            "screen = \"register\"\naccess = \"public\"\nrequired_role = \"doctor\"",
            1,
        );
        expect_config_error(&bad, "not protected");
    }

    #[test]
    fn test_unknown_role_in_table_is_rejected() {
        let bad = crate::BUILTIN_ROUTES.replacen(
            "required_role = \"patient\"",
            "required_role = \"Member\"",
            1,
        );
        expect_config_error(&bad, "failed to parse route table TOML");
    }

    #[test]
    fn test_unset_required_role_is_rejected() {
        // Role's deserializer refuses "unset", so build the table in code.
        let mut table = guard().table().clone();
        let dashboard = table
            .routes
            .iter_mut()
            .find(|r| r.screen == Screen::PatientDashboard)
            .unwrap();
        dashboard.required_role = Some(Role::Unset);

        match table.validate() {
            Err(HealthverseError::Config { reason }) => {
                assert!(reason.contains("requires the unset role"), "got: {reason}");
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }
}
