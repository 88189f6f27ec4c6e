//! # healthverse-app
//!
//! The HealthVerse application layer.
//!
//! - [`App`] wires a `SessionStore` to a `RouteGuard` and follows redirects
//!   the way the browser router would.
//! - `pages` holds one model per screen (patient, doctor, pharmacy), each
//!   seeded from `mock_data`.
//! - [`DashboardSummary`] condenses a role's screens into dashboard figures.
//!
//! All data is hardcoded and fictional. No external API calls are made.

pub mod dashboard;
pub mod mock_data;
pub mod models;
pub mod navigator;
pub mod pages;

pub use dashboard::DashboardSummary;
pub use navigator::{App, Navigation, MAX_REDIRECTS};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use healthverse_contracts::{
        error::HealthverseError,
        guard::{GuardVerdict, RedirectReason},
        role::Role,
        screen::Screen,
        session::Session,
    };
    use healthverse_core::{traits::RouteGuard, SessionConfig, SessionStore};
    use healthverse_guard::RoleRouteGuard;
    use healthverse_storage::InMemoryKeyValueStore;

    use crate::{App, DashboardSummary};

    fn app_over(backend: InMemoryKeyValueStore) -> App {
        let store = SessionStore::open(Arc::new(backend), SessionConfig::default());
        App::new(store, Box::new(RoleRouteGuard::builtin().unwrap()))
    }

    fn app() -> App {
        app_over(InMemoryKeyValueStore::new())
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    #[test]
    fn visitor_is_sent_to_login() {
        let app = app();
        let nav = app.visit("/patient/diet").unwrap();
        assert_eq!(nav.screen, Screen::Login);
        assert_eq!(nav.redirects, vec![(Screen::Login, RedirectReason::Unauthenticated)]);
        assert!(nav.nav.is_none());

        let landing = app.visit("/").unwrap();
        assert_eq!(landing.screen, Screen::Landing);
        assert!(!landing.was_redirected());
    }

    #[test]
    fn unknown_path_renders_not_found() {
        let nav = app().visit("/nowhere").unwrap();
        assert_eq!(nav.screen, Screen::NotFound);
        assert_eq!(nav.requested, "/nowhere");
    }

    #[tokio::test(start_paused = true)]
    async fn register_then_pick_doctor() {
        let app = app();

        let landed = app
            .register("Ana", "ana@x.com", "secret1")
            .await
            .unwrap()
            .expect("registration accepted");
        assert_eq!(landed.screen, Screen::RoleSelection);
        assert_eq!(app.visit("/doctor/dashboard").unwrap().screen, Screen::RoleSelection);

        let dash = app.choose_role(Role::Doctor).unwrap();
        assert_eq!(dash.screen, Screen::DoctorDashboard);
        let bar = dash.nav.expect("doctor nav bar");
        assert_eq!(bar.role, Role::Doctor);
        assert_eq!(bar.items.len(), 5);

        let consult = app.visit("/doctor/consultation").unwrap();
        assert_eq!(consult.screen, Screen::DoctorConsultation);
        assert!(!consult.was_redirected());

        let elsewhere = app.visit("/patient/diet").unwrap();
        assert_eq!(elsewhere.screen, Screen::DoctorDashboard);
        assert_eq!(
            elsewhere.redirects,
            vec![(
                Screen::DoctorDashboard,
                RedirectReason::RoleMismatch { required: Role::Patient, actual: Role::Doctor },
            )]
        );

        // Landing sends authenticated visitors straight to their dashboard.
        let home = app.visit("/").unwrap();
        assert_eq!(home.screen, Screen::DoctorDashboard);
        assert_eq!(
            home.redirects,
            vec![(Screen::DoctorDashboard, RedirectReason::AlreadyAuthenticated)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_login_keeps_visitor_out() {
        let app = app();
        assert!(app.login("", "").await.unwrap().is_none());
        assert!(app.login("ana@x.com", "short").await.unwrap().is_none());
        assert!(app.store().current().is_none());
        assert_eq!(app.visit("/role-selection").unwrap().screen, Screen::Login);
    }

    #[tokio::test(start_paused = true)]
    async fn logout_closes_protected_screens() {
        let app = app();
        app.login("ana@x.com", "secret1").await.unwrap().unwrap();
        app.choose_role(Role::Pharmacy).unwrap();

        let out = app.logout().unwrap();
        assert_eq!(out.screen, Screen::Login);
        assert!(app.store().current().is_none());
        assert_eq!(app.visit("/pharmacy/inventory").unwrap().screen, Screen::Login);
    }

    #[test]
    fn choosing_unset_role_is_rejected() {
        let app = app();
        assert!(matches!(
            app.choose_role(Role::Unset),
            Err(HealthverseError::Validation { .. })
        ));
    }

    #[test]
    fn session_restored_from_backend() {
        let mut session = Session::new("Ana", "ana@x.com");
        session.role = Role::Patient;
        let backend = InMemoryKeyValueStore::new()
            .with_entry("healthverse_user", serde_json::to_string(&session).unwrap());

        let app = app_over(backend);
        let nav = app.visit("/patient/medications").unwrap();
        assert_eq!(nav.screen, Screen::PatientMedications);
        let active: Vec<_> = nav
            .nav
            .unwrap()
            .items
            .into_iter()
            .filter(|item| item.active)
            .map(|item| item.label)
            .collect();
        assert_eq!(active, ["Medications"]);
    }

    // ── Redirect loops ───────────────────────────────────────────────────────

    struct Bounce;

    impl RouteGuard for Bounce {
        fn evaluate(&self, _path: &str, _session: Option<&Session>) -> GuardVerdict {
            GuardVerdict::Redirect {
                to: Screen::Login,
                reason: RedirectReason::Unauthenticated,
            }
        }
    }

    #[test]
    fn redirect_loop_is_an_error() {
        let store = SessionStore::open(
            Arc::new(InMemoryKeyValueStore::new()),
            SessionConfig::default(),
        );
        let app = App::new(store, Box::new(Bounce));
        assert!(matches!(app.visit("/login"), Err(HealthverseError::Config { .. })));
    }

    // ── Dashboards ───────────────────────────────────────────────────────────

    #[test]
    fn dashboard_summaries_from_fixtures() {
        assert!(DashboardSummary::for_role(Role::Unset).is_none());

        assert_eq!(
            DashboardSummary::for_role(Role::Patient),
            Some(DashboardSummary::Patient {
                calories_today: 1650,
                medications: 3,
                upcoming_appointments: 2,
            })
        );
        assert_eq!(
            DashboardSummary::for_role(Role::Doctor),
            Some(DashboardSummary::Doctor {
                pending_appointments: 1,
                confirmed_appointments: 1,
                weekly_slots: 29,
            })
        );
        match DashboardSummary::for_role(Role::Pharmacy) {
            Some(DashboardSummary::Pharmacy(stats)) => {
                assert_eq!(stats.total_revenue_cents, 3797);
                assert_eq!(stats.total_products, 5);
            }
            other => panic!("unexpected summary {other:?}"),
        }
    }
}
