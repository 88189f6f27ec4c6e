//! # healthverse-contracts
//!
//! Shared types for the HealthVerse session and routing runtime.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate: only data definitions and error types.

pub mod error;
pub mod guard;
pub mod role;
pub mod screen;
pub mod session;

#[cfg(test)]
mod tests {
    use super::*;
    use error::HealthverseError;
    use guard::GuardState;
    use role::Role;
    use screen::Screen;
    use session::{display_name_from_email, Session, UserId};

    // ── Role ─────────────────────────────────────────────────────────────────

    #[test]
    fn role_parses_concrete_names_only() {
        assert_eq!("patient".parse::<Role>().unwrap(), Role::Patient);
        assert_eq!("doctor".parse::<Role>().unwrap(), Role::Doctor);
        assert_eq!(" pharmacy ".parse::<Role>().unwrap(), Role::Pharmacy);

        for bad in ["Member", "unset", "", "Patient"] {
            match bad.parse::<Role>() {
                Err(HealthverseError::UnknownRole { value }) => assert_eq!(value, bad.trim()),
                other => panic!("expected UnknownRole for {bad:?}, got {:?}", other),
            }
        }
    }

    #[test]
    fn role_dashboards() {
        assert_eq!(Role::Patient.dashboard(), Screen::PatientDashboard);
        assert_eq!(Role::Doctor.dashboard(), Screen::DoctorDashboard);
        assert_eq!(Role::Pharmacy.dashboard(), Screen::PharmacyDashboard);
        assert_eq!(Role::Unset.dashboard(), Screen::RoleSelection);
    }

    #[test]
    fn unset_role_serializes_as_null() {
        assert_eq!(serde_json::to_string(&Role::Unset).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");

        let decoded: Role = serde_json::from_str("null").unwrap();
        assert_eq!(decoded, Role::Unset);
        assert!(serde_json::from_str::<Role>("\"Member\"").is_err());
    }

    // ── Session ──────────────────────────────────────────────────────────────

    #[test]
    fn new_session_is_unrouted() {
        let session = Session::new("Ana", "ana@x.com");
        assert_eq!(session.role, Role::Unset);
        assert!(!session.is_routed());
        assert!(!session.id.0.is_empty());
    }

    #[test]
    fn user_ids_are_unique() {
        let ids: std::collections::HashSet<String> =
            (0..100).map(|_| UserId::new().0).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn session_reads_user_id_alias_and_missing_role() {
        let json = r#"{"userId":"abc1234","name":"Ana","email":"ana@x.com"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, UserId("abc1234".to_string()));
        assert_eq!(session.role, Role::Unset);
    }

    #[test]
    fn display_name_is_email_local_part() {
        assert_eq!(display_name_from_email("ana@x.com"), "ana");
        assert_eq!(display_name_from_email("no-at-sign"), "no-at-sign");
        assert_eq!(display_name_from_email("@x.com"), "");
    }

    // ── Screen ───────────────────────────────────────────────────────────────

    #[test]
    fn every_routed_screen_resolves_from_its_path() {
        for screen in Screen::ROUTED {
            assert_eq!(Screen::from_path(screen.path()), screen);
        }
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        assert_eq!(Screen::from_path("/nope"), Screen::NotFound);
        assert_eq!(Screen::from_path("/patient"), Screen::NotFound);
        assert_eq!(Screen::from_path("/patient/dashboard/"), Screen::PatientDashboard);
        assert_eq!(Screen::from_path("/"), Screen::Landing);
    }

    #[test]
    fn screen_namespaces_follow_path_prefix() {
        assert_eq!(Screen::PatientDiet.namespace(), Some(Role::Patient));
        assert_eq!(Screen::DoctorConsultation.namespace(), Some(Role::Doctor));
        assert_eq!(Screen::PharmacyOrders.namespace(), Some(Role::Pharmacy));
        assert_eq!(Screen::RoleSelection.namespace(), None);
        assert_eq!(Screen::NotFound.namespace(), None);
    }

    // ── GuardState ───────────────────────────────────────────────────────────

    #[test]
    fn guard_state_derivation() {
        assert_eq!(GuardState::of(None), GuardState::Unauthenticated);

        let mut session = Session::new("Ana", "ana@x.com");
        assert_eq!(GuardState::of(Some(&session)), GuardState::AuthenticatedUnrouted);

        session.role = Role::Pharmacy;
        assert_eq!(
            GuardState::of(Some(&session)),
            GuardState::AuthenticatedRouted(Role::Pharmacy)
        );
    }

    // ── HealthverseError display messages ────────────────────────────────────

    #[test]
    fn error_display_messages() {
        let err = HealthverseError::CorruptedSession {
            reason: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("corrupted session record"));

        let err = HealthverseError::NotFound {
            kind: "order".to_string(),
            id: "o9".to_string(),
        };
        assert_eq!(err.to_string(), "order 'o9' not found");

        let err = HealthverseError::UnknownRole { value: "Member".to_string() };
        assert!(err.to_string().contains("Member"));
    }
}
