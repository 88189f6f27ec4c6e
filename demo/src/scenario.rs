//! The end-to-end walkthrough run by `healthverse scenario`.
//!
//! Registers Ana, picks the doctor role, probes doctor and patient screens,
//! tries a rejected login, then logs out and checks a protected screen again.
//! Runs against an in-memory store so the state file is never touched.

use std::sync::Arc;

use healthverse_app::App;
use healthverse_contracts::{
    error::{HealthverseError, HealthverseResult},
    role::Role,
    screen::Screen,
};
use healthverse_core::{SessionConfig, SessionStore};
use healthverse_guard::RoleRouteGuard;
use healthverse_storage::InMemoryKeyValueStore;

use crate::print_navigation;

pub async fn run(config: SessionConfig, guard: RoleRouteGuard) -> HealthverseResult<()> {
    let store = SessionStore::open(Arc::new(InMemoryKeyValueStore::new()), config);
    let app = App::new(store, Box::new(guard));

    println!();
    println!("=== HealthVerse session scenario ===");
    println!();

    println!("  Step 1: register Ana <ana@x.com>");
    let nav = app
        .register("Ana", "ana@x.com", "secret1")
        .await?
        .ok_or_else(|| failed("registration was rejected"))?;
    print_navigation(&nav);
    expect(nav.screen, Screen::RoleSelection)?;
    println!();

    println!("  Step 2: choose the doctor role");
    let nav = app.choose_role(Role::Doctor)?;
    print_navigation(&nav);
    expect(nav.screen, Screen::DoctorDashboard)?;
    println!();

    println!("  Step 3: visit /doctor/consultation");
    let nav = app.visit("/doctor/consultation")?;
    print_navigation(&nav);
    expect(nav.screen, Screen::DoctorConsultation)?;
    println!();

    println!("  Step 4: visit /patient/diet as a doctor");
    let nav = app.visit("/patient/diet")?;
    print_navigation(&nav);
    expect(nav.screen, Screen::DoctorDashboard)?;
    println!();

    println!("  Step 5: log in with blank credentials");
    match app.login("", "").await? {
        None => println!("  Rejected (expected); session unchanged."),
        Some(_) => return Err(failed("blank credentials were accepted")),
    }
    println!();

    println!("  Step 6: log out, then visit /doctor/dashboard");
    app.logout()?;
    let nav = app.visit("/doctor/dashboard")?;
    print_navigation(&nav);
    expect(nav.screen, Screen::Login)?;
    println!();

    println!("  Scenario complete.");
    println!();
    Ok(())
}

fn expect(actual: Screen, wanted: Screen) -> HealthverseResult<()> {
    if actual != wanted {
        return Err(failed(&format!(
            "landed on {} instead of {}",
            actual.path(),
            wanted.path()
        )));
    }
    Ok(())
}

fn failed(reason: &str) -> HealthverseError {
    HealthverseError::Validation {
        reason: format!("scenario failed: {reason}"),
    }
}
