//! The navigation surface: every screen, its path, and navigation bar items.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// One screen of the application.
///
/// Shared screens sit at the root; role screens are namespaced under
/// `/patient`, `/doctor`, or `/pharmacy`. Any unrecognised path resolves to
/// `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Landing,
    Login,
    Register,
    RoleSelection,
    NotFound,

    PatientDashboard,
    PatientDiet,
    PatientRecipes,
    PatientMedications,
    PatientAppointments,
    PatientMedicineOrder,

    DoctorDashboard,
    DoctorAppointments,
    DoctorAvailability,
    DoctorConsultation,
    DoctorPatientNotes,

    PharmacyDashboard,
    PharmacyInventory,
    PharmacyOrders,
}

impl Screen {
    /// Every screen with a fixed path. `NotFound` is the catch-all and is
    /// deliberately absent.
    pub const ROUTED: [Screen; 18] = [
        Screen::Landing,
        Screen::Login,
        Screen::Register,
        Screen::RoleSelection,
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

    pub fn path(&self) -> &'static str {
        match self {
            Screen::Landing => "/",
            Screen::Login => "/login",
            Screen::Register => "/register",
            Screen::RoleSelection => "/role-selection",
            Screen::NotFound => "*",
            Screen::PatientDashboard => "/patient/dashboard",
            Screen::PatientDiet => "/patient/diet",
            Screen::PatientRecipes => "/patient/recipes",
            Screen::PatientMedications => "/patient/medications",
            Screen::PatientAppointments => "/patient/appointments",
            Screen::PatientMedicineOrder => "/patient/medicine-order",
            Screen::DoctorDashboard => "/doctor/dashboard",
            Screen::DoctorAppointments => "/doctor/appointments",
            Screen::DoctorAvailability => "/doctor/availability",
            Screen::DoctorConsultation => "/doctor/consultation",
            Screen::DoctorPatientNotes => "/doctor/patient-notes",
            Screen::PharmacyDashboard => "/pharmacy/dashboard",
            Screen::PharmacyInventory => "/pharmacy/inventory",
            Screen::PharmacyOrders => "/pharmacy/orders",
        }
    }

    /// Resolve a path to its screen. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Screen {
        let normalized = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Screen::ROUTED
            .into_iter()
            .find(|screen| screen.path() == normalized)
            .unwrap_or(Screen::NotFound)
    }

    /// The role whose path namespace this screen lives in, if any.
    pub fn namespace(&self) -> Option<Role> {
        let path = self.path();
        Role::CONCRETE.into_iter().find(|role| {
            role.as_str()
                .map(|name| path.starts_with(&format!("/{name}/")))
                .unwrap_or(false)
        })
    }
}

/// One entry of a role's bottom navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    /// True when this item points at the screen currently shown.
    pub active: bool,
}

/// The navigation bar rendered under a protected screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavBar {
    pub role: Role,
    pub items: Vec<NavItem>,
}
