//! Dashboard summaries, one per role, computed from freshly seeded pages.

use serde::Serialize;

use healthverse_contracts::role::Role;

use crate::models::AppointmentStatus;
use crate::pages::{
    doctor::{Availability, DoctorAppointments},
    patient::{DietDiary, MedicationReminders, PatientAppointments},
    pharmacy::{DashboardStats, Inventory, OrderBook},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardSummary {
    Patient {
        calories_today: u32,
        medications: usize,
        upcoming_appointments: usize,
    },
    Doctor {
        pending_appointments: usize,
        confirmed_appointments: usize,
        weekly_slots: usize,
    },
    Pharmacy(DashboardStats),
}

impl DashboardSummary {
    /// The summary for `role`; `None` while no role is chosen.
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Unset => None,
            Role::Patient => Some(DashboardSummary::Patient {
                calories_today: DietDiary::default().totals().calories,
                medications: MedicationReminders::default().medications().len(),
                upcoming_appointments: PatientAppointments::default().upcoming().len(),
            }),
            Role::Doctor => {
                let appointments = DoctorAppointments::default();
                let availability = Availability::default();
                Some(DashboardSummary::Doctor {
                    pending_appointments: appointments
                        .with_status(AppointmentStatus::Pending)
                        .len(),
                    confirmed_appointments: appointments
                        .with_status(AppointmentStatus::Confirmed)
                        .len(),
                    weekly_slots: availability.schedule().iter().map(|d| d.slots.len()).sum(),
                })
            }
            Role::Pharmacy => {
                let inventory = Inventory::default();
                let orders = OrderBook::default();
                Some(DashboardSummary::Pharmacy(DashboardStats::compute(
                    inventory.items(),
                    orders.orders(),
                )))
            }
        }
    }
}
