//! Patient screens: diet diary, recipes, medications, appointments, and
//! medicine ordering.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use healthverse_contracts::{
    error::{HealthverseError, HealthverseResult},
    session::Session,
};

use super::{matches_query, next_id, not_found, require};
use crate::mock_data;
use crate::models::{
    Appointment, AppointmentStatus, Doctor, InventoryItem, Meal, Medication, Order, OrderLine,
    OrderStatus, Recipe, VisitType,
};

// ── Diet ──────────────────────────────────────────────────────────────────────

/// Summed macros across the diary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// Input for a new diary entry.
#[derive(Debug, Clone)]
pub struct NewMeal {
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub time: NaiveTime,
}

#[derive(Debug, Clone)]
pub struct DietDiary {
    meals: Vec<Meal>,
}

impl Default for DietDiary {
    fn default() -> Self {
        Self { meals: mock_data::meals() }
    }
}

impl DietDiary {
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn add_meal(&mut self, meal: NewMeal) -> HealthverseResult<&Meal> {
        require("meal name", &meal.name)?;
        let id = next_id("m", self.meals.iter().map(|m| m.id.as_str()));
        self.meals.push(Meal {
            id,
            name: meal.name.trim().to_string(),
            calories: meal.calories,
            protein: meal.protein,
            carbs: meal.carbs,
            fat: meal.fat,
            time: meal.time,
        });
        Ok(&self.meals[self.meals.len() - 1])
    }

    pub fn totals(&self) -> MacroTotals {
        self.meals.iter().fold(MacroTotals::default(), |acc, m| MacroTotals {
            calories: acc.calories.saturating_add(m.calories),
            protein: acc.protein.saturating_add(m.protein),
            carbs: acc.carbs.saturating_add(m.carbs),
            fat: acc.fat.saturating_add(m.fat),
        })
    }
}

// ── Recipes ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self { recipes: mock_data::recipes() }
    }
}

impl RecipeBook {
    pub const HIGH_PROTEIN_GRAMS: u32 = 20;
    pub const LOW_CARB_GRAMS: u32 = 30;

    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| matches_query(&r.name, query)).collect()
    }

    pub fn high_protein(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.protein >= Self::HIGH_PROTEIN_GRAMS).collect()
    }

    pub fn low_carb(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.carbs <= Self::LOW_CARB_GRAMS).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}

// ── Medications ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub times: Vec<NaiveTime>,
    pub purpose: String,
    pub refill: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct MedicationReminders {
    medications: Vec<Medication>,
}

impl Default for MedicationReminders {
    fn default() -> Self {
        Self { medications: mock_data::medications() }
    }
}

impl MedicationReminders {
    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn add_medication(&mut self, new: NewMedication) -> HealthverseResult<&Medication> {
        require("medication name", &new.name)?;
        let id = next_id("med", self.medications.iter().map(|m| m.id.as_str()));
        let mut times = new.times;
        times.sort();
        times.dedup();

        self.medications.push(Medication {
            id,
            name: new.name.trim().to_string(),
            dosage: new.dosage,
            frequency: new.frequency,
            times,
            purpose: new.purpose,
            refill: new.refill,
            doses_taken: 0,
        });
        Ok(&self.medications[self.medications.len() - 1])
    }

    /// Record one dose of `id`; returns the running count.
    pub fn take(&mut self, id: &str) -> HealthverseResult<u32> {
        let med = self
            .medications
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found("medication", id))?;
        med.doses_taken += 1;
        info!(medication = %med.name, doses = med.doses_taken, "dose recorded");
        Ok(med.doses_taken)
    }

    /// Medications whose refill date is on or before `by`.
    pub fn refills_due(&self, by: NaiveDate) -> Vec<&Medication> {
        self.medications
            .iter()
            .filter(|m| m.refill.is_some_and(|d| d <= by))
            .collect()
    }
}

// ── Appointments ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PatientAppointments {
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
}

impl Default for PatientAppointments {
    fn default() -> Self {
        Self {
            doctors: mock_data::doctors(),
            appointments: mock_data::appointments(),
        }
    }
}

impl PatientAppointments {
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Everything not cancelled, soonest first.
    pub fn upcoming(&self) -> Vec<&Appointment> {
        let mut list: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.status != AppointmentStatus::Cancelled)
            .collect();
        list.sort_by_key(|a| (a.date, a.time));
        list
    }

    /// Book a confirmed appointment with `doctor_id` for `patient`.
    pub fn book(
        &mut self,
        patient: &Session,
        doctor_id: &str,
        date: NaiveDate,
        time: NaiveTime,
        visit_type: VisitType,
    ) -> HealthverseResult<&Appointment> {
        let doctor = self
            .doctors
            .iter()
            .find(|d| d.id == doctor_id)
            .ok_or_else(|| not_found("doctor", doctor_id))?;

        let clash = self.appointments.iter().any(|a| {
            a.doctor_id == doctor_id
                && a.date == date
                && a.time == time
                && a.status != AppointmentStatus::Cancelled
        });
        if clash {
            return Err(HealthverseError::Validation {
                reason: format!("{} is already booked at {} {}", doctor.name, date, time.format("%H:%M")),
            });
        }

        let appointment = Appointment {
            id: next_id("a", self.appointments.iter().map(|a| a.id.as_str())),
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            patient_name: patient.name.clone(),
            date,
            time,
            status: AppointmentStatus::Confirmed,
            visit_type,
        };
        info!(appointment = %appointment.id, doctor = %appointment.doctor_name, "appointment booked");
        self.appointments.push(appointment);
        Ok(&self.appointments[self.appointments.len() - 1])
    }

    pub fn cancel(&mut self, id: &str) -> HealthverseResult<()> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found("appointment", id))?;
        appointment.status = AppointmentStatus::Cancelled;
        Ok(())
    }
}

// ── Medicine order ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MedicineOrder {
    catalog: Vec<InventoryItem>,
    cart: Vec<OrderLine>,
    orders: Vec<Order>,
}

impl Default for MedicineOrder {
    fn default() -> Self {
        Self {
            catalog: mock_data::pharmacy_inventory(),
            cart: Vec::new(),
            orders: Vec::new(),
        }
    }
}

impl MedicineOrder {
    pub fn search(&self, query: &str) -> Vec<&InventoryItem> {
        self.catalog.iter().filter(|i| matches_query(&i.name, query)).collect()
    }

    pub fn cart(&self) -> &[OrderLine] {
        &self.cart
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Add one unit of `item_id`, bumping the quantity if already in the cart.
    pub fn add_to_cart(&mut self, item_id: &str) -> HealthverseResult<()> {
        if let Some(line) = self.cart.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity += 1;
            return Ok(());
        }

        let item = self
            .catalog
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| not_found("medicine", item_id))?;
        self.cart.push(OrderLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            quantity: 1,
            price_cents: item.price_cents,
        });
        Ok(())
    }

    /// Adjust a cart line by `delta`; the quantity never drops below one.
    pub fn update_quantity(&mut self, item_id: &str, delta: i32) -> HealthverseResult<u32> {
        let line = self
            .cart
            .iter_mut()
            .find(|l| l.item_id == item_id)
            .ok_or_else(|| not_found("cart item", item_id))?;
        let next = i64::from(line.quantity) + i64::from(delta);
        line.quantity = u32::try_from(next.max(1)).unwrap_or(u32::MAX);
        Ok(line.quantity)
    }

    pub fn remove_from_cart(&mut self, item_id: &str) {
        self.cart.retain(|l| l.item_id != item_id);
    }

    pub fn total_cents(&self) -> u64 {
        self.cart.iter().map(OrderLine::subtotal_cents).sum()
    }

    /// Turn the cart into a processing order and empty it.
    pub fn place_order(&mut self, patient: &Session, date: NaiveDate) -> HealthverseResult<&Order> {
        if self.cart.is_empty() {
            return Err(HealthverseError::Validation {
                reason: "cart is empty".to_string(),
            });
        }

        let order = Order {
            id: next_id("ord", self.orders.iter().map(|o| o.id.as_str())),
            patient_id: patient.id.0.clone(),
            patient_name: patient.name.clone(),
            total_cents: self.total_cents(),
            lines: std::mem::take(&mut self.cart),
            status: OrderStatus::Processing,
            date,
        };
        info!(order = %order.id, total_cents = order.total_cents, "medicine order placed");
        self.orders.push(order);
        Ok(&self.orders[self.orders.len() - 1])
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
