//! Doctor screens: appointment list, weekly availability, video consultation,
//! and patient notes.

use chrono::{NaiveDate, NaiveTime, Weekday};
use tracing::info;

use healthverse_contracts::error::{HealthverseError, HealthverseResult};

use super::{matches_query, next_id, not_found, require};
use crate::mock_data;
use crate::models::{
    Appointment, AppointmentStatus, ChatMessage, DaySchedule, PatientNote, Sender,
};

// ── Appointments ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DoctorAppointments {
    appointments: Vec<Appointment>,
}

impl Default for DoctorAppointments {
    fn default() -> Self {
        Self { appointments: mock_data::appointments() }
    }
}

impl DoctorAppointments {
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn with_status(&self, status: AppointmentStatus) -> Vec<&Appointment> {
        self.appointments.iter().filter(|a| a.status == status).collect()
    }

    /// Appointments on `date` that are still going ahead.
    pub fn on(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.date == date && a.status != AppointmentStatus::Cancelled)
            .collect()
    }

    pub fn cancel(&mut self, id: &str) -> HealthverseResult<()> {
        self.set_status(id, AppointmentStatus::Cancelled)
    }

    pub fn complete(&mut self, id: &str) -> HealthverseResult<()> {
        self.set_status(id, AppointmentStatus::Completed)
    }

    fn set_status(&mut self, id: &str, status: AppointmentStatus) -> HealthverseResult<()> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found("appointment", id))?;
        info!(appointment = %id, from = ?appointment.status, to = ?status, "appointment updated");
        appointment.status = status;
        Ok(())
    }
}

// ── Availability ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Availability {
    schedule: Vec<DaySchedule>,
    // Indexed by `Weekday::num_days_from_monday`.
    work_days: [bool; 7],
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            schedule: mock_data::doctor_availability(),
            work_days: [true, true, true, true, true, false, false],
        }
    }
}

impl Availability {
    pub fn schedule(&self) -> &[DaySchedule] {
        &self.schedule
    }

    pub fn slots(&self, day: Weekday) -> &[NaiveTime] {
        self.schedule
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.slots.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_work_day(&self, day: Weekday) -> bool {
        self.work_days[day.num_days_from_monday() as usize]
    }

    /// Flip a day between available and unavailable; returns the new state.
    pub fn toggle_work_day(&mut self, day: Weekday) -> bool {
        let flag = &mut self.work_days[day.num_days_from_monday() as usize];
        *flag = !*flag;
        *flag
    }

    /// Add a slot, keeping the day sorted. Adding an existing slot fails.
    pub fn add_slot(&mut self, day: Weekday, time: NaiveTime) -> HealthverseResult<()> {
        let idx = match self.schedule.iter().position(|d| d.day == day) {
            Some(idx) => idx,
            None => {
                self.schedule.push(DaySchedule { day, slots: Vec::new() });
                self.schedule.len() - 1
            }
        };

        let slots = &mut self.schedule[idx].slots;
        match slots.binary_search(&time) {
            Ok(_) => Err(HealthverseError::Validation {
                reason: format!("{} on {} is already available", time.format("%H:%M"), day),
            }),
            Err(pos) => {
                slots.insert(pos, time);
                Ok(())
            }
        }
    }

    pub fn remove_slot(&mut self, day: Weekday, time: NaiveTime) -> HealthverseResult<()> {
        let slots = self
            .schedule
            .iter_mut()
            .find(|d| d.day == day)
            .map(|d| &mut d.slots)
            .ok_or_else(|| not_found("schedule", &day.to_string()))?;

        let before = slots.len();
        slots.retain(|t| *t != time);
        if slots.len() == before {
            return Err(not_found("slot", &time.format("%H:%M").to_string()));
        }
        Ok(())
    }
}

// ── Consultation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Consultation {
    messages: Vec<ChatMessage>,
    pub muted: bool,
    pub video_off: bool,
}

impl Default for Consultation {
    fn default() -> Self {
        Self {
            messages: mock_data::consultation_messages(),
            muted: false,
            video_off: false,
        }
    }
}

impl Consultation {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Post a message as the doctor. Blank text is ignored.
    pub fn send_message(&mut self, text: &str, at: NaiveTime) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.messages.push(ChatMessage {
            id,
            sender: Sender::Doctor,
            text: text.to_string(),
            time: at,
        });
        self.messages.last()
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn toggle_video(&mut self) -> bool {
        self.video_off = !self.video_off;
        self.video_off
    }
}

// ── Patient notes ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PatientNotes {
    notes: Vec<PatientNote>,
}

impl Default for PatientNotes {
    fn default() -> Self {
        Self { notes: mock_data::patient_notes() }
    }
}

impl PatientNotes {
    /// Notes whose patient name matches `query`, newest first.
    pub fn search(&self, query: &str) -> Vec<&PatientNote> {
        self.notes
            .iter()
            .filter(|n| matches_query(&n.patient_name, query))
            .collect()
    }

    pub fn add_note(
        &mut self,
        patient_name: &str,
        text: &str,
        date: NaiveDate,
    ) -> HealthverseResult<&PatientNote> {
        require("patient name", patient_name)?;
        require("note", text)?;

        let note = PatientNote {
            id: next_id("n", self.notes.iter().map(|n| n.id.as_str())),
            patient_id: patient_key(patient_name),
            patient_name: patient_name.trim().to_string(),
            date,
            notes: text.trim().to_string(),
        };
        self.notes.insert(0, note);
        Ok(&self.notes[0])
    }
}

/// Stable key for a patient typed in by name.
fn patient_key(name: &str) -> String {
    name.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
