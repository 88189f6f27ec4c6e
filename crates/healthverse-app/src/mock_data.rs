//! Simulated healthcare data for the HealthVerse screens.
//!
//! All data in this module is hardcoded and fictional. Every screen seeds its
//! local state from these fixtures; nothing is fetched or persisted.

use chrono::{NaiveDate, NaiveTime, Weekday};

use crate::models::{
    Appointment, AppointmentStatus, ChatMessage, DaySchedule, Doctor, InventoryItem, ItemCategory,
    Meal, Medication, Order, OrderLine, OrderStatus, PatientNote, Recipe, Sender, VisitType,
};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── Patient ───────────────────────────────────────────────────────────────────

/// Today's diary: breakfast, lunch, dinner.
pub fn meals() -> Vec<Meal> {
    let meal = |id: &str, name: &str, kcal, p, c, f, at| Meal {
        id: id.to_string(),
        name: name.to_string(),
        calories: kcal,
        protein: p,
        carbs: c,
        fat: f,
        time: at,
    };
    vec![
        meal("m1", "Breakfast", 450, 25, 55, 12, time(8, 0)),
        meal("m2", "Lunch", 650, 35, 70, 20, time(13, 0)),
        meal("m3", "Dinner", 550, 30, 60, 15, time(19, 0)),
    ]
}

pub fn recipes() -> Vec<Recipe> {
    let recipe = |id: &str, name: &str, kcal, p, c, f, ingredients: &[&str], how: &str| Recipe {
        id: id.to_string(),
        name: name.to_string(),
        calories: kcal,
        protein: p,
        carbs: c,
        fat: f,
        ingredients: strings(ingredients),
        instructions: how.to_string(),
    };
    vec![
        recipe(
            "r1",
            "Protein-Packed Greek Yogurt Bowl",
            320, 25, 30, 10,
            &["Greek yogurt", "Honey", "Berries", "Nuts", "Granola"],
            "Mix all ingredients in a bowl and enjoy!",
        ),
        recipe(
            "r2",
            "Grilled Chicken Salad",
            380, 35, 15, 20,
            &["Chicken breast", "Mixed greens", "Tomatoes", "Cucumber", "Olive oil", "Lemon juice"],
            "Grill chicken, chop vegetables, mix with dressing.",
        ),
        recipe(
            "r3",
            "Salmon with Quinoa",
            450, 30, 35, 22,
            &["Salmon fillet", "Quinoa", "Asparagus", "Lemon", "Olive oil", "Dill"],
            "Bake salmon, cook quinoa, steam asparagus, serve together.",
        ),
        recipe(
            "r4",
            "Vegetarian Buddha Bowl",
            410, 15, 60, 16,
            &["Chickpeas", "Brown rice", "Avocado", "Sweet potato", "Kale", "Tahini"],
            "Roast veggies, cook rice, assemble in a bowl with dressing.",
        ),
        recipe(
            "r5",
            "Protein Smoothie",
            280, 20, 35, 5,
            &["Protein powder", "Banana", "Spinach", "Almond milk", "Chia seeds"],
            "Blend all ingredients until smooth.",
        ),
    ]
}

pub fn medications() -> Vec<Medication> {
    let med = |id: &str, name: &str, dosage: &str, freq: &str, times: Vec<NaiveTime>, purpose: &str, refill| {
        Medication {
            id: id.to_string(),
            name: name.to_string(),
            dosage: dosage.to_string(),
            frequency: freq.to_string(),
            times,
            purpose: purpose.to_string(),
            refill: Some(refill),
            doses_taken: 0,
        }
    };
    vec![
        med("med1", "Lisinopril", "10mg", "Once daily", vec![time(9, 0)], "Blood pressure", date(2023, 5, 15)),
        med(
            "med2",
            "Metformin",
            "500mg",
            "Twice daily",
            vec![time(9, 0), time(18, 0)],
            "Diabetes",
            date(2023, 5, 20),
        ),
        med("med3", "Vitamin D", "2000 IU", "Once daily", vec![time(9, 0)], "Supplement", date(2023, 6, 10)),
    ]
}

pub fn doctors() -> Vec<Doctor> {
    let doctor = |id: &str, name: &str, specialty: &str, rating| Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        rating,
    };
    vec![
        doctor("d1", "Dr. Sarah Smith", "Cardiologist", 4.8),
        doctor("d2", "Dr. Robert Johnson", "Family Medicine", 4.6),
        doctor("d3", "Dr. Emily Chen", "Dermatologist", 4.9),
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "a1".to_string(),
            doctor_id: "d1".to_string(),
            doctor_name: "Dr. Sarah Smith".to_string(),
            specialty: "Cardiologist".to_string(),
            patient_name: "John Doe".to_string(),
            date: date(2023, 5, 10),
            time: time(10, 0),
            status: AppointmentStatus::Confirmed,
            visit_type: VisitType::InPerson,
        },
        Appointment {
            id: "a2".to_string(),
            doctor_id: "d2".to_string(),
            doctor_name: "Dr. Robert Johnson".to_string(),
            specialty: "Family Medicine".to_string(),
            patient_name: "John Doe".to_string(),
            date: date(2023, 5, 15),
            time: time(14, 30),
            status: AppointmentStatus::Pending,
            visit_type: VisitType::Virtual,
        },
    ]
}

// ── Doctor ────────────────────────────────────────────────────────────────────

/// Weekday slots: 09–11 and 14–16 on the hour, Friday ending at 15:00.
pub fn doctor_availability() -> Vec<DaySchedule> {
    let full = || vec![time(9, 0), time(10, 0), time(11, 0), time(14, 0), time(15, 0), time(16, 0)];
    let mut friday = full();
    friday.pop();

    vec![
        DaySchedule { day: Weekday::Mon, slots: full() },
        DaySchedule { day: Weekday::Tue, slots: full() },
        DaySchedule { day: Weekday::Wed, slots: full() },
        DaySchedule { day: Weekday::Thu, slots: full() },
        DaySchedule { day: Weekday::Fri, slots: friday },
    ]
}

pub fn patient_notes() -> Vec<PatientNote> {
    vec![
        PatientNote {
            id: "n1".to_string(),
            patient_id: "u1".to_string(),
            patient_name: "John Doe".to_string(),
            date: date(2023, 5, 1),
            notes: "Patient reports occasional chest pain. Blood pressure slightly elevated. \
                    Recommended lifestyle changes and scheduled follow-up in 2 weeks."
                .to_string(),
        },
        PatientNote {
            id: "n2".to_string(),
            patient_id: "u1".to_string(),
            patient_name: "John Doe".to_string(),
            date: date(2023, 4, 15),
            notes: "Annual check-up. All vitals normal. Recommended continuing current medication regimen."
                .to_string(),
        },
    ]
}

/// The opening of an in-progress video consultation.
pub fn consultation_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: 1,
            sender: Sender::Patient,
            text: "Hello doctor, I have some questions about my medication.".to_string(),
            time: time(10, 1),
        },
        ChatMessage {
            id: 2,
            sender: Sender::Doctor,
            text: "Hello! I'm happy to help. What seems to be the issue?".to_string(),
            time: time(10, 2),
        },
    ]
}

// ── Pharmacy ──────────────────────────────────────────────────────────────────

pub fn pharmacy_inventory() -> Vec<InventoryItem> {
    let item = |id: &str, name: &str, category, stock, price_cents, reorder_level| InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        stock,
        price_cents,
        reorder_level,
    };
    vec![
        item("i1", "Lisinopril", ItemCategory::Prescription, 150, 1299, 30),
        item("i2", "Metformin", ItemCategory::Prescription, 200, 1599, 40),
        item("i3", "Vitamin D", ItemCategory::OverTheCounter, 80, 899, 20),
        item("i4", "Ibuprofen", ItemCategory::OverTheCounter, 120, 699, 25),
        item("i5", "Amoxicillin", ItemCategory::Prescription, 75, 2099, 15),
    ]
}

pub fn pharmacy_orders() -> Vec<Order> {
    let line = |item_id: &str, name: &str, quantity, price_cents| OrderLine {
        item_id: item_id.to_string(),
        name: name.to_string(),
        quantity,
        price_cents,
    };
    vec![
        Order {
            id: "o1".to_string(),
            patient_id: "u1".to_string(),
            patient_name: "John Doe".to_string(),
            lines: vec![line("i1", "Lisinopril", 30, 1299)],
            status: OrderStatus::Pending,
            date: date(2023, 5, 5),
            total_cents: 1299,
        },
        Order {
            id: "o2".to_string(),
            patient_id: "u1".to_string(),
            patient_name: "John Doe".to_string(),
            lines: vec![
                line("i2", "Metformin", 60, 1599),
                line("i3", "Vitamin D", 30, 899),
            ],
            status: OrderStatus::Completed,
            date: date(2023, 4, 20),
            total_cents: 2498,
        },
    ]
}
