//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use careview::models::{
    Caregiver, Invoice, InvoiceStatus, Patient, TimeLog, TrainingModule, Visit, VisitStatus,
};
use careview::quiz::QuizQuestion;
use chrono::NaiveDate;

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn caregiver(id: &str, first: &str, last: &str, email: &str) -> Caregiver {
    Caregiver {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: None,
        specialization: None,
        hired_on: None,
        active: true,
    }
}

/// The directory fixture: names chosen to exercise case-insensitive search.
pub fn create_test_caregivers() -> Vec<Caregiver> {
    vec![
        caregiver("c1", "Alice", "Hart", "alice.hart@agency.example"),
        caregiver("c2", "bob", "marsh", "bob.marsh@agency.example"),
        caregiver("c3", "Carla", "Wellington", "carla.w@agency.example"),
    ]
}

pub fn patient(id: &str, first: &str, last: &str) -> Patient {
    Patient {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: None,
        phone: None,
        address: None,
        date_of_birth: None,
        care_level: None,
    }
}

pub fn visit(id: &str, date: NaiveDate, start: &str, status: VisitStatus) -> Visit {
    Visit {
        id: id.to_string(),
        caregiver_id: "c1".to_string(),
        caregiver_name: "Alice Hart".to_string(),
        patient_id: "p1".to_string(),
        patient_name: "Edith Moss".to_string(),
        date,
        start_time: start.to_string(),
        end_time: "17:00".to_string(),
        status,
        notes: None,
    }
}

/// Two days of visits; v2 and v3 share a sort key for stability checks.
pub fn create_test_visits() -> Vec<Visit> {
    vec![
        visit("v1", day(2024, 5, 6), "09:00", VisitStatus::Completed),
        visit("v2", day(2024, 5, 7), "10:00", VisitStatus::Scheduled),
        visit("v3", day(2024, 5, 7), "10:00", VisitStatus::Cancelled),
        visit("v4", day(2024, 5, 7), "08:30", VisitStatus::Scheduled),
    ]
}

pub fn invoice(
    id: &str,
    number: &str,
    issued_on: NaiveDate,
    amount: f64,
    status: InvoiceStatus,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        number: number.to_string(),
        patient_id: "p1".to_string(),
        patient_name: "Edith Moss".to_string(),
        issued_on,
        due_on: None,
        amount,
        status,
    }
}

pub fn create_test_invoices() -> Vec<Invoice> {
    vec![
        invoice("i1", "INV-2024-001", day(2024, 3, 1), 480.0, InvoiceStatus::Paid),
        invoice("i2", "INV-2024-002", day(2024, 4, 1), 320.0, InvoiceStatus::Sent),
        invoice("i3", "INV-2024-003", day(2024, 5, 1), 275.5, InvoiceStatus::Overdue),
        invoice("i4", "INV-2024-004", day(2024, 5, 2), 90.0, InvoiceStatus::Draft),
    ]
}

pub fn question(id: &str, correct: &str) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        prompt: format!("question {id}"),
        options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        correct_option: correct.to_string(),
    }
}

pub fn create_test_training() -> TrainingModule {
    TrainingModule {
        id: "t1".to_string(),
        title: "Safe lifting".to_string(),
        description: Some("Back-safe transfer techniques".to_string()),
        category: Some("safety".to_string()),
        questions: vec![
            question("q1", "A"),
            question("q2", "B"),
            question("q3", "C"),
        ],
    }
}

pub fn time_log(id: &str, date: NaiveDate, start: &str, end: &str) -> TimeLog {
    TimeLog {
        id: id.to_string(),
        caregiver_id: "c1".to_string(),
        caregiver_name: "Alice Hart".to_string(),
        date,
        start_time: start.to_string(),
        end_time: end.to_string(),
        notes: None,
    }
}

pub fn create_test_time_logs() -> Vec<TimeLog> {
    vec![
        time_log("l1", day(2024, 5, 6), "09:15", "10:00"),
        time_log("l2", day(2024, 5, 7), "08:00", "16:30"),
        time_log("l3", day(2024, 5, 7), "17:30", "19:00"),
    ]
}
