//! Static seed data, reset on every process start.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use clinic_common::{
    Appointment, AppointmentStatus, AppointmentType, Doctor, EmergencyContact, Gender,
    MedicalHistory, Patient, Role, StaffUser, WorkingHours,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid seed time")
}

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid seed timestamp")
        .with_timezone(&Utc)
}

pub fn users() -> Vec<StaffUser> {
    vec![
        StaffUser {
            id: "1".to_string(),
            first_name: "Elton".to_string(),
            last_name: "Admin".to_string(),
            email: "elton@clinic.com".to_string(),
            role: Role::Admin,
            pin: "E301277".to_string(),
            is_active: true,
        },
        StaffUser {
            id: "2".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.johnson@clinic.com".to_string(),
            role: Role::Doctor,
            pin: "1234".to_string(),
            is_active: true,
        },
        StaffUser {
            id: "3".to_string(),
            first_name: "Mary".to_string(),
            last_name: "Smith".to_string(),
            email: "mary.smith@clinic.com".to_string(),
            role: Role::Reception,
            pin: "5678".to_string(),
            is_active: true,
        },
    ]
}

pub fn doctors() -> Vec<Doctor> {
    // Monday to Friday
    let weekdays = vec![1, 2, 3, 4, 5];
    vec![
        Doctor {
            id: "2".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            specialization: "General Medicine".to_string(),
            email: "sarah.johnson@clinic.com".to_string(),
            phone: "+1-555-0123".to_string(),
            working_hours: WorkingHours {
                start: time(9, 0),
                end: time(17, 0),
                working_days: weekdays.clone(),
            },
            is_active: true,
        },
        Doctor {
            id: "4".to_string(),
            first_name: "Dr. Michael".to_string(),
            last_name: "Brown".to_string(),
            specialization: "Cardiology".to_string(),
            email: "michael.brown@clinic.com".to_string(),
            phone: "+1-555-0124".to_string(),
            working_hours: WorkingHours {
                start: time(10, 0),
                end: time(18, 0),
                working_days: weekdays,
            },
            is_active: true,
        },
    ]
}

pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: date(1985, 6, 15),
            gender: Gender::Male,
            phone: "+1-555-0101".to_string(),
            email: "john.doe@email.com".to_string(),
            address: "123 Main St, City, State 12345".to_string(),
            emergency_contact: EmergencyContact {
                name: "Jane Doe".to_string(),
                phone: "+1-555-0102".to_string(),
                relationship: "Spouse".to_string(),
            },
            medical_history: MedicalHistory {
                allergies: vec!["Penicillin".to_string()],
                current_medications: vec!["Lisinopril 10mg".to_string()],
                chronic_conditions: vec!["Hypertension".to_string()],
                past_surgeries: vec![],
            },
            created_at: timestamp("2024-01-15T10:00:00Z"),
            updated_at: timestamp("2024-01-15T10:00:00Z"),
        },
        Patient {
            id: "2".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Wilson".to_string(),
            date_of_birth: date(1992, 3, 22),
            gender: Gender::Female,
            phone: "+1-555-0103".to_string(),
            email: "alice.wilson@email.com".to_string(),
            address: "456 Oak Ave, City, State 12345".to_string(),
            emergency_contact: EmergencyContact {
                name: "Bob Wilson".to_string(),
                phone: "+1-555-0104".to_string(),
                relationship: "Brother".to_string(),
            },
            medical_history: MedicalHistory {
                past_surgeries: vec!["Appendectomy 2018".to_string()],
                ..MedicalHistory::default()
            },
            created_at: timestamp("2024-02-01T14:30:00Z"),
            updated_at: timestamp("2024-02-01T14:30:00Z"),
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".to_string(),
            patient_id: "1".to_string(),
            doctor_id: "2".to_string(),
            appointment_date: date(2024, 8, 27),
            appointment_time: time(10, 0),
            duration: 30,
            appointment_type: AppointmentType::Consultation,
            status: AppointmentStatus::Scheduled,
            notes: Some("Follow-up for blood pressure".to_string()),
            created_at: timestamp("2024-08-26T09:00:00Z"),
            updated_at: timestamp("2024-08-26T09:00:00Z"),
        },
        Appointment {
            id: "2".to_string(),
            patient_id: "2".to_string(),
            doctor_id: "4".to_string(),
            appointment_date: date(2024, 8, 28),
            appointment_time: time(14, 0),
            duration: 45,
            appointment_type: AppointmentType::NewPatient,
            status: AppointmentStatus::Confirmed,
            notes: Some("First consultation".to_string()),
            created_at: timestamp("2024-08-25T11:00:00Z"),
            updated_at: timestamp("2024-08-26T08:00:00Z"),
        },
    ]
}

/// Time slots the public booking form offers.
pub fn bookable_times() -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    for hour in [9, 10, 11] {
        slots.push(time(hour, 0));
        slots.push(time(hour, 30));
    }
    for hour in [14, 15, 16] {
        slots.push(time(hour, 0));
        slots.push(time(hour, 30));
    }
    slots
}
