//! Clinic domain records.
//!
//! These mirror the seed data the backend resets on every start: the staff
//! directory, patients, doctors and appointments. All ids are opaque strings
//! allocated by the store.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A directory identity used by the login gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    /// Secret PIN, compared in plaintext at login. Never serialized into
    /// responses.
    #[serde(skip_serializing)]
    pub pin: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Emergency contact attached to a patient record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// Free-form medical history lists carried on a patient record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistory {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub current_medications: Vec<String>,
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
    #[serde(default)]
    pub past_surgeries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: EmergencyContact,
    pub medical_history: MedicalHistory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Weekly working hours. Days use 0-6 (Sunday-Saturday).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub working_days: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub email: String,
    pub phone: String,
    pub working_hours: WorkingHours,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    Consultation,
    FollowUp,
    Procedure,
    NewPatient,
}

impl AppointmentType {
    /// All variants, in the order the booking form offers them.
    pub const ALL: [AppointmentType; 4] = [
        AppointmentType::Consultation,
        AppointmentType::FollowUp,
        AppointmentType::NewPatient,
        AppointmentType::Procedure,
    ];

    /// Wire value, matching the serde rename.
    pub fn value(&self) -> &'static str {
        match self {
            AppointmentType::Consultation => "consultation",
            AppointmentType::FollowUp => "follow-up",
            AppointmentType::NewPatient => "new-patient",
            AppointmentType::Procedure => "procedure",
        }
    }

    /// Human-readable label for the booking form.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentType::Consultation => "General Consultation",
            AppointmentType::FollowUp => "Follow-up Visit",
            AppointmentType::NewPatient => "New Patient Visit",
            AppointmentType::Procedure => "Medical Procedure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    /// Duration in minutes.
    pub duration: u32,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_user_pin_is_never_serialized() {
        let user = StaffUser {
            id: "1".to_string(),
            first_name: "Mary".to_string(),
            last_name: "Smith".to_string(),
            email: "mary.smith@clinic.com".to_string(),
            role: Role::Reception,
            pin: "5678".to_string(),
            is_active: true,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("5678"));
        assert!(!json.contains("pin"));
    }

    #[test]
    fn appointment_type_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&AppointmentType::FollowUp).unwrap(),
            "\"follow-up\""
        );
        assert_eq!(
            serde_json::to_string(&AppointmentType::NewPatient).unwrap(),
            "\"new-patient\""
        );
    }

    #[test]
    fn appointment_status_no_show_spelling() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::NoShow).unwrap(),
            "\"no-show\""
        );
    }
}
