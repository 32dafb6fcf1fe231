//! In-memory clinic store.
//!
//! All domain data lives behind `RwLock`s and is rebuilt from the static
//! seed on every process start. Nothing is persisted.

pub mod seed;

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use clinic_common::{
    Appointment, AppointmentStatus, AppointmentType, Doctor, EmergencyContact, Gender,
    MedicalHistory, Patient, Role, StaffUser,
};

use crate::auth::verify_login;

/// Input for creating or replacing a directory identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub pin: String,
}

/// Input for creating or replacing a patient record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInput {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: EmergencyContact,
    #[serde(default)]
    pub medical_history: MedicalHistory,
}

/// Input for creating an appointment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInput {
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    #[serde(default = "default_status")]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_duration() -> u32 {
    30
}

fn default_status() -> AppointmentStatus {
    AppointmentStatus::Scheduled
}

/// Partial update for an appointment. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<NaiveTime>,
    pub duration: Option<u32>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

/// Filters for listing appointments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentFilter {
    pub date: Option<NaiveDate>,
    pub doctor_id: Option<String>,
    pub status: Option<AppointmentStatus>,
}

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_patients: usize,
    pub active_doctors: usize,
    pub appointments_today: usize,
    pub upcoming_appointments: usize,
}

pub struct ClinicStore {
    users: RwLock<Vec<StaffUser>>,
    patients: RwLock<Vec<Patient>>,
    doctors: RwLock<Vec<Doctor>>,
    appointments: RwLock<Vec<Appointment>>,
    next_id: AtomicU64,
}

impl ClinicStore {
    /// Build a store holding the static seed.
    pub fn seeded() -> Self {
        Self {
            users: RwLock::new(seed::users()),
            patients: RwLock::new(seed::patients()),
            doctors: RwLock::new(seed::doctors()),
            appointments: RwLock::new(seed::appointments()),
            // Seed ids top out at 4
            next_id: AtomicU64::new(5),
        }
    }

    fn alloc_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::Relaxed).to_string()
    }

    // ----- directory -----

    /// Run the login check against the directory.
    pub async fn verify_login(&self, identifier: &str, pin: &str) -> Option<StaffUser> {
        let users = self.users.read().await;
        verify_login(&users, identifier, pin).cloned()
    }

    pub async fn list_users(&self) -> Vec<StaffUser> {
        self.users.read().await.clone()
    }

    pub async fn create_user(&self, input: StaffUserInput) -> StaffUser {
        let user = StaffUser {
            id: self.alloc_id(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            role: input.role,
            pin: input.pin,
            is_active: true,
        };
        self.users.write().await.push(user.clone());
        user
    }

    pub async fn update_user(&self, id: &str, input: StaffUserInput) -> Option<StaffUser> {
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.id == id)?;
        user.first_name = input.first_name;
        user.last_name = input.last_name;
        user.email = input.email;
        user.role = input.role;
        user.pin = input.pin;
        Some(user.clone())
    }

    pub async fn delete_user(&self, id: &str) -> bool {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        users.len() != before
    }

    /// Flip the active flag. Existing sessions are untouched; the gate only
    /// checks the flag at login time.
    pub async fn toggle_user_active(&self, id: &str) -> Option<StaffUser> {
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.id == id)?;
        user.is_active = !user.is_active;
        Some(user.clone())
    }

    // ----- patients -----

    pub async fn list_patients(&self, search: Option<&str>) -> Vec<Patient> {
        let patients = self.patients.read().await;
        match search {
            Some(term) if !term.trim().is_empty() => {
                let term = term.trim().to_lowercase();
                patients
                    .iter()
                    .filter(|p| {
                        format!("{} {}", p.first_name, p.last_name)
                            .to_lowercase()
                            .contains(&term)
                    })
                    .cloned()
                    .collect()
            }
            _ => patients.clone(),
        }
    }

    pub async fn get_patient(&self, id: &str) -> Option<Patient> {
        self.patients.read().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn create_patient(&self, input: PatientInput) -> Patient {
        let now = Utc::now();
        let patient = Patient {
            id: self.alloc_id(),
            first_name: input.first_name,
            last_name: input.last_name,
            date_of_birth: input.date_of_birth,
            gender: input.gender,
            phone: input.phone,
            email: input.email,
            address: input.address,
            emergency_contact: input.emergency_contact,
            medical_history: input.medical_history,
            created_at: now,
            updated_at: now,
        };
        self.patients.write().await.push(patient.clone());
        patient
    }

    pub async fn update_patient(&self, id: &str, input: PatientInput) -> Option<Patient> {
        let mut patients = self.patients.write().await;
        let patient = patients.iter_mut().find(|p| p.id == id)?;
        patient.first_name = input.first_name;
        patient.last_name = input.last_name;
        patient.date_of_birth = input.date_of_birth;
        patient.gender = input.gender;
        patient.phone = input.phone;
        patient.email = input.email;
        patient.address = input.address;
        patient.emergency_contact = input.emergency_contact;
        patient.medical_history = input.medical_history;
        patient.updated_at = Utc::now();
        Some(patient.clone())
    }

    pub async fn delete_patient(&self, id: &str) -> bool {
        let mut patients = self.patients.write().await;
        let before = patients.len();
        patients.retain(|p| p.id != id);
        patients.len() != before
    }

    // ----- doctors -----

    pub async fn list_doctors(&self, active_only: bool) -> Vec<Doctor> {
        let doctors = self.doctors.read().await;
        if active_only {
            doctors.iter().filter(|d| d.is_active).cloned().collect()
        } else {
            doctors.clone()
        }
    }

    pub async fn get_doctor(&self, id: &str) -> Option<Doctor> {
        self.doctors.read().await.iter().find(|d| d.id == id).cloned()
    }

    // ----- appointments -----

    /// List appointments matching the filter, ordered by date then time.
    pub async fn list_appointments(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        let appointments = self.appointments.read().await;
        let mut matching: Vec<Appointment> = appointments
            .iter()
            .filter(|a| filter.date.map_or(true, |d| a.appointment_date == d))
            .filter(|a| {
                filter
                    .doctor_id
                    .as_deref()
                    .map_or(true, |id| a.doctor_id == id)
            })
            .filter(|a| filter.status.map_or(true, |s| a.status == s))
            .cloned()
            .collect();
        matching.sort_by_key(|a| (a.appointment_date, a.appointment_time));
        matching
    }

    pub async fn create_appointment(&self, input: AppointmentInput) -> Appointment {
        let now = Utc::now();
        let appointment = Appointment {
            id: self.alloc_id(),
            patient_id: input.patient_id,
            doctor_id: input.doctor_id,
            appointment_date: input.appointment_date,
            appointment_time: input.appointment_time,
            duration: input.duration,
            appointment_type: input.appointment_type,
            status: input.status,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.appointments.write().await.push(appointment.clone());
        appointment
    }

    pub async fn update_appointment(
        &self,
        id: &str,
        update: AppointmentUpdate,
    ) -> Option<Appointment> {
        let mut appointments = self.appointments.write().await;
        let appointment = appointments.iter_mut().find(|a| a.id == id)?;
        if let Some(date) = update.appointment_date {
            appointment.appointment_date = date;
        }
        if let Some(time) = update.appointment_time {
            appointment.appointment_time = time;
        }
        if let Some(duration) = update.duration {
            appointment.duration = duration;
        }
        if let Some(status) = update.status {
            appointment.status = status;
        }
        if let Some(notes) = update.notes {
            appointment.notes = Some(notes);
        }
        appointment.updated_at = Utc::now();
        Some(appointment.clone())
    }

    pub async fn delete_appointment(&self, id: &str) -> bool {
        let mut appointments = self.appointments.write().await;
        let before = appointments.len();
        appointments.retain(|a| a.id != id);
        appointments.len() != before
    }

    // ----- dashboard -----

    pub async fn stats(&self, today: NaiveDate) -> DashboardStats {
        let patients = self.patients.read().await;
        let doctors = self.doctors.read().await;
        let appointments = self.appointments.read().await;
        DashboardStats {
            total_patients: patients.len(),
            active_doctors: doctors.iter().filter(|d| d.is_active).count(),
            appointments_today: appointments
                .iter()
                .filter(|a| a.appointment_date == today)
                .count(),
            upcoming_appointments: appointments
                .iter()
                .filter(|a| {
                    a.appointment_date >= today
                        && matches!(
                            a.status,
                            AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
                        )
                })
                .count(),
        }
    }
}
