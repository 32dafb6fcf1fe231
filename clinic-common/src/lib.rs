//! MediGate Common Types
//!
//! Shared types used by the clinic backend: staff roles, the role-scoped
//! navigation map, and the clinic domain records.

pub mod nav;
pub mod records;
pub mod role;

pub use nav::{entries_for, NavEntry};
pub use records::{
    Appointment, AppointmentStatus, AppointmentType, Doctor, EmergencyContact, Gender,
    MedicalHistory, Patient, StaffUser, WorkingHours,
};
pub use role::Role;
