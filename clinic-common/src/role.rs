//! Staff roles for the session gate.

use serde::{Deserialize, Serialize};

/// Closed set of roles a directory identity can carry.
///
/// The role decides which navigation entries are visible and whether the
/// user management screen is reachable. Unknown role strings are rejected
/// at the serde boundary; past it, every role is one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including the user directory.
    Admin,
    /// Clinical staff: own appointments and patients.
    Doctor,
    /// Front desk: appointments and the QR generator.
    Reception,
    /// Self-service: own appointments and profile.
    Patient,
}

impl Role {
    /// All role variants for iteration.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Doctor, Role::Reception, Role::Patient];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Reception => "reception",
            Role::Patient => "patient",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
