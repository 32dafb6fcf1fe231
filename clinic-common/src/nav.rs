//! Role-scoped navigation map.
//!
//! A fixed table from role to the ordered list of destinations that role may
//! reach. The table is static configuration with no lifecycle; the lookup is
//! a pure function and the match over [`Role`] keeps it total.

use serde::Serialize;

use crate::role::Role;

/// A single reachable destination shown to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Route path, e.g. `/appointments`.
    pub path: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Icon name for the rendering layer.
    pub icon: &'static str,
}

const fn entry(path: &'static str, label: &'static str, icon: &'static str) -> NavEntry {
    NavEntry { path, label, icon }
}

const ADMIN_ENTRIES: &[NavEntry] = &[
    entry("/dashboard", "Dashboard", "bar-chart-3"),
    entry("/patients", "Patients", "users"),
    entry("/appointments", "Appointments", "calendar"),
    entry("/users", "User Management", "shield"),
    entry("/doctors", "Doctors", "user-circle"),
    entry("/qr-generator", "QR Generator", "qr-code"),
    entry("/settings", "Settings", "settings"),
];

const DOCTOR_ENTRIES: &[NavEntry] = &[
    entry("/dashboard", "Dashboard", "bar-chart-3"),
    entry("/appointments", "My Appointments", "calendar"),
    entry("/patients", "My Patients", "users"),
];

const RECEPTION_ENTRIES: &[NavEntry] = &[
    entry("/appointments", "Appointments", "calendar"),
    entry("/qr-generator", "QR Generator", "qr-code"),
];

const PATIENT_ENTRIES: &[NavEntry] = &[
    entry("/my-appointments", "My Appointments", "calendar"),
    entry("/profile", "My Profile", "user-circle"),
];

/// Ordered navigation entries for a role.
pub fn entries_for(role: Role) -> &'static [NavEntry] {
    match role {
        Role::Admin => ADMIN_ENTRIES,
        Role::Doctor => DOCTOR_ENTRIES,
        Role::Reception => RECEPTION_ENTRIES,
        Role::Patient => PATIENT_ENTRIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_deterministic() {
        for role in Role::ALL {
            assert_eq!(entries_for(role), entries_for(role));
        }
    }

    #[test]
    fn reception_sees_appointments_and_qr_generator() {
        let paths: Vec<&str> = entries_for(Role::Reception).iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/appointments", "/qr-generator"]);
    }

    #[test]
    fn admin_sees_user_management() {
        assert!(entries_for(Role::Admin).iter().any(|e| e.path == "/users"));
    }

    #[test]
    fn only_admin_sees_user_management() {
        for role in [Role::Doctor, Role::Reception, Role::Patient] {
            assert!(entries_for(role).iter().all(|e| e.path != "/users"));
        }
    }

    #[test]
    fn entries_keep_declared_order() {
        let labels: Vec<&str> = entries_for(Role::Admin).iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Patients",
                "Appointments",
                "User Management",
                "Doctors",
                "QR Generator",
                "Settings",
            ]
        );
    }
}
