//! Staff role names.
//!
//! Roles are flat capability buckets. There is no hierarchy between them: a route
//! that should be reachable by administrators and doctors lists both names. Gates
//! compare these strings verbatim against the roles carried by the principal.

pub const ADMIN: &str = "admin";
pub const DOCTOR: &str = "doctor";
pub const NURSE: &str = "nurse";
pub const RECEPTIONIST: &str = "receptionist";
pub const PHARMACIST: &str = "pharmacist";
pub const LAB_TECHNICIAN: &str = "lab_technician";
pub const RADIOLOGIST: &str = "radiologist";
pub const ACCOUNTANT: &str = "accountant";
pub const HR_MANAGER: &str = "hr_manager";
pub const INVENTORY_MANAGER: &str = "inventory_manager";
