//! Permission constants for the HMS API.
//!
//! Permissions are atomic `<module>:<action>` capability strings, independent of
//! role names. A principal may hold a role and still lack a permission a route
//! requires.
//!
//! # Example
//!
//! ```ignore
//! use hms_core::permissions;
//!
//! let gate = check_permission(permissions::PHARMACY_READ);
//! ```

/// Separator between the module scope and the action of a permission.
pub const SCOPE_SEPARATOR: char = ':';

// =============================================================================
// Module read permissions
// =============================================================================

/// Permission to read patient records
pub const PATIENTS_READ: &str = "patients:read";
/// Permission to read staff records
pub const HR_READ: &str = "hr:read";
/// Permission to read appointments
pub const APPOINTMENTS_READ: &str = "appointments:read";
/// Permission to read clinical notes
pub const CLINICAL_READ: &str = "clinical:read";
/// Permission to read stock levels
pub const INVENTORY_READ: &str = "inventory:read";
/// Permission to read prescriptions and dispensing records
pub const PHARMACY_READ: &str = "pharmacy:read";
/// Permission to read lab orders and results
pub const LABORATORY_READ: &str = "laboratory:read";
/// Permission to read imaging orders and reports
pub const RADIOLOGY_READ: &str = "radiology:read";
/// Permission to read invoices and charges
pub const BILLING_READ: &str = "billing:read";

/// Returns true when `permission` belongs to `module`, e.g. `billing:void_charge`
/// belongs to `billing`.
pub fn in_scope(permission: &str, module: &str) -> bool {
    permission
        .split_once(SCOPE_SEPARATOR)
        .is_some_and(|(scope, action)| scope == module && !action.is_empty())
}
