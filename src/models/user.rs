//! Staff user model and category derivation.

use serde::{Deserialize, Serialize};

/// The staff category a user belongs to.
///
/// Recurring and configured holidays are maintained per category, so the
/// category decides which admin-curated holiday lists apply to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffCategory {
    /// Office staff (admin, super_admin, hr, finance roles).
    Office,
    /// Field staff (every other role).
    Field,
}

impl StaffCategory {
    /// Derives the category from a role name, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::StaffCategory;
    ///
    /// assert_eq!(StaffCategory::from_role("HR"), StaffCategory::Office);
    /// assert_eq!(StaffCategory::from_role("super_admin"), StaffCategory::Office);
    /// assert_eq!(StaffCategory::from_role("technician"), StaffCategory::Field);
    /// ```
    pub fn from_role(role: &str) -> Self {
        match role.trim().to_lowercase().as_str() {
            "admin" | "super_admin" | "hr" | "finance" => StaffCategory::Office,
            _ => StaffCategory::Field,
        }
    }
}

impl std::fmt::Display for StaffCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffCategory::Office => write!(f, "office"),
            StaffCategory::Field => write!(f, "field"),
        }
    }
}

/// A staff user subject to attendance classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffUser {
    /// Unique identifier for the user.
    pub id: String,
    /// The user's role name (e.g., "hr", "supervisor").
    pub role: String,
}

impl StaffUser {
    /// Returns the staff category derived from the user's role.
    pub fn category(&self) -> StaffCategory {
        StaffCategory::from_role(&self.role)
    }
}

/// Compares two user ids case- and whitespace-insensitively.
///
/// Pool holidays are keyed by user ids entered through a separate UI path,
/// so the comparison must tolerate casing and stray whitespace.
pub(crate) fn user_id_matches(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
