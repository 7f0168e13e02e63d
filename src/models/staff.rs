//! Staff and branch models.
//!
//! Both records are owned by the branch/staff administration subsystem;
//! the scheduling and payroll core only reads them.

use serde::{Deserialize, Serialize};

/// Display label for staff or assignments without a resolvable branch.
pub const UNASSIGNED_BRANCH_LABEL: &str = "Chưa phân bổ";

/// Represents a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Job role (e.g., "Phục vụ", "Thu ngân").
    pub role: String,
    /// Contact phone number, if recorded.
    pub phone: Option<String>,
    /// Employment status tag (e.g., "Đang làm").
    pub status: String,
    /// Avatar URL or initials used by the display layer.
    pub avatar: Option<String>,
    /// The branch this staff member is assigned to, if any.
    pub branch_id: Option<String>,
}

/// Represents a branch location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Unique identifier for the branch.
    pub id: String,
    /// Branch display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// The staff member managing this branch, if any.
    pub manager_id: Option<String>,
}
