//! Dashboard statistics
//!
//! The "active" and "new today" figures are fixed fractions of the total.
//! No per-record activity or creation time exists to derive them from.

use serde::{Deserialize, Serialize};

/// Numbers shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    /// floor(total × 0.7)
    pub active_users: usize,
    /// floor(total × 0.1)
    pub new_today: usize,
}

impl DashboardStats {
    /// Derive all three figures from the record count.
    ///
    /// Integer arithmetic keeps the floor exact for every count.
    pub fn from_total(total: usize) -> Self {
        Self {
            total_users: total,
            active_users: scaled(total, 7),
            new_today: scaled(total, 1),
        }
    }
}

/// floor(total × tenths / 10) without float rounding error or overflow
fn scaled(total: usize, tenths: usize) -> usize {
    (total / 10) * tenths + (total % 10) * tenths / 10
}
