//! Progress derivation over a path snapshot.

use serde::Serialize;

use super::Path;

/// Completion statistics for one path.
///
/// Always derived from the current milestones; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Progress {
    /// Milestones marked as completed
    pub completed_count: usize,
    /// All milestones in the path
    pub total_count: usize,
    /// `completed_count / total_count * 100`, or 0 for an empty path
    pub percentage: f64,
    /// Sum of estimated hours over all milestones
    pub total_hours: f64,
    /// Sum of estimated hours over milestones not yet completed
    pub remaining_hours: f64,
}

impl Progress {
    /// Percentage rounded to the nearest whole number for display.
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage.round() as u32
    }

    /// Milestones still to do.
    pub fn remaining_count(&self) -> usize {
        self.total_count - self.completed_count
    }

    /// True once every milestone of a non-empty path is done.
    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.completed_count == self.total_count
    }
}

/// Computes completion count, percentage and hour totals for a path.
pub fn compute_progress(path: &Path) -> Progress {
    let total_count = path.milestones.len();
    let completed_count = path.milestones.iter().filter(|m| m.completed).count();
    let total_hours: f64 = path.milestones.iter().map(|m| m.estimated_hours).sum();
    let remaining_hours: f64 = path
        .milestones
        .iter()
        .filter(|m| !m.completed)
        .map(|m| m.estimated_hours)
        .sum();

    // An empty path would otherwise divide by zero.
    let percentage = if total_count > 0 {
        completed_count as f64 / total_count as f64 * 100.0
    } else {
        0.0
    };

    Progress {
        completed_count,
        total_count,
        percentage,
        total_hours,
        remaining_hours,
    }
}
