//! Milestone model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::MilestoneId;

/// Represents one step of a learning path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    /// Server-assigned identifier, unique within the path
    pub id: MilestoneId,

    /// Position of the milestone within the path (0-indexed)
    pub order: u32,

    /// Brief title of the milestone
    pub title: String,

    /// What will be learned and why it matters
    pub description: String,

    /// Estimated effort in hours, never negative
    pub estimated_hours: f64,

    /// Recommended resources (books, courses, projects) in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,

    /// Whether the learner has marked the milestone as done
    #[serde(default)]
    pub completed: bool,

    /// Completion time last reported by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl Milestone {
    /// Creates an incomplete milestone with no resources.
    ///
    /// Negative or non-finite estimates are clamped to zero.
    pub fn new(
        id: impl Into<MilestoneId>,
        order: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        estimated_hours: f64,
    ) -> Self {
        Self {
            id: id.into(),
            order,
            title: title.into(),
            description: description.into(),
            estimated_hours: clamp_hours(estimated_hours),
            resources: Vec::new(),
            completed: false,
            completed_at: None,
        }
    }

    /// Replaces the resource list.
    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the milestone as completed or not.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Clamp an effort estimate to a finite, non-negative number of hours.
pub fn clamp_hours(hours: f64) -> f64 {
    if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    }
}
