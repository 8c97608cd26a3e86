//! Path summary types and functionality.

use jiff::Timestamp;
use serde::Serialize;

use super::{ExperienceLevel, Path, PathId, TimeCommitment};

/// Summary information about a path with milestone statistics.
#[derive(Debug, Clone, Serialize)]
pub struct PathSummary {
    /// Path ID, if the server reported one
    pub id: Option<PathId>,
    /// Title of the path
    pub title: String,
    /// Experience level the path targets
    pub experience_level: ExperienceLevel,
    /// Weekly time budget
    pub time_commitment: TimeCommitment,
    /// Creation timestamp
    pub created_at: Option<Timestamp>,
    /// Total number of milestones
    pub total_milestones: usize,
    /// Number of completed milestones
    pub completed_milestones: usize,
    /// Sum of estimated hours
    pub total_hours: f64,
}

impl From<&Path> for PathSummary {
    fn from(path: &Path) -> Self {
        let progress = path.progress();

        Self {
            id: path.id,
            title: path.title.clone(),
            experience_level: path.experience_level,
            time_commitment: path.time_commitment,
            created_at: path.created_at,
            total_milestones: progress.total_count,
            completed_milestones: progress.completed_count,
            total_hours: progress.total_hours,
        }
    }
}
