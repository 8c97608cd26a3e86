//! Path model definition and the immutable completion update.

use jiff::Timestamp;
use log::warn;
use serde::{Deserialize, Serialize};

use super::{ExperienceLevel, Milestone, MilestoneId, PathId, Progress, TimeCommitment};
use crate::error::{Result, WaypointError};

/// Represents a complete learning path with metadata and milestones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Path {
    /// Identifier of the stored path, when the server reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PathId>,

    /// Title of the path
    pub title: String,

    /// Overview of what the path covers
    pub description: String,

    /// Experience level the path was generated for
    pub experience_level: ExperienceLevel,

    /// Weekly time budget the path was generated for
    pub time_commitment: TimeCommitment,

    /// Timestamp when the path was created on the server (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    /// Milestones in display order
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Path {
    /// Looks up a milestone by id.
    pub fn milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    /// Returns true if the path has a milestone with this id.
    pub fn contains(&self, id: MilestoneId) -> bool {
        self.milestone(id).is_some()
    }

    /// Returns a copy of the path where only the given milestone's completion
    /// flag is replaced.
    ///
    /// An unknown id is a data-integrity problem upstream; it is logged and the
    /// path comes back unchanged. Use [`Path::try_with_completion`] to observe
    /// it as an error.
    pub fn with_completion(&self, id: MilestoneId, completed: bool) -> Path {
        match self.try_with_completion(id, completed) {
            Ok(path) => path,
            Err(e) => {
                warn!("Ignoring completion update: {e}");
                self.clone()
            }
        }
    }

    /// Like [`Path::with_completion`] but reports an unknown id.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::MilestoneNotFound` when no milestone has `id`.
    pub fn try_with_completion(&self, id: MilestoneId, completed: bool) -> Result<Path> {
        if !self.contains(id) {
            return Err(WaypointError::MilestoneNotFound { id });
        }

        let milestones = self
            .milestones
            .iter()
            .map(|m| {
                if m.id == id {
                    Milestone {
                        completed,
                        ..m.clone()
                    }
                } else {
                    m.clone()
                }
            })
            .collect();

        Ok(Path {
            milestones,
            ..self.clone_metadata()
        })
    }

    /// Derives progress metrics from the current milestones.
    pub fn progress(&self) -> Progress {
        super::compute_progress(self)
    }

    fn clone_metadata(&self) -> Path {
        Path {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            experience_level: self.experience_level,
            time_commitment: self.time_commitment,
            created_at: self.created_at,
            milestones: Vec::new(),
        }
    }
}
