//! Request types sent to the path service.

use serde::{Deserialize, Serialize};

use super::{ExperienceLevel, TimeCommitment};
use crate::error::{Result, WaypointError};

/// Input to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// What the learner wants to learn; must not be blank
    pub goal: String,
    /// Current experience level
    pub experience_level: ExperienceLevel,
    /// Weekly time budget
    pub time_commitment: TimeCommitment,
}

impl GenerationRequest {
    /// Creates a validated request with a trimmed goal.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidInput` when the goal is blank.
    pub fn new(
        goal: impl Into<String>,
        experience_level: ExperienceLevel,
        time_commitment: TimeCommitment,
    ) -> Result<Self> {
        let request = Self {
            goal: goal.into().trim().to_string(),
            experience_level,
            time_commitment,
        };
        request.validate()?;
        Ok(request)
    }

    /// Checks the request preconditions.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidInput` when the goal is blank.
    pub fn validate(&self) -> Result<()> {
        if self.goal.trim().is_empty() {
            return Err(WaypointError::invalid_input("goal")
                .with_reason("Describe what you want to learn"));
        }
        Ok(())
    }
}

/// Body of a milestone completion update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneUpdate {
    pub completed: bool,
}
