//! Parameter structures for Waypoint operations
//!
//! These structures carry raw user input from any interface (CLI flags, the
//! interactive session) into the core without framework-specific derives.
//! Validation happens once, when they are converted into typed requests:
//!
//! ```text
//! CLI Args (clap) ──▶ Core Params (raw strings) ──TryFrom──▶ Typed Requests
//! ```
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::{
//!     models::{GenerationRequest, TimeCommitment},
//!     params::GeneratePath,
//! };
//!
//! let params = GeneratePath {
//!     goal: "Learn Rust".to_string(),
//!     experience_level: None,
//!     time_commitment: Some("10-20".to_string()),
//! };
//! let request = GenerationRequest::try_from(params)?;
//! assert_eq!(request.time_commitment, TimeCommitment::TenToTwenty);
//! # Ok::<(), waypoint_core::WaypointError>(())
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::WaypointError,
    models::{ExperienceLevel, GenerationRequest, MilestoneId, PathId, TimeCommitment},
};

/// Parameters for generating a new learning path.
///
/// Missing preferences fall back to the defaults of the generation form:
/// beginner, 5-10 hours/week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePath {
    /// What the learner wants to learn (required)
    pub goal: String,
    /// Experience level name, e.g. "beginner"
    pub experience_level: Option<String>,
    /// Time commitment label or short form, e.g. "5-10 hours/week" or "5-10"
    pub time_commitment: Option<String>,
}

/// Generic parameters for operations on a stored path.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PathRef {
    /// The ID of the path to operate on
    pub id: u64,
}

/// Parameters for flipping the completion flag of one milestone.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ToggleMilestone {
    /// Path containing the milestone
    pub path_id: u64,
    /// Milestone to flip
    pub milestone_id: u64,
}

impl From<PathRef> for PathId {
    fn from(params: PathRef) -> Self {
        PathId(params.id)
    }
}

impl ToggleMilestone {
    /// Typed identifiers of the path and milestone.
    pub fn ids(&self) -> (PathId, MilestoneId) {
        (PathId(self.path_id), MilestoneId(self.milestone_id))
    }
}

impl TryFrom<GeneratePath> for GenerationRequest {
    type Error = WaypointError;

    /// Validate raw generation input into a [`GenerationRequest`].
    ///
    /// # Errors
    ///
    /// * `WaypointError::InvalidInput` - blank goal
    /// * `WaypointError::InvalidInput` - unknown experience level
    /// * `WaypointError::InvalidInput` - unknown time commitment
    fn try_from(params: GeneratePath) -> Result<Self, Self::Error> {
        let experience_level = match params.experience_level.as_deref() {
            Some(level) => ExperienceLevel::from_str(level).map_err(|reason| {
                WaypointError::invalid_input("experience_level").with_reason(reason)
            })?,
            None => ExperienceLevel::default(),
        };

        let time_commitment = match params.time_commitment.as_deref() {
            Some(bucket) => TimeCommitment::from_str(bucket).map_err(|reason| {
                WaypointError::invalid_input("time_commitment").with_reason(reason)
            })?,
            None => TimeCommitment::default(),
        };

        GenerationRequest::new(params.goal, experience_level, time_commitment)
    }
}
