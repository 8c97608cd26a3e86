//! Data models for learning paths and milestones.
//!
//! This module contains the core domain models of Waypoint. Display
//! implementations for these models live in [`crate::display::models`] so the
//! data structures stay free of presentation logic.
//!
//! Paths are immutable snapshots: a completion change produces a new [`Path`]
//! through [`Path::with_completion`] and progress is derived from the snapshot
//! with [`compute_progress`] on every render.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{
//!     ExperienceLevel, Milestone, MilestoneId, Path, TimeCommitment,
//! };
//!
//! let path = Path {
//!     id: None,
//!     title: "Learn Rust".to_string(),
//!     description: "From zero to ownership".to_string(),
//!     experience_level: ExperienceLevel::Beginner,
//!     time_commitment: TimeCommitment::FiveToTen,
//!     created_at: None,
//!     milestones: vec![
//!         Milestone::new(1, 0, "Syntax", "Basics", 10.0),
//!         Milestone::new(2, 1, "Ownership", "Borrowing", 15.0),
//!     ],
//! };
//!
//! let done = path.with_completion(MilestoneId(1), true);
//! assert_eq!(done.progress().completed_count, 1);
//! assert_eq!(done.progress().percentage, 50.0);
//! ```

pub mod ids;
pub mod milestone;
pub mod path;
pub mod preferences;
pub mod progress;
pub mod requests;
pub mod summary;

#[cfg(test)]
mod tests;

pub use ids::{MilestoneId, PathId};
pub use milestone::Milestone;
pub use path::Path;
pub use preferences::{ExperienceLevel, TimeCommitment};
pub use progress::{Progress, compute_progress};
pub use requests::{GenerationRequest, MilestoneUpdate};
pub use summary::PathSummary;
