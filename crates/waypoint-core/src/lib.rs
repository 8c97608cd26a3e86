//! Core library for the Waypoint learning path planner.
//!
//! Waypoint turns a learning goal into an ordered path of milestones using a
//! remote path service, tracks which milestones are done, and derives progress
//! from the current path on every render.
//!
//! # Layers
//!
//! - **Domain Models** ([`models`]): immutable path snapshots and the pure
//!   progress calculation
//! - **Service** ([`client`]): the [`PathService`] trait and its HTTP client
//! - **Operations** ([`generator`], [`tracker`]): one generation round trip,
//!   optimistic completion toggles
//! - **Handlers** ([`handlers`]): complete workflows called by front ends
//! - **Session** ([`session`]): the view state machine and the task that
//!   drives it
//! - **Display** ([`display`]): markdown formatting rendered by the CLI
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use waypoint_core::{
//!     ClientBuilder, MilestoneTracker, PathGenerator, params::GeneratePath,
//!     models::GenerationRequest,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = Arc::new(ClientBuilder::new().build()?);
//!
//! let request = GenerationRequest::try_from(GeneratePath {
//!     goal: "Learn Rust".to_string(),
//!     experience_level: Some("beginner".to_string()),
//!     time_commitment: None,
//! })?;
//! let path = PathGenerator::new(service.clone()).generate(&request).await?;
//! println!("{path}");
//!
//! let first = path.milestones[0].id;
//! let synced = MilestoneTracker::new(service).toggle(&path, first).await;
//! println!("{}", synced.path.progress());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod display;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod params;
pub mod session;
pub mod tracker;

#[cfg(test)]
mod testing;

pub use client::{ClientBuilder, HttpPathService, PathService};
pub use display::{
    DeleteResult, GeneratedPath, LocalDateTime, OperationStatus, PathSummaries, PathView,
    ProgressBar, ToggleResult,
};
pub use error::{Result, WaypointError};
pub use generator::PathGenerator;
pub use handlers::{
    handle_delete_path, handle_generate_path, handle_health, handle_list_paths, handle_show_path,
    handle_toggle_milestone,
};
pub use models::{
    ExperienceLevel, GenerationRequest, Milestone, MilestoneId, Path, PathId, PathSummary,
    Progress, TimeCommitment, compute_progress,
};
pub use session::{Event, Session, SessionHandle, SessionRunner, ViewState, runner::Snapshot};
pub use tracker::{MilestoneTracker, SyncFailurePolicy, SyncedToggle};
