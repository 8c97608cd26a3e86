//! Markdown formatting for paths, milestones and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); this module
//! adds wrapper types for contexts that need more than the model itself, such
//! as the expanded milestone of an interactive view or the outcome of a
//! command.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views & Result  │    │   Markdown      │
//! │ (Path, Progress)│───▶│    Wrappers     │───▶│  (terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::{
//!     display::{OperationStatus, ProgressBar},
//!     models::{ExperienceLevel, Milestone, MilestoneId, Path, TimeCommitment},
//! };
//!
//! let path = Path {
//!     id: None,
//!     title: "Learn Rust".to_string(),
//!     description: String::new(),
//!     experience_level: ExperienceLevel::Beginner,
//!     time_commitment: TimeCommitment::FiveToTen,
//!     created_at: None,
//!     milestones: vec![
//!         Milestone::new(1, 0, "Syntax", "Basics", 10.0),
//!         Milestone::new(2, 1, "Ownership", "Borrowing", 10.0),
//!     ],
//! };
//!
//! let progress = path.with_completion(MilestoneId(1), true).progress();
//! assert!(ProgressBar::new(&progress).to_string().contains("50%"));
//!
//! let status = OperationStatus::success("Milestone saved");
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod view;

pub use collections::PathSummaries;
pub use datetime::LocalDateTime;
pub use results::{DeleteResult, GeneratedPath, ToggleResult};
pub use status::OperationStatus;
pub use view::{PathView, ProgressBar};

/// Formats hours without a trailing `.0` for whole numbers.
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.0}")
    } else {
        format!("{hours:.1}")
    }
}
