//! Client side of the remote path service.
//!
//! The service generates learning paths and stores milestone completion. The
//! [`PathService`] trait is the seam between the session logic and transport:
//! [`HttpPathService`] speaks the JSON-over-HTTP protocol, tests substitute
//! their own implementations.
//!
//! ```text
//! POST   /api/generate            {goal, experience_level, time_commitment}
//! PATCH  /api/milestones/{id}     {completed}
//! GET    /api/paths               list stored paths
//! GET    /api/paths/{id}          fetch one path
//! DELETE /api/paths/{id}          delete one path
//! GET    /health                  {status}
//! ```
//!
//! Non-success responses may carry `{"detail": "..."}`, which is surfaced in
//! [`WaypointError::Request`](crate::WaypointError::Request).

use async_trait::async_trait;

pub mod builder;
pub mod http;
pub mod payload;

pub use builder::{ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use http::HttpPathService;
pub use payload::{MilestonePayload, PathPayload};

use crate::{
    error::Result,
    models::{GenerationRequest, MilestoneId, PathId},
};

/// Operations offered by the remote path service.
#[async_trait]
pub trait PathService: Send + Sync {
    /// Ask the service to generate a new path.
    async fn generate_path(&self, request: &GenerationRequest) -> Result<PathPayload>;

    /// Set the completion flag of one milestone.
    async fn set_milestone_completion(&self, id: MilestoneId, completed: bool) -> Result<()>;

    /// List all stored paths, newest first.
    async fn list_paths(&self) -> Result<Vec<PathPayload>>;

    /// Fetch one stored path.
    async fn get_path(&self, id: PathId) -> Result<PathPayload>;

    /// Delete one stored path with its milestones.
    async fn delete_path(&self, id: PathId) -> Result<()>;

    /// Report the service health status string.
    async fn health(&self) -> Result<String>;
}
