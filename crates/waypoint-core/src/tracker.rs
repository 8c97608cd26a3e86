//! Milestone completion tracking with optimistic local updates.
//!
//! A toggle is applied to the local [`Path`] snapshot immediately and the
//! resulting [`PendingUpdate`] is sent to the service afterwards. The local
//! change never waits for, or depends on, the remote answer. What happens to
//! it when the remote update fails is decided by [`SyncFailurePolicy`].

use std::sync::Arc;

use log::{debug, warn};

use crate::{
    client::PathService,
    error::{Result, WaypointError},
    models::{MilestoneId, Path},
};

/// What to do with an optimistic change whose remote update failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncFailurePolicy {
    /// Keep the local change; the server may disagree until the next fetch.
    #[default]
    Keep,
    /// Restore the previous completion flag.
    Rollback,
}

/// Remote update owed for one optimistic toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingUpdate {
    pub milestone_id: MilestoneId,
    /// Value applied locally and sent to the server
    pub completed: bool,
}

/// Outcome of [`toggle_completion`].
#[derive(Debug, Clone, PartialEq)]
pub struct Toggle {
    /// The path with the flag flipped (or unchanged for an unknown id)
    pub path: Path,
    /// Remote update to send; `None` when the milestone was not found
    pub pending: Option<PendingUpdate>,
}

/// Flips the completion flag of one milestone locally.
///
/// An unknown id leaves the path unchanged and owes no remote update.
pub fn toggle_completion(path: &Path, milestone_id: MilestoneId) -> Toggle {
    let Some(milestone) = path.milestone(milestone_id) else {
        warn!("Toggle for milestone {milestone_id} not in path '{}'", path.title);
        return Toggle {
            path: path.clone(),
            pending: None,
        };
    };

    let completed = !milestone.completed;
    debug!("Milestone {milestone_id} completed -> {completed}");

    Toggle {
        path: path.with_completion(milestone_id, completed),
        pending: Some(PendingUpdate {
            milestone_id,
            completed,
        }),
    }
}

impl PendingUpdate {
    /// Sends the update: exactly one request, no retry.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::Mutation` when the service rejects the update
    /// or cannot be reached.
    pub async fn send(&self, service: &dyn PathService) -> Result<()> {
        service
            .set_milestone_completion(self.milestone_id, self.completed)
            .await
            .map_err(|e| {
                warn!("Milestone {} sync failed: {e}", self.milestone_id);
                WaypointError::Mutation {
                    milestone_id: self.milestone_id,
                    message: e.user_message(),
                }
            })
    }

    /// Undoes this update on `path` if the milestone still holds the value
    /// that was sent. Later toggles of the same milestone win.
    pub fn rollback(&self, path: &Path) -> Option<Path> {
        let milestone = path.milestone(self.milestone_id)?;
        if milestone.completed != self.completed {
            return None;
        }
        Some(path.with_completion(self.milestone_id, !self.completed))
    }
}

/// Result of a toggle that has been synced.
#[derive(Debug)]
pub struct SyncedToggle {
    /// Path after the toggle, and after rollback when the policy asked for it
    pub path: Path,
    /// Remote failure, reported rather than raised
    pub sync_error: Option<WaypointError>,
}

/// Toggles milestones and pushes each change to the service.
#[derive(Clone)]
pub struct MilestoneTracker {
    service: Arc<dyn PathService>,
    policy: SyncFailurePolicy,
}

impl MilestoneTracker {
    pub fn new(service: Arc<dyn PathService>) -> Self {
        Self {
            service,
            policy: SyncFailurePolicy::default(),
        }
    }

    /// Sets the failure policy.
    pub fn with_policy(mut self, policy: SyncFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Applies the toggle locally, then sends it.
    ///
    /// Remote failures never surface as `Err`: they come back in
    /// [`SyncedToggle::sync_error`] and, under
    /// [`SyncFailurePolicy::Keep`], the local flip stays in place.
    pub async fn toggle(&self, path: &Path, milestone_id: MilestoneId) -> SyncedToggle {
        let Toggle { path, pending } = toggle_completion(path, milestone_id);
        let Some(update) = pending else {
            return SyncedToggle {
                path,
                sync_error: None,
            };
        };

        match update.send(self.service.as_ref()).await {
            Ok(()) => SyncedToggle {
                path,
                sync_error: None,
            },
            Err(e) => {
                let path = match self.policy {
                    SyncFailurePolicy::Keep => path,
                    SyncFailurePolicy::Rollback => update.rollback(&path).unwrap_or(path),
                };
                SyncedToggle {
                    path,
                    sync_error: Some(e),
                }
            }
        }
    }
}
