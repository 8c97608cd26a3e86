//! Workflows shared by every front end.
//!
//! Each handler takes raw parameters from [`crate::params`], runs one complete
//! operation against the path service and returns domain objects for the
//! caller to format:
//!
//! ```text
//! Interface → Handler → PathGenerator / MilestoneTracker / PathService → Models
//! ```

use log::{info, warn};

use crate::{
    client::PathService,
    error::{Result, WaypointError},
    generator::PathGenerator,
    models::{GenerationRequest, Path, PathId, PathSummary},
    params::{GeneratePath, PathRef, ToggleMilestone},
    tracker::{MilestoneTracker, SyncedToggle},
};

/// Validates the parameters and generates a path.
pub async fn handle_generate_path(generator: &PathGenerator, params: GeneratePath) -> Result<Path> {
    let request = GenerationRequest::try_from(params)?;
    generator.generate(&request).await
}

/// Lists stored paths as summaries.
///
/// Entries the service returns in an unusable shape are skipped with a
/// warning rather than failing the whole listing.
pub async fn handle_list_paths(service: &dyn PathService) -> Result<Vec<PathSummary>> {
    let payloads = service.list_paths().await?;

    let summaries = payloads
        .into_iter()
        .filter_map(|payload| match Path::try_from(payload) {
            Ok(path) => Some(PathSummary::from(&path)),
            Err(e) => {
                warn!("Skipping stored path: {e}");
                None
            }
        })
        .collect();

    Ok(summaries)
}

/// Fetches one stored path.
pub async fn handle_show_path(service: &dyn PathService, params: PathRef) -> Result<Path> {
    let payload = service.get_path(PathId::from(params)).await?;
    Path::try_from(payload)
}

/// Deletes a stored path and returns what was deleted.
pub async fn handle_delete_path(service: &dyn PathService, params: PathRef) -> Result<Path> {
    let path = handle_show_path(service, params).await?;
    service.delete_path(PathId::from(params)).await?;

    info!("Deleted learning path '{}'", path.title);
    Ok(path)
}

/// Fetches a path, flips one milestone and syncs the change.
///
/// # Errors
///
/// * `WaypointError::PathNotFound` - no such path
/// * `WaypointError::MilestoneNotFound` - the milestone is not in the path
///
/// A failed sync is not an error here; it is reported in
/// [`SyncedToggle::sync_error`].
pub async fn handle_toggle_milestone(
    service: &dyn PathService,
    tracker: &MilestoneTracker,
    params: ToggleMilestone,
) -> Result<SyncedToggle> {
    let (path_id, milestone_id) = params.ids();
    let path = handle_show_path(service, PathRef { id: path_id.0 }).await?;

    if !path.contains(milestone_id) {
        return Err(WaypointError::MilestoneNotFound { id: milestone_id });
    }

    Ok(tracker.toggle(&path, milestone_id).await)
}

/// Asks the service for its health status.
pub async fn handle_health(service: &dyn PathService) -> Result<String> {
    service.health().await
}
