//! Path generation: send a goal to the service and map the answer to a
//! [`Path`].

use std::sync::Arc;

use log::{error, info, warn};

use crate::{
    client::PathService,
    error::{GENERATION_FALLBACK_MESSAGE, Result, WaypointError},
    models::{GenerationRequest, Path},
};

/// Orchestrates a single generation round trip.
///
/// Exactly one request is sent per call and nothing is retried; the caller
/// decides whether to let the user resubmit and must not start a second
/// generation while one is pending.
#[derive(Clone)]
pub struct PathGenerator {
    service: Arc<dyn PathService>,
}

impl PathGenerator {
    pub fn new(service: Arc<dyn PathService>) -> Self {
        Self { service }
    }

    /// Generates a path for the request.
    ///
    /// # Errors
    ///
    /// * `WaypointError::InvalidInput` - blank goal; no request is sent
    /// * `WaypointError::Generation` - transport failure, non-success status,
    ///   malformed or empty payload. The message is the server's `detail`
    ///   when it sent one, otherwise a generic retry hint.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Path> {
        request.validate()?;

        let payload = self.service.generate_path(request).await.map_err(|e| {
            error!("Learning path generation failed: {e}");
            match e {
                WaypointError::Request {
                    detail: Some(detail),
                    ..
                } => WaypointError::generation(detail),
                _ => WaypointError::generation(GENERATION_FALLBACK_MESSAGE),
            }
        })?;

        let path = Path::try_from(payload).map_err(|e| {
            error!("Generated learning path is invalid: {e}");
            WaypointError::generation(GENERATION_FALLBACK_MESSAGE)
        })?;

        if path.milestones.is_empty() {
            warn!("Generated learning path '{}' has no milestones", path.title);
            return Err(WaypointError::generation(
                "The generated learning path has no milestones. Please try again.",
            ));
        }

        info!(
            "Generated learning path '{}' with {} milestones",
            path.title,
            path.milestones.len()
        );
        Ok(path)
    }
}
