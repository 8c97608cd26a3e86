//! Shared fixtures for unit tests.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{
    client::{MilestonePayload, PathPayload, PathService},
    error::{Result, WaypointError},
    models::{
        ExperienceLevel, GenerationRequest, Milestone, MilestoneId, Path, PathId, TimeCommitment,
    },
};

/// A path with one milestone per entry of `hours`, ids starting at 1.
pub(crate) fn sample_path(hours: &[f64]) -> Path {
    Path {
        id: Some(PathId(1)),
        title: "Learn Rust".to_string(),
        description: "Systems programming from scratch".to_string(),
        experience_level: ExperienceLevel::Beginner,
        time_commitment: TimeCommitment::FiveToTen,
        created_at: None,
        milestones: hours
            .iter()
            .enumerate()
            .map(|(i, h)| {
                Milestone::new(
                    i as u64 + 1,
                    i as u32,
                    format!("Milestone {}", i + 1),
                    format!("Description {}", i + 1),
                    *h,
                )
                .with_resources(["The Rust Book", "Rustlings"])
            })
            .collect(),
    }
}

/// Service payload matching [`sample_path`].
pub(crate) fn sample_payload(hours: &[f64]) -> PathPayload {
    PathPayload {
        id: Some(1),
        title: "Learn Rust".to_string(),
        description: "Systems programming from scratch".to_string(),
        experience_level: "beginner".to_string(),
        time_commitment: "5-10 hours/week".to_string(),
        created_at: None,
        milestones: hours
            .iter()
            .enumerate()
            .map(|(i, h)| MilestonePayload {
                id: i as u64 + 1,
                title: format!("Milestone {}", i + 1),
                description: format!("Description {}", i + 1),
                order: Some(i as u32),
                estimated_hours: Some(*h),
                resources: vec!["The Rust Book".to_string(), "Rustlings".to_string()],
                completed: false,
                completed_at: None,
            })
            .collect(),
    }
}

pub(crate) fn sample_request() -> GenerationRequest {
    GenerationRequest {
        goal: "Learn Rust".to_string(),
        experience_level: ExperienceLevel::Beginner,
        time_commitment: TimeCommitment::FiveToTen,
    }
}

/// In-memory [`PathService`] that records calls.
#[derive(Default)]
pub(crate) struct FakePathService {
    payload: Option<PathPayload>,
    generation_detail: Option<String>,
    fail_updates: bool,
    gate: Option<Arc<Notify>>,
    generation_calls: AtomicUsize,
    completion_calls: Mutex<Vec<(MilestoneId, bool)>>,
}

impl FakePathService {
    /// Generation succeeds with this payload.
    pub(crate) fn generating(payload: PathPayload) -> Self {
        Self {
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// Generation fails with a 500 carrying this detail.
    pub(crate) fn failing_generation(detail: &str) -> Self {
        Self {
            generation_detail: Some(detail.to_string()),
            ..Self::default()
        }
    }

    /// Completion updates fail with a 500.
    pub(crate) fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    /// Generation waits until the gate is notified.
    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn generation_calls(&self) -> usize {
        self.generation_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn completion_calls(&self) -> Vec<(MilestoneId, bool)> {
        self.completion_calls.lock().unwrap().clone()
    }
}

fn server_error(detail: Option<String>) -> WaypointError {
    WaypointError::Request {
        message: detail.clone().unwrap_or_else(|| "server returned 500".to_string()),
        status: Some(500),
        detail,
    }
}

#[async_trait]
impl PathService for FakePathService {
    async fn generate_path(&self, _request: &GenerationRequest) -> Result<PathPayload> {
        self.generation_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.payload {
            Some(payload) => Ok(payload.clone()),
            None => Err(server_error(self.generation_detail.clone())),
        }
    }

    async fn set_milestone_completion(&self, id: MilestoneId, completed: bool) -> Result<()> {
        self.completion_calls.lock().unwrap().push((id, completed));
        if self.fail_updates {
            Err(server_error(None))
        } else {
            Ok(())
        }
    }

    async fn list_paths(&self) -> Result<Vec<PathPayload>> {
        Ok(self.payload.iter().cloned().collect())
    }

    async fn get_path(&self, id: PathId) -> Result<PathPayload> {
        self.payload
            .clone()
            .filter(|p| p.id == Some(id.0))
            .ok_or(WaypointError::PathNotFound { id })
    }

    async fn delete_path(&self, _id: PathId) -> Result<()> {
        Ok(())
    }

    async fn health(&self) -> Result<String> {
        Ok("healthy".to_string())
    }
}
