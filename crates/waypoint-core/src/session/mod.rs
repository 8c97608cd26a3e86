//! Session controller: the top-level view state and its transitions.
//!
//! A session is either showing no path (the generation form) or browsing one
//! active path. Every user action and every remote completion arrives as an
//! [`Event`]; [`Session::handle`] applies it and returns the [`Effect`] the
//! caller must perform, if any. Nothing here does I/O, so transitions are
//! testable without a server. [`runner`] drives a session against a
//! [`PathService`](crate::client::PathService) from a single task.
//!
//! ```text
//!            Submit ──▶ (pending) ──Generated(Ok)──▶ ┌─────────────┐
//! ┌────────┐                                         │ ActivePath  │
//! │ NoPath │ ◀─────────── Back / StartOver ───────── │ (path, exp) │
//! └────────┘                                         └─────────────┘
//! ```

use log::{debug, info, warn};

use crate::{
    error::{Result, WaypointError},
    models::{GenerationRequest, MilestoneId, Path},
    tracker::{PendingUpdate, SyncFailurePolicy, toggle_completion},
};

pub mod runner;


pub use runner::{SessionHandle, SessionRunner};

/// Which screen the session is on.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// No path yet: the learner fills in the generation form.
    #[default]
    NoPath,
    /// Browsing a path; at most one milestone is expanded.
    ActivePath {
        path: Path,
        expanded: Option<MilestoneId>,
    },
}

impl ViewState {
    /// The active path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ViewState::ActivePath { path, .. } => Some(path),
            ViewState::NoPath => None,
        }
    }

    /// The expanded milestone, if any.
    pub fn expanded(&self) -> Option<MilestoneId> {
        match self {
            ViewState::ActivePath { expanded, .. } => *expanded,
            ViewState::NoPath => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ViewState::ActivePath { .. })
    }
}

/// Identifies one generation request so late answers can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Inputs to the session.
#[derive(Debug)]
pub enum Event {
    /// Submit the generation form.
    Submit(GenerationRequest),
    /// A generation request finished.
    Generated { ticket: Ticket, result: Result<Path> },
    /// Browse an already stored path.
    Open(Path),
    /// Expand a milestone, or collapse it if it is the expanded one.
    ToggleExpanded(MilestoneId),
    /// Flip a milestone's completion flag.
    ToggleCompleted(MilestoneId),
    /// A completion update reached the server.
    SyncSucceeded(PendingUpdate),
    /// A completion update did not reach the server.
    SyncFailed {
        update: PendingUpdate,
        error: WaypointError,
    },
    /// Hide the last generation error.
    DismissError,
    /// Leave the path and return to the form.
    Back,
    /// Discard the path and start a new one.
    StartOver,
}

/// Work the caller must perform after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send a generation request and report back with [`Event::Generated`].
    Generate {
        ticket: Ticket,
        request: GenerationRequest,
    },
    /// Send a completion update and report back with
    /// [`Event::SyncSucceeded`] or [`Event::SyncFailed`].
    SyncMilestone(PendingUpdate),
}

/// Owned session state. One writer at a time.
#[derive(Debug, Default)]
pub struct Session {
    view: ViewState,
    pending: Option<Ticket>,
    next_ticket: u64,
    error: Option<String>,
    syncs_in_flight: usize,
    policy: SyncFailurePolicy,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets what happens to optimistic changes whose update fails.
    pub fn with_policy(mut self, policy: SyncFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// True while a generation request is outstanding.
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Last generation error, until dismissed or a new submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Completion updates sent but not yet answered.
    pub fn syncs_in_flight(&self) -> usize {
        self.syncs_in_flight
    }

    /// Applies one event.
    ///
    /// # Errors
    ///
    /// Only [`Event::Submit`] can be rejected:
    /// * `WaypointError::InvalidInput` - blank goal
    /// * `WaypointError::NotAllowed` - a generation is pending or a path is
    ///   active
    pub fn handle(&mut self, event: Event) -> Result<Option<Effect>> {
        match event {
            Event::Submit(request) => self.submit(request).map(Some),
            Event::Generated { ticket, result } => {
                self.generated(ticket, result);
                Ok(None)
            }
            Event::Open(path) => {
                info!("Opening learning path '{}'", path.title);
                self.enter(path);
                Ok(None)
            }
            Event::ToggleExpanded(id) => {
                self.toggle_expanded(id);
                Ok(None)
            }
            Event::ToggleCompleted(id) => Ok(self.toggle_completed(id)),
            Event::SyncSucceeded(update) => {
                self.syncs_in_flight = self.syncs_in_flight.saturating_sub(1);
                debug!("Milestone {} synced", update.milestone_id);
                Ok(None)
            }
            Event::SyncFailed { update, error } => {
                self.syncs_in_flight = self.syncs_in_flight.saturating_sub(1);
                self.sync_failed(update, &error);
                Ok(None)
            }
            Event::DismissError => {
                self.error = None;
                Ok(None)
            }
            Event::Back | Event::StartOver => {
                self.reset();
                Ok(None)
            }
        }
    }

    fn submit(&mut self, request: GenerationRequest) -> Result<Effect> {
        if self.pending.is_some() {
            return Err(WaypointError::not_allowed(
                "a learning path is already being generated",
            ));
        }
        if self.view.is_active() {
            return Err(WaypointError::not_allowed(
                "start over before generating a new path",
            ));
        }
        request.validate()?;

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.error = None;

        info!("Generating learning path for '{}'", request.goal);
        Ok(Effect::Generate { ticket, request })
    }

    fn generated(&mut self, ticket: Ticket, result: Result<Path>) {
        if self.pending != Some(ticket) || self.view.is_active() {
            debug!("Ignoring stale generation result {ticket:?}");
            return;
        }
        self.pending = None;

        match result {
            Ok(path) => self.enter(path),
            Err(e) => {
                warn!("Generation failed: {e}");
                self.error = Some(e.user_message());
            }
        }
    }

    fn enter(&mut self, path: Path) {
        self.pending = None;
        self.error = None;
        self.view = ViewState::ActivePath {
            path,
            expanded: None,
        };
    }

    fn toggle_expanded(&mut self, id: MilestoneId) {
        let ViewState::ActivePath { path, expanded } = &mut self.view else {
            debug!("Ignoring expand of {id} with no active path");
            return;
        };
        if !path.contains(id) {
            warn!("Ignoring expand of unknown milestone {id}");
            return;
        }

        *expanded = if *expanded == Some(id) { None } else { Some(id) };
    }

    fn toggle_completed(&mut self, id: MilestoneId) -> Option<Effect> {
        let ViewState::ActivePath { path, .. } = &mut self.view else {
            debug!("Ignoring completion toggle of {id} with no active path");
            return None;
        };

        let toggle = toggle_completion(path, id);
        *path = toggle.path;

        let update = toggle.pending?;
        self.syncs_in_flight += 1;
        Some(Effect::SyncMilestone(update))
    }

    fn sync_failed(&mut self, update: PendingUpdate, error: &WaypointError) {
        warn!("Keeping going after failed sync: {error}");

        if self.policy != SyncFailurePolicy::Rollback {
            return;
        }
        let ViewState::ActivePath { path, .. } = &mut self.view else {
            debug!("Sync failure arrived after the path was discarded");
            return;
        };
        if let Some(restored) = update.rollback(path) {
            info!("Rolled back milestone {}", update.milestone_id);
            *path = restored;
        }
    }

    fn reset(&mut self) {
        if let ViewState::ActivePath { path, .. } = &self.view {
            info!("Leaving learning path '{}'", path.title);
        }
        self.view = ViewState::NoPath;
        self.pending = None;
    }
}
