//! Drives a [`Session`] against a [`PathService`] from one task.
//!
//! The runner owns the session and is its only writer. Callers talk to it
//! through a cloneable [`SessionHandle`]; remote calls run as spawned tasks
//! that post their outcome back to the runner as events, so the session is
//! never locked across an await. Every applied event publishes a fresh
//! [`Snapshot`].

use std::sync::Arc;

use log::{debug, info};
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};

use super::{Effect, Event, Session, ViewState};
use crate::{
    client::PathService,
    error::{Result, WaypointError},
    generator::PathGenerator,
};

const CHANNEL_CAPACITY: usize = 32;

/// Read-only copy of the session state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub view: ViewState,
    /// A generation request is outstanding
    pub generating: bool,
    /// Last generation error shown to the learner
    pub error: Option<String>,
    /// Completion updates not yet answered
    pub syncs_in_flight: usize,
}

impl Snapshot {
    fn of(session: &Session) -> Self {
        Self {
            view: session.view().clone(),
            generating: session.is_generating(),
            error: session.error().map(str::to_string),
            syncs_in_flight: session.syncs_in_flight(),
        }
    }

    /// No request of any kind is outstanding.
    pub fn is_idle(&self) -> bool {
        !self.generating && self.syncs_in_flight == 0
    }
}

struct Command {
    event: Event,
    reply_tx: oneshot::Sender<Result<()>>,
}

/// Cloneable client interface to a running session.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Snapshot>,
}

impl SessionHandle {
    /// Sends an event and waits until the runner has applied it.
    ///
    /// Returns once the state change is visible in [`snapshot`](Self::snapshot);
    /// any remote call the event starts keeps running in the background.
    ///
    /// # Errors
    ///
    /// Returns the session's rejection of the event, or
    /// `WaypointError::NotAllowed` if the runner has stopped.
    pub async fn dispatch(&self, event: Event) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Command { event, reply_tx })
            .await
            .map_err(|_| stopped())?;

        reply_rx.await.map_err(|_| stopped())?
    }

    /// Current state.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Waits until the state satisfies `predicate` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::NotAllowed` if the runner stops first.
    pub async fn wait_until(&self, predicate: impl FnMut(&Snapshot) -> bool) -> Result<Snapshot> {
        let mut snapshots = self.snapshots.clone();
        let snapshot = snapshots.wait_for(predicate).await.map_err(|_| stopped())?;
        Ok(snapshot.clone())
    }
}

fn stopped() -> WaypointError {
    WaypointError::not_allowed("the session has stopped")
}

/// Task that owns a [`Session`].
pub struct SessionRunner {
    session: Session,
    generator: PathGenerator,
    service: Arc<dyn PathService>,
    commands: mpsc::Receiver<Command>,
    completions_tx: mpsc::Sender<Event>,
    completions_rx: mpsc::Receiver<Event>,
    snapshots: watch::Sender<Snapshot>,
}

impl SessionRunner {
    /// Starts the runner on the current tokio runtime.
    ///
    /// The task ends once every [`SessionHandle`] has been dropped. Remote
    /// calls still in flight at that point finish on their own and their
    /// outcome is discarded.
    pub fn spawn(session: Session, service: Arc<dyn PathService>) -> (SessionHandle, JoinHandle<()>) {
        let (tx, commands) = mpsc::channel(CHANNEL_CAPACITY);
        let (completions_tx, completions_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (snapshots, snapshot_rx) = watch::channel(Snapshot::of(&session));

        let runner = Self {
            session,
            generator: PathGenerator::new(service.clone()),
            service,
            commands,
            completions_tx,
            completions_rx,
            snapshots,
        };

        let task = tokio::spawn(runner.run());
        let handle = SessionHandle {
            tx,
            snapshots: snapshot_rx,
        };
        (handle, task)
    }

    async fn run(mut self) {
        debug!("Session runner started");
        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    let Some(Command { event, reply_tx }) = command else {
                        break;
                    };
                    let result = self.apply(event);
                    let _ = reply_tx.send(result);
                }
                Some(event) = self.completions_rx.recv() => {
                    if let Err(e) = self.apply(event) {
                        debug!("Completion event rejected: {e}");
                    }
                }
            }
        }
        info!("Session runner stopped");
    }

    fn apply(&mut self, event: Event) -> Result<()> {
        let outcome = self.session.handle(event);
        if let Ok(Some(effect)) = &outcome {
            self.perform(effect.clone());
        }
        self.snapshots.send_replace(Snapshot::of(&self.session));
        outcome.map(|_| ())
    }

    fn perform(&self, effect: Effect) {
        let completions = self.completions_tx.clone();
        match effect {
            Effect::Generate { ticket, request } => {
                let generator = self.generator.clone();
                tokio::spawn(async move {
                    let result = generator.generate(&request).await;
                    let _ = completions.send(Event::Generated { ticket, result }).await;
                });
            }
            Effect::SyncMilestone(update) => {
                let service = self.service.clone();
                tokio::spawn(async move {
                    let event = match update.send(service.as_ref()).await {
                        Ok(()) => Event::SyncSucceeded(update),
                        Err(error) => Event::SyncFailed { update, error },
                    };
                    let _ = completions.send(event).await;
                });
            }
        }
    }
}
