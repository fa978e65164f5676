//! Supervised launches of the managed application.
//!
//! At most one run is supervised at a time. The run state flips to running
//! and the process is only spawned once the running rebuild is acknowledged;
//! it flips back to idle once the exit is observed. Each transition is
//! announced on the event channel.

use crate::{CoreError, CoreResult, ProfileName, RebuildAck, RunState, SupervisorEvent};

use std::{
    panic::Location,
    path::{Path, PathBuf},
    sync::Arc,
};

use error_location::ErrorLocation;
use tokio::{
    process::Command,
    sync::{Mutex, mpsc, oneshot},
};
use tracing::{Instrument, debug, error, info, info_span, instrument, warn};
use uuid::Uuid;

/// Owns the process-wide [`RunState`] and the managed child of the current run.
pub struct ProcessSupervisor {
    binary: PathBuf,
    state: Arc<Mutex<RunState>>,
    events_tx: mpsc::Sender<SupervisorEvent>,
}

impl ProcessSupervisor {
    /// Create an idle supervisor for `binary`.
    pub fn new<P: AsRef<Path>>(binary: P, events_tx: mpsc::Sender<SupervisorEvent>) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
            state: Arc::new(Mutex::new(RunState::Idle)),
            events_tx,
        }
    }

    /// Snapshot of the current run state.
    pub async fn run_state(&self) -> RunState {
        self.state.lock().await.clone()
    }

    /// Request a run of `<binary> run [--profile <profile>]`.
    ///
    /// On acceptance the state becomes `Running(profile)` and a
    /// `StateChanged` event is sent. A background task spawns the process
    /// once that event's [`RebuildAck`] is acknowledged (or dropped), then
    /// waits for exit. Returns the run id used in logs.
    ///
    /// # Errors
    ///
    /// - [`CoreError::LaunchRejected`] if a run is already in progress. The
    ///   state is left untouched.
    /// - [`CoreError::EventChannelClosed`] if nobody is listening for state
    ///   changes. The state is reverted to idle and nothing is spawned.
    #[instrument(skip(self))]
    pub async fn launch(&self, profile: Option<ProfileName>) -> CoreResult<Uuid> {
        {
            let mut state = self.state.lock().await;
            if let RunState::Running(running) = &*state {
                debug!(running = ?running, "Launch rejected, already running");
                return Err(CoreError::LaunchRejected {
                    running: running.clone(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            *state = RunState::Running(profile.clone());
        }

        // Running event goes out before the background task exists, so the
        // idle event can never overtake it.
        let (applied, applied_rx) = RebuildAck::channel();
        if self
            .events_tx
            .send(SupervisorEvent::StateChanged {
                state: RunState::Running(profile.clone()),
                applied,
            })
            .await
            .is_err()
        {
            *self.state.lock().await = RunState::Idle;
            return Err(CoreError::EventChannelClosed {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let run_id = Uuid::new_v4();
        let span = info_span!("managed_run", run_id = %run_id, profile = ?profile);

        tokio::spawn(
            supervise(
                self.binary.clone(),
                profile,
                applied_rx,
                Arc::clone(&self.state),
                self.events_tx.clone(),
            )
            .instrument(span),
        );

        info!(run_id = %run_id, "Launch accepted");

        Ok(run_id)
    }
}

/// Wait for the running rebuild, spawn the managed binary, wait for it,
/// then return to idle.
///
/// Idle is restored and announced on every path, including spawn failure.
async fn supervise(
    binary: PathBuf,
    profile: Option<ProfileName>,
    applied_rx: oneshot::Receiver<()>,
    state: Arc<Mutex<RunState>>,
    events_tx: mpsc::Sender<SupervisorEvent>,
) {
    if applied_rx.await.is_err() {
        debug!("Running rebuild dropped without ack, continuing");
    }

    let mut command = Command::new(&binary);
    command.arg("run");
    if let Some(profile) = &profile {
        command.arg("--profile").arg(profile.as_str());
    }

    match command.spawn() {
        Ok(mut child) => {
            info!(pid = ?child.id(), "Managed application started");
            match child.wait().await {
                Ok(status) => info!(%status, "Managed application exited"),
                Err(e) => warn!(error = %e, "Lost track of managed application"),
            }
        }
        Err(e) => {
            let e = CoreError::SpawnFailed {
                program: binary,
                source: e,
                location: ErrorLocation::from(Location::caller()),
            };
            error!(error = %e, "Failed to start managed application");
        }
    }

    *state.lock().await = RunState::Idle;

    if events_tx
        .send(SupervisorEvent::StateChanged {
            state: RunState::Idle,
            applied: RebuildAck::detached(),
        })
        .await
        .is_err()
    {
        debug!("Event receiver gone, idle state not announced");
    }
}
