use crate::RunState;

use tokio::sync::oneshot;

/// Events sent from the supervisor to whoever owns the displayed menu.
///
/// Every accepted launch produces exactly two `StateChanged` events, running
/// first and idle second. They are never coalesced.
#[derive(Debug)]
pub enum SupervisorEvent {
    /// The run state changed; the menu should be rebuilt.
    StateChanged {
        /// New run state.
        state: RunState,
        /// Signal once the rebuild for `state` has been applied.
        applied: RebuildAck,
    },
}

impl SupervisorEvent {
    /// The announced run state.
    pub fn state(&self) -> &RunState {
        match self {
            SupervisorEvent::StateChanged { state, .. } => state,
        }
    }
}

/// Completion handle for a menu rebuild.
///
/// The managed process of a launch is not spawned until the Running rebuild
/// is acknowledged. Dropping the handle counts as acknowledgement.
#[derive(Debug)]
pub struct RebuildAck(Option<oneshot::Sender<()>>);

impl RebuildAck {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self(Some(tx)), rx)
    }

    /// A handle nobody waits on.
    pub fn detached() -> Self {
        Self(None)
    }

    /// Report the rebuild as applied.
    pub fn ack(mut self) {
        if let Some(tx) = self.0.take() {
            // Receiver gone means nobody is waiting any more.
            let _ = tx.send(());
        }
    }
}
