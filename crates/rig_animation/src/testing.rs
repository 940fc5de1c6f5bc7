//! Test probes: an instrumented actor that records everything done to it,
//! timestamped against the (paused) tokio clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

use rig_actor::{Actor, ActorError};

/// One observed event on a [`ProbeActor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProbeEvent {
    Applied { id: u32, at: Instant },
    Ticked { at: Instant },
    Deactivated { at: Instant },
}

/// Shared, cloneable event log.
#[derive(Debug, Clone, Default)]
pub(crate) struct ProbeLog {
    events: Arc<Mutex<Vec<ProbeEvent>>>,
}

impl ProbeLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: ProbeEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub(crate) fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Command ids in application order.
    pub(crate) fn applied_ids(&self) -> Vec<u32> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                ProbeEvent::Applied { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Millisecond offsets from `t0` at which commands were applied.
    pub(crate) fn applied_offsets_ms(&self, t0: Instant) -> Vec<u64> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                ProbeEvent::Applied { at, .. } => {
                    Some(at.duration_since(t0).as_millis() as u64)
                }
                _ => None,
            })
            .collect()
    }

    pub(crate) fn ticks(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, ProbeEvent::Ticked { .. }))
            .count()
    }

    pub(crate) fn deactivations(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, ProbeEvent::Deactivated { .. }))
            .count()
    }
}

/// A scripted command for a [`ProbeActor`]: either succeeds with an id, or
/// fails to exercise error paths.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProbeCommand {
    pub(crate) id: u32,
    pub(crate) fail: bool,
}

impl ProbeCommand {
    pub(crate) fn ok(id: u32) -> Self {
        Self { id, fail: false }
    }

    pub(crate) fn failing() -> Self {
        Self { id: 0, fail: true }
    }
}

/// An actor that does nothing but record what happens to it.
#[derive(Debug)]
pub(crate) struct ProbeActor {
    log: ProbeLog,
    period: Duration,
}

impl ProbeActor {
    pub(crate) fn new(log: ProbeLog, period_ms: u64) -> Self {
        Self {
            log,
            period: Duration::from_millis(period_ms),
        }
    }
}

impl Actor for ProbeActor {
    type Command = ProbeCommand;

    fn apply(&mut self, command: &ProbeCommand) -> Result<(), ActorError> {
        if command.fail {
            return Err(ActorError::invalid_command("scripted probe failure"));
        }
        self.log.push(ProbeEvent::Applied {
            id: command.id,
            at: Instant::now(),
        });
        Ok(())
    }

    async fn tick(&mut self) -> Result<Duration, ActorError> {
        self.log.push(ProbeEvent::Ticked { at: Instant::now() });
        Ok(self.period)
    }

    fn on_deactivate(&mut self) -> Result<(), ActorError> {
        self.log.push(ProbeEvent::Deactivated { at: Instant::now() });
        Ok(())
    }
}
