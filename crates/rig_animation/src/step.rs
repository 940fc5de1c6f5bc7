//! Scripted animation steps.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One scripted step: a command payload and how long to hold it before the
/// next command is dispatched.
///
/// Steps are plain data — scene scripts are authored externally and
/// deserialized into step lists. The engine never interprets the payload
/// beyond handing it to the actor's `apply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step<C> {
    /// The command to apply at the start of this step.
    pub command: C,
    /// How long to hold before the next step, in milliseconds (wall-clock).
    pub hold_ms: u64,
}

impl<C> Step<C> {
    /// Creates a step.
    #[must_use]
    pub fn new(command: C, hold_ms: u64) -> Self {
        Self { command, hold_ms }
    }

    /// The hold duration.
    #[must_use]
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}
