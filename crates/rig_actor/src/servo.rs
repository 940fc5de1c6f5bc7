//! Positional actuator with exponential smoothing.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use rig_hw::PositionSink;

use crate::actor::Actor;
use crate::error::ActorError;

/// Fixed update quantum for servo interpolation.
const UPDATE_PERIOD: Duration = Duration::from_millis(10);

/// One discrete servo command: a target setpoint and how fast to creep
/// toward it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ServoCommand {
    /// Logical target position in `[0.0, 1.0]`.
    pub target: f64,
    /// Smoothing factor in `[0.0, 1.0]`: near `0.0` is a slow creep, `1.0`
    /// jumps to the target in a single quantum.
    pub smoothing: f64,
}

/// Construction-time configuration for a [`ServoActor`].
///
/// `closed_position` and `open_position` map the logical `[0.0, 1.0]` range
/// onto the fraction of the physical actuation range this servo is allowed
/// to use — a jaw servo, for instance, only sweeps a narrow arc.
#[derive(Debug, Clone, Copy)]
pub struct ServoConfig {
    /// Logical starting position.
    pub initial_position: f64,
    /// Physical fraction corresponding to logical `0.0`.
    pub closed_position: f64,
    /// Physical fraction corresponding to logical `1.0`.
    pub open_position: f64,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            initial_position: 0.5,
            closed_position: 0.0,
            open_position: 1.0,
        }
    }
}

impl ServoConfig {
    /// Creates the default configuration (full physical range, centred).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the physical range to `[closed, open]`.
    #[must_use]
    pub fn with_range(mut self, closed: f64, open: f64) -> Self {
        self.closed_position = closed;
        self.open_position = open;
        self
    }

    /// Set the logical starting position.
    #[must_use]
    pub fn with_initial(mut self, position: f64) -> Self {
        self.initial_position = position;
        self
    }
}

/// Continuously-smoothed positional actuator.
///
/// Each update quantum moves the current position one step of a discrete
/// exponential low-pass filter toward the commanded target:
///
/// ```text
/// current ← (1 − smoothing) · current + smoothing · target
/// ```
///
/// Convergence is monotonic for smoothing in `(0, 1]` — no overshoot.
#[derive(Debug)]
pub struct ServoActor<S: PositionSink> {
    sink: S,
    current: f64,
    target: f64,
    smoothing: f64,
    /// Physical fraction at logical 0.0.
    offset: f64,
    /// Physical span covered by the logical range.
    range: f64,
}

impl<S: PositionSink> ServoActor<S> {
    /// Creates a servo actor and drives the sink to the initial position.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::InvalidCommand`] if the configuration positions
    /// are outside `[0.0, 1.0]`, or [`ActorError::Device`] if the initial
    /// write fails.
    pub fn new(mut sink: S, config: ServoConfig) -> Result<Self, ActorError> {
        for (name, value) in [
            ("initial_position", config.initial_position),
            ("closed_position", config.closed_position),
            ("open_position", config.open_position),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ActorError::invalid_command(format!(
                    "servo {name} {value} outside [0.0, 1.0]"
                )));
            }
        }

        let offset = config.closed_position;
        let range = config.open_position - config.closed_position;
        let current = config.initial_position;
        sink.set_fraction(current * range + offset)?;

        Ok(Self {
            sink,
            current,
            target: current,
            smoothing: 0.0,
            offset,
            range,
        })
    }

    /// Returns the current logical position.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Returns a reference to the underlying sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: PositionSink + 'static> Actor for ServoActor<S> {
    type Command = ServoCommand;

    fn apply(&mut self, command: &ServoCommand) -> Result<(), ActorError> {
        if !(0.0..=1.0).contains(&command.target) {
            return Err(ActorError::invalid_command(format!(
                "servo target {} outside [0.0, 1.0]",
                command.target
            )));
        }
        if !(0.0..=1.0).contains(&command.smoothing) {
            return Err(ActorError::invalid_command(format!(
                "servo smoothing {} outside [0.0, 1.0]",
                command.smoothing
            )));
        }
        self.target = command.target;
        self.smoothing = command.smoothing;
        Ok(())
    }

    async fn tick(&mut self) -> Result<Duration, ActorError> {
        self.current = (1.0 - self.smoothing) * self.current + self.smoothing * self.target;
        let physical = self.current * self.range + self.offset;
        trace!(current = self.current, physical, "servo quantum");
        self.sink.set_fraction(physical)?;
        Ok(UPDATE_PERIOD)
    }

    fn on_deactivate(&mut self) -> Result<(), ActorError> {
        // The servo holds its last position.
        Ok(())
    }
}
