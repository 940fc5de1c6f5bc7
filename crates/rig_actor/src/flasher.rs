//! Alternating lamp pair.
//!
//! Flips a red/blue lamp pair on a fixed period, recast from a hardware
//! timer callback into the actor contract so scenes can script it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use rig_hw::PositionSink;

use crate::actor::Actor;
use crate::error::ActorError;

const DEFAULT_PERIOD: Duration = Duration::from_millis(500);

/// One discrete flasher command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlasherCommand {
    /// Whether the lamps should be flipping.
    pub enabled: bool,
    /// Flip period in milliseconds. Must be non-zero while enabled.
    pub period_ms: u64,
}

/// Two-lamp alternating flasher. At most one lamp is lit at a time.
#[derive(Debug)]
pub struct FlasherActor<L: PositionSink> {
    red: L,
    blue: L,
    enabled: bool,
    period: Duration,
    red_lit: bool,
}

impl<L: PositionSink> FlasherActor<L> {
    /// Creates a flasher over two lamp channels, initially disabled.
    #[must_use]
    pub fn new(red: L, blue: L) -> Self {
        Self {
            red,
            blue,
            enabled: false,
            period: DEFAULT_PERIOD,
            red_lit: false,
        }
    }
}

impl<L: PositionSink + 'static> Actor for FlasherActor<L> {
    type Command = FlasherCommand;

    fn apply(&mut self, command: &FlasherCommand) -> Result<(), ActorError> {
        if command.enabled && command.period_ms == 0 {
            return Err(ActorError::invalid_command(
                "flasher period must be non-zero while enabled",
            ));
        }
        self.enabled = command.enabled;
        if command.enabled {
            self.period = Duration::from_millis(command.period_ms);
        } else {
            self.red.set_fraction(0.0)?;
            self.blue.set_fraction(0.0)?;
        }
        Ok(())
    }

    async fn tick(&mut self) -> Result<Duration, ActorError> {
        if self.enabled {
            self.red_lit = !self.red_lit;
            self.red.set_fraction(if self.red_lit { 1.0 } else { 0.0 })?;
            self.blue.set_fraction(if self.red_lit { 0.0 } else { 1.0 })?;
        }
        Ok(self.period)
    }

    fn on_deactivate(&mut self) -> Result<(), ActorError> {
        self.red.set_fraction(0.0)?;
        self.blue.set_fraction(0.0)?;
        Ok(())
    }
}
