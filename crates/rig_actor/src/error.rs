//! Actor-layer error types.

use rig_hw::DeviceError;

/// Errors surfaced by an actor's operations.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// A command payload was outside the actor's valid domain. Raised
    /// synchronously from `apply`, never from the update loop. Scene
    /// scripts are externally authored, so the message carries enough
    /// detail to fix the script.
    #[error("invalid command: {reason}")]
    InvalidCommand {
        /// What was wrong with the payload.
        reason: String,
    },

    /// A hardware write failed. Surfaced from whichever operation issued
    /// the write; never retried.
    #[error("device fault: {0}")]
    Device(#[from] DeviceError),

    /// The update loop ran against an actor in an inactive or unconfigured
    /// state. This is a configuration bug, not a recoverable condition —
    /// the surrounding task terminates with this error.
    #[error("invalid actor state: {reason}")]
    InvalidState {
        /// Which state the actor was in and why that is fatal.
        reason: String,
    },
}

impl ActorError {
    /// Convenience constructor for [`ActorError::InvalidCommand`].
    #[must_use]
    pub fn invalid_command(reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for [`ActorError::InvalidState`].
    #[must_use]
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}
