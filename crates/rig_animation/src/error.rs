//! Animation-layer error types.
//!
//! Scene scripts are externally authored, so every error carries the
//! animator name (and step index where applicable) needed to diagnose a bad
//! script.

use rig_actor::ActorError;
use tokio::task::JoinError;

/// Errors from running one animation.
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    /// The actor is already being driven by another animation. Two
    /// simultaneous update loops on one actuator are never allowed.
    #[error("animator {animator}: actor is already driven by another animation")]
    ActorBusy {
        /// The animator that was rejected.
        animator: String,
    },

    /// Applying a scripted step failed.
    #[error("animator {animator}: step {step}: {source}")]
    Step {
        /// The animator running the script.
        animator: String,
        /// Zero-based index of the failing step.
        step: usize,
        /// The underlying actor failure.
        #[source]
        source: ActorError,
    },

    /// The actor's update loop failed.
    #[error("animator {animator}: update loop: {source}")]
    UpdateLoop {
        /// The animator owning the update loop.
        animator: String,
        /// The underlying actor failure.
        #[source]
        source: ActorError,
    },

    /// The update-loop task itself died (panicked or was aborted).
    #[error("animator {animator}: update loop task failed: {source}")]
    UpdateLoopTask {
        /// The animator owning the update loop.
        animator: String,
        /// The task-level failure.
        #[source]
        source: JoinError,
    },
}

/// A scene failed because one of its animations failed.
#[derive(Debug, thiserror::Error)]
#[error("scene {scene}: {source}")]
pub struct SceneError {
    /// The failing scene.
    pub scene: String,
    /// The first animation failure; surviving siblings were cancelled.
    #[source]
    pub source: AnimationError,
}
