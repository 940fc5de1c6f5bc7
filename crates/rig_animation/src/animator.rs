//! Animator — sequences one actor through a scripted step list.

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use rig_actor::{Actor, ActorError};

use crate::error::AnimationError;
use crate::handle::ActorHandle;
use crate::step::Step;

/// Binds one actor to an ordered list of timed command steps.
///
/// [`animate`](Animator::animate) starts the actor's update loop as an
/// independent task, then dispatches the steps strictly in sequence: each
/// step's command is applied, the step's hold duration elapses, and only
/// then is the next command applied. Step dispatch never waits on the
/// update loop. Every run replays the script from step 0.
#[derive(Debug)]
pub struct Animator<A: Actor> {
    name: String,
    handle: ActorHandle<A>,
    steps: Vec<Step<A::Command>>,
}

impl<A: Actor> Animator<A> {
    /// Creates an animator over an actor handle and a fixed step script.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        handle: ActorHandle<A>,
        steps: Vec<Step<A::Command>>,
    ) -> Self {
        Self {
            name: name.into(),
            handle,
            steps,
        }
    }

    /// Returns the animator's name (used in logs and errors).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the animation to completion.
    ///
    /// Claims the actor, spawns its update loop, dispatches all steps in
    /// order, then stops the loop and surfaces any failure it collected.
    /// If this future is dropped mid-run, the drop-guard cancels the update
    /// loop, which still runs the actor's `on_deactivate` and releases the
    /// actor within one quantum.
    ///
    /// # Errors
    ///
    /// Returns [`AnimationError::ActorBusy`] if the actor is already being
    /// animated, [`AnimationError::Step`] if applying a step fails, or an
    /// update-loop error collected at the join.
    pub async fn animate(&self) -> Result<(), AnimationError> {
        // No await between the claim and the spawn, so the claim can never
        // leak on cancellation.
        if !self.handle.try_activate() {
            return Err(AnimationError::ActorBusy {
                animator: self.name.clone(),
            });
        }
        let cancel = CancellationToken::new();
        let _guard = cancel.clone().drop_guard();
        let update_task = tokio::spawn(run_update_loop(
            self.name.clone(),
            self.handle.clone(),
            cancel.clone(),
        ));

        info!(animator = self.name, steps = self.steps.len(), "animation start");

        for (index, step) in self.steps.iter().enumerate() {
            self.handle
                .apply(&step.command)
                .await
                .map_err(|source| AnimationError::Step {
                    animator: self.name.clone(),
                    step: index,
                    source,
                })?;
            debug!(
                animator = self.name,
                step = index,
                hold_ms = step.hold_ms,
                "step applied"
            );
            sleep(step.hold()).await;
        }

        cancel.cancel();
        match update_task.await {
            Ok(Ok(())) => {
                info!(animator = self.name, "animation complete");
                Ok(())
            }
            Ok(Err(source)) => Err(AnimationError::UpdateLoop {
                animator: self.name.clone(),
                source,
            }),
            Err(source) => Err(AnimationError::UpdateLoopTask {
                animator: self.name.clone(),
                source,
            }),
        }
    }
}

/// The actor's continuous update loop.
///
/// Ticks the actor once per quantum, observing cancellation between quanta
/// so a stop request takes effect within one quantum. On every exit path
/// the actor's `on_deactivate` runs exactly once and the handle is
/// released. The first error wins.
async fn run_update_loop<A: Actor>(
    name: String,
    handle: ActorHandle<A>,
    cancel: CancellationToken,
) -> Result<(), ActorError> {
    let mut result = Ok(());
    while !cancel.is_cancelled() {
        let delay = match handle.lock().await.tick().await {
            Ok(delay) => delay,
            Err(err) => {
                warn!(animator = name, error = %err, "update loop error");
                result = Err(err);
                break;
            }
        };
        tokio::select! {
            () = cancel.cancelled() => break,
            () = sleep(delay) => {}
        }
    }

    let deactivate = handle.lock().await.on_deactivate();
    if let Err(err) = &deactivate {
        warn!(animator = name, error = %err, "deactivate failed");
    }
    handle.release();
    result.and(deactivate)
}
