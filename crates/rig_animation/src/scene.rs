//! Scene — a set of animations run concurrently to completion.

use futures::future::{BoxFuture, try_join_all};
use tracing::{error, info};

use rig_actor::Actor;

use crate::animator::Animator;
use crate::error::{AnimationError, SceneError};

/// A type-erased runnable animation.
///
/// [`Animator`] is generic over its actor; scenes hold a heterogeneous set
/// of animators (servos next to audio), so they store animations behind
/// this object-safe surface.
pub trait Animation: Send + Sync {
    /// The animation's name, for reporting.
    fn name(&self) -> &str;

    /// Run the animation to completion.
    fn animate(&self) -> BoxFuture<'_, Result<(), AnimationError>>;
}

impl<A: Actor> Animation for Animator<A> {
    fn name(&self) -> &str {
        Animator::name(self)
    }

    fn animate(&self) -> BoxFuture<'_, Result<(), AnimationError>> {
        Box::pin(Animator::animate(self))
    }
}

/// A named set of animations launched together and joined.
///
/// All animations start at approximately the same instant (bounded by
/// scheduler fairness, not hardware-synchronized) and the scene completes
/// only when every one of them has finished — total wall-clock is the
/// maximum over the animators' scripted durations.
///
/// Failure policy is fail-fast: the first animation error cancels the
/// surviving siblings, whose update loops stop within one quantum and
/// still run their actors' cleanup. A broken actuator therefore cannot
/// leave the rest of the rig playing against a dead scene.
pub struct Scene {
    name: String,
    animations: Vec<Box<dyn Animation>>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            animations: Vec::new(),
        }
    }

    /// Adds an animator to the scene (builder style).
    #[must_use]
    pub fn with_animator<A: Actor>(mut self, animator: Animator<A>) -> Self {
        self.push(animator);
        self
    }

    /// Adds an animator to the scene.
    pub fn push<A: Actor>(&mut self, animator: Animator<A>) {
        self.animations.push(Box::new(animator));
    }

    /// Returns the scene's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of animations in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Returns `true` if the scene holds no animations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Run every animation concurrently and wait for all of them.
    ///
    /// Runs may be repeated sequentially; each run replays every script
    /// from step 0. Two concurrent runs sharing an actor are rejected at
    /// activation, not silently merged.
    ///
    /// # Errors
    ///
    /// Returns the first [`AnimationError`], wrapped with the scene name,
    /// after cancelling the surviving animations.
    pub async fn run(&self) -> Result<(), SceneError> {
        let started = tokio::time::Instant::now();
        info!(
            scene = self.name,
            animations = self.animations.len(),
            "scene start"
        );

        try_join_all(self.animations.iter().map(|animation| animation.animate()))
            .await
            .map_err(|source| {
                error!(scene = self.name, error = %source, "scene failed");
                SceneError {
                    scene: self.name.clone(),
                    source,
                }
            })?;

        info!(
            scene = self.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scene complete"
        );
        Ok(())
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field(
                "animations",
                &self
                    .animations
                    .iter()
                    .map(|animation| animation.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
