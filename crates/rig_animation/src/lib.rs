//! # rig_animation
//!
//! Scheduling engine for the animatronic rig: drives actors through scripted
//! step sequences while their continuous update loops run concurrently, and
//! joins groups of animations into scenes.
//!
//! - [`ActorHandle`] — shared ownership of one actor, with an activation
//!   flag that rejects two animations driving the same actor at once.
//! - [`Step`] — one scripted command plus how long to hold it.
//! - [`Animator`] — sequences one actor through its steps while a spawned
//!   update-loop task ticks the actor every quantum.
//! - [`Scene`] — a set of animations launched together and joined;
//!   fail-fast: the first failure cancels the siblings.
//!
//! Cancellation is cooperative: every update loop observes its
//! `CancellationToken` at least once per quantum, and actor cleanup
//! (`on_deactivate`) runs on every exit path — completion, error, or the
//! `animate` future being dropped mid-run.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rig_actor::{ServoActor, ServoCommand, ServoConfig};
//! use rig_animation::{ActorHandle, Animator, Scene, Step};
//! use rig_hw::sim::SimChannel;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let jaw = ActorHandle::new(ServoActor::new(SimChannel::new("jaw"), ServoConfig::new())?);
//!
//!     let sweep = Animator::new(
//!         "jaw",
//!         jaw,
//!         vec![
//!             Step::new(ServoCommand { target: 1.0, smoothing: 0.1 }, 1000),
//!             Step::new(ServoCommand { target: 0.0, smoothing: 0.5 }, 1000),
//!         ],
//!     );
//!
//!     Scene::new("demo").with_animator(sweep).run().await?;
//!     Ok(())
//! }
//! ```

pub mod animator;
pub mod error;
pub mod handle;
pub mod scene;
pub mod step;

#[cfg(test)]
pub(crate) mod testing;

pub use animator::Animator;
pub use error::{AnimationError, SceneError};
pub use handle::ActorHandle;
pub use scene::{Animation, Scene};
pub use step::Step;
