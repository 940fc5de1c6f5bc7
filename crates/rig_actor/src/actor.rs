//! The [`Actor`] capability contract.

use std::future::Future;
use std::time::Duration;

use crate::error::ActorError;

/// A stateful unit wrapping one hardware resource.
///
/// An actor exposes three operations:
///
/// - [`apply`](Actor::apply) — absorb one discrete command. Synchronous and
///   non-blocking: validate, update target state, and issue at most a
///   bounded device write. Never suspends.
/// - [`tick`](Actor::tick) — perform one quantum of continuous work (an
///   interpolation step, a deadline check, one buffer write) and return the
///   delay before the next quantum. The update loop that calls `tick` in a
///   cancellable task belongs to the animation layer, so an actor only ever
///   describes a single quantum.
/// - [`on_deactivate`](Actor::on_deactivate) — synchronous cleanup, invoked
///   exactly once after the update loop has stopped. A no-op is permitted.
///
/// Actors are constructed once per physical resource at startup and reused
/// across sequential animation runs. At most one update loop per actor is
/// alive at any time; the animation layer enforces this.
pub trait Actor: Send + 'static {
    /// The discrete command payload this actor accepts.
    type Command: std::fmt::Debug + Clone + Send + Sync + 'static;

    /// Apply a discrete command.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::InvalidCommand`] if the payload is outside the
    /// actor's valid domain, or [`ActorError::Device`] if a device write
    /// fails.
    fn apply(&mut self, command: &Self::Command) -> Result<(), ActorError>;

    /// Perform one quantum of continuous work and return the delay before
    /// the next quantum.
    ///
    /// May suspend on device backpressure (e.g. a sample sink accepting a
    /// block), but must otherwise complete promptly so sibling actors are
    /// not stalled.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::InvalidState`] if the actor is not in a state
    /// that can be ticked (fatal), or [`ActorError::Device`] if a device
    /// write fails.
    fn tick(&mut self) -> impl Future<Output = Result<Duration, ActorError>> + Send;

    /// Clean up after the update loop has stopped.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::Device`] if a device write fails.
    fn on_deactivate(&mut self) -> Result<(), ActorError>;
}
