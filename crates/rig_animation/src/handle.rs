//! Shared actor ownership.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, MutexGuard};

use rig_actor::{Actor, ActorError};

/// Shared handle to one actor.
///
/// One handle is created per physical resource at startup and cloned
/// wherever the actor is scripted. The handle carries the actor behind an
/// async mutex — locked briefly for a command or for one update quantum —
/// plus the activation flag that makes "at most one update loop per actor"
/// a runtime guarantee instead of a convention: activation is a
/// compare-and-swap, so a second animation targeting a busy actor is
/// rejected instead of double-driving the hardware.
#[derive(Debug)]
pub struct ActorHandle<A> {
    inner: Arc<Mutex<A>>,
    active: Arc<AtomicBool>,
}

impl<A> Clone for ActorHandle<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            active: Arc::clone(&self.active),
        }
    }
}

impl<A: Actor> ActorHandle<A> {
    /// Wraps an actor in a shareable handle.
    #[must_use]
    pub fn new(actor: A) -> Self {
        Self {
            inner: Arc::new(Mutex::new(actor)),
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Apply a discrete command to the actor.
    ///
    /// Waits for the actor lock, which is held by the update loop for at
    /// most one quantum at a time.
    ///
    /// # Errors
    ///
    /// Propagates the actor's [`ActorError`].
    pub async fn apply(&self, command: &A::Command) -> Result<(), ActorError> {
        self.inner.lock().await.apply(command)
    }

    /// Returns `true` while an animation is driving this actor.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Lock the actor for one quantum or one cleanup call.
    pub(crate) async fn lock(&self) -> MutexGuard<'_, A> {
        self.inner.lock().await
    }

    /// Claim the actor for an animation run. Returns `false` if another run
    /// already holds it.
    pub(crate) fn try_activate(&self) -> bool {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release the actor after its update loop has fully stopped.
    pub(crate) fn release(&self) {
        self.active.store(false, Ordering::Release);
    }
}
