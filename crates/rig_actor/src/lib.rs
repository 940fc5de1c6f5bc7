//! # rig_actor
//!
//! Actor layer for the animatronic rig engine.
//!
//! An [`Actor`] is a stateful wrapper around one physical output device. It
//! absorbs discrete commands on a coarse schedule (`apply`) while producing
//! continuous output in fine-grained update quanta (`tick`), and cleans up
//! when an animation releases it (`on_deactivate`).
//!
//! Concrete actors:
//!
//! - [`ServoActor`] — positional actuator with exponential smoothing toward
//!   a commanded setpoint.
//! - [`ClipPlayerActor`] — track-indexed audio playback with a polled stop
//!   deadline and optional looping.
//! - [`PcmStreamActor`] — raw-sample streaming from a media source to a
//!   continuous sink, with looping and silence filling.
//! - [`FlasherActor`] — alternating lamp pair.
//!
//! Scheduling (who calls `tick`, when, and how cancellation works) lives in
//! `rig_animation`; this crate only defines the per-quantum behaviour.

pub mod actor;
pub mod clip;
pub mod error;
pub mod flasher;
pub mod servo;
pub mod stream;

pub use actor::Actor;
pub use clip::{ClipCommand, ClipPlayerActor, ClipPlayerConfig};
pub use error::ActorError;
pub use flasher::{FlasherActor, FlasherCommand};
pub use servo::{ServoActor, ServoCommand, ServoConfig};
pub use stream::{PcmStreamActor, StreamCommand, StreamState};
