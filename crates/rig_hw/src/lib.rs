//! # rig_hw
//!
//! Hardware boundary for the animatronic rig engine.
//!
//! The animation core never talks to registers directly — it drives the
//! narrow device traits defined here:
//!
//! - [`PositionSink`] — a normalized positional output (servo channel, lamp
//!   dimmer).
//! - [`ClipDevice`] — a track-indexed audio playback module (DFPlayer-style).
//! - [`MediaSource`] / [`BlockSink`] — raw-sample streaming: blocking block
//!   reads from storage, suspending block writes to a continuous output.
//!
//! Real deployments implement these over PWM/I2C/UART/I2S drivers. The
//! [`sim`] module provides tracing-backed simulated devices so the engine
//! can be exercised without hardware.

pub mod audio;
pub mod error;
pub mod media;
pub mod position;
pub mod sim;

pub use audio::{ClipDevice, TrackId, TrackRegistry};
pub use error::DeviceError;
pub use media::{BlockSink, MediaSource};
pub use position::PositionSink;
