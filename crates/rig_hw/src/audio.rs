//! Track-indexed audio playback device.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DeviceError;

/// A device-level track index on the playback module's storage medium.
///
/// Clip-player modules address tracks by the number baked into their SD-card
/// layout, not by name. Scene scripts use human-readable clip names and
/// resolve them through a [`TrackRegistry`] before playback ever starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub u16);

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "track {}", self.0)
    }
}

/// A track-indexed audio playback module (DFPlayer-style).
///
/// All operations are single bounded serial-bus commands; none of them wait
/// for playback itself.
pub trait ClipDevice: Send {
    /// Play a track once.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the command write fails.
    fn play(&mut self, track: TrackId) -> Result<(), DeviceError>;

    /// Start a track in loop mode.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the command write fails.
    fn loop_track(&mut self, track: TrackId) -> Result<(), DeviceError>;

    /// Enable loop mode for the current track.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the command write fails.
    fn loop_enable(&mut self) -> Result<(), DeviceError>;

    /// Disable loop mode.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the command write fails.
    fn loop_disable(&mut self) -> Result<(), DeviceError>;

    /// Stop playback.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the command write fails.
    fn stop(&mut self) -> Result<(), DeviceError>;

    /// Set the output volume (device range `0..=30`).
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the command write fails.
    fn set_volume(&mut self, volume: u8) -> Result<(), DeviceError>;
}

/// Caller-supplied mapping from clip names to device track indices.
///
/// Scene scripts refer to clips by name; the mapping to [`TrackId`] is
/// resolved when a scene is loaded. An undefined name is a configuration
/// error at load time, never a playback-time failure.
#[derive(Debug, Default, Clone)]
pub struct TrackRegistry {
    tracks: HashMap<String, TrackId>,
}

impl TrackRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clip name for a device track index.
    ///
    /// Re-registering a name overwrites the previous mapping.
    pub fn register(&mut self, name: impl Into<String>, track: TrackId) {
        self.tracks.insert(name.into(), track);
    }

    /// Resolve a clip name to its track index.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<TrackId> {
        self.tracks.get(name).copied()
    }

    /// Returns the number of registered clips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` if no clips are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, TrackId)> for TrackRegistry {
    fn from_iter<T: IntoIterator<Item = (N, TrackId)>>(iter: T) -> Self {
        let mut registry = Self::new();
        for (name, track) in iter {
            registry.register(name, track);
        }
        registry
    }
}
