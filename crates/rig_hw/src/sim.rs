//! Simulated devices.
//!
//! Stand-ins for real hardware that log writes through `tracing` instead of
//! touching a bus. The demo binary runs entirely on these, and they double
//! as recording fakes in engine tests.

use tracing::{debug, trace};

use crate::audio::{ClipDevice, TrackId};
use crate::error::DeviceError;
use crate::media::{BlockSink, MediaSource};
use crate::position::{PositionSink, check_fraction};

/// A simulated positional channel (servo, lamp dimmer). Remembers the last
/// fraction written.
#[derive(Debug)]
pub struct SimChannel {
    channel: String,
    last: f64,
}

impl SimChannel {
    /// Creates a simulated channel with a name for logging.
    #[must_use]
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            last: 0.0,
        }
    }

    /// Returns the last fraction written to this channel.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.last
    }
}

impl PositionSink for SimChannel {
    fn set_fraction(&mut self, value: f64) -> Result<(), DeviceError> {
        check_fraction(value)?;
        self.last = value;
        trace!(channel = self.channel, value, "channel write");
        Ok(())
    }
}

/// A simulated clip-player module. Logs every command.
#[derive(Debug)]
pub struct SimClipPlayer {
    label: String,
}

impl SimClipPlayer {
    /// Creates a simulated clip player.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl ClipDevice for SimClipPlayer {
    fn play(&mut self, track: TrackId) -> Result<(), DeviceError> {
        debug!(player = self.label, %track, "play");
        Ok(())
    }

    fn loop_track(&mut self, track: TrackId) -> Result<(), DeviceError> {
        debug!(player = self.label, %track, "loop track");
        Ok(())
    }

    fn loop_enable(&mut self) -> Result<(), DeviceError> {
        debug!(player = self.label, "loop enable");
        Ok(())
    }

    fn loop_disable(&mut self) -> Result<(), DeviceError> {
        debug!(player = self.label, "loop disable");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), DeviceError> {
        debug!(player = self.label, "stop");
        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<(), DeviceError> {
        debug!(player = self.label, volume, "set volume");
        Ok(())
    }
}

/// A simulated sample sink. Accepts blocks immediately and counts bytes.
#[derive(Debug)]
pub struct SimBlockSink {
    label: String,
    bytes_written: u64,
}

impl SimBlockSink {
    /// Creates a simulated sample sink.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bytes_written: 0,
        }
    }

    /// Total bytes accepted so far.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl BlockSink for SimBlockSink {
    async fn write(&mut self, block: &[u8]) -> Result<(), DeviceError> {
        self.bytes_written += block.len() as u64;
        trace!(sink = self.label, len = block.len(), "block write");
        Ok(())
    }
}

/// An in-memory [`MediaSource`] backed by a byte buffer.
#[derive(Debug)]
pub struct MemorySource {
    data: Vec<u8>,
    pos: usize,
}

impl MemorySource {
    /// Creates a source over the given bytes.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }
}

impl MediaSource for MemorySource {
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        let remaining = self.data.len().saturating_sub(self.pos);
        let n = remaining.min(buf.len());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    fn seek(&mut self, offset: u64) -> Result<(), DeviceError> {
        self.pos = offset as usize;
        Ok(())
    }
}
