//! Raw-sample streaming boundary.

use std::future::Future;

use crate::error::DeviceError;

/// A seekable source of raw sample data (a WAV file on SD card, a flash
/// partition).
///
/// Reads are blocking but short — one storage block at a time.
pub trait MediaSource: Send {
    /// Fill `buf` with the next bytes from the source.
    ///
    /// Returns the number of bytes read. A return of `0` means end of
    /// stream.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the storage read fails.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, DeviceError>;

    /// Reposition the source to an absolute byte offset.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the storage seek fails.
    fn seek(&mut self, offset: u64) -> Result<(), DeviceError>;
}

/// A continuous sample output (an I2S peripheral's DMA buffer).
///
/// `write` suspends until the device has accepted the block — this
/// backpressure is what paces a streaming producer.
pub trait BlockSink: Send {
    /// Write one block of sample data, suspending until accepted.
    fn write(&mut self, block: &[u8]) -> impl Future<Output = Result<(), DeviceError>> + Send;
}
