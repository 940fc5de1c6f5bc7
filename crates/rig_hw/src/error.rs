//! Device-layer error type.

/// Errors surfaced by hardware (or simulated) devices.
///
/// Device writes are attempted at most once per operation — the engine never
/// retries a failed actuation.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// A normalized position outside `[0.0, 1.0]` was written to a
    /// [`PositionSink`](crate::PositionSink).
    #[error("fraction {0} outside [0.0, 1.0]")]
    FractionOutOfRange(f64),

    /// Underlying I/O failure (storage read, stream write).
    #[error("device I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bus-level write to the device failed.
    #[error("bus write failed: {0}")]
    Bus(String),
}
