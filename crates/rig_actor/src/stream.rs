//! Raw-sample streaming playback.
//!
//! Feeds fixed-size blocks from a [`MediaSource`] into a continuous
//! [`BlockSink`]. While idle the actor emits silence blocks so the sink's
//! DMA buffer never starves.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use rig_hw::{BlockSink, MediaSource};

use crate::actor::Actor;
use crate::error::ActorError;

/// First byte of sample data in a canonical WAV file (fixed-size header).
const WAV_DATA_START: u64 = 44;
/// Source format is fixed: 16-bit mono at 16 kHz, i.e. 32 bytes per
/// millisecond of audio.
const BYTES_PER_MS: u64 = 32;
/// Read/write block size.
const BLOCK_LEN: usize = 10_000;
/// Silence block written while idle.
const SILENCE: [u8; 256] = [0; 256];
/// Cadence of silence blocks while idle.
const IDLE_PERIOD: Duration = Duration::from_millis(100);

/// Playback state of a [`PcmStreamActor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Output peripheral released; ticking this state is a fatal
    /// configuration error.
    Inactive,
    /// Initialised, nothing commanded yet. Emits silence.
    Ready,
    /// Streaming sample blocks from the source.
    Playing,
    /// Finished (or commanded silent). Emits silence.
    Idle,
}

/// One discrete streaming command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum StreamCommand {
    /// Stop producing samples and emit silence.
    Silence,
    /// Stream from the source, starting `start_ms` into the clip.
    Play {
        /// Offset into the clip, in milliseconds of audio.
        start_ms: u64,
        /// On end-of-stream, seek back to the top and keep playing.
        looping: bool,
    },
}

/// Stream-fed playback actuator.
///
/// The playing-state quantum is paced by sink backpressure (the block write
/// suspends until accepted), so `tick` returns a zero delay while playing
/// and the silence cadence otherwise.
#[derive(Debug)]
pub struct PcmStreamActor<R: MediaSource, W: BlockSink> {
    source: R,
    sink: W,
    state: StreamState,
    looping: bool,
    block: Vec<u8>,
}

impl<R: MediaSource, W: BlockSink> PcmStreamActor<R, W> {
    /// Creates a stream actor in the [`StreamState::Ready`] state.
    #[must_use]
    pub fn new(source: R, sink: W) -> Self {
        Self {
            source,
            sink,
            state: StreamState::Ready,
            looping: false,
            block: vec![0; BLOCK_LEN],
        }
    }

    /// Releases the output peripheral. A deinitialised actor must not be
    /// ticked again.
    pub fn deinit(&mut self) {
        self.state = StreamState::Inactive;
    }

    /// Returns the current playback state.
    #[must_use]
    pub fn state(&self) -> StreamState {
        self.state
    }
}

impl<R: MediaSource + 'static, W: BlockSink + 'static> Actor for PcmStreamActor<R, W> {
    type Command = StreamCommand;

    fn apply(&mut self, command: &StreamCommand) -> Result<(), ActorError> {
        match *command {
            StreamCommand::Silence => {
                debug!("stream silenced");
                self.state = StreamState::Idle;
            }
            StreamCommand::Play { start_ms, looping } => {
                debug!(start_ms, looping, "stream start");
                self.source.seek(WAV_DATA_START + start_ms * BYTES_PER_MS)?;
                self.looping = looping;
                self.state = StreamState::Playing;
            }
        }
        Ok(())
    }

    async fn tick(&mut self) -> Result<Duration, ActorError> {
        match self.state {
            StreamState::Inactive => Err(ActorError::invalid_state(
                "update tick on a deinitialised stream output",
            )),
            StreamState::Playing => {
                let n = self.source.read_into(&mut self.block)?;
                if n > 0 {
                    self.sink.write(&self.block[..n]).await?;
                }
                if n < self.block.len() {
                    // Short or empty read: end of stream. Rewind past the
                    // header; keep playing on loop, otherwise go idle.
                    self.source.seek(WAV_DATA_START)?;
                    if !self.looping {
                        self.state = StreamState::Idle;
                    }
                }
                Ok(Duration::ZERO)
            }
            StreamState::Ready | StreamState::Idle => {
                self.sink.write(&SILENCE).await?;
                Ok(IDLE_PERIOD)
            }
        }
    }

    fn on_deactivate(&mut self) -> Result<(), ActorError> {
        // The next animation's first command re-seeks and resets state.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rig_hw::DeviceError;
    use rig_hw::sim::MemorySource;

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct CaptureSink {
        blocks: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl CaptureSink {
        fn blocks(&self) -> Vec<Vec<u8>> {
            self.blocks.lock().unwrap().clone()
        }
    }

    impl BlockSink for CaptureSink {
        async fn write(&mut self, block: &[u8]) -> Result<(), DeviceError> {
            self.blocks.lock().unwrap().push(block.to_vec());
            Ok(())
        }
    }

    /// A fake WAV: 44 header bytes then `payload_len` bytes of sample data.
    fn wav(payload_len: usize) -> Vec<u8> {
        let mut data = vec![0xAA; 44];
        data.extend((0..payload_len).map(|i| (i % 251) as u8));
        data
    }

    fn actor(
        payload_len: usize,
    ) -> (PcmStreamActor<MemorySource, CaptureSink>, CaptureSink) {
        let sink = CaptureSink::default();
        let actor = PcmStreamActor::new(MemorySource::new(wav(payload_len)), sink.clone());
        (actor, sink)
    }

    #[tokio::test]
    async fn test_ready_emits_silence() {
        let (mut actor, sink) = actor(100);
        assert_eq!(actor.state(), StreamState::Ready);
        assert_eq!(actor.tick().await.unwrap(), IDLE_PERIOD);
        assert_eq!(sink.blocks(), vec![vec![0u8; 256]]);
    }

    #[tokio::test]
    async fn test_end_of_stream_without_loop_goes_idle() {
        let (mut actor, sink) = actor(100);
        actor
            .apply(&StreamCommand::Play {
                start_ms: 0,
                looping: false,
            })
            .unwrap();

        // Payload is shorter than one block: written and EOF in one tick.
        actor.tick().await.unwrap();
        assert_eq!(actor.state(), StreamState::Idle);
        assert_eq!(sink.blocks().len(), 1);
        assert_eq!(sink.blocks()[0].len(), 100);

        // Idle fills with silence thereafter.
        actor.tick().await.unwrap();
        assert_eq!(sink.blocks()[1], vec![0u8; 256]);
    }

    #[tokio::test]
    async fn test_looping_rewinds_without_a_gap() {
        let (mut actor, sink) = actor(100);
        actor
            .apply(&StreamCommand::Play {
                start_ms: 0,
                looping: true,
            })
            .unwrap();

        actor.tick().await.unwrap();
        assert_eq!(actor.state(), StreamState::Playing);
        // The rewound source feeds the same samples again on the next tick.
        actor.tick().await.unwrap();
        assert_eq!(actor.state(), StreamState::Playing);
        let blocks = sink.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], blocks[1]);
    }

    #[tokio::test]
    async fn test_payload_longer_than_block_spans_ticks() {
        let payload = BLOCK_LEN + 500;
        let (mut actor, sink) = actor(payload);
        actor
            .apply(&StreamCommand::Play {
                start_ms: 0,
                looping: false,
            })
            .unwrap();

        actor.tick().await.unwrap();
        assert_eq!(actor.state(), StreamState::Playing);
        actor.tick().await.unwrap();
        assert_eq!(actor.state(), StreamState::Idle);
        let blocks = sink.blocks();
        assert_eq!(blocks[0].len(), BLOCK_LEN);
        assert_eq!(blocks[1].len(), 500);
    }

    #[tokio::test]
    async fn test_start_offset_skips_audio() {
        // 1 ms of audio is 32 bytes; start 1 ms in.
        let (mut actor, sink) = actor(64);
        actor
            .apply(&StreamCommand::Play {
                start_ms: 1,
                looping: false,
            })
            .unwrap();
        actor.tick().await.unwrap();
        assert_eq!(sink.blocks()[0].len(), 32);
    }

    #[tokio::test]
    async fn test_silence_command_goes_idle() {
        let (mut actor, _) = actor(100);
        actor
            .apply(&StreamCommand::Play {
                start_ms: 0,
                looping: true,
            })
            .unwrap();
        actor.apply(&StreamCommand::Silence).unwrap();
        assert_eq!(actor.state(), StreamState::Idle);
    }

    #[tokio::test]
    async fn test_tick_while_inactive_is_fatal() {
        let (mut actor, _) = actor(100);
        actor.deinit();
        let err = actor.tick().await.unwrap_err();
        assert!(matches!(err, ActorError::InvalidState { .. }));
    }
}
