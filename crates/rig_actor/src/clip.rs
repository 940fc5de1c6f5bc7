//! Timed, optionally looping clip playback.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::debug;

use rig_hw::{ClipDevice, TrackId};

use crate::actor::Actor;
use crate::error::ActorError;

/// Poll quantum while a clip is playing.
const PLAYING_POLL: Duration = Duration::from_millis(10);
/// Coarser poll quantum while idle — saves cycles when nothing can happen.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Maximum volume accepted by the playback module.
const MAX_VOLUME: u8 = 30;

/// One discrete playback command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClipCommand {
    /// Device track to play.
    pub track: TrackId,
    /// How long to let the clip run before issuing a stop, in milliseconds.
    /// `0` means unbounded: play until explicitly stopped or the clip ends.
    pub play_ms: u64,
    /// Restart the clip from the top if it ends before the deadline.
    pub looping: bool,
}

/// Construction-time configuration for a [`ClipPlayerActor`].
#[derive(Debug, Clone, Copy)]
pub struct ClipPlayerConfig {
    /// Startup output volume, device range `0..=30`.
    pub volume: u8,
}

impl Default for ClipPlayerConfig {
    fn default() -> Self {
        Self { volume: 15 }
    }
}

/// Timed media-playback actuator over a track-indexed [`ClipDevice`].
///
/// The stop deadline is polled, not interrupt-driven: stop timing has up to
/// one update quantum of jitter.
#[derive(Debug)]
pub struct ClipPlayerActor<D: ClipDevice> {
    device: D,
    playing: bool,
    /// `None` while playing means an unbounded run.
    deadline: Option<Instant>,
    looping: bool,
}

impl<D: ClipDevice> ClipPlayerActor<D> {
    /// Creates a clip player and sets the startup volume on the device.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::InvalidCommand`] if the configured volume is
    /// outside the device range, or [`ActorError::Device`] if the volume
    /// write fails.
    pub fn new(mut device: D, config: ClipPlayerConfig) -> Result<Self, ActorError> {
        if config.volume > MAX_VOLUME {
            return Err(ActorError::invalid_command(format!(
                "volume {} outside 0..={MAX_VOLUME}",
                config.volume
            )));
        }
        device.set_volume(config.volume)?;
        Ok(Self {
            device,
            playing: false,
            deadline: None,
            looping: false,
        })
    }

    /// Returns `true` while a clip is considered playing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns `true` if the current clip loops.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl<D: ClipDevice + 'static> Actor for ClipPlayerActor<D> {
    type Command = ClipCommand;

    fn apply(&mut self, command: &ClipCommand) -> Result<(), ActorError> {
        debug!(
            track = %command.track,
            play_ms = command.play_ms,
            looping = command.looping,
            "clip command"
        );
        self.deadline = if command.play_ms == 0 {
            None
        } else {
            Some(Instant::now() + Duration::from_millis(command.play_ms))
        };
        self.looping = command.looping;
        if command.looping {
            self.device.loop_track(command.track)?;
            self.device.loop_enable()?;
        } else {
            self.device.play(command.track)?;
            self.device.loop_disable()?;
        }
        self.playing = true;
        Ok(())
    }

    async fn tick(&mut self) -> Result<Duration, ActorError> {
        let expired = self
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline);
        if self.playing && expired {
            self.device.stop()?;
            self.playing = false;
        }
        Ok(if self.playing { PLAYING_POLL } else { IDLE_POLL })
    }

    fn on_deactivate(&mut self) -> Result<(), ActorError> {
        // Unconditional stop so no playback outlives the animation.
        self.playing = false;
        self.device.stop()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rig_hw::DeviceError;

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct FakeClipDevice {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeClipDevice {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }
    }

    impl ClipDevice for FakeClipDevice {
        fn play(&mut self, track: TrackId) -> Result<(), DeviceError> {
            self.record(format!("play {}", track.0));
            Ok(())
        }

        fn loop_track(&mut self, track: TrackId) -> Result<(), DeviceError> {
            self.record(format!("loop_track {}", track.0));
            Ok(())
        }

        fn loop_enable(&mut self) -> Result<(), DeviceError> {
            self.record("loop_enable");
            Ok(())
        }

        fn loop_disable(&mut self) -> Result<(), DeviceError> {
            self.record("loop_disable");
            Ok(())
        }

        fn stop(&mut self) -> Result<(), DeviceError> {
            self.record("stop");
            Ok(())
        }

        fn set_volume(&mut self, volume: u8) -> Result<(), DeviceError> {
            self.record(format!("set_volume {volume}"));
            Ok(())
        }
    }

    fn player() -> (ClipPlayerActor<FakeClipDevice>, FakeClipDevice) {
        let device = FakeClipDevice::default();
        let actor = ClipPlayerActor::new(device.clone(), ClipPlayerConfig::default()).unwrap();
        (actor, device)
    }

    #[test]
    fn test_new_sets_startup_volume() {
        let (_, device) = player();
        assert_eq!(device.calls(), vec!["set_volume 15"]);
    }

    #[test]
    fn test_new_rejects_volume_out_of_range() {
        let device = FakeClipDevice::default();
        let err = ClipPlayerActor::new(device, ClipPlayerConfig { volume: 31 }).unwrap_err();
        assert!(matches!(err, ActorError::InvalidCommand { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_play_never_auto_stops() {
        let (mut actor, device) = player();
        actor
            .apply(&ClipCommand {
                track: TrackId(1),
                play_ms: 0,
                looping: false,
            })
            .unwrap();
        assert!(actor.is_playing());

        tokio::time::advance(Duration::from_secs(60)).await;
        actor.tick().await.unwrap();
        assert!(actor.is_playing());
        assert!(!device.calls().contains(&"stop".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounded_play_stops_after_deadline() {
        let (mut actor, device) = player();
        actor
            .apply(&ClipCommand {
                track: TrackId(2),
                play_ms: 2000,
                looping: false,
            })
            .unwrap();

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert_eq!(actor.tick().await.unwrap(), Duration::from_millis(10));
        assert!(actor.is_playing());

        tokio::time::advance(Duration::from_millis(2)).await;
        assert_eq!(actor.tick().await.unwrap(), Duration::from_millis(50));
        assert!(!actor.is_playing());
        assert!(device.calls().contains(&"stop".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_looping_command_uses_loop_mode() {
        let (mut actor, device) = player();
        actor
            .apply(&ClipCommand {
                track: TrackId(3),
                play_ms: 1000,
                looping: true,
            })
            .unwrap();
        assert!(actor.is_looping());
        let calls = device.calls();
        assert!(calls.contains(&"loop_track 3".to_string()));
        assert!(calls.contains(&"loop_enable".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_play_disables_loop() {
        let (mut actor, device) = player();
        actor
            .apply(&ClipCommand {
                track: TrackId(1),
                play_ms: 0,
                looping: false,
            })
            .unwrap();
        assert!(!actor.is_looping());
        let calls = device.calls();
        assert!(calls.contains(&"play 1".to_string()));
        assert!(calls.contains(&"loop_disable".to_string()));
    }

    #[test]
    fn test_deactivate_stops_unconditionally() {
        let (mut actor, device) = player();
        actor.on_deactivate().unwrap();
        assert!(device.calls().contains(&"stop".to_string()));
        assert!(!actor.is_playing());
    }
}
