//! Scene scripts as data.
//!
//! A scene script is a JSON file holding per-actor step lists plus the clip
//! name → track index table for the playback module. The engine never
//! interprets the payloads; this module only deserializes them and resolves
//! clip names before anything runs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use rig_actor::{ClipCommand, FlasherCommand, ServoCommand};
use rig_animation::Step;
use rig_hw::{TrackId, TrackRegistry};

/// An audio cue as authored: clip by name, resolved to a device track when
/// the scene is loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipCue {
    /// Clip name, looked up in the script's tracks table.
    pub clip: String,
    /// Stop deadline in milliseconds; `0` plays unbounded.
    #[serde(default)]
    pub play_ms: u64,
    /// Loop the clip until the deadline.
    #[serde(default)]
    pub looping: bool,
}

/// One scene script file.
#[derive(Debug, Deserialize)]
pub struct SceneSpec {
    /// Scene name, used in logs and errors.
    pub name: String,
    /// Clip name → track index on the playback module's card.
    #[serde(default)]
    pub tracks: HashMap<String, u16>,
    /// Servo channel name → step list.
    #[serde(default)]
    pub servos: HashMap<String, Vec<Step<ServoCommand>>>,
    /// Audio cue steps.
    #[serde(default)]
    pub audio: Vec<Step<ClipCue>>,
    /// Lamp flasher steps.
    #[serde(default)]
    pub flasher: Vec<Step<FlasherCommand>>,
}

impl SceneSpec {
    /// Load a scene script from disk.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scene script {}", path.display()))?;
        let spec: SceneSpec = serde_json::from_str(&text)
            .with_context(|| format!("parsing scene script {}", path.display()))?;
        Ok(spec)
    }

    /// The track registry declared by this script.
    #[must_use]
    pub fn registry(&self) -> TrackRegistry {
        self.tracks
            .iter()
            .map(|(name, &track)| (name.clone(), TrackId(track)))
            .collect()
    }

    /// Resolve the audio cues against the script's tracks table.
    ///
    /// # Errors
    ///
    /// An undefined clip name fails here, at load time — never during
    /// playback.
    pub fn resolved_audio(&self) -> Result<Vec<Step<ClipCommand>>> {
        let registry = self.registry();
        self.audio
            .iter()
            .map(|step| {
                let Some(track) = registry.resolve(&step.command.clip) else {
                    bail!(
                        "scene {}: clip {:?} is not in the tracks table",
                        self.name,
                        step.command.clip
                    );
                };
                Ok(Step::new(
                    ClipCommand {
                        track,
                        play_ms: step.command.play_ms,
                        looping: step.command.looping,
                    },
                    step.hold_ms,
                ))
            })
            .collect()
    }
}
