//! Composition root — the demo rig over simulated hardware.
//!
//! All device handles, actors, and handles are built in one place so tests
//! (and, on real hardware, the board bring-up code) can substitute their own
//! sinks without touching the engine.

use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing::info;

use rig_actor::{
    ClipPlayerActor, ClipPlayerConfig, FlasherActor, ServoActor, ServoConfig,
};
use rig_animation::{ActorHandle, Animator, Scene};
use rig_hw::sim::{SimChannel, SimClipPlayer};

use crate::script::SceneSpec;

/// Servo channels on the demo rig, with the physical sweep each one is
/// allowed to use (matching the installed linkages).
const SERVOS: [(&str, f64, f64); 5] = [
    ("upper_1", 0.13, 0.35),
    ("upper_2", 0.16, 0.58),
    ("upper_3", 0.13, 0.38),
    ("down_1", 0.54, 0.85),
    ("down_2", 0.04, 0.44),
];

/// The rig: one actor handle per physical resource, built once at startup
/// and reused across every scene run.
pub struct Rig {
    servos: HashMap<String, ActorHandle<ServoActor<SimChannel>>>,
    audio: ActorHandle<ClipPlayerActor<SimClipPlayer>>,
    flasher: ActorHandle<FlasherActor<SimChannel>>,
}

impl Rig {
    /// Builds the demo rig: five servo channels, one clip player, one
    /// red/blue lamp pair — all simulated.
    ///
    /// # Errors
    ///
    /// Fails if any actor rejects its configuration.
    pub fn new() -> Result<Self> {
        let mut servos = HashMap::new();
        for (name, closed, open) in SERVOS {
            let config = ServoConfig::new().with_initial(0.0).with_range(closed, open);
            let actor = ServoActor::new(SimChannel::new(name), config)
                .with_context(|| format!("configuring servo {name}"))?;
            servos.insert(name.to_string(), ActorHandle::new(actor));
        }

        let audio = ActorHandle::new(ClipPlayerActor::new(
            SimClipPlayer::new("dfplayer"),
            ClipPlayerConfig::default(),
        )?);

        let flasher = ActorHandle::new(FlasherActor::new(
            SimChannel::new("lamp_red"),
            SimChannel::new("lamp_blue"),
        ));

        info!(servos = servos.len(), "rig ready");
        Ok(Self {
            servos,
            audio,
            flasher,
        })
    }

    /// Assemble a runnable scene from a loaded script.
    ///
    /// Actors are shared across scenes; only the step lists change. A
    /// script naming a servo the rig does not have fails here.
    ///
    /// # Errors
    ///
    /// Fails on an unknown servo name or an unresolvable audio cue.
    pub fn build_scene(&self, spec: &SceneSpec) -> Result<Scene> {
        let mut scene = Scene::new(spec.name.clone());

        for (name, steps) in &spec.servos {
            let handle = self
                .servos
                .get(name)
                .with_context(|| format!("scene {}: unknown servo {name:?}", spec.name))?;
            scene.push(Animator::new(name.clone(), handle.clone(), steps.clone()));
        }

        if !spec.audio.is_empty() {
            scene.push(Animator::new(
                "audio",
                self.audio.clone(),
                spec.resolved_audio()?,
            ));
        }

        if !spec.flasher.is_empty() {
            scene.push(Animator::new(
                "flasher",
                self.flasher.clone(),
                spec.flasher.clone(),
            ));
        }

        Ok(scene)
    }
}
