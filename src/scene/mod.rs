//! Scenes: named, ordered sequences of effect, sound and wait steps
//!
//! Scenes are plain configuration data. They are played by a
//! [`SceneRunner`] through the same commands a human operator would issue.

mod library;
mod runner;

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

pub use library::{SceneLibrary, builtin_scenes, flash_groups_scene};
pub use runner::{SceneRunner, SceneState};

use crate::effect::EffectSlot;
use crate::error::SceneError;
use crate::section::SectionName;

/// Maximum length of a scene name in bytes
pub const SCENE_NAME_LEN: usize = 32;

/// Maximum length of scene descriptions and sound file names in bytes
pub const SCENE_TEXT_LEN: usize = 64;

pub type SceneName = String<SCENE_NAME_LEN>;
pub type SceneText = String<SCENE_TEXT_LEN>;

/// One step of a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneStep {
    /// Start an effect and move on without waiting for it
    RunEffect {
        section: SectionName,
        effect: EffectSlot,
    },
    PlaySound { file: SceneText },
    StopSound,
    /// Hold the scene before the next step
    Wait { seconds: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene<const MAX_STEPS: usize> {
    pub name: SceneName,
    #[serde(default)]
    pub description: SceneText,
    pub steps: Vec<SceneStep, MAX_STEPS>,
}

impl<const MAX_STEPS: usize> Scene<MAX_STEPS> {
    /// Create an empty scene
    pub fn new(name: &str, description: &str) -> Result<Self, SceneError> {
        Ok(Self {
            name: text(name)?,
            description: text(description)?,
            steps: Vec::new(),
        })
    }

    /// Append a step
    pub fn step(mut self, step: SceneStep) -> Result<Self, SceneError> {
        self.steps.push(step).map_err(|_| SceneError::TooManySteps)?;
        Ok(self)
    }

    pub fn run_effect(self, section: &str, effect: EffectSlot) -> Result<Self, SceneError> {
        let section = text(section)?;
        self.step(SceneStep::RunEffect { section, effect })
    }

    pub fn play_sound(self, file: &str) -> Result<Self, SceneError> {
        let file = text(file)?;
        self.step(SceneStep::PlaySound { file })
    }

    pub fn stop_sound(self) -> Result<Self, SceneError> {
        self.step(SceneStep::StopSound)
    }

    pub fn wait(self, seconds: f32) -> Result<Self, SceneError> {
        self.step(SceneStep::Wait { seconds })
    }
}

fn text<const N: usize>(value: &str) -> Result<String<N>, SceneError> {
    let mut out = String::new();
    out.push_str(value).map_err(|()| SceneError::TextTooLong)?;
    Ok(out)
}
