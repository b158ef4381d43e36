use heapless::Vec;

use super::Scene;
use crate::color::{BLACK, Rgb};
use crate::effect::{
    ChaseEffect, EffectSlot, FadeEffect, PulseEffect, SolidEffect, WipeDirection, WipeEffect,
};
use crate::error::SceneError;
use crate::math8::hash32;
use crate::section::{ALL_SECTION, SectionRegistry};

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

const FADE_SECS: f32 = 1.5;
const HOLD_SECS: f32 = 0.5;

const FLASHES: u32 = 3;
const FLASH_SECS: f32 = 0.15;
const GROUP_PAUSE_SECS: f32 = 0.2;

/// Named scenes available for playback
#[derive(Debug, Clone, Default)]
pub struct SceneLibrary<const MAX_SCENES: usize, const MAX_STEPS: usize> {
    scenes: Vec<Scene<MAX_STEPS>, MAX_SCENES>,
}

impl<const MAX_SCENES: usize, const MAX_STEPS: usize> SceneLibrary<MAX_SCENES, MAX_STEPS> {
    pub const fn new() -> Self {
        Self { scenes: Vec::new() }
    }

    /// Add a scene, names must be unique
    pub fn add(&mut self, scene: Scene<MAX_STEPS>) -> Result<(), SceneError> {
        if self.get(&scene.name).is_ok() {
            return Err(SceneError::DuplicateName);
        }
        self.scenes
            .push(scene)
            .map_err(|_| SceneError::TooManyScenes)
    }

    /// Scene names and descriptions in insertion order
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scenes
            .iter()
            .map(|scene| (scene.name.as_str(), scene.description.as_str()))
    }

    pub fn get(&self, name: &str) -> Result<&Scene<MAX_STEPS>, SceneError> {
        self.scenes
            .iter()
            .find(|scene| scene.name.as_str() == name)
            .ok_or(SceneError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

/// The stock scenes, played on the whole strip
pub fn builtin_scenes<const MAX_SCENES: usize, const MAX_STEPS: usize>()
-> Result<SceneLibrary<MAX_SCENES, MAX_STEPS>, SceneError> {
    let mut library = SceneLibrary::new();

    // RunEffect does not block, so the wait after a fade covers the fade
    // itself plus the hold
    library.add(
        Scene::new("Welcome", "Blue, then fade through green to red")?
            .run_effect(ALL_SECTION, EffectSlot::Color(SolidEffect::new(BLUE)))?
            .wait(HOLD_SECS)?
            .run_effect(ALL_SECTION, fade(GREEN))?
            .wait(FADE_SECS + HOLD_SECS)?
            .run_effect(ALL_SECTION, fade(RED))?
            .wait(FADE_SECS + HOLD_SECS)?
            .run_effect(ALL_SECTION, EffectSlot::Off)?,
    )?;

    let mut red_alert = Scene::new("Red Alert", "Three red pulses")?;
    for _ in 0..3 {
        red_alert = red_alert
            .run_effect(
                ALL_SECTION,
                EffectSlot::Pulse(PulseEffect {
                    color: RED,
                    duration: 0.5,
                }),
            )?
            .wait(0.5)?;
    }
    library.add(red_alert.run_effect(ALL_SECTION, EffectSlot::Off)?)?;

    library.add(
        Scene::new("Cylon", "Red eye sweeping back and forth")?
            .run_effect(ALL_SECTION, sweep(RED, WipeDirection::Forward))?
            .wait(1.0)?
            .run_effect(ALL_SECTION, sweep(BLACK, WipeDirection::Backward))?
            .wait(1.0)?
            .run_effect(
                ALL_SECTION,
                EffectSlot::Chase(ChaseEffect {
                    color: RED,
                    spacing: 5,
                    speed: 20.0,
                    count: 1,
                }),
            )?
            .wait(1.0)?
            .run_effect(ALL_SECTION, EffectSlot::Off)?,
    )?;

    Ok(library)
}

/// Flash every non-empty section in turn with random colors
///
/// Built from the current layout; `seed` picks the colors, so the same
/// layout and seed always give the same scene.
pub fn flash_groups_scene<const MAX_SECTIONS: usize, const MAX_STEPS: usize>(
    registry: &SectionRegistry<MAX_SECTIONS>,
    seed: u32,
) -> Result<Scene<MAX_STEPS>, SceneError> {
    let mut scene = Scene::new("Flash Groups", "Each section flashes random colors in turn")?;
    let groups = registry
        .list()
        .iter()
        .enumerate()
        .filter(|(_, section)| section.count > 0);

    for (group, section) in groups {
        let name = section.name.as_str();
        for flash in 0..FLASHES {
            let [r, g, b, _] = hash32(seed, group as u64, flash).to_le_bytes();
            scene = scene
                .run_effect(name, EffectSlot::Color(SolidEffect::new(Rgb { r, g, b })))?
                .wait(FLASH_SECS)?
                .run_effect(name, EffectSlot::Off)?
                .wait(FLASH_SECS)?;
        }
        scene = scene.wait(GROUP_PAUSE_SECS)?;
    }
    Ok(scene)
}

fn fade(color: Rgb) -> EffectSlot {
    EffectSlot::Fade(FadeEffect {
        color,
        duration: FADE_SECS,
    })
}

fn sweep(color: Rgb, direction: WipeDirection) -> EffectSlot {
    EffectSlot::Wipe(WipeEffect {
        color,
        direction,
        speed: 20.0,
    })
}
