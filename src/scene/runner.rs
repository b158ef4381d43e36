use embassy_time::Instant;

use super::{Scene, SceneLibrary, SceneStep};
use crate::error::EngineError;
use crate::math8::from_secs_f32;
use crate::{EffectControl, SoundPlayer};

/// Lifecycle of the scene runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    Idle,
    /// Executing, `step` is the index of the next step to run
    Running { step: usize },
    Completed,
    Cancelled,
}

/// Plays one scene at a time without blocking
///
/// Call [`SceneRunner::poll`] from the control task; it runs every step that
/// is due and returns the instant it wants to be polled again.
pub struct SceneRunner<const MAX_STEPS: usize> {
    scene: Option<Scene<MAX_STEPS>>,
    state: SceneState,
    /// Instant the next step becomes due
    due: Instant,
}

impl<const MAX_STEPS: usize> Default for SceneRunner<MAX_STEPS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_STEPS: usize> SceneRunner<MAX_STEPS> {
    pub const fn new() -> Self {
        Self {
            scene: None,
            state: SceneState::Idle,
            due: Instant::from_ticks(0),
        }
    }

    pub const fn state(&self) -> SceneState {
        self.state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.state, SceneState::Running { .. })
    }

    /// Name of the current or last played scene
    pub fn scene_name(&self) -> Option<&str> {
        self.scene.as_ref().map(|scene| scene.name.as_str())
    }

    /// Start a scene, cancelling the running one first
    pub fn play(&mut self, scene: &Scene<MAX_STEPS>, now: Instant) {
        self.cancel();
        log::debug!("playing scene {}", scene.name);
        self.scene = Some(scene.clone());
        self.state = SceneState::Running { step: 0 };
        self.due = now;
    }

    /// Look a scene up by name and play it
    pub fn play_named<const MAX_SCENES: usize>(
        &mut self,
        library: &SceneLibrary<MAX_SCENES, MAX_STEPS>,
        name: &str,
        now: Instant,
    ) -> Result<(), EngineError> {
        let scene = library.get(name)?;
        self.play(scene, now);
        Ok(())
    }

    /// Cancel the running scene
    ///
    /// Effects the scene already started keep running.
    pub fn cancel(&mut self) {
        if self.is_running() {
            log::debug!("scene {} cancelled", self.scene_name().unwrap_or_default());
            self.state = SceneState::Cancelled;
        }
    }

    /// Run every step that is due at `now`
    ///
    /// Returns the deadline of the next step, or `None` once the scene is no
    /// longer running. Wait deadlines chain from the previous deadline, so a
    /// late poll does not stretch the scene.
    pub fn poll<C, S>(&mut self, now: Instant, control: &mut C, sound: &mut S) -> Option<Instant>
    where
        C: EffectControl + ?Sized,
        S: SoundPlayer + ?Sized,
    {
        let scene = self.scene.as_ref()?;
        loop {
            let SceneState::Running { step } = self.state else {
                return None;
            };
            if now < self.due {
                return Some(self.due);
            }
            let Some(current) = scene.steps.get(step) else {
                log::debug!("scene {} completed", scene.name);
                self.state = SceneState::Completed;
                return None;
            };

            match current {
                SceneStep::RunEffect { section, effect } => {
                    if let Err(err) = control.start(section, *effect) {
                        log::warn!("scene {} aborted at step {}: {}", scene.name, step, err);
                        self.state = SceneState::Cancelled;
                        return None;
                    }
                }
                SceneStep::PlaySound { file } => {
                    if let Err(err) = sound.play(file) {
                        log::warn!("scene {}: cannot play {}: {}", scene.name, file, err);
                    }
                }
                SceneStep::StopSound => {
                    if let Err(err) = sound.stop() {
                        log::warn!("scene {}: cannot stop sound: {}", scene.name, err);
                    }
                }
                SceneStep::Wait { seconds } => {
                    self.due += from_secs_f32(*seconds);
                }
            }
            self.state = SceneState::Running { step: step + 1 };
        }
    }
}
