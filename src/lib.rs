#![no_std]

pub mod bounds;
pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod effect;
pub mod error;
pub mod filter;
pub mod frame_scheduler;
pub mod math8;
pub mod pixels;
pub mod renderer;
pub mod scene;
pub mod scheduler;
pub mod section;

pub use command::{
    Command, CommandChannel, CommandProcessor, CommandReceiver, Controller, EngineShared,
};
pub use config::{DEFAULT_SECTIONS, EngineConfig, SectionsConfig};
pub use effect::{EffectKind, EffectSlot};
pub use error::{
    CommandStatus, ConfigError, EngineError, ErrorKind, LookupError, OutputError,
    ParameterError, SceneError, SchedulerError, SoundError,
};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use pixels::PixelBuffer;
pub use renderer::Renderer;
pub use scene::{
    Scene, SceneLibrary, SceneRunner, SceneState, SceneStep, builtin_scenes, flash_groups_scene,
};
pub use scheduler::{EffectInstance, EffectScheduler};
pub use section::{ALL_SECTION, Section, SectionRegistry, SectionSpec};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), OutputError>;
}

/// Sound playback collaborator used by scenes
pub trait SoundPlayer {
    fn play(&mut self, file: &str) -> Result<(), SoundError>;

    fn stop(&mut self) -> Result<(), SoundError>;
}

/// Sink for setups without audio: every sound is unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSound;

impl SoundPlayer for NoSound {
    fn play(&mut self, _file: &str) -> Result<(), SoundError> {
        Err(SoundError::Unavailable)
    }

    fn stop(&mut self) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Effect commands as issued by operators and scenes
pub trait EffectControl {
    fn start(&mut self, section: &str, effect: EffectSlot) -> Result<(), EngineError>;

    fn stop(&mut self, section: &str) -> Result<(), EngineError>;
}
