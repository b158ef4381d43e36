//! Engine configuration

use embassy_time::Duration;
use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::section::{SectionRegistry, SectionSpec};

/// Default target frame rate (60 FPS)
pub const DEFAULT_FPS: u64 = 60;

/// Default frame duration based on target FPS
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / DEFAULT_FPS);

/// Stock section layout of the strip
pub const DEFAULT_SECTIONS: [(&str, usize); 10] = [
    ("Left Windows", 2),
    ("Rear Windows", 2),
    ("Left Police", 2),
    ("Right Windows", 2),
    ("Front Police", 2),
    ("Front Windows", 2),
    ("Rear Police", 2),
    ("Right Police", 2),
    ("Top Light", 2),
    ("Extra", 0),
];

/// Configuration for the render loop
///
/// The strip length is owned by [`EngineShared`](crate::EngineShared), which
/// validates every layout against it.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Render tick period
    pub frame_duration: Duration,
    /// Global output brightness (255 = unscaled)
    pub brightness: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    pub const fn new() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            brightness: 255,
        }
    }

    #[must_use]
    pub const fn with_frame_duration(mut self, frame_duration: Duration) -> Self {
        self.frame_duration = frame_duration;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }
}

/// Section list as exchanged with the configuration store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionsConfig<const MAX_SECTIONS: usize> {
    pub sections: Vec<SectionSpec, MAX_SECTIONS>,
}

impl<const MAX_SECTIONS: usize> SectionsConfig<MAX_SECTIONS> {
    /// The stock layout
    pub fn stock() -> Result<Self, ConfigError> {
        let mut sections = Vec::new();
        for (name, count) in DEFAULT_SECTIONS {
            sections
                .push(SectionSpec::new(name, count)?)
                .map_err(|_| ConfigError::TooManySections)?;
        }
        Ok(Self { sections })
    }

    /// Snapshot of a layout, ready to be stored
    pub fn from_registry(registry: &SectionRegistry<MAX_SECTIONS>) -> Self {
        Self {
            sections: registry.specs(),
        }
    }
}
