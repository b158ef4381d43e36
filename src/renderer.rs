use embassy_time::Instant;

use crate::color::Rgb;
use crate::command::{CommandProcessor, EngineShared};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::filter::{BrightnessFilter, Filter};
use crate::pixels::PixelBuffer;
use crate::scheduler::EffectScheduler;
use crate::section::SectionRegistry;

/// Render state of the engine
///
/// Sole writer of the pixel buffer. Each call to [`Renderer::render`] drains
/// the command queue, advances every active effect and returns the frame to
/// transmit.
pub struct Renderer<'a, const MAX_LEDS: usize, const MAX_SECTIONS: usize, const SIZE: usize> {
    // External dependencies
    commands: CommandProcessor<'a, MAX_SECTIONS, SIZE>,

    // Internal state
    registry: SectionRegistry<MAX_SECTIONS>,
    scheduler: EffectScheduler<MAX_LEDS, MAX_SECTIONS>,
    frame: PixelBuffer<MAX_LEDS>,
    output: [Rgb; MAX_LEDS],

    brightness: BrightnessFilter,
}

impl<'a, const MAX_LEDS: usize, const MAX_SECTIONS: usize, const SIZE: usize>
    Renderer<'a, MAX_LEDS, MAX_SECTIONS, SIZE>
{
    /// Create a renderer consuming the commands of `shared`
    ///
    /// Starts from the layout `shared` has accepted so far. The frame is
    /// sized by that layout's strip length, which must fit in `MAX_LEDS`.
    pub fn new(
        shared: &'a EngineShared<MAX_SECTIONS, SIZE>,
        config: &EngineConfig,
    ) -> Result<Self, ConfigError> {
        let registry = shared.layout();
        let pixels = registry.pixel_count();
        if pixels > MAX_LEDS {
            return Err(ConfigError::StripTooLong {
                pixels,
                capacity: MAX_LEDS,
            });
        }

        Ok(Self {
            commands: CommandProcessor::new(shared.receiver()),
            frame: PixelBuffer::new(pixels),
            registry,
            scheduler: EffectScheduler::new(),
            output: [Rgb::default(); MAX_LEDS],
            brightness: BrightnessFilter::new(config.brightness),
        })
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this once per tick.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.commands
            .process_pending(now, &mut self.registry, &mut self.scheduler);
        self.scheduler.tick(now, &self.registry, &mut self.frame);

        let output = &mut self.output[..self.frame.len()];
        output.copy_from_slice(self.frame.as_slice());
        self.brightness.apply(output);

        output
    }

    /// Unscaled pixels of the last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        self.frame.as_slice()
    }

    pub const fn registry(&self) -> &SectionRegistry<MAX_SECTIONS> {
        &self.registry
    }

    pub const fn scheduler(&self) -> &EffectScheduler<MAX_LEDS, MAX_SECTIONS> {
        &self.scheduler
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness.brightness()
    }

    /// Set the global output brightness, effective from the next frame
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness.set(brightness);
    }
}
