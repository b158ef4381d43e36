//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::config::{DEFAULT_FRAME_DURATION, EngineConfig};
use crate::{OutputDriver, Renderer};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
    /// Tick periods that passed without a frame and were dropped.
    pub skipped: u32,
    /// Whether the output driver accepted the frame.
    pub transmitted: bool,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Keeps a fixed tick grid, skipping missed ticks instead of queueing them
/// - Calls the renderer and output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///
///     // Platform-specific sleep
///     Timer::at(result.next_deadline).await;
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    const MAX_LEDS: usize,
    const MAX_SECTIONS: usize,
    const SIZE: usize,
> {
    output: O,
    renderer: Renderer<'a, MAX_LEDS, MAX_SECTIONS, SIZE>,
    next_frame: Option<Instant>,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const MAX_SECTIONS: usize, const SIZE: usize>
    FrameScheduler<'a, O, MAX_LEDS, MAX_SECTIONS, SIZE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(renderer: Renderer<'a, MAX_LEDS, MAX_SECTIONS, SIZE>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler paced by the engine configuration.
    pub fn with_config(
        renderer: Renderer<'a, MAX_LEDS, MAX_SECTIONS, SIZE>,
        driver: O,
        config: &EngineConfig,
    ) -> Self {
        Self::with_frame_duration(renderer, driver, config.frame_duration)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: Renderer<'a, MAX_LEDS, MAX_SECTIONS, SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: None,
            frame_duration: frame_duration.max(Duration::from_ticks(1)),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Drops the tick periods that passed while we were late
    /// 2. Renders the current frame
    /// 3. Writes to the output driver, dropping the frame on failure
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let deadline = self.next_frame.unwrap_or(now);
        let period = self.frame_duration.as_ticks();

        // Late ticks are skipped, never rendered back to back
        let behind = now.checked_duration_since(deadline).map_or(0, |late| late.as_ticks());
        let missed = behind / period;
        if missed > 0 {
            log::debug!("skipped {} frames", missed);
        }
        let next_frame = deadline + Duration::from_ticks(period * (missed + 1));
        self.next_frame = Some(next_frame);

        let frame = self.renderer.render(now);
        let transmitted = match self.output.write(frame) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("frame dropped: {}", err);
                false
            }
        };

        FrameResult {
            next_deadline: next_frame,
            sleep_duration: next_frame
                .checked_duration_since(now)
                .unwrap_or(Duration::from_ticks(0)),
            skipped: u32::try_from(missed).unwrap_or(u32::MAX),
            transmitted,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Get a reference to the renderer.
    pub const fn renderer(&self) -> &Renderer<'a, MAX_LEDS, MAX_SECTIONS, SIZE> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub const fn renderer_mut(&mut self) -> &mut Renderer<'a, MAX_LEDS, MAX_SECTIONS, SIZE> {
        &mut self.renderer
    }

    /// Get a reference to the output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }
}
