//! Effect scheduler
//!
//! Owns at most one effect instance per section plus one for the synthetic
//! "All" section, and paints them into the frame once per tick. The "All"
//! instance is painted first so named sections drawn after it win on their
//! own ranges.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::bounds::SectionRange;
use crate::color::{BLACK, Rgb};
use crate::effect::{EffectSlot, RenderContext};
use crate::error::SchedulerError;
use crate::math8::hash32;
use crate::pixels::PixelBuffer;
use crate::section::{ALL_SECTION, SectionName, SectionRegistry, is_all, section_name};

const ZERO: Duration = Duration::from_micros(0);

/// Lifecycle of an instance inside the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    /// Accepted, pre-effect pixels not captured yet
    Pending,
    Running,
    /// Final frame rendered, removed on the next tick
    Finished,
}

/// An effect running on one section
#[derive(Debug, Clone)]
pub struct EffectInstance {
    section: SectionName,
    effect: EffectSlot,
    started: Instant,
    seed: u32,
    state: InstanceState,
}

impl EffectInstance {
    pub fn section(&self) -> &str {
        &self.section
    }

    pub const fn effect(&self) -> &EffectSlot {
        &self.effect
    }

    pub const fn started(&self) -> Instant {
        self.started
    }

    pub const fn seed(&self) -> u32 {
        self.seed
    }

    pub const fn state(&self) -> InstanceState {
        self.state
    }

    /// Paint one frame of the instance
    ///
    /// Returns `false` once the instance should be dropped.
    fn advance(&mut self, now: Instant, leds: &mut [Rgb], backdrop: &mut [Rgb]) -> bool {
        if self.state == InstanceState::Finished {
            return false;
        }
        if self.state == InstanceState::Pending {
            backdrop.copy_from_slice(leds);
            self.state = InstanceState::Running;
        }

        let elapsed = now.checked_duration_since(self.started).unwrap_or(ZERO);
        let mut ctx = RenderContext {
            elapsed,
            backdrop,
            seed: self.seed,
        };

        match self.effect.run_time(leds.len()) {
            Some(run_time) if elapsed >= run_time => {
                if run_time == ZERO {
                    // Zero-length effects leave the section as they found it
                    leds.copy_from_slice(ctx.backdrop);
                } else {
                    ctx.elapsed = run_time;
                    self.effect.render(&ctx, leds);
                }
                self.state = InstanceState::Finished;
            }
            _ => self.effect.render(&ctx, leds),
        }
        true
    }
}

/// Scheduler of per-section effect instances
pub struct EffectScheduler<const MAX_LEDS: usize, const MAX_SECTIONS: usize> {
    all: Option<EffectInstance>,
    sections: Vec<EffectInstance, MAX_SECTIONS>,
    /// Pre-effect pixels of the "All" instance
    all_backdrop: [Rgb; MAX_LEDS],
    /// Pre-effect pixels of named instances, stored at their section offsets
    section_backdrop: [Rgb; MAX_LEDS],
    next_seed: u32,
}

impl<const MAX_LEDS: usize, const MAX_SECTIONS: usize> Default
    for EffectScheduler<MAX_LEDS, MAX_SECTIONS>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_LEDS: usize, const MAX_SECTIONS: usize> EffectScheduler<MAX_LEDS, MAX_SECTIONS> {
    pub const fn new() -> Self {
        Self::with_seed(0x5EED_1A5E)
    }

    /// Create a scheduler whose instance seeds derive from `seed`
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            all: None,
            sections: Vec::new(),
            all_backdrop: [BLACK; MAX_LEDS],
            section_backdrop: [BLACK; MAX_LEDS],
            next_seed: seed,
        }
    }

    /// Start an effect on a section, preempting its current instance
    ///
    /// Starting on "All" drops every named-section instance first.
    pub fn start(
        &mut self,
        registry: &SectionRegistry<MAX_SECTIONS>,
        section: &str,
        effect: EffectSlot,
        now: Instant,
    ) -> Result<(), SchedulerError> {
        effect.validate()?;

        if is_all(section) {
            let instance = self.instance(ALL_SECTION, effect, now)?;
            self.sections.clear();
            self.all = Some(instance);
            return Ok(());
        }

        registry.resolve(section)?;
        let instance = self.instance(section, effect, now)?;
        if let Some(slot) = self
            .sections
            .iter_mut()
            .find(|slot| slot.section.as_str() == section)
        {
            *slot = instance;
            return Ok(());
        }
        self.sections
            .push(instance)
            .map_err(|_| SchedulerError::NoFreeSlot)
    }

    /// Stop the effect of a section
    ///
    /// Idempotent; pixels keep whatever was rendered last.
    pub fn stop(&mut self, section: &str) {
        if is_all(section) {
            self.all = None;
        } else {
            self.sections
                .retain(|instance| instance.section.as_str() != section);
        }
    }

    /// Drop instances whose section is no longer in the registry
    pub fn retain_known(&mut self, registry: &SectionRegistry<MAX_SECTIONS>) {
        self.sections.retain(|instance| {
            let known = registry.contains(&instance.section);
            if !known {
                log::debug!("dropping effect of removed section {}", instance.section);
            }
            known
        });
    }

    /// Active instance of a section
    pub fn active(&self, section: &str) -> Option<&EffectInstance> {
        if is_all(section) {
            return self.all.as_ref();
        }
        self.sections
            .iter()
            .find(|instance| instance.section.as_str() == section)
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active(section).is_some()
    }

    /// Number of live instances, "All" included
    pub fn active_count(&self) -> usize {
        self.sections.len() + usize::from(self.all.is_some())
    }

    /// Advance every instance and paint it into the frame
    pub fn tick(
        &mut self,
        now: Instant,
        registry: &SectionRegistry<MAX_SECTIONS>,
        frame: &mut PixelBuffer<MAX_LEDS>,
    ) {
        if let Some(instance) = self.all.as_mut() {
            let range = frame.full_range();
            let leds = frame.section_mut(range);
            let backdrop = backdrop_for(&mut self.all_backdrop, range, leds.len());
            if !instance.advance(now, leds, backdrop) {
                log::debug!("effect on {} finished", ALL_SECTION);
                self.all = None;
            }
        }

        let backdrops = &mut self.section_backdrop;
        self.sections.retain_mut(|instance| {
            let Ok(range) = registry.resolve(&instance.section) else {
                return false;
            };
            let leds = frame.section_mut(range);
            let backdrop = backdrop_for(backdrops, range, leds.len());
            let keep = instance.advance(now, leds, backdrop);
            if !keep {
                log::debug!("effect on {} finished", instance.section);
            }
            keep
        });
    }

    fn instance(
        &mut self,
        section: &str,
        effect: EffectSlot,
        now: Instant,
    ) -> Result<EffectInstance, SchedulerError> {
        self.next_seed = self.next_seed.wrapping_add(0x9e37_79b9);
        Ok(EffectInstance {
            section: section_name(section).map_err(|_| SchedulerError::UnknownSection)?,
            effect,
            started: now,
            seed: hash32(self.next_seed, now.as_ticks(), 0),
            state: InstanceState::Pending,
        })
    }
}

/// Backdrop storage of a range, kept at the same offsets as the frame
fn backdrop_for<const MAX_LEDS: usize>(
    buffer: &mut [Rgb; MAX_LEDS],
    range: SectionRange,
    len: usize,
) -> &mut [Rgb] {
    let start = range.start.min(MAX_LEDS);
    let end = (start + len).min(MAX_LEDS);
    &mut buffer[start..end]
}
