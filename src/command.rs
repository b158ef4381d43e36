//! Command front door
//!
//! Producers (API handlers, the scene runner) talk to the engine through a
//! [`Controller`]. Commands are validated synchronously against the accepted
//! section layout and then queued; the render tick drains the queue with a
//! [`CommandProcessor`] before painting, so nothing is ever applied halfway
//! through a frame.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;
use heapless::Vec;

use crate::EffectControl;
use crate::channel::{Channel, Receiver};
use crate::color::Rgb;
use crate::effect::{EffectKind, EffectSlot, SolidEffect};
use crate::error::{ConfigError, EngineError, LookupError, ParameterError};
use crate::scheduler::EffectScheduler;
use crate::section::{Section, SectionName, SectionRegistry, SectionSpec, section_name};

/// Request queued for the render tick
#[derive(Debug, Clone)]
pub enum Command<const MAX_SECTIONS: usize> {
    /// Start an effect, preempting the section's current one
    Start {
        section: SectionName,
        effect: EffectSlot,
    },
    Stop { section: SectionName },
    /// Install an already validated layout
    ReplaceSections(SectionRegistry<MAX_SECTIONS>),
}

/// Type alias for the command channel
pub type CommandChannel<const MAX_SECTIONS: usize, const SIZE: usize> =
    Channel<Command<MAX_SECTIONS>, SIZE>;

/// Type alias for the command receiver
pub type CommandReceiver<'a, const MAX_SECTIONS: usize, const SIZE: usize> =
    Receiver<'a, Command<MAX_SECTIONS>, SIZE>;

/// State shared between producers and the render tick
///
/// Can live in a `static`:
///
/// ```ignore
/// static ENGINE: EngineShared<16, 8> = EngineShared::new(18);
/// ```
pub struct EngineShared<const MAX_SECTIONS: usize, const SIZE: usize> {
    commands: CommandChannel<MAX_SECTIONS, SIZE>,
    /// Layout as of the last accepted replacement, used for validation
    layout: Mutex<RefCell<SectionRegistry<MAX_SECTIONS>>>,
}

impl<const MAX_SECTIONS: usize, const SIZE: usize> EngineShared<MAX_SECTIONS, SIZE> {
    /// Create shared state for a strip of `pixel_count` pixels, no sections
    pub const fn new(pixel_count: usize) -> Self {
        Self {
            commands: Channel::new(),
            layout: Mutex::new(RefCell::new(SectionRegistry::new(pixel_count))),
        }
    }

    /// Create shared state with an initial layout
    pub fn with_sections(pixel_count: usize, specs: &[SectionSpec]) -> Result<Self, ConfigError> {
        let registry = SectionRegistry::with_sections(pixel_count, specs)?;
        Ok(Self {
            commands: Channel::new(),
            layout: Mutex::new(RefCell::new(registry)),
        })
    }

    pub const fn controller(&self) -> Controller<'_, MAX_SECTIONS, SIZE> {
        Controller { shared: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, MAX_SECTIONS, SIZE> {
        self.commands.receiver()
    }

    /// Snapshot of the accepted layout
    pub fn layout(&self) -> SectionRegistry<MAX_SECTIONS> {
        critical_section::with(|cs| self.layout.borrow(cs).borrow().clone())
    }

    fn send(&self, command: Command<MAX_SECTIONS>) -> Result<(), EngineError> {
        self.commands
            .try_send(command)
            .map_err(|_| EngineError::QueueFull)
    }
}

/// Producer handle of the engine
#[derive(Clone, Copy)]
pub struct Controller<'a, const MAX_SECTIONS: usize, const SIZE: usize> {
    shared: &'a EngineShared<MAX_SECTIONS, SIZE>,
}

impl<const MAX_SECTIONS: usize, const SIZE: usize> Controller<'_, MAX_SECTIONS, SIZE> {
    /// Light a section with a solid color, white if none is given
    pub fn turn_on(&self, section: &str, color: Option<Rgb>) -> Result<(), EngineError> {
        self.start(section, EffectKind::On.to_slot(color))
    }

    pub fn turn_off(&self, section: &str) -> Result<(), EngineError> {
        self.start(section, EffectSlot::Off)
    }

    /// Instant solid fill
    pub fn set_color(&self, section: &str, color: Rgb) -> Result<(), EngineError> {
        self.start(section, EffectSlot::Color(SolidEffect::new(color)))
    }

    /// Start a parameterized effect on a section
    pub fn start(&self, section: &str, effect: EffectSlot) -> Result<(), EngineError> {
        effect.validate()?;
        let section = self.known_section(section)?;
        self.shared.send(Command::Start { section, effect })
    }

    /// Start an effect by kind name with default parameters
    pub fn start_named(
        &self,
        section: &str,
        kind: &str,
        color: Option<Rgb>,
    ) -> Result<(), EngineError> {
        let kind = EffectKind::parse_from_str(kind)
            .ok_or(ParameterError::new("effect", "unknown effect kind"))?;
        self.start(section, kind.to_slot(color))
    }

    /// Stop the effect of a section, pixels keep their last colors
    pub fn stop(&self, section: &str) -> Result<(), EngineError> {
        let section = self.known_section(section)?;
        self.shared.send(Command::Stop { section })
    }

    /// Resolved layout: name, start and count of each section in order
    pub fn sections(&self) -> Vec<Section, MAX_SECTIONS> {
        self.shared.layout().list().iter().cloned().collect()
    }

    /// Replace the whole section list
    ///
    /// Returns the recomputed layout. On error neither the accepted layout
    /// nor the render tick's layout changes.
    pub fn replace_sections(
        &self,
        specs: &[SectionSpec],
    ) -> Result<Vec<Section, MAX_SECTIONS>, EngineError> {
        critical_section::with(|cs| {
            let mut layout = self.shared.layout.borrow(cs).borrow_mut();
            let mut registry = SectionRegistry::new(layout.pixel_count());
            registry.replace_all(specs)?;

            self.shared
                .commands
                .try_send_in(cs, Command::ReplaceSections(registry.clone()))
                .map_err(|_| EngineError::QueueFull)?;

            let sections = registry.list().iter().cloned().collect();
            *layout = registry;
            log::debug!("accepted layout of {} sections", specs.len());
            Ok(sections)
        })
    }

    fn known_section(&self, section: &str) -> Result<SectionName, EngineError> {
        let known =
            critical_section::with(|cs| self.shared.layout.borrow(cs).borrow().contains(section));
        if !known {
            return Err(LookupError.into());
        }
        section_name(section).map_err(|_| LookupError.into())
    }
}

impl<const MAX_SECTIONS: usize, const SIZE: usize> EffectControl
    for Controller<'_, MAX_SECTIONS, SIZE>
{
    fn start(&mut self, section: &str, effect: EffectSlot) -> Result<(), EngineError> {
        Controller::start(self, section, effect)
    }

    fn stop(&mut self, section: &str) -> Result<(), EngineError> {
        Controller::stop(self, section)
    }
}

/// Drains queued commands into the render state
pub struct CommandProcessor<'a, const MAX_SECTIONS: usize, const SIZE: usize> {
    commands: CommandReceiver<'a, MAX_SECTIONS, SIZE>,
}

impl<'a, const MAX_SECTIONS: usize, const SIZE: usize> CommandProcessor<'a, MAX_SECTIONS, SIZE> {
    pub const fn new(commands: CommandReceiver<'a, MAX_SECTIONS, SIZE>) -> Self {
        Self { commands }
    }

    /// Apply all pending commands in arrival order (non-blocking)
    ///
    /// Returns the number of commands drained.
    pub fn process_pending<const MAX_LEDS: usize>(
        &mut self,
        now: Instant,
        registry: &mut SectionRegistry<MAX_SECTIONS>,
        scheduler: &mut EffectScheduler<MAX_LEDS, MAX_SECTIONS>,
    ) -> usize {
        let mut drained = 0;
        while let Ok(command) = self.commands.try_receive() {
            drained += 1;
            match command {
                Command::Start { section, effect } => {
                    if let Err(err) = scheduler.start(registry, &section, effect, now) {
                        log::warn!("dropped {} on {}: {}", effect.kind().as_str(), section, err);
                    }
                }
                Command::Stop { section } => scheduler.stop(&section),
                Command::ReplaceSections(layout) => {
                    *registry = layout;
                    scheduler.retain_known(registry);
                    log::debug!("installed layout of {} sections", registry.list().len());
                }
            }
        }
        drained
    }
}
