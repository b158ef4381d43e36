//! Effect library with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait; `EffectSlot` dispatches with a
//! total match over its variants.

mod breath;
mod chase;
mod fade;
mod flicker;
mod pulse;
mod rainbow;
mod solid;
mod sparkle;
mod strobe;
mod wipe;

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

pub use breath::BreathEffect;
pub use chase::ChaseEffect;
pub use fade::FadeEffect;
pub use flicker::FlickerEffect;
pub use pulse::PulseEffect;
pub use rainbow::RainbowEffect;
pub use solid::SolidEffect;
pub use sparkle::SparkleEffect;
pub use strobe::StrobeEffect;
pub use wipe::{WipeDirection, WipeEffect};

use crate::color::{BLACK, Rgb, WHITE};
use crate::error::ParameterError;

const EFFECT_NAME_ON: &str = "on";
const EFFECT_NAME_OFF: &str = "off";
const EFFECT_NAME_COLOR: &str = "color";
const EFFECT_NAME_PULSE: &str = "pulse";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_FADE: &str = "fade";
const EFFECT_NAME_BREATH: &str = "breath";
const EFFECT_NAME_WIPE: &str = "wipe";
const EFFECT_NAME_CHASE: &str = "chase";
const EFFECT_NAME_SPARKLE: &str = "sparkle";
const EFFECT_NAME_FLICKER: &str = "flicker";
const EFFECT_NAME_STROBE: &str = "strobe";

/// Inputs of a single render call
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Time since the instance started, clamped to its run time
    pub elapsed: Duration,
    /// Section pixels as they were before the instance started
    pub backdrop: &'a [Rgb],
    /// Per-instance seed for randomized effects
    pub seed: u32,
}

pub trait Effect {
    /// Check parameters before the effect is accepted
    fn validate(&self) -> Result<(), ParameterError> {
        Ok(())
    }

    /// Total run time on a section of `pixel_count` pixels
    ///
    /// `None` means the effect persists until it is stopped or preempted.
    fn run_time(&self, pixel_count: usize) -> Option<Duration>;

    /// Render a single frame into the section pixels
    fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]);

    /// Check if the effect has run its course
    fn is_complete(&self, elapsed: Duration, pixel_count: usize) -> bool {
        self.run_time(pixel_count)
            .is_some_and(|run_time| elapsed >= run_time)
    }
}

/// Reject non-finite values
pub(crate) fn finite(name: &'static str, value: f32) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::new(name, "must be a finite number"))
    }
}

/// Reject non-finite and non-positive values
pub(crate) fn positive(name: &'static str, value: f32) -> Result<(), ParameterError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::new(name, "must be greater than zero"))
    }
}

/// Reject values outside of `0.0..=1.0`
pub(crate) fn unit(name: &'static str, value: f32) -> Result<(), ParameterError> {
    finite(name, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::new(name, "must be between 0 and 1"))
    }
}

/// Effect slot - enum containing all possible effects with their parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSlot {
    /// Solid color, white unless specified
    On(SolidEffect),
    /// All pixels dark
    Off,
    /// Instant solid fill
    Color(SolidEffect),
    Pulse(PulseEffect),
    Rainbow(RainbowEffect),
    Fade(FadeEffect),
    Breath(BreathEffect),
    Wipe(WipeEffect),
    Chase(ChaseEffect),
    Sparkle(SparkleEffect),
    Flicker(FlickerEffect),
    Strobe(StrobeEffect),
}

/// Known effect kinds that can be requested by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    On,
    Off,
    Color,
    Pulse,
    Rainbow,
    Fade,
    Breath,
    Wipe,
    Chase,
    Sparkle,
    Flicker,
    Strobe,
}

impl EffectKind {
    pub const ALL: [Self; 12] = [
        Self::On,
        Self::Off,
        Self::Color,
        Self::Pulse,
        Self::Rainbow,
        Self::Fade,
        Self::Breath,
        Self::Wipe,
        Self::Chase,
        Self::Sparkle,
        Self::Flicker,
        Self::Strobe,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => EFFECT_NAME_ON,
            Self::Off => EFFECT_NAME_OFF,
            Self::Color => EFFECT_NAME_COLOR,
            Self::Pulse => EFFECT_NAME_PULSE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Fade => EFFECT_NAME_FADE,
            Self::Breath => EFFECT_NAME_BREATH,
            Self::Wipe => EFFECT_NAME_WIPE,
            Self::Chase => EFFECT_NAME_CHASE,
            Self::Sparkle => EFFECT_NAME_SPARKLE,
            Self::Flicker => EFFECT_NAME_FLICKER,
            Self::Strobe => EFFECT_NAME_STROBE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Effect of this kind with default parameters
    ///
    /// `color` overrides the default color of kinds that take one.
    pub fn to_slot(self, color: Option<Rgb>) -> EffectSlot {
        let with_color = |default: Rgb| color.unwrap_or(default);
        match self {
            Self::On => EffectSlot::On(SolidEffect::new(with_color(WHITE))),
            Self::Off => EffectSlot::Off,
            Self::Color => EffectSlot::Color(SolidEffect::new(with_color(BLACK))),
            Self::Pulse => EffectSlot::Pulse(PulseEffect {
                color: with_color(WHITE),
                ..PulseEffect::default()
            }),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::default()),
            Self::Fade => EffectSlot::Fade(FadeEffect {
                color: with_color(BLACK),
                ..FadeEffect::default()
            }),
            Self::Breath => EffectSlot::Breath(BreathEffect {
                color: with_color(WHITE),
                ..BreathEffect::default()
            }),
            Self::Wipe => EffectSlot::Wipe(WipeEffect {
                color: with_color(WHITE),
                ..WipeEffect::default()
            }),
            Self::Chase => EffectSlot::Chase(ChaseEffect {
                color: with_color(WHITE),
                ..ChaseEffect::default()
            }),
            Self::Sparkle => EffectSlot::Sparkle(SparkleEffect {
                color: with_color(WHITE),
                ..SparkleEffect::default()
            }),
            Self::Flicker => EffectSlot::Flicker(FlickerEffect {
                color: with_color(WHITE),
                ..FlickerEffect::default()
            }),
            Self::Strobe => EffectSlot::Strobe(StrobeEffect {
                color: with_color(WHITE),
                ..StrobeEffect::default()
            }),
        }
    }
}

/// Dispatch one `Effect` method over every variant
macro_rules! dispatch {
    ($slot:expr, $effect:ident => $body:expr, off => $off:expr) => {
        match $slot {
            EffectSlot::On($effect) | EffectSlot::Color($effect) => $body,
            EffectSlot::Pulse($effect) => $body,
            EffectSlot::Rainbow($effect) => $body,
            EffectSlot::Fade($effect) => $body,
            EffectSlot::Breath($effect) => $body,
            EffectSlot::Wipe($effect) => $body,
            EffectSlot::Chase($effect) => $body,
            EffectSlot::Sparkle($effect) => $body,
            EffectSlot::Flicker($effect) => $body,
            EffectSlot::Strobe($effect) => $body,
            EffectSlot::Off => $off,
        }
    };
}

impl EffectSlot {
    /// Get the effect kind for external observation
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::On(_) => EffectKind::On,
            Self::Off => EffectKind::Off,
            Self::Color(_) => EffectKind::Color,
            Self::Pulse(_) => EffectKind::Pulse,
            Self::Rainbow(_) => EffectKind::Rainbow,
            Self::Fade(_) => EffectKind::Fade,
            Self::Breath(_) => EffectKind::Breath,
            Self::Wipe(_) => EffectKind::Wipe,
            Self::Chase(_) => EffectKind::Chase,
            Self::Sparkle(_) => EffectKind::Sparkle,
            Self::Flicker(_) => EffectKind::Flicker,
            Self::Strobe(_) => EffectKind::Strobe,
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        dispatch!(self, effect => effect.validate(), off => Ok(()))
    }

    pub fn run_time(&self, pixel_count: usize) -> Option<Duration> {
        dispatch!(self, effect => effect.run_time(pixel_count), off => None)
    }

    /// Check if the effect persists until stopped
    pub fn is_persistent(&self, pixel_count: usize) -> bool {
        self.run_time(pixel_count).is_none()
    }

    pub fn is_complete(&self, elapsed: Duration, pixel_count: usize) -> bool {
        dispatch!(
            self,
            effect => effect.is_complete(elapsed, pixel_count),
            off => false
        )
    }

    /// Render the effect into the section pixels
    pub fn render(&self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) {
        dispatch!(self, effect => effect.render(ctx, leds), off => leds.fill(BLACK));
    }
}
