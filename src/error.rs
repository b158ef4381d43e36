//! Error types shared by the engine components

use thiserror::Error;

/// Section layout validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Sum of section counts exceeds the physical pixel count
    #[error("sections need {required} pixels, strip has {available}")]
    Overflow { required: usize, available: usize },
    #[error("section name is empty")]
    EmptyName,
    #[error("section name is too long")]
    NameTooLong,
    #[error("section name is used more than once")]
    DuplicateName,
    #[error("section name is reserved")]
    ReservedName,
    #[error("too many sections")]
    TooManySections,
    /// Strip is longer than the frame buffer can hold
    #[error("strip has {pixels} pixels, frame buffer holds {capacity}")]
    StripTooLong { pixels: usize, capacity: usize },
}

/// Section name is not present in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown section")]
pub struct LookupError;

/// Effect parameter outside of its accepted domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid parameter `{name}`: {reason}")]
pub struct ParameterError {
    pub name: &'static str,
    pub reason: &'static str,
}

impl ParameterError {
    pub const fn new(name: &'static str, reason: &'static str) -> Self {
        Self { name, reason }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("unknown section")]
    UnknownSection,
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),
    /// Every instance slot is taken
    #[error("no free effect slot")]
    NoFreeSlot,
}

impl From<LookupError> for SchedulerError {
    fn from(_: LookupError) -> Self {
        Self::UnknownSection
    }
}

/// The frame could not be transmitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hardware write failure")]
pub struct OutputError;

/// Sound collaborator failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SoundError {
    #[error("sound file not found")]
    NotFound,
    #[error("sound player unavailable")]
    Unavailable,
}

/// Scene library or scene construction failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("scene not found")]
    NotFound,
    #[error("scene name is used more than once")]
    DuplicateName,
    #[error("text does not fit")]
    TextTooLong,
    #[error("too many scenes")]
    TooManyScenes,
    #[error("too many steps")]
    TooManySteps,
}

/// Error kinds reported as command status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownSection,
    InvalidParameter,
    ConfigOverflow,
    ConfigInvalid,
    SceneNotFound,
    HardwareWriteFailure,
    QueueFull,
}

/// Status result of a command: accepted, or rejected with a kind
pub type CommandStatus = Result<(), ErrorKind>;

/// Umbrella error returned by the command front door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Output(#[from] OutputError),
    /// The command queue is full, nothing was enqueued
    #[error("command queue is full")]
    QueueFull,
}

impl From<LookupError> for EngineError {
    fn from(_: LookupError) -> Self {
        Self::Scheduler(SchedulerError::UnknownSection)
    }
}

impl From<ParameterError> for EngineError {
    fn from(err: ParameterError) -> Self {
        Self::Scheduler(SchedulerError::InvalidParameter(err))
    }
}

impl EngineError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(ConfigError::Overflow { .. }) => ErrorKind::ConfigOverflow,
            Self::Config(_) => ErrorKind::ConfigInvalid,
            Self::Scheduler(SchedulerError::UnknownSection) => ErrorKind::UnknownSection,
            Self::Scheduler(SchedulerError::InvalidParameter(_)) => ErrorKind::InvalidParameter,
            Self::Scheduler(SchedulerError::NoFreeSlot) | Self::QueueFull => ErrorKind::QueueFull,
            Self::Scene(SceneError::NotFound) => ErrorKind::SceneNotFound,
            Self::Scene(_) => ErrorKind::ConfigInvalid,
            Self::Output(_) => ErrorKind::HardwareWriteFailure,
        }
    }
}

/// Convert a command result into its reported status
pub fn status<T>(result: &Result<T, EngineError>) -> CommandStatus {
    match result {
        Ok(_) => Ok(()),
        Err(err) => Err(err.kind()),
    }
}
