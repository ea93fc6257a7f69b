//! Mode state machine
//!
//! The mode only changes on a `status` command. It decides which periodic
//! behaviour is allowed to rewrite the actuator targets.

use bloom_protocol::Status;

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Targets only change through direct commands
    #[default]
    None,
    /// Emotion presets are accepted
    Interactive,
    /// Base and arm follow the last received sun position
    SunTracking,
    /// Arm, head and brightness follow the ambient temperature
    EnvironmentReactive,
}

impl Mode {
    /// Process a `status` value and return the next mode
    ///
    /// `open`, `close` and `reset` act on targets and leave the mode as is.
    pub fn transition(self, status: Status) -> Self {
        match status {
            Status::Interactive => Mode::Interactive,
            Status::Sun => Mode::SunTracking,
            Status::Environment => Mode::EnvironmentReactive,
            Status::No => Mode::None,
            Status::Open | Status::Close | Status::Reset => self,
        }
    }

    /// Name echoed in `mode:` diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::None => "none",
            Mode::Interactive => "interactive",
            Mode::SunTracking => "sun",
            Mode::EnvironmentReactive => "environment",
        }
    }

    /// Check if emotion presets are accepted
    pub fn accepts_emotions(&self) -> bool {
        matches!(self, Mode::Interactive)
    }

    /// Check if the sun updater owns the base and arm targets
    pub fn tracks_sun(&self) -> bool {
        matches!(self, Mode::SunTracking)
    }

    /// Check if climate samples drive the targets
    pub fn reacts_to_climate(&self) -> bool {
        matches!(self, Mode::EnvironmentReactive)
    }
}
