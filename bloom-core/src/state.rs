//! Controller state
//!
//! One owned struct holds everything the loop mutates. Each subsystem
//! borrows it mutably for the duration of its step.

use crate::config::FlowerConfig;
use crate::dimmer::Dimmer;
use crate::illumination::Illumination;
use crate::mode::{Mode, SunPosition};
use crate::motion::Axes;
use crate::timing::Periodic;
use crate::traits::ClimateReading;

/// Mutable controller state
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerState {
    pub axes: Axes,
    pub mode: Mode,
    pub illumination: Illumination,
    pub sun: SunPosition,
    /// Most recent good climate sample
    pub last_climate: Option<ClimateReading>,
    pub(crate) sample_timer: Periodic,
    pub(crate) sun_timer: Periodic,
    pub(crate) dimmer: Dimmer,
}

impl ControllerState {
    /// Power-on state: all axes at zero, mode `None`
    pub fn new(config: &FlowerConfig) -> Self {
        Self {
            axes: Axes::from_config(&config.motion),
            mode: Mode::None,
            illumination: Illumination::new(&config.illumination),
            sun: SunPosition::default(),
            last_climate: None,
            sample_timer: Periodic::new(config.timing.sample_interval_ms),
            sun_timer: Periodic::new(config.timing.sun_interval_ms),
            dimmer: Dimmer::new(config.timing.dimmer_interval_ms),
        }
    }
}
