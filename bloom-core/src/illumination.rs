//! Illumination state and batched commits
//!
//! Stored brightness survives power-off: switching off only changes what is
//! written, never the stored level. Writes reach the hardware only through
//! [`Illumination::commit`], and only when the effective level changed.

use crate::config::IlluminationConfig;
use crate::traits::LightOutput;

/// Stored brightness and power switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IlluminationState {
    pub brightness: u8,
    pub is_on: bool,
}

impl IlluminationState {
    /// Level that should be on the LEDs right now
    pub fn effective(&self) -> u8 {
        if self.is_on {
            self.brightness
        } else {
            0
        }
    }
}

/// Illumination state plus the last level pushed to hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Illumination {
    state: IlluminationState,
    committed: Option<u8>,
}

impl Illumination {
    pub fn new(config: &IlluminationConfig) -> Self {
        Self {
            state: IlluminationState {
                brightness: config.initial_brightness,
                is_on: config.initially_on,
            },
            committed: None,
        }
    }

    pub fn state(&self) -> IlluminationState {
        self.state
    }

    pub fn brightness(&self) -> u8 {
        self.state.brightness
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on
    }

    pub fn set_brightness(&mut self, level: u8) {
        self.state.brightness = level;
    }

    pub fn set_power(&mut self, on: bool) {
        self.state.is_on = on;
    }

    /// Check if the effective level differs from what was last committed
    pub fn is_dirty(&self) -> bool {
        self.committed != Some(self.state.effective())
    }

    /// Write and commit the effective level if it changed
    ///
    /// Returns true if the hardware was written.
    pub fn commit<L: LightOutput>(&mut self, light: &mut L) -> bool {
        if !self.is_dirty() {
            return false;
        }
        let level = self.state.effective();
        light.set_brightness(level);
        light.commit();
        self.committed = Some(level);
        true
    }
}
