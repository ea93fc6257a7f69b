//! Manual dimmer buttons
//!
//! While a button is held the stored brightness moves by one level per
//! dimmer interval. With both held, `down` applies unless the level is
//! already at zero, in which case `up` does.

use crate::timing::Periodic;

/// Button states for one poll, `true` meaning pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DimmerButtons {
    pub down: bool,
    pub up: bool,
}

impl DimmerButtons {
    /// Build from active-low pin levels (`true` = high = released)
    pub fn from_active_low(down_high: bool, up_high: bool) -> Self {
        Self {
            down: !down_high,
            up: !up_high,
        }
    }
}

/// Rate-limited brightness nudger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimmer {
    timer: Periodic,
}

impl Dimmer {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            timer: Periodic::new(interval_ms),
        }
    }

    /// Returns the new level if a held button changed it
    pub fn poll(&mut self, now_ms: u32, buttons: DimmerButtons, level: u8) -> Option<u8> {
        if !self.timer.due(now_ms) {
            return None;
        }
        if buttons.down && level > u8::MIN {
            Some(level - 1)
        } else if buttons.up && level < u8::MAX {
            Some(level + 1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP: DimmerButtons = DimmerButtons {
        down: false,
        up: true,
    };
    const DOWN: DimmerButtons = DimmerButtons {
        down: true,
        up: false,
    };

    #[test]
    fn test_one_level_per_interval() {
        let mut dimmer = Dimmer::new(10);
        assert_eq!(dimmer.poll(10, UP, 100), Some(101));
        assert_eq!(dimmer.poll(15, UP, 101), None);
        assert_eq!(dimmer.poll(20, UP, 101), Some(102));
        assert_eq!(dimmer.poll(30, DOWN, 102), Some(101));
    }

    #[test]
    fn test_clamps_at_limits() {
        let mut dimmer = Dimmer::new(10);
        assert_eq!(dimmer.poll(10, DOWN, 0), None);
        assert_eq!(dimmer.poll(20, UP, 255), None);
    }

    #[test]
    fn test_both_held_steps_away_from_limits() {
        let both = DimmerButtons {
            down: true,
            up: true,
        };
        let mut dimmer = Dimmer::new(10);
        assert_eq!(dimmer.poll(10, both, 0), Some(1));
        assert_eq!(dimmer.poll(20, both, 255), Some(254));
        assert_eq!(dimmer.poll(30, both, 40), Some(39));
    }

    #[test]
    fn test_released_does_nothing() {
        let mut dimmer = Dimmer::new(10);
        assert_eq!(dimmer.poll(10, DimmerButtons::default(), 40), None);
    }

    #[test]
    fn test_active_low_pins() {
        assert_eq!(DimmerButtons::from_active_low(true, true), DimmerButtons::default());
        assert_eq!(DimmerButtons::from_active_low(false, true), DOWN);
        assert_eq!(DimmerButtons::from_active_low(true, false), UP);
    }
}
