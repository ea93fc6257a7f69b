//! Single-axis incremental motion

use crate::config::AxisMotion;
use crate::traits::{ActuatorError, AxisDrive};

/// Axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisId {
    /// Base rotation, driven by azimuth in sun tracking
    Base,
    /// Arm lift
    Arm,
    /// Head aperture
    Head,
}

impl AxisId {
    /// All axes in iteration order
    pub const ALL: [AxisId; 3] = [AxisId::Base, AxisId::Arm, AxisId::Head];

    /// Lowercase name used in diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            AxisId::Base => "base",
            AxisId::Arm => "arm",
            AxisId::Head => "head",
        }
    }
}

/// Position and rate-limit state for one axis
///
/// `current_deg` is the commanded position the hardware has been told to
/// reach so far; it only changes by whole steps or by a reset, and a reset
/// is handed to the drive on the next step window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorAxis {
    current_deg: f32,
    target_deg: f32,
    step_deg: f32,
    step_interval_ms: u32,
    last_step_ms: u32,
    rezero_pending: bool,
}

impl ActuatorAxis {
    /// Create an axis at zero with a zero target
    pub const fn new(step_deg: f32, step_interval_ms: u32) -> Self {
        Self {
            current_deg: 0.0,
            target_deg: 0.0,
            step_deg,
            step_interval_ms,
            last_step_ms: 0,
            rezero_pending: false,
        }
    }

    /// Create an axis from its motion config
    pub fn from_config(motion: &AxisMotion) -> Self {
        Self::new(motion.step_deg, motion.step_interval_ms)
    }

    pub fn current_deg(&self) -> f32 {
        self.current_deg
    }

    pub fn target_deg(&self) -> f32 {
        self.target_deg
    }

    /// Set a new target; non-finite values are ignored
    pub fn set_target(&mut self, target_deg: f32) {
        if target_deg.is_finite() {
            self.target_deg = target_deg;
        }
    }

    /// Snap both position and target to `deg`
    ///
    /// The drive is told about the new position by the next `advance`.
    pub fn reset_to(&mut self, deg: f32) {
        self.current_deg = deg;
        self.target_deg = deg;
        self.rezero_pending = true;
    }

    /// Remaining signed distance to the target
    pub fn remaining_deg(&self) -> f32 {
        self.target_deg - self.current_deg
    }

    /// Check if the axis is within one step of its target
    pub fn is_at_target(&self) -> bool {
        libm::fabsf(self.remaining_deg()) < self.step_deg
    }

    /// Advance one step toward the target if the step window has elapsed
    ///
    /// Returns `Ok(true)` when already at the target (no write). A pending
    /// reset is sent to the drive instead of a step. If the drive fails the
    /// position is left unchanged but the window is still consumed, so the
    /// retry happens one interval later.
    pub fn advance<D>(&mut self, now_ms: u32, drive: &mut D) -> Result<bool, ActuatorError>
    where
        D: AxisDrive + ?Sized,
    {
        if !self.rezero_pending && self.is_at_target() {
            return Ok(true);
        }

        if now_ms.wrapping_sub(self.last_step_ms) < self.step_interval_ms {
            return Ok(false);
        }
        self.last_step_ms = now_ms;

        if self.rezero_pending {
            drive.rezero(self.current_deg)?;
            self.rezero_pending = false;
            return Ok(self.is_at_target());
        }

        let next = if self.remaining_deg() > 0.0 {
            self.current_deg + self.step_deg
        } else {
            self.current_deg - self.step_deg
        };
        drive.move_to(self.current_deg, next)?;
        self.current_deg = next;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Drive that records the last move and counts writes
    #[derive(Default)]
    struct MockDrive {
        last_move: Option<(f32, f32)>,
        moves: u32,
        rezeros: u32,
        fail: bool,
    }

    impl AxisDrive for MockDrive {
        fn move_to(&mut self, from_deg: f32, to_deg: f32) -> Result<(), ActuatorError> {
            if self.fail {
                return Err(ActuatorError::Io);
            }
            self.last_move = Some((from_deg, to_deg));
            self.moves += 1;
            Ok(())
        }

        fn rezero(&mut self, _deg: f32) -> Result<(), ActuatorError> {
            if self.fail {
                return Err(ActuatorError::Io);
            }
            self.rezeros += 1;
            Ok(())
        }
    }

    #[test]
    fn test_at_target_does_not_drive() {
        let mut axis = ActuatorAxis::new(1.0, 10);
        axis.set_target(0.5);
        let mut drive = MockDrive::default();
        assert_eq!(axis.advance(100, &mut drive), Ok(true));
        assert_eq!(drive.moves, 0);
    }

    #[test]
    fn test_steps_toward_target() {
        let mut axis = ActuatorAxis::new(2.0, 10);
        axis.set_target(-5.0);
        let mut drive = MockDrive::default();

        assert_eq!(axis.advance(10, &mut drive), Ok(false));
        assert_eq!(drive.last_move, Some((0.0, -2.0)));
        assert_eq!(axis.current_deg(), -2.0);

        axis.advance(20, &mut drive).unwrap();
        assert_eq!(drive.last_move, Some((-2.0, -4.0)));
    }

    #[test]
    fn test_waits_for_interval() {
        let mut axis = ActuatorAxis::new(1.0, 10);
        axis.set_target(10.0);
        let mut drive = MockDrive::default();
        axis.advance(10, &mut drive).unwrap();
        assert_eq!(axis.current_deg(), 1.0);

        // Inside the window: no step
        axis.advance(15, &mut drive).unwrap();
        assert_eq!(axis.current_deg(), 1.0);

        axis.advance(20, &mut drive).unwrap();
        assert_eq!(axis.current_deg(), 2.0);
    }

    #[test]
    fn test_failed_drive_keeps_position_and_consumes_window() {
        let mut axis = ActuatorAxis::new(1.0, 10);
        axis.set_target(3.0);
        let mut drive = MockDrive {
            fail: true,
            ..Default::default()
        };

        assert_eq!(axis.advance(10, &mut drive), Err(ActuatorError::Io));
        assert_eq!(axis.current_deg(), 0.0);

        // Same window: no retry yet
        drive.fail = false;
        axis.advance(15, &mut drive).unwrap();
        assert_eq!(drive.moves, 0);

        axis.advance(20, &mut drive).unwrap();
        assert_eq!(axis.current_deg(), 1.0);
        assert_eq!(drive.last_move, Some((0.0, 1.0)));
    }

    #[test]
    fn test_interval_across_wraparound() {
        let mut axis = ActuatorAxis::new(1.0, 100);
        axis.set_target(10.0);
        let mut drive = MockDrive::default();
        axis.advance(u32::MAX - 50, &mut drive).unwrap();
        assert_eq!(axis.current_deg(), 1.0);

        // 60 ms later, across the wrap
        axis.advance(9, &mut drive).unwrap();
        assert_eq!(axis.current_deg(), 1.0);

        // 100 ms later
        axis.advance(49, &mut drive).unwrap();
        assert_eq!(axis.current_deg(), 2.0);
    }

    #[test]
    fn test_non_finite_target_is_ignored() {
        let mut axis = ActuatorAxis::new(1.0, 10);
        axis.set_target(45.0);
        axis.set_target(f32::NAN);
        axis.set_target(f32::INFINITY);
        assert_eq!(axis.target_deg(), 45.0);
    }

    #[test]
    fn test_reset_is_sent_to_drive_once() {
        let mut axis = ActuatorAxis::new(1.0, 10);
        axis.set_target(80.0);
        let mut drive = MockDrive::default();
        axis.advance(10, &mut drive).unwrap();

        axis.reset_to(0.0);
        assert_eq!(axis.current_deg(), 0.0);
        assert_eq!(axis.target_deg(), 0.0);
        assert!(axis.is_at_target());

        assert_eq!(axis.advance(20, &mut drive), Ok(true));
        assert_eq!(drive.rezeros, 1);
        assert_eq!(axis.advance(30, &mut drive), Ok(true));
        assert_eq!(drive.rezeros, 1);
        assert_eq!(drive.moves, 1);
    }

    #[test]
    fn test_failed_reset_is_retried() {
        let mut axis = ActuatorAxis::new(1.0, 10);
        axis.reset_to(0.0);
        let mut drive = MockDrive {
            fail: true,
            ..Default::default()
        };
        assert_eq!(axis.advance(10, &mut drive), Err(ActuatorError::Io));

        drive.fail = false;
        assert_eq!(axis.advance(20, &mut drive), Ok(true));
        assert_eq!(drive.rezeros, 1);
    }

    proptest! {
        #[test]
        fn converges_without_overshoot(
            target in -360.0f32..360.0,
            step in 0.25f32..5.0,
            interval in 1u32..50,
        ) {
            let mut axis = ActuatorAxis::new(step, interval);
            axis.set_target(target);
            let mut drive = MockDrive::default();

            let mut distance = libm::fabsf(axis.remaining_deg());
            let mut now = 0u32;
            let max_steps = (libm::fabsf(target) / step) as u32 + 2;
            let mut reached = false;
            for _ in 0..max_steps * interval + interval {
                now += 1;
                if axis.advance(now, &mut drive).unwrap() {
                    reached = true;
                    break;
                }
                let next = libm::fabsf(axis.remaining_deg());
                prop_assert!(next <= distance + 1e-3);
                distance = next;
            }
            prop_assert!(reached);
            prop_assert!(libm::fabsf(axis.remaining_deg()) < step);
        }

        #[test]
        fn at_most_one_step_per_window(
            start in any::<u32>(),
            interval in 1u32..200,
            gaps in proptest::collection::vec(0u32..40, 1..200),
        ) {
            let mut axis = ActuatorAxis::new(1.0, interval);
            axis.set_target(10_000.0);
            let mut drive = MockDrive::default();

            let mut now = start;
            let mut last_drive: Option<u32> = None;
            for gap in gaps {
                now = now.wrapping_add(gap);
                let before = drive.moves;
                axis.advance(now, &mut drive).unwrap();
                if drive.moves != before {
                    if let Some(last) = last_drive {
                        prop_assert!(now.wrapping_sub(last) >= interval);
                    }
                    last_drive = Some(now);
                }
            }
        }
    }
}
