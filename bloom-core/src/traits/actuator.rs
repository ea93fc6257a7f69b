//! Axis drive traits
//!
//! An axis drive turns one commanded step, given as the angle before and
//! after the step, into hardware motion. Steppers emit pulses for the
//! difference; servos write the new absolute angle.

use crate::motion::AxisId;

/// Errors that can occur while driving an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    /// Pin or PWM write failed
    Io,
}

/// Trait for a single rotational axis
pub trait AxisDrive {
    /// Move the axis from its commanded angle `from_deg` to `to_deg`
    ///
    /// Must not block beyond the time needed to emit the motion command.
    fn move_to(&mut self, from_deg: f32, to_deg: f32) -> Result<(), ActuatorError>;

    /// Make `deg` the axis' commanded angle
    ///
    /// Absolute drives move there; relative drives adopt it as their origin
    /// without emitting motion.
    fn rezero(&mut self, deg: f32) -> Result<(), ActuatorError>;
}

/// Trait for the full set of flower axes
pub trait Actuators {
    /// Move one axis from `from_deg` to `to_deg`
    fn move_to(&mut self, axis: AxisId, from_deg: f32, to_deg: f32) -> Result<(), ActuatorError>;

    /// Make `deg` the commanded angle of one axis
    fn rezero(&mut self, axis: AxisId, deg: f32) -> Result<(), ActuatorError>;
}

/// The three flower axes, each with its own drive type
#[derive(Debug)]
pub struct AxisBank<B, A, H> {
    /// Base rotation (usually a stepper)
    pub base: B,
    /// Arm lift
    pub arm: A,
    /// Head aperture
    pub head: H,
}

impl<B: AxisDrive, A: AxisDrive, H: AxisDrive> AxisBank<B, A, H> {
    fn axis(&mut self, axis: AxisId) -> &mut dyn AxisDrive {
        match axis {
            AxisId::Base => &mut self.base,
            AxisId::Arm => &mut self.arm,
            AxisId::Head => &mut self.head,
        }
    }
}

impl<B: AxisDrive, A: AxisDrive, H: AxisDrive> Actuators for AxisBank<B, A, H> {
    fn move_to(&mut self, axis: AxisId, from_deg: f32, to_deg: f32) -> Result<(), ActuatorError> {
        self.axis(axis).move_to(from_deg, to_deg)
    }

    fn rezero(&mut self, axis: AxisId, deg: f32) -> Result<(), ActuatorError> {
        self.axis(axis).rezero(deg)
    }
}
