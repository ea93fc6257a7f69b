//! Hobby servo axis
//!
//! The servo holds an absolute angle. Each move writes the commanded angle,
//! clamped to the mechanical range, as a PWM pulse width, so the servo
//! always follows the controller's position even after a reset.

use bloom_core::traits::{ActuatorError, AxisDrive};
use embedded_hal::pwm::SetDutyCycle;

/// Servo pulse and range configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoConfig {
    /// Pulse width at `min_deg`
    pub min_pulse_us: u16,
    /// Pulse width at `max_deg`
    pub max_pulse_us: u16,
    /// PWM period (20 ms for 50 Hz servos)
    pub period_us: u16,
    pub min_deg: f32,
    pub max_deg: f32,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            min_pulse_us: 500,
            max_pulse_us: 2500,
            period_us: 20_000,
            min_deg: 0.0,
            max_deg: 180.0,
        }
    }
}

impl ServoConfig {
    /// Pulse width for an angle, clamped to the configured range
    pub fn pulse_us(&self, angle_deg: f32) -> u16 {
        let angle = angle_deg.max(self.min_deg).min(self.max_deg);
        let span_deg = self.max_deg - self.min_deg;
        let span_us = f32::from(self.max_pulse_us.saturating_sub(self.min_pulse_us));
        let offset = if span_deg > 0.0 {
            (angle - self.min_deg) * span_us / span_deg
        } else {
            0.0
        };
        self.min_pulse_us + libm::roundf(offset) as u16
    }
}

/// Servo axis on one PWM channel
pub struct ServoAxis<P> {
    pwm: P,
    config: ServoConfig,
    angle_deg: f32,
}

impl<P: SetDutyCycle> ServoAxis<P> {
    /// Create the axis and drive the servo to `initial_deg`
    pub fn new(pwm: P, config: ServoConfig, initial_deg: f32) -> Result<Self, ActuatorError> {
        let mut servo = Self {
            pwm,
            config,
            angle_deg: 0.0,
        };
        servo.write(initial_deg)?;
        Ok(servo)
    }

    /// Last angle written, after clamping
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    pub fn free(self) -> P {
        self.pwm
    }

    fn write(&mut self, angle_deg: f32) -> Result<(), ActuatorError> {
        let angle = angle_deg.max(self.config.min_deg).min(self.config.max_deg);
        let pulse = self.config.pulse_us(angle);
        self.pwm
            .set_duty_cycle_fraction(pulse, self.config.period_us)
            .map_err(|_| ActuatorError::Io)?;
        self.angle_deg = angle;
        Ok(())
    }
}

impl<P: SetDutyCycle> AxisDrive for ServoAxis<P> {
    fn move_to(&mut self, _from_deg: f32, to_deg: f32) -> Result<(), ActuatorError> {
        self.write(to_deg)
    }

    fn rezero(&mut self, deg: f32) -> Result<(), ActuatorError> {
        self.write(deg)
    }
}
