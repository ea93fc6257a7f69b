//! Step/dir stepper axis
//!
//! Converts each commanded move into a burst of step pulses for the angle
//! difference. Fractions of a step are carried to the next call so that many
//! small moves add up to the same travel as one large move. A stepper has no
//! absolute reference, so a rezero adopts the current shaft position as the
//! new angle without pulsing.
//!
//! A burst is short (a one-degree step on a 2048-step motor is about six
//! pulses), so the pulses are timed with a blocking `DelayNs`.

use bloom_core::traits::{ActuatorError, AxisDrive};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

/// Stepper axis configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepperConfig {
    /// Full steps (or microsteps) per output revolution
    pub steps_per_rev: u32,
    /// High and low time of each step pulse
    pub pulse_us: u32,
    /// Swap the meaning of the direction pin
    pub invert_direction: bool,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            steps_per_rev: 2048,
            pulse_us: 2,
            invert_direction: false,
        }
    }
}

/// Stepper axis driven through a step pin and a direction pin
pub struct StepperAxis<S, D, T> {
    step: S,
    dir: D,
    delay: T,
    config: StepperConfig,
    /// Fraction of a step not yet emitted
    remainder: f32,
    /// Net steps from the origin
    position_steps: i32,
}

impl<S, D, T> StepperAxis<S, D, T>
where
    S: OutputPin,
    D: OutputPin,
    T: DelayNs,
{
    pub fn new(step: S, dir: D, delay: T, config: StepperConfig) -> Self {
        Self {
            step,
            dir,
            delay,
            config,
            remainder: 0.0,
            position_steps: 0,
        }
    }

    /// Net steps from the origin
    pub fn position_steps(&self) -> i32 {
        self.position_steps
    }

    fn steps_per_deg(&self) -> f32 {
        self.config.steps_per_rev as f32 / 360.0
    }

    /// Release the pins and delay
    pub fn free(self) -> (S, D, T) {
        (self.step, self.dir, self.delay)
    }

    fn pulse(&mut self) -> Result<(), ActuatorError> {
        self.step.set_high().map_err(|_| ActuatorError::Io)?;
        self.delay.delay_us(self.config.pulse_us);
        self.step.set_low().map_err(|_| ActuatorError::Io)?;
        self.delay.delay_us(self.config.pulse_us);
        Ok(())
    }
}

impl<S, D, T> AxisDrive for StepperAxis<S, D, T>
where
    S: OutputPin,
    D: OutputPin,
    T: DelayNs,
{
    fn move_to(&mut self, from_deg: f32, to_deg: f32) -> Result<(), ActuatorError> {
        let exact = (to_deg - from_deg) * self.steps_per_deg() + self.remainder;
        let whole = libm::truncf(exact);
        let steps = whole as i32;

        if steps != 0 {
            let forward = steps > 0;
            self.dir
                .set_state(PinState::from(forward != self.config.invert_direction))
                .map_err(|_| ActuatorError::Io)?;
            for _ in 0..steps.unsigned_abs() {
                self.pulse()?;
            }
            self.position_steps += steps;
        }

        self.remainder = exact - whole;
        Ok(())
    }

    fn rezero(&mut self, deg: f32) -> Result<(), ActuatorError> {
        self.position_steps = libm::roundf(deg * self.steps_per_deg()) as i32;
        self.remainder = 0.0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    #[derive(Default)]
    struct MockPin {
        high: bool,
        rising_edges: u32,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            if !self.high {
                self.rising_edges += 1;
            }
            self.high = true;
            Ok(())
        }
    }

    #[derive(Debug)]
    struct PinFault;

    impl Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = PinFault;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(PinFault)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(PinFault)
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn stepper(steps_per_rev: u32) -> StepperAxis<MockPin, MockPin, NoDelay> {
        StepperAxis::new(
            MockPin::default(),
            MockPin::default(),
            NoDelay,
            StepperConfig {
                steps_per_rev,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_whole_steps_and_direction() {
        let mut axis = stepper(360);
        axis.move_to(0.0, 5.0).unwrap();
        assert_eq!(axis.position_steps(), 5);
        axis.move_to(5.0, 3.0).unwrap();
        assert_eq!(axis.position_steps(), 3);

        let (step, dir, _) = axis.free();
        assert_eq!(step.rising_edges, 7);
        assert!(!step.high);
        assert!(!dir.high);
    }

    #[test]
    fn test_fractional_steps_accumulate() {
        // Half a step per degree
        let mut axis = stepper(180);
        axis.move_to(0.0, 1.0).unwrap();
        assert_eq!(axis.position_steps(), 0);
        axis.move_to(1.0, 2.0).unwrap();
        assert_eq!(axis.position_steps(), 1);
        for deg in 2..10 {
            axis.move_to(deg as f32, (deg + 1) as f32).unwrap();
        }
        assert_eq!(axis.position_steps(), 5);
    }

    #[test]
    fn test_large_move_matches_step_count() {
        let mut axis = stepper(2048);
        axis.move_to(0.0, 45.0).unwrap();
        assert_eq!(axis.position_steps(), 256);
    }

    #[test]
    fn test_rezero_adopts_origin_without_pulses() {
        let mut axis = stepper(180);
        axis.move_to(0.0, 41.0).unwrap();
        assert_eq!(axis.position_steps(), 20);

        axis.rezero(0.0).unwrap();
        assert_eq!(axis.position_steps(), 0);
        // The carried half step is dropped with the old origin
        axis.move_to(0.0, 1.0).unwrap();
        assert_eq!(axis.position_steps(), 0);

        let (step, _, _) = axis.free();
        assert_eq!(step.rising_edges, 20);
    }

    #[test]
    fn test_inverted_direction() {
        let mut axis = StepperAxis::new(
            MockPin::default(),
            MockPin::default(),
            NoDelay,
            StepperConfig {
                steps_per_rev: 360,
                invert_direction: true,
                ..Default::default()
            },
        );
        axis.move_to(0.0, 1.0).unwrap();
        let (_, dir, _) = axis.free();
        assert!(!dir.high);
    }

    #[test]
    fn test_pin_fault_is_io_error() {
        let mut axis = StepperAxis::new(
            BrokenPin,
            MockPin::default(),
            NoDelay,
            StepperConfig::default(),
        );
        assert_eq!(axis.move_to(0.0, 10.0), Err(ActuatorError::Io));
        assert_eq!(axis.position_steps(), 0);
    }
}
