//! Climate sampling
//!
//! Every sample interval the sensor is read once. A good reading is echoed
//! and, in environment-reactive mode, rewrites arm, head and brightness. A
//! failed reading is reported and leaves every target as it was.

use bloom_protocol::Diagnostic;

use crate::config::FlowerConfig;
use crate::mode::environment;
use crate::state::ControllerState;
use crate::traits::{ClimateReading, ClimateSensor, DiagnosticSink, SensorError};

/// Sample the sensor if the interval has elapsed
///
/// Returns `None` when no sample was due.
pub fn run<S, D>(
    state: &mut ControllerState,
    config: &FlowerConfig,
    now_ms: u32,
    sensor: &mut S,
    sink: &mut D,
) -> Option<Result<ClimateReading, SensorError>>
where
    S: ClimateSensor,
    D: DiagnosticSink,
{
    if !state.sample_timer.due(now_ms) {
        return None;
    }

    let result = sensor.read();
    match result {
        Ok(reading) => {
            sink.emit(Diagnostic::Climate {
                temperature_c: reading.temperature_c,
                humidity_pct: reading.humidity_pct,
            });
            state.last_climate = Some(reading);

            if state.mode.reacts_to_climate() {
                let reaction =
                    environment::react(reading.temperature_c, &config.environment, &config.poses);
                state.axes.set_pose(&reaction.pose);
                state.illumination.set_brightness(reaction.brightness);
            }
        }
        Err(_) => sink.emit(Diagnostic::SensorFault),
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;

    struct MockSensor {
        result: Result<ClimateReading, SensorError>,
        reads: usize,
    }

    impl MockSensor {
        fn reading(temperature_c: f32) -> Self {
            Self {
                result: ClimateReading::new(temperature_c, 50.0),
                reads: 0,
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(SensorError::NotANumber),
                reads: 0,
            }
        }
    }

    impl ClimateSensor for MockSensor {
        fn read(&mut self) -> Result<ClimateReading, SensorError> {
            self.reads += 1;
            self.result
        }
    }

    type Sink = heapless::Vec<Diagnostic, 4>;

    #[test]
    fn test_not_due_does_not_read() {
        let config = FlowerConfig::default();
        let mut state = ControllerState::new(&config);
        let mut sensor = MockSensor::reading(22.0);
        let mut sink = Sink::new();

        assert!(run(&mut state, &config, 100, &mut sensor, &mut sink).is_none());
        assert_eq!(sensor.reads, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_reading_is_echoed_without_moving_in_none_mode() {
        let config = FlowerConfig::default();
        let mut state = ControllerState::new(&config);
        let mut sensor = MockSensor::reading(22.0);
        let mut sink = Sink::new();

        let now = config.timing.sample_interval_ms;
        assert!(matches!(
            run(&mut state, &config, now, &mut sensor, &mut sink),
            Some(Ok(_))
        ));
        assert_eq!(
            sink[0],
            Diagnostic::Climate {
                temperature_c: 22.0,
                humidity_pct: 50.0
            }
        );
        assert_eq!(state.axes.head.target_deg(), 0.0);
        assert!(state.last_climate.is_some());
    }

    #[test]
    fn test_environment_mode_opens_at_optimal() {
        let config = FlowerConfig::default();
        let mut state = ControllerState::new(&config);
        state.mode = Mode::EnvironmentReactive;
        let mut sensor = MockSensor::reading(config.environment.optimal_temp_c);
        let mut sink = Sink::new();

        run(
            &mut state,
            &config,
            config.timing.sample_interval_ms,
            &mut sensor,
            &mut sink,
        );
        assert_eq!(state.axes.arm.target_deg(), config.poses.open.arm_deg);
        assert_eq!(state.axes.head.target_deg(), config.poses.open.head_deg);
        assert_eq!(
            state.illumination.brightness(),
            config.environment.max_brightness
        );
    }

    #[test]
    fn test_fault_keeps_targets() {
        let config = FlowerConfig::default();
        let mut state = ControllerState::new(&config);
        state.mode = Mode::EnvironmentReactive;
        state.axes.head.set_target(45.0);
        let mut sensor = MockSensor::failing();
        let mut sink = Sink::new();

        let result = run(
            &mut state,
            &config,
            config.timing.sample_interval_ms,
            &mut sensor,
            &mut sink,
        );
        assert_eq!(result, Some(Err(SensorError::NotANumber)));
        assert_eq!(sink[0], Diagnostic::SensorFault);
        assert_eq!(state.axes.head.target_deg(), 45.0);
        assert!(state.last_climate.is_none());
    }
}
