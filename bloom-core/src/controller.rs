//! Polling controller
//!
//! One call to [`Controller::poll`] is one loop iteration:
//!
//! 1. climate sample, if due
//! 2. sun target update, if due
//! 3. one motion step per axis, if its window elapsed
//! 4. manual dimmer, if due and the light is on
//! 5. at most one command line
//! 6. illumination commit, if the effective level changed
//!
//! Nothing in an iteration blocks; every piece of periodic work is gated by
//! its own timestamp.

use bloom_protocol::{Command, Diagnostic, ParseError};

use crate::commands;
use crate::config::FlowerConfig;
use crate::dimmer::DimmerButtons;
use crate::mode::sun;
use crate::motion::AxisId;
use crate::sampler;
use crate::state::ControllerState;
use crate::traits::{
    ActuatorError, Actuators, ClimateReading, ClimateSensor, DiagnosticSink, LightOutput,
    SensorError,
};

/// Hardware the controller talks to
pub struct Peripherals<S, A, L, D> {
    pub sensor: S,
    pub actuators: A,
    pub light: L,
    pub diagnostics: D,
}

/// Inputs gathered by the caller for one iteration
#[derive(Debug, Clone, Copy, Default)]
pub struct Inputs<'a> {
    /// A complete command line, without terminator
    pub line: Option<&'a str>,
    /// Current dimmer button states
    pub buttons: DimmerButtons,
}

/// What happened during one iteration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Iteration {
    /// Climate sample result, if one was due
    pub sample: Option<Result<ClimateReading, SensorError>>,
    /// Sun tracking rewrote the base and arm targets
    pub sun_updated: bool,
    /// Per-axis motion result, in `AxisId::ALL` order
    pub motion: [Result<bool, ActuatorError>; 3],
    /// New brightness set by the dimmer
    pub dimmed: Option<u8>,
    /// Command line result, if a line was given
    pub command: Option<Result<Command, ParseError>>,
    /// The light was written and committed
    pub committed: bool,
}

/// The flower controller
pub struct Controller {
    config: FlowerConfig,
    state: ControllerState,
}

impl Controller {
    pub fn new(config: FlowerConfig) -> Self {
        let state = ControllerState::new(&config);
        Self { config, state }
    }

    pub fn config(&self) -> &FlowerConfig {
        &self.config
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ControllerState {
        &mut self.state
    }

    /// Run one loop iteration at `now_ms`
    pub fn poll<S, A, L, D>(
        &mut self,
        now_ms: u32,
        inputs: Inputs<'_>,
        hw: &mut Peripherals<S, A, L, D>,
    ) -> Iteration
    where
        S: ClimateSensor,
        A: Actuators,
        L: LightOutput,
        D: DiagnosticSink,
    {
        let config = &self.config;
        let state = &mut self.state;

        let sample = sampler::run(state, config, now_ms, &mut hw.sensor, &mut hw.diagnostics);
        let sun_updated = sun::run(state, &config.sun, now_ms);

        let motion = state.axes.advance_all(now_ms, &mut hw.actuators);
        for (id, result) in AxisId::ALL.iter().zip(motion.iter()) {
            if result.is_err() {
                hw.diagnostics.emit(Diagnostic::ActuatorFault(id.as_str()));
            }
        }

        let dimmed = if state.illumination.is_on() {
            state
                .dimmer
                .poll(now_ms, inputs.buttons, state.illumination.brightness())
        } else {
            None
        };
        if let Some(level) = dimmed {
            state.illumination.set_brightness(level);
            hw.diagnostics.emit(Diagnostic::Brightness(level));
        }

        let command = inputs.line.map(|line| {
            let parsed = Command::parse(line);
            if let Ok(command) = parsed {
                commands::apply(state, config, command, &mut hw.diagnostics);
            }
            parsed
        });

        let committed = state.illumination.commit(&mut hw.light);

        Iteration {
            sample,
            sun_updated,
            motion,
            dimmed,
            command,
            committed,
        }
    }
}
