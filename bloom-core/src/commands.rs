//! Command application
//!
//! Parsed commands mutate the controller state here. Every recognized
//! command is followed by a `mode:` echo, even when its effect is gated off
//! (for example `emo` outside interactive mode).
//!
//! `status:open`, `status:close` and `status:reset` move the head in any
//! mode, including modes whose periodic behaviour rewrites the head target
//! on the next update.

use bloom_protocol::{Command, Diagnostic, Emotion, Power, Status};

use crate::config::FlowerConfig;
use crate::math::percent_to_level;
use crate::state::ControllerState;
use crate::traits::DiagnosticSink;

/// Apply one parsed command and echo the resulting mode
pub fn apply<D: DiagnosticSink>(
    state: &mut ControllerState,
    config: &FlowerConfig,
    command: Command,
    sink: &mut D,
) {
    match command {
        Command::Brightness(percent) => {
            if state.illumination.is_on() {
                state.illumination.set_brightness(percent_to_level(percent));
            }
        }
        Command::Power(power) => state.illumination.set_power(power == Power::On),
        Command::Status(status) => apply_status(state, config, status),
        Command::SunPos(fix) => state.sun = fix.into(),
        Command::Emotion(emotion) => {
            if state.mode.accepts_emotions() {
                let preset = match emotion {
                    Emotion::Open => config.emotions.open,
                    Emotion::Close => config.emotions.close,
                };
                state.axes.head.set_target(preset.head_deg);
                state.illumination.set_brightness(preset.brightness);
            }
        }
    }

    sink.emit(Diagnostic::Mode(state.mode.as_str()));
}

fn apply_status(state: &mut ControllerState, config: &FlowerConfig, status: Status) {
    state.mode = state.mode.transition(status);
    match status {
        Status::No => state.axes.zero_targets(),
        Status::Open => state.axes.head.set_target(config.poses.open.head_deg),
        Status::Close => state.axes.head.set_target(config.poses.closed.head_deg),
        Status::Reset => state.axes.head.reset_to(0.0),
        Status::Interactive | Status::Sun | Status::Environment => {}
    }
}
