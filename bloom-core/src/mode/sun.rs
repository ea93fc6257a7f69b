//! Sun tracking behaviour

use bloom_protocol::SunFix;

use crate::config::SunConfig;
use crate::math::map_range;
use crate::motion::Axes;
use crate::state::ControllerState;

/// Last sun position received from the host
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SunPosition {
    pub azimuth_deg: f32,
    pub altitude_deg: f32,
}

impl From<SunFix> for SunPosition {
    fn from(fix: SunFix) -> Self {
        Self {
            azimuth_deg: fix.azimuth,
            altitude_deg: fix.altitude,
        }
    }
}

/// Arm angle for a sun altitude
///
/// The altitude is clamped to the configured range before mapping, so the
/// arm never leaves `arm_min_deg..=arm_max_deg`.
pub fn arm_for_altitude(altitude_deg: f32, sun: &SunConfig) -> f32 {
    let altitude = altitude_deg
        .max(sun.altitude_min_deg)
        .min(sun.altitude_max_deg);
    map_range(
        altitude,
        sun.altitude_min_deg,
        sun.altitude_max_deg,
        sun.arm_min_deg,
        sun.arm_max_deg,
    )
}

/// Point the base at the sun's azimuth and lift the arm with its altitude
pub fn track(position: &SunPosition, sun: &SunConfig, axes: &mut Axes) {
    axes.base.set_target(position.azimuth_deg);
    axes.arm.set_target(arm_for_altitude(position.altitude_deg, sun));
}

/// Apply the sun position if the update interval has elapsed
///
/// The interval keeps running outside sun tracking. Returns true if the
/// targets were rewritten.
pub fn run(state: &mut ControllerState, sun: &SunConfig, now_ms: u32) -> bool {
    if !state.sun_timer.due(now_ms) || !state.mode.tracks_sun() {
        return false;
    }
    track(&state.sun, sun, &mut state.axes);
    true
}
