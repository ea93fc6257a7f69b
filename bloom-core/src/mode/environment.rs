//! Environment-reactive behaviour
//!
//! `deviation = |temperature - optimal|`. At or beyond the configured range
//! the flower closes and dims; inside it, `openness = 1 - deviation / range`
//! scales arm, head and brightness linearly between the closed and open
//! poses.

use crate::config::{EnvironmentConfig, Pose, PoseConfig};
use crate::math::{lerp, to_level};

/// Targets derived from one temperature sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reaction {
    /// `None` for the closed branch
    pub openness: Option<f32>,
    pub pose: Pose,
    pub brightness: u8,
}

/// Openness in (0, 1], or `None` when the deviation reaches the range
pub fn openness(temperature_c: f32, env: &EnvironmentConfig) -> Option<f32> {
    let deviation = libm::fabsf(temperature_c - env.optimal_temp_c);
    if deviation >= env.temp_range_c {
        None
    } else {
        Some(1.0 - deviation / env.temp_range_c)
    }
}

/// Compute the targets for a temperature sample
pub fn react(temperature_c: f32, env: &EnvironmentConfig, poses: &PoseConfig) -> Reaction {
    match openness(temperature_c, env) {
        None => Reaction {
            openness: None,
            pose: poses.closed,
            brightness: env.dim_brightness,
        },
        Some(t) => Reaction {
            openness: Some(t),
            pose: Pose {
                arm_deg: lerp(poses.closed.arm_deg, poses.open.arm_deg, t),
                head_deg: lerp(poses.closed.head_deg, poses.open.head_deg, t),
            },
            brightness: to_level(lerp(
                f32::from(env.dim_brightness),
                f32::from(env.max_brightness),
                t,
            )),
        },
    }
}
