//! Configuration type definitions
//!
//! These types hold every tunable constant of the flower. The firmware
//! embeds them as postcard-serialized binary data produced at build time
//! from `flower.toml`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors found while validating or loading a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// An axis has a zero, negative or non-finite step size
    InvalidStep,
    /// Environment temperature range is not positive
    InvalidTempRange,
    /// Dim brightness is above the maximum brightness
    InvalidBrightnessRange,
    /// Sun altitude range is empty
    InvalidSunRange,
    /// Binary config could not be decoded
    Decode,
}

/// Periodic task intervals
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TimingConfig {
    /// Climate sensor sampling interval
    pub sample_interval_ms: u32,
    /// Sun tracking target update interval
    pub sun_interval_ms: u32,
    /// Manual dimmer repeat interval
    pub dimmer_interval_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 2000,
            sun_interval_ms: 2000,
            dimmer_interval_ms: 10,
        }
    }
}

/// Incremental motion parameters for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct AxisMotion {
    /// Degrees moved per step
    pub step_deg: f32,
    /// Minimum time between steps
    pub step_interval_ms: u32,
}

impl Default for AxisMotion {
    fn default() -> Self {
        Self {
            step_deg: 1.0,
            step_interval_ms: 15,
        }
    }
}

/// Motion parameters for all three axes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct MotionConfig {
    pub base: AxisMotion,
    pub arm: AxisMotion,
    pub head: AxisMotion,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            base: AxisMotion {
                step_deg: 1.0,
                step_interval_ms: 20,
            },
            arm: AxisMotion::default(),
            head: AxisMotion::default(),
        }
    }
}

/// Arm and head angles for one flower pose
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Pose {
    pub arm_deg: f32,
    pub head_deg: f32,
}

/// Fully open and fully closed poses
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PoseConfig {
    pub open: Pose,
    pub closed: Pose,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            open: Pose {
                arm_deg: 60.0,
                head_deg: 90.0,
            },
            closed: Pose {
                arm_deg: 10.0,
                head_deg: 0.0,
            },
        }
    }
}

/// Environment-reactive profile
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EnvironmentConfig {
    /// Temperature at which the flower is fully open (°C)
    pub optimal_temp_c: f32,
    /// Deviation from optimal at which the flower is fully closed (°C)
    pub temp_range_c: f32,
    /// Brightness used in the closed pose
    pub dim_brightness: u8,
    /// Brightness at full openness
    pub max_brightness: u8,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            optimal_temp_c: 22.0,
            temp_range_c: 8.0,
            dim_brightness: 20,
            max_brightness: 255,
        }
    }
}

/// Sun altitude to arm angle mapping
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SunConfig {
    pub altitude_min_deg: f32,
    pub altitude_max_deg: f32,
    pub arm_min_deg: f32,
    pub arm_max_deg: f32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            altitude_min_deg: 0.0,
            altitude_max_deg: 90.0,
            arm_min_deg: 0.0,
            arm_max_deg: 90.0,
        }
    }
}

/// Head angle and brightness for one interactive expression
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EmotionPreset {
    pub head_deg: f32,
    pub brightness: u8,
}

/// Interactive expression presets
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EmotionConfig {
    /// `emo:1`
    pub open: EmotionPreset,
    /// `emo:2`
    pub close: EmotionPreset,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            open: EmotionPreset {
                head_deg: 90.0,
                brightness: 255,
            },
            close: EmotionPreset {
                head_deg: 0.0,
                brightness: 30,
            },
        }
    }
}

/// Power-on illumination state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct IlluminationConfig {
    pub initial_brightness: u8,
    pub initially_on: bool,
}

impl Default for IlluminationConfig {
    fn default() -> Self {
        Self {
            initial_brightness: 128,
            initially_on: true,
        }
    }
}

/// Complete flower configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FlowerConfig {
    pub timing: TimingConfig,
    pub motion: MotionConfig,
    pub poses: PoseConfig,
    pub environment: EnvironmentConfig,
    pub sun: SunConfig,
    pub emotions: EmotionConfig,
    pub illumination: IlluminationConfig,
}

impl FlowerConfig {
    /// Check the configuration for values the controller cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        for axis in [&self.motion.base, &self.motion.arm, &self.motion.head] {
            if !(axis.step_deg.is_finite() && axis.step_deg > 0.0) {
                return Err(ConfigError::InvalidStep);
            }
        }

        let env = &self.environment;
        if !(env.temp_range_c.is_finite() && env.temp_range_c > 0.0) {
            return Err(ConfigError::InvalidTempRange);
        }
        if env.dim_brightness > env.max_brightness {
            return Err(ConfigError::InvalidBrightnessRange);
        }

        if !(self.sun.altitude_max_deg > self.sun.altitude_min_deg) {
            return Err(ConfigError::InvalidSunRange);
        }

        Ok(())
    }

    /// Decode a postcard-encoded configuration and validate it
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
