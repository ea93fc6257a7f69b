//! Axis drive implementations

pub mod servo;
pub mod stepper;

pub use servo::{ServoAxis, ServoConfig};
pub use stepper::{StepperAxis, StepperConfig};
