//! Incremental motion
//!
//! Each axis walks toward its target one fixed step at a time, at most
//! once per step interval. Nothing here blocks.

pub mod axes;
pub mod axis;

pub use axes::Axes;
pub use axis::{ActuatorAxis, AxisId};
