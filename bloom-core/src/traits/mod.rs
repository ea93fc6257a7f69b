//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod actuator;
pub mod diagnostics;
pub mod light;
pub mod sensor;

pub use actuator::{ActuatorError, Actuators, AxisBank, AxisDrive};
pub use diagnostics::DiagnosticSink;
pub use light::LightOutput;
pub use sensor::{ClimateReading, ClimateSensor, SensorError};
