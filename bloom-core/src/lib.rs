//! Board-agnostic core logic for the flower controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (axis drives, climate sensor, light, diagnostics)
//! - Incremental motion toward per-axis targets
//! - Mode state machine and the behaviours each mode drives
//! - Illumination state and the manual dimmer
//! - The polling controller that ties one loop iteration together
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod commands;
pub mod config;
pub mod controller;
pub mod dimmer;
pub mod illumination;
pub mod math;
pub mod mode;
pub mod motion;
pub mod sampler;
pub mod state;
pub mod timing;
pub mod traits;

pub use controller::{Controller, Inputs, Iteration, Peripherals};
pub use state::ControllerState;
