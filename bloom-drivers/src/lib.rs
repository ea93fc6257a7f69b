//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in bloom-core for the flower's hardware:
//!
//! - Axis drives (step/dir stepper, hobby PWM servo)
//! - Climate sensor (DHT22 frame decoding)
//! - Light (uniform-colour LED strip frame)

#![no_std]
#![deny(unsafe_code)]

pub mod axis;
pub mod light;
pub mod sensor;
