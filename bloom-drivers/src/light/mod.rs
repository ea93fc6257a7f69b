//! Light output implementations

pub mod strip;

pub use strip::StripLight;
