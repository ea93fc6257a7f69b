//! Bloom Serial Command Protocol
//!
//! This crate defines the text protocol spoken over the flower's serial
//! port. The protocol is deliberately tiny: one command per line, a name and
//! a value separated by the first colon.
//!
//! # Protocol Overview
//!
//! ```text
//! host → flower:   status:environment\n
//!                  sunpos:120.5,45.0\n
//! flower → host:   mode:environment\n
//!                  temp:22.40,humidity:41.00\n
//! ```
//!
//! There is no acknowledgement and no error reply. Lines that do not match a
//! known command are dropped without a response.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod diagnostic;
pub mod line;

pub use command::{
    split_command, Command, CommandName, Emotion, ParseError, Power, RawCommand, Status, SunFix,
};
pub use diagnostic::{Diagnostic, DiagnosticLine, MAX_DIAGNOSTIC_LEN};
pub use line::{LineBuffer, LineError, MAX_LINE_LEN};
