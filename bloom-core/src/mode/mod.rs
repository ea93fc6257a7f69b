//! Mode state machine and per-mode behaviour

pub mod environment;
pub mod machine;
pub mod sun;

pub use environment::Reaction;
pub use machine::Mode;
pub use sun::SunPosition;
