//! Diagnostic lines sent back over the serial port
//!
//! These are informational only. The host is not expected to parse them,
//! and nothing is sent in response to a malformed command.

use core::fmt::{self, Write};

use heapless::String;

/// Maximum length of one encoded diagnostic line, including the newline
pub const MAX_DIAGNOSTIC_LEN: usize = 48;

/// One encoded diagnostic line
pub type DiagnosticLine = String<MAX_DIAGNOSTIC_LEN>;

/// Diagnostic reports emitted by the controller
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// Successful climate sample
    Climate {
        temperature_c: f32,
        humidity_pct: f32,
    },
    /// Climate sample failed; previous targets are kept
    SensorFault,
    /// Mode after a recognized command
    Mode(&'static str),
    /// Stored brightness after a manual dimmer change
    Brightness(u8),
    /// Hardware write to an axis failed
    ActuatorFault(&'static str),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Climate {
                temperature_c,
                humidity_pct,
            } => write!(f, "temp:{:.2},humidity:{:.2}", temperature_c, humidity_pct),
            Diagnostic::SensorFault => f.write_str("sensor_fault"),
            Diagnostic::Mode(mode) => write!(f, "mode:{}", mode),
            Diagnostic::Brightness(level) => write!(f, "brightness:{}", level),
            Diagnostic::ActuatorFault(axis) => write!(f, "actuator_fault:{}", axis),
        }
    }
}

impl Diagnostic {
    /// Encode as a newline-terminated line
    pub fn to_line(&self) -> Result<DiagnosticLine, fmt::Error> {
        let mut line = DiagnosticLine::new();
        writeln!(line, "{}", self)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_climate_line() {
        let line = Diagnostic::Climate {
            temperature_c: 22.4,
            humidity_pct: 41.0,
        }
        .to_line()
        .unwrap();
        assert_eq!(line.as_str(), "temp:22.40,humidity:41.00\n");
    }

    #[test]
    fn test_negative_temperature_line() {
        let line = Diagnostic::Climate {
            temperature_c: -3.5,
            humidity_pct: 99.9,
        }
        .to_line()
        .unwrap();
        assert_eq!(line.as_str(), "temp:-3.50,humidity:99.90\n");
    }

    #[test]
    fn test_mode_line() {
        let line = Diagnostic::Mode("environment").to_line().unwrap();
        assert_eq!(line.as_str(), "mode:environment\n");
    }

    #[test]
    fn test_other_lines() {
        assert_eq!(
            Diagnostic::SensorFault.to_line().unwrap().as_str(),
            "sensor_fault\n"
        );
        assert_eq!(
            Diagnostic::Brightness(129).to_line().unwrap().as_str(),
            "brightness:129\n"
        );
        assert_eq!(
            Diagnostic::ActuatorFault("arm").to_line().unwrap().as_str(),
            "actuator_fault:arm\n"
        );
    }

    #[test]
    fn test_oversized_line_is_an_error() {
        let line = Diagnostic::Climate {
            temperature_c: 1.0e30,
            humidity_pct: 1.0e30,
        }
        .to_line();
        assert!(line.is_err());
    }
}
