//! Climate sensor trait

/// Errors that can occur with climate sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not answer in time
    Timeout,
    /// Frame checksum mismatch
    Checksum,
    /// Reading decoded to NaN
    NotANumber,
    /// Pin or bus error
    Bus,
}

/// One temperature/humidity sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    /// Ambient temperature in degrees Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: f32,
}

impl ClimateReading {
    /// Build a reading, rejecting NaN in either channel
    pub fn new(temperature_c: f32, humidity_pct: f32) -> Result<Self, SensorError> {
        if temperature_c.is_nan() || humidity_pct.is_nan() {
            return Err(SensorError::NotANumber);
        }
        Ok(Self {
            temperature_c,
            humidity_pct,
        })
    }
}

/// Trait for temperature/humidity sensors
///
/// Takes `&mut self` because a read typically drives a bus transaction.
pub trait ClimateSensor {
    /// Read temperature and humidity
    fn read(&mut self) -> Result<ClimateReading, SensorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_a_fault() {
        assert_eq!(
            ClimateReading::new(f32::NAN, 40.0),
            Err(SensorError::NotANumber)
        );
        assert_eq!(
            ClimateReading::new(21.0, f32::NAN),
            Err(SensorError::NotANumber)
        );
        assert!(ClimateReading::new(21.0, 40.0).is_ok());
    }
}
