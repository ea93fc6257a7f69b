//! DHT22 (AM2302) temperature/humidity sensor
//!
//! The sensor answers a start pulse with 40 bits: humidity (16), temperature
//! (16) and a checksum byte. Both values are tenths; the top bit of the
//! temperature is a sign flag, not two's complement.
//!
//! Bus timing is board specific and lives behind [`DhtBus`]. This module
//! turns bit timings into a frame and a frame into a reading.

use bloom_core::traits::{ClimateReading, ClimateSensor, SensorError};

/// Data bits per frame
pub const FRAME_BITS: usize = 40;

/// A high pulse longer than this is a `1` bit
pub const ONE_THRESHOLD_US: u16 = 50;

/// Raw access to a DHT22 data line
pub trait DhtBus {
    /// Run one start/response exchange and return the 5 frame bytes
    fn read_frame(&mut self) -> Result<[u8; 5], SensorError>;
}

/// Assemble frame bytes from the high time of each data bit, MSB first
pub fn frame_from_high_times(high_us: &[u16; FRAME_BITS]) -> [u8; 5] {
    let mut frame = [0u8; 5];
    for (i, &width) in high_us.iter().enumerate() {
        if width > ONE_THRESHOLD_US {
            frame[i / 8] |= 0x80 >> (i % 8);
        }
    }
    frame
}

/// Verify the checksum and decode a frame
pub fn decode(frame: [u8; 5]) -> Result<ClimateReading, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    if sum != frame[4] {
        return Err(SensorError::Checksum);
    }

    let humidity = u16::from_be_bytes([frame[0], frame[1]]);
    let magnitude = u16::from_be_bytes([frame[2] & 0x7F, frame[3]]);
    let mut temperature = f32::from(magnitude) / 10.0;
    if frame[2] & 0x80 != 0 {
        temperature = -temperature;
    }

    ClimateReading::new(temperature, f32::from(humidity) / 10.0)
}

/// DHT22 sensor on a board-specific bus
pub struct Dht22<B> {
    bus: B,
}

impl<B: DhtBus> Dht22<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

impl<B: DhtBus> ClimateSensor for Dht22<B> {
    fn read(&mut self) -> Result<ClimateReading, SensorError> {
        decode(self.bus.read_frame()?)
    }
}
