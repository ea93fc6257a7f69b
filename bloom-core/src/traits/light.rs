//! Illumination output trait

/// Trait for the LED strip
///
/// Writes are batched: `set_brightness` only stages a level, and nothing
/// reaches the LEDs until `commit` is called.
pub trait LightOutput {
    /// Stage a brightness level (0-255)
    fn set_brightness(&mut self, level: u8);

    /// Push the staged state out to the hardware
    fn commit(&mut self);
}
