//! Board wiring
//!
//! | Function        | Pin     |
//! |-----------------|---------|
//! | UART0 TX / RX   | GPIO0/1 |
//! | Dimmer down/up  | GPIO2/3 |
//! | Base STEP / DIR | GPIO10/11 |
//! | WS2812 data     | GPIO15  |
//! | Arm servo       | GPIO16 (PWM0 A) |
//! | Head servo      | GPIO17 (PWM0 B) |
//! | DHT22 data      | GPIO22  |

use bloom_core::dimmer::DimmerButtons;
use bloom_core::traits::{AxisBank, SensorError};
use bloom_drivers::axis::{ServoAxis, StepperAxis};
use bloom_drivers::light::StripLight;
use bloom_drivers::sensor::dht22::frame_from_high_times;
use bloom_drivers::sensor::{Dht22, DhtBus, FRAME_BITS};
use embassy_rp::gpio::{Flex, Input, Output, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_rp::pwm::PwmOutput;
use embassy_time::{block_for, Delay, Duration, Instant};
use smart_leds::RGB8;

/// LEDs on the strip
pub const NUM_LEDS: usize = 12;

/// Strip colour at full brightness
pub const LED_COLOR: RGB8 = RGB8 {
    r: 255,
    g: 170,
    b: 60,
};

/// 28BYJ-48 output shaft, full-step sequence on a step/dir driver
pub const BASE_STEPS_PER_REV: u32 = 2048;

pub type BaseAxis = StepperAxis<Output<'static>, Output<'static>, Delay>;
pub type ServoChannel = ServoAxis<PwmOutput<'static>>;
pub type FlowerActuators = AxisBank<BaseAxis, ServoChannel, ServoChannel>;
pub type FlowerSensor = Dht22<DhtPin>;
pub type FlowerLight = StripLight<NUM_LEDS>;
pub type Leds = PioWs2812<'static, PIO0, 0, NUM_LEDS>;

/// Dimmer buttons, wired to ground with internal pull-ups
pub struct Buttons {
    down: Input<'static>,
    up: Input<'static>,
}

impl Buttons {
    pub fn new(down: Input<'static>, up: Input<'static>) -> Self {
        Self { down, up }
    }

    pub fn read(&self) -> DimmerButtons {
        DimmerButtons::from_active_low(self.down.is_high(), self.up.is_high())
    }
}

/// Wake-up low time for the DHT22 start signal
const START_LOW_US: u64 = 1_100;

/// Longest any single level lasts in a healthy exchange
const LEVEL_TIMEOUT_US: u64 = 120;

/// DHT22 single-wire bus on a bidirectional pin
///
/// A frame takes about 5 ms and is read with busy waits.
pub struct DhtPin {
    pin: Flex<'static>,
}

impl DhtPin {
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self { pin }
    }

    /// Wait until the line reads `high`, returning how long that took
    fn wait_for(&self, high: bool) -> Result<Duration, SensorError> {
        let start = Instant::now();
        let timeout = Duration::from_micros(LEVEL_TIMEOUT_US);
        while self.pin.is_high() != high {
            if start.elapsed() > timeout {
                return Err(SensorError::Timeout);
            }
        }
        Ok(start.elapsed())
    }
}

impl DhtBus for DhtPin {
    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        self.pin.set_low();
        self.pin.set_as_output();
        block_for(Duration::from_micros(START_LOW_US));
        self.pin.set_as_input();

        // Response: low 80 us, high 80 us, then the first bit's low
        self.wait_for(false)?;
        self.wait_for(true)?;
        self.wait_for(false)?;

        let mut high_us = [0u16; FRAME_BITS];
        for width in high_us.iter_mut() {
            self.wait_for(true)?;
            *width = self.wait_for(false)?.as_micros() as u16;
        }

        Ok(frame_from_high_times(&high_us))
    }
}
