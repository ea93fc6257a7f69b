//! Bloom - Animatronic Flower Firmware
//!
//! Main firmware binary for RP2040-based flower controllers. The base is a
//! stepper, the arm and head are hobby servos, the petals are lit by a
//! WS2812 strip, and a DHT22 samples the weather. Commands arrive as
//! `name:value` lines on UART0.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use bloom_core::controller::Peripherals;
use bloom_core::traits::AxisBank;
use bloom_core::Controller;
use bloom_drivers::axis::{ServoAxis, ServoConfig, StepperAxis, StepperConfig};
use bloom_drivers::light::StripLight;
use bloom_drivers::sensor::Dht22;

use crate::board::{Buttons, DhtPin, BASE_STEPS_PER_REV, LED_COLOR};
use crate::tasks::SerialDiagnostics;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Host link baud rate
const BAUD_RATE: u32 = 9600;

/// Servo PWM frequency
const SERVO_FREQ_HZ: u32 = 50;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 128]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Bloom firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Setup UART for the host link
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;

    let tx_buf = TX_BUF.init([0u8; 128]);
    let rx_buf = RX_BUF.init([0u8; 128]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", BAUD_RATE);

    // Setup PIO0 for the WS2812 strip
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let leds = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_15, &program);

    info!("WS2812 strip initialized");

    // Setup PWM slice 0 at 50 Hz for the arm (A) and head (B) servos
    let clock_hz = embassy_rp::clocks::clk_sys_freq();
    let divider = ((clock_hz / SERVO_FREQ_HZ) / 65_535 + 1) as u8;
    let top = (clock_hz / (SERVO_FREQ_HZ * divider as u32)) as u16 - 1;
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = top;
    pwm_config.divider = divider.into();

    let pwm = Pwm::new_output_ab(p.PWM_SLICE0, p.PIN_16, p.PIN_17, pwm_config);
    let (arm_pwm, head_pwm) = pwm.split();
    let arm_pwm = unwrap!(arm_pwm);
    let head_pwm = unwrap!(head_pwm);

    let arm = unwrap!(ServoAxis::new(arm_pwm, ServoConfig::default(), 0.0));
    let head = unwrap!(ServoAxis::new(head_pwm, ServoConfig::default(), 0.0));

    info!("Servos initialized (top={}, divider={})", top, divider);

    // Base stepper on a step/dir driver
    let base = StepperAxis::new(
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Delay,
        StepperConfig {
            steps_per_rev: BASE_STEPS_PER_REV,
            ..Default::default()
        },
    );

    info!("Base stepper initialized");

    let sensor = Dht22::new(DhtPin::new(Flex::new(p.PIN_22)));
    let buttons = Buttons::new(
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
    );

    let hw = Peripherals {
        sensor,
        actuators: AxisBank { base, arm, head },
        light: StripLight::new(LED_COLOR),
        diagnostics: SerialDiagnostics,
    };
    let controller = Controller::new(config);

    // Spawn tasks
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner.spawn(tasks::serial_tx_task(tx)).unwrap();
    spawner
        .spawn(tasks::controller_task(controller, hw, leds, buttons))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // PIO common must outlive the strip program
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
