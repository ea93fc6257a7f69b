//! Controller task
//!
//! Runs the polling loop on a fixed tick: gathers the next command line and
//! the button states, polls the controller, then pushes any new LED frame
//! out through PIO.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use bloom_core::controller::{Inputs, Peripherals};
use bloom_core::motion::AxisId;
use bloom_core::Controller;

use crate::board::{Buttons, FlowerActuators, FlowerLight, FlowerSensor, Leds};
use crate::channels::LINE_CHANNEL;
use crate::tasks::SerialDiagnostics;

/// Loop period in milliseconds
pub const LOOP_INTERVAL_MS: u64 = 1;

/// Hardware owned by the controller task
pub type FlowerPeripherals =
    Peripherals<FlowerSensor, FlowerActuators, FlowerLight, SerialDiagnostics>;

/// Main control loop
#[embassy_executor::task]
pub async fn controller_task(
    mut controller: Controller,
    mut hw: FlowerPeripherals,
    mut leds: Leds,
    buttons: Buttons,
) {
    info!("Controller task started");

    let mut ticker = Ticker::every(Duration::from_millis(LOOP_INTERVAL_MS));
    let start = Instant::now();

    loop {
        ticker.next().await;

        // Wraps after ~49 days; every interval in the core is wrap-safe
        let now_ms = start.elapsed().as_millis() as u32;

        let line = LINE_CHANNEL.try_receive().ok();
        let inputs = Inputs {
            line: line.as_deref(),
            buttons: buttons.read(),
        };

        let report = controller.poll(now_ms, inputs, &mut hw);

        match report.sample {
            Some(Ok(reading)) => debug!(
                "Climate: {}°C {}%",
                reading.temperature_c, reading.humidity_pct
            ),
            Some(Err(e)) => warn!("Sensor fault: {:?}", e),
            None => {}
        }

        if let Some(Err(e)) = report.command {
            debug!("Ignored line: {:?}", e);
        } else if report.command.is_some() {
            debug!("Mode: {}", controller.state().mode.as_str());
        }

        for (id, result) in AxisId::ALL.iter().zip(report.motion.iter()) {
            if let Err(e) = result {
                warn!("Actuator fault on {}: {:?}", id.as_str(), e);
            }
        }

        if let Some(level) = report.dimmed {
            trace!("Dimmer: {}", level);
        }

        if let Some(frame) = hw.light.take_frame() {
            trace!("LED commit");
            leds.write(&frame).await;
        }
    }
}
