//! Serial receive task
//!
//! Frames incoming bytes into command lines for the controller.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use bloom_protocol::LineBuffer;

use crate::channels::LINE_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Serial RX task - frames lines and queues them for the controller
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut lines = LineBuffer::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match lines.feed(byte) {
                        Ok(Some(line)) => {
                            debug!("Line: {}", line.as_str());
                            // Drop rather than stall the UART if the controller lags
                            if LINE_CHANNEL.try_send(line).is_err() {
                                warn!("Line channel full, dropping line");
                            }
                        }
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Line framing error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                // Bytes were lost, so the partial line cannot be trusted
                warn!("UART read error: {:?}", e);
                lines.reset();
            }
        }
    }
}
