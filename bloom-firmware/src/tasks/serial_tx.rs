//! Serial transmit task
//!
//! Writes diagnostic lines queued by the controller.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use bloom_core::traits::DiagnosticSink;
use bloom_protocol::Diagnostic;

use crate::channels::DIAG_CHANNEL;

/// Diagnostic sink that queues lines for the TX task
///
/// Never blocks the controller; when the queue is full the line is lost.
pub struct SerialDiagnostics;

impl DiagnosticSink for SerialDiagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        if DIAG_CHANNEL.try_send(diagnostic).is_err() {
            warn!("Diagnostic channel full, dropping {:?}", diagnostic);
        }
    }
}

/// Serial TX task - encodes and writes diagnostics
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: BufferedUartTx) {
    info!("Serial TX task started");

    loop {
        let diagnostic = DIAG_CHANNEL.receive().await;

        let line = match diagnostic.to_line() {
            Ok(line) => line,
            Err(_) => {
                warn!("Diagnostic too long to encode: {:?}", diagnostic);
                continue;
            }
        };

        if let Err(e) = tx.write_all(line.as_bytes()).await {
            warn!("UART write error: {:?}", e);
        }
    }
}
