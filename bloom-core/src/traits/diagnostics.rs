//! Diagnostic output trait

use bloom_protocol::Diagnostic;

/// Destination for diagnostic reports
///
/// Emitting must never block or fail; sinks that are full drop the report.
pub trait DiagnosticSink {
    /// Emit one diagnostic
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl<const N: usize> DiagnosticSink for heapless::Vec<Diagnostic, N> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let _ = self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_drops_when_full() {
        let mut sink: heapless::Vec<Diagnostic, 2> = heapless::Vec::new();
        sink.emit(Diagnostic::SensorFault);
        sink.emit(Diagnostic::Mode("none"));
        sink.emit(Diagnostic::Brightness(3));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1], Diagnostic::Mode("none"));
    }
}
