//! Millisecond interval gating
//!
//! All periodic work in the loop is "at least N ms since the last fire".
//! Elapsed time uses wrapping subtraction so a `u32` millisecond counter
//! can roll over without stalling anything.

/// A gate that opens at most once per interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Periodic {
    interval_ms: u32,
    last_ms: u32,
}

impl Periodic {
    /// Create a gate whose first opening is one interval after time zero
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: 0,
        }
    }

    /// Configured interval
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Milliseconds since the gate last opened
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.last_ms)
    }

    /// Returns true, and restarts the interval, if it has elapsed
    pub fn due(&mut self, now_ms: u32) -> bool {
        if self.elapsed_ms(now_ms) >= self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let mut gate = Periodic::new(2000);
        assert!(!gate.due(0));
        assert!(!gate.due(1999));
        assert!(gate.due(2000));
        assert!(!gate.due(2001));
        assert!(!gate.due(3999));
        assert!(gate.due(4000));
    }

    #[test]
    fn test_late_fire_restarts_from_fire_time() {
        let mut gate = Periodic::new(100);
        assert!(gate.due(250));
        assert!(!gate.due(349));
        assert!(gate.due(350));
    }

    #[test]
    fn test_wraparound() {
        let mut gate = Periodic::new(100);
        assert!(gate.due(u32::MAX - 50));
        // 50 ms later, counter has not wrapped yet
        assert!(!gate.due(u32::MAX));
        // 100 ms after the last fire, past the wrap
        assert!(gate.due(49));
    }
}
