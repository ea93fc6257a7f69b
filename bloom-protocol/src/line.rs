//! Line framing for the serial command stream.
//!
//! Bytes are accumulated until a `\n` terminator. A single trailing `\r`
//! is stripped so that terminals sending CRLF behave like those sending LF.
//! Lines longer than [`MAX_LINE_LEN`] are discarded up to the next
//! terminator.

use heapless::{String, Vec};

/// Maximum accepted line length in bytes (excluding the terminator)
pub const MAX_LINE_LEN: usize = 64;

/// Line terminator
const LINE_END: u8 = b'\n';

/// Optional byte before the terminator, not counted against the line length
const CARRIAGE_RETURN: u8 = b'\r';

/// Errors that can occur while framing lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded the buffer; bytes are dropped until the next terminator
    Overflow,
    /// Completed line was not valid UTF-8
    InvalidUtf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// Collecting bytes of the current line
    Collecting,
    /// Dropping the remainder of an over-long line
    Discarding,
}

/// Accumulates serial bytes into complete lines
#[derive(Debug, Clone)]
pub struct LineBuffer {
    state: LineState,
    /// One spare byte holds the `\r` of a full-length CRLF line
    buffer: Vec<u8, { MAX_LINE_LEN + 1 }>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create an empty line buffer
    pub fn new() -> Self {
        Self {
            state: LineState::Collecting,
            buffer: Vec::new(),
        }
    }

    /// Drop any partially received line
    pub fn reset(&mut self) {
        self.state = LineState::Collecting;
        self.buffer.clear();
    }

    /// Number of bytes buffered for the current line
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a non-empty line is complete,
    /// `Ok(None)` when more bytes are needed, or `Err` when the current line
    /// has been dropped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String<MAX_LINE_LEN>>, LineError> {
        match self.state {
            LineState::Discarding => {
                if byte == LINE_END {
                    self.state = LineState::Collecting;
                }
                Ok(None)
            }
            LineState::Collecting => {
                if byte == LINE_END {
                    return self.take_line();
                }
                let full = self.buffer.len() >= MAX_LINE_LEN;
                if (full && byte != CARRIAGE_RETURN) || self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.state = LineState::Discarding;
                    return Err(LineError::Overflow);
                }
                Ok(None)
            }
        }
    }

    fn take_line(&mut self) -> Result<Option<String<MAX_LINE_LEN>>, LineError> {
        let mut bytes = &self.buffer[..];
        if let Some((&CARRIAGE_RETURN, rest)) = bytes.split_last() {
            bytes = rest;
        }

        let result = if bytes.is_empty() {
            Ok(None)
        } else {
            core::str::from_utf8(bytes)
                .map_err(|_| LineError::InvalidUtf8)
                .and_then(|text| {
                    let mut line = String::new();
                    line.push_str(text).map_err(|_| LineError::Overflow)?;
                    Ok(Some(line))
                })
        };

        self.buffer.clear();
        result
    }
}
