//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::String;

use bloom_protocol::{Diagnostic, MAX_LINE_LEN};

/// Channel capacity for received command lines
const LINE_CHANNEL_SIZE: usize = 4;

/// Channel capacity for outgoing diagnostics
const DIAG_CHANNEL_SIZE: usize = 16;

/// One framed command line
pub type CommandLine = String<MAX_LINE_LEN>;

/// Command lines framed by the serial RX task
pub static LINE_CHANNEL: Channel<CriticalSectionRawMutex, CommandLine, LINE_CHANNEL_SIZE> =
    Channel::new();

/// Diagnostics waiting to be written by the serial TX task
pub static DIAG_CHANNEL: Channel<CriticalSectionRawMutex, Diagnostic, DIAG_CHANNEL_SIZE> =
    Channel::new();
