//! Inter-task communication channels
//!
//! The serial RX task assembles lines; the monitor task takes at most one
//! per loop iteration.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use thermoprobe_protocol::{Line, LineError};

/// Completed lines waiting for the monitor
///
/// Commands arriving faster than one per poll interval queue up here;
/// once full, further lines are dropped with a warning.
const LINE_CHANNEL_SIZE: usize = 4;

/// Assembled input lines, or the reason a line was dropped
pub static LINE_CHANNEL: Channel<CriticalSectionRawMutex, Result<Line, LineError>, LINE_CHANNEL_SIZE> =
    Channel::new();
