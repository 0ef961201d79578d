//! Device → operator messages.
//!
//! Every line the monitor prints is one `Response`. Errors start with
//! `Error:` and advisories with `Warning:` so that a terminal script can
//! grep for them.

use core::fmt;

use crate::command::{ThresholdKind, MIN_POLL_INTERVAL_MS, THRESHOLD_MAX_C, THRESHOLD_MIN_C};
use crate::line::MAX_LINE_LEN;

/// Help text, one entry per line
pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  SET_OS=<0-127>     set over-temperature threshold (C)",
    "  SET_HYST=<0-127>   set hysteresis threshold (C)",
    "  SET_DELAY=<ms>     set poll interval (min 10 ms)",
    "  GET_TEMP           read temperature now",
    "  PAUSE              stop periodic polling",
    "  START              resume periodic polling",
    "  STATUS             show settings and device thresholds",
    "  HELP               show this list",
];

/// One line of operator-facing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response<'a> {
    /// Startup banner
    Ready,
    /// A completed temperature read
    Reading {
        celsius: u8,
        fahrenheit: u16,
        overtemp: bool,
    },
    /// Threshold accepted and written
    ThresholdSet { kind: ThresholdKind, value_c: u8 },
    /// Poll interval accepted as given
    IntervalSet { interval_ms: u32 },
    /// Poll interval raised to the floor
    IntervalClamped { requested_ms: i32, interval_ms: u32 },
    /// Threshold pair leaves T_hyst above T_os
    ThresholdOrder { hyst_c: u8, os_c: u8 },
    /// Periodic polling disabled
    PollingPaused,
    /// Periodic polling enabled
    PollingStarted,
    /// Stored settings
    Status {
        enabled: bool,
        interval_ms: u32,
        os_c: u8,
        hyst_c: u8,
    },
    /// Thresholds read back from the device
    DeviceThresholds { os_c: u8, hyst_c: u8 },
    /// No reading has completed yet
    NoReading,
    /// Threshold argument outside `THRESHOLD_MIN_C..=THRESHOLD_MAX_C`
    ThresholdOutOfRange { kind: ThresholdKind, value: i32 },
    /// Poll interval argument not positive
    IntervalOutOfRange { value: i32 },
    /// Temperature read returned the wrong number of bytes
    ByteMismatch { expected: usize, received: usize },
    /// Pointer could not be returned to the temperature register
    PointerParkFailed,
    /// Any other I2C failure
    BusFault,
    /// Command name not in the table; carries the raw line
    UnknownCommand(&'a str),
    /// Input line exceeded `MAX_LINE_LEN`
    LineTooLong,
    /// Input line was not valid text
    InvalidEncoding,
}

impl Response<'_> {
    /// Whether this line reports a failure
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Response::ThresholdOutOfRange { .. }
                | Response::IntervalOutOfRange { .. }
                | Response::ByteMismatch { .. }
                | Response::PointerParkFailed
                | Response::BusFault
                | Response::UnknownCommand(_)
                | Response::LineTooLong
                | Response::InvalidEncoding
        )
    }

    /// Whether this line is an advisory (applied, but worth a look)
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Response::IntervalClamped { .. } | Response::ThresholdOrder { .. }
        )
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

impl fmt::Display for Response<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Response::Ready => write!(f, "LM75A monitor ready. Type HELP for commands."),
            Response::Reading {
                celsius,
                fahrenheit,
                overtemp,
            } => write!(
                f,
                "Temperature: {} C / {} F | OS alert: {}",
                celsius,
                fahrenheit,
                if overtemp { "ACTIVE" } else { "inactive" }
            ),
            Response::ThresholdSet { kind, value_c } => {
                write!(f, "{} set to {} C", kind.label(), value_c)
            }
            Response::IntervalSet { interval_ms } => {
                write!(f, "Poll interval set to {} ms", interval_ms)
            }
            Response::IntervalClamped {
                requested_ms,
                interval_ms,
            } => write!(
                f,
                "Warning: delay {} ms below minimum, clamped to {} ms",
                requested_ms, interval_ms
            ),
            Response::ThresholdOrder { hyst_c, os_c } => write!(
                f,
                "Warning: T_hyst ({} C) is above T_os ({} C)",
                hyst_c, os_c
            ),
            Response::PollingPaused => write!(f, "Polling paused"),
            Response::PollingStarted => write!(f, "Polling started"),
            Response::Status {
                enabled,
                interval_ms,
                os_c,
                hyst_c,
            } => write!(
                f,
                "Polling: {}, interval {} ms, T_os {} C, T_hyst {} C",
                on_off(enabled),
                interval_ms,
                os_c,
                hyst_c
            ),
            Response::DeviceThresholds { os_c, hyst_c } => {
                write!(f, "Device: T_os {} C, T_hyst {} C", os_c, hyst_c)
            }
            Response::NoReading => write!(f, "No reading yet"),
            Response::ThresholdOutOfRange { kind, value } => write!(
                f,
                "Error: {} value {} out of range ({}-{})",
                kind.command_name(),
                value,
                THRESHOLD_MIN_C,
                THRESHOLD_MAX_C
            ),
            Response::IntervalOutOfRange { value } => write!(
                f,
                "Error: SET_DELAY value {} out of range (must be > 0, min {} ms)",
                value, MIN_POLL_INTERVAL_MS
            ),
            Response::ByteMismatch { expected, received } => write!(
                f,
                "Error: expected {} bytes from sensor, received {}",
                expected, received
            ),
            Response::PointerParkFailed => write!(
                f,
                "Error: I2C transaction failed returning pointer to temperature register"
            ),
            Response::BusFault => write!(f, "Error: I2C bus fault"),
            Response::UnknownCommand(input) => write!(f, "Error: unknown command '{}'", input),
            Response::LineTooLong => {
                write!(f, "Error: input line too long (max {} chars)", MAX_LINE_LEN)
            }
            Response::InvalidEncoding => write!(f, "Error: input line is not valid text"),
        }
    }
}
