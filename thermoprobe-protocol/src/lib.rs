//! Thermoprobe Console Protocol
//!
//! This crate defines the line-oriented serial protocol between the
//! operator's terminal and the sensor monitor. Everything is plain ASCII:
//!
//! ```text
//! host → device:  COMMAND[ |=]ARGUMENT\n      e.g. "SET_OS=80", "SET_DELAY 250"
//! device → host:  one human-readable line per response
//! ```
//!
//! Inbound bytes go through [`LineAssembler`], complete lines are turned
//! into a typed [`Command`] by a closed dispatch table, and everything the
//! device says back is a [`Response`] rendered through `Display`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod response;

pub use command::{
    parse_argument, parse_int_lenient, Command, CommandError, ThresholdKind,
    MIN_POLL_INTERVAL_MS, THRESHOLD_MAX_C, THRESHOLD_MIN_C,
};
pub use line::{Line, LineAssembler, LineError, MAX_LINE_LEN};
pub use response::{Response, HELP_LINES};
