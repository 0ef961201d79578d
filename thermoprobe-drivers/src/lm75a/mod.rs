//! LM75A digital temperature sensor
//!
//! The LM75A exposes four registers behind a pointer register:
//!
//! | Pointer | Register      | Access | Notes                               |
//! |---------|---------------|--------|-------------------------------------|
//! | 0x00    | Temperature   | R      | 11-bit, MSB = whole °C              |
//! | 0x01    | Configuration | R/W    | shutdown, OS mode/polarity, queue   |
//! | 0x02    | T_hyst        | R/W    | 9-bit, MSB = whole °C               |
//! | 0x03    | T_os          | R/W    | 9-bit, MSB = whole °C               |
//!
//! Every write transaction starts with the pointer byte; a read returns
//! data from wherever the pointer was last left. The driver always leaves
//! the pointer on Temperature so a plain read is a temperature sample.

pub mod driver;
pub mod register;

pub use driver::{Lm75a, Lm75aError};
pub use register::{Configuration, FaultQueue, OsMode, Register};
