//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in thermoprobe-core:
//!
//! - LM75A temperature sensor with OS alert output (I2C + GPIO)
//! - embedded-hal 1.0 bridges onto the thermoprobe-hal traits

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod lm75a;

pub use bus::{HalI2c, HalInput};
pub use lm75a::{Configuration, FaultQueue, Lm75a, Lm75aError, OsMode, Register};
