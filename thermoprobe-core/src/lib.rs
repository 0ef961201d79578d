//! Board-agnostic core logic for the LM75A monitor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor and console traits (the seams the drivers plug into)
//! - Sensor state: thresholds, polling settings, last reading
//! - The monitor loop body: periodic polls and command handling
//! - Compile-time constants of the sensor and console links

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod monitor;
pub mod state;
pub mod traits;

pub use monitor::Monitor;
pub use state::{PollingState, SensorConfig, SensorReading, SensorState};
pub use traits::{AlertSensor, Console, SensorError};
