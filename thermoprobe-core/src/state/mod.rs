//! Sensor state
//!
//! Everything the monitor remembers between loop iterations. There are no
//! statics: the state lives in one struct owned by the monitor.

pub mod reading;
pub mod settings;

pub use reading::{celsius_to_fahrenheit, SensorReading};
pub use settings::{IntervalUpdate, PollingState, SensorConfig, SensorState};
