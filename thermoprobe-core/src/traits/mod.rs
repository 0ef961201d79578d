//! Hardware abstraction traits
//!
//! These traits define the interface between the monitor logic and the
//! hardware-specific implementations.

pub mod console;
pub mod sensor;

pub use console::{render, Console};
pub use sensor::{AlertSensor, SensorError};
