//! Alert temperature sensor trait

use thermoprobe_protocol::{Response, ThresholdKind};

use crate::config::TEMPERATURE_READ_LEN;

/// Errors that can occur talking to the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// A read returned a byte count other than the one requested
    ByteMismatch { received: usize },
    /// The pointer could not be returned to the temperature register
    ///
    /// Any payload written before the switch-back has reached the device,
    /// but later ambient reads may come from the wrong register.
    PointerPark,
    /// Any other bus failure
    Bus,
}

impl SensorError {
    /// Operator-facing line for this error
    pub fn response(self) -> Response<'static> {
        match self {
            SensorError::ByteMismatch { received } => Response::ByteMismatch {
                expected: TEMPERATURE_READ_LEN,
                received,
            },
            SensorError::PointerPark => Response::PointerParkFailed,
            SensorError::Bus => Response::BusFault,
        }
    }
}

/// A temperature sensor with programmable alert thresholds and an alert pin
///
/// Implementations own the register protocol; after every call the device
/// must be left ready for a plain temperature read.
pub trait AlertSensor {
    /// One-shot startup configuration
    fn configure(&mut self) -> Result<(), SensorError>;

    /// Write a threshold register
    ///
    /// The value is clamped into the register's range silently. Returns
    /// the byte actually written.
    fn write_threshold(&mut self, kind: ThresholdKind, value_c: i32) -> Result<u8, SensorError>;

    /// Read a threshold register back from the device (whole °C)
    fn read_threshold(&mut self, kind: ThresholdKind) -> Result<u8, SensorError>;

    /// Read the current temperature (raw first byte, unsigned)
    fn read_temperature(&mut self) -> Result<u8, SensorError>;

    /// Read the alert output, polarity-corrected (true = over temperature)
    fn read_overtemp(&mut self) -> bool;
}
