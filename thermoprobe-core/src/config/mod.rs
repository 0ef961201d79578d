//! Fixed link parameters and power-on defaults
//!
//! The sensor address, bus clock and console baud rate are fixed by the
//! hardware design and are not negotiated at runtime. Board wiring and
//! the default thresholds are chosen per board in the firmware's
//! `probe.toml`; the values here are the fallbacks used by `Default`.

pub use thermoprobe_protocol::{MIN_POLL_INTERVAL_MS, THRESHOLD_MAX_C, THRESHOLD_MIN_C};

/// 7-bit I2C address of the LM75A (A2..A0 strapped low)
pub const SENSOR_ADDRESS: u8 = 0x48;

/// I2C clock (standard mode)
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// Console baud rate
pub const SERIAL_BAUDRATE: u32 = 9600;

/// Configuration register value written at startup
///
/// Normal power, comparator mode, OS active-low, 2-fault queue.
pub const CONFIGURATION_BYTE: u8 = 0x08;

/// Bytes requested for every temperature read
pub const TEMPERATURE_READ_LEN: usize = 2;

/// Capacity of one rendered output line
pub const OUTPUT_LINE_LEN: usize = 96;

/// Default over-temperature threshold (°C, LM75A power-on value)
pub const DEFAULT_OS_THRESHOLD_C: u8 = 80;

/// Default hysteresis threshold (°C, LM75A power-on value)
pub const DEFAULT_HYST_THRESHOLD_C: u8 = 75;

/// Default poll interval (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1000;
