//! Thermoprobe Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the sensor drivers are written
//! against. Chip-specific code (or the embedded-hal bridges in
//! `thermoprobe-drivers`) implements them, which keeps the register logic
//! testable on the host with mock buses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  thermoprobe-firmware (RP2040 binary)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermoprobe-drivers (LM75A registers)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermoprobe-hal (this crate - traits)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C master transactions
//! - [`gpio::InputPin`] - Digital input

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::InputPin;
pub use i2c::{I2cBus, I2cConfig};
pub use uart::UartConfig;
