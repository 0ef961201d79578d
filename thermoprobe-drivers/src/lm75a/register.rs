//! LM75A register map and configuration encoding

use thermoprobe_core::config::CONFIGURATION_BYTE;
use thermoprobe_hal::gpio::Polarity;
use thermoprobe_protocol::ThresholdKind;

/// Pointer register values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Temperature (read-only)
    Temperature = 0x00,
    /// Configuration
    Configuration = 0x01,
    /// Hysteresis threshold
    Hysteresis = 0x02,
    /// Over-temperature shutdown threshold
    Overtemp = 0x03,
}

impl Register {
    /// Pointer byte selecting this register
    pub const fn pointer(self) -> u8 {
        self as u8
    }
}

impl From<ThresholdKind> for Register {
    fn from(kind: ThresholdKind) -> Self {
        match kind {
            ThresholdKind::Overtemp => Register::Overtemp,
            ThresholdKind::Hysteresis => Register::Hysteresis,
        }
    }
}

/// OS output mode (configuration bit 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OsMode {
    /// OS asserted while temperature exceeds T_os, released below T_hyst
    Comparator,
    /// OS pulses on crossing and is cleared by a register read
    Interrupt,
}

/// Consecutive faults needed to trip OS (configuration bits 3-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultQueue {
    One = 0,
    Two = 1,
    Four = 2,
    Six = 3,
}

/// Configuration register contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// Bit 0: shutdown (low-power, no conversions)
    pub shutdown: bool,
    /// Bit 1: comparator/interrupt
    pub os_mode: OsMode,
    /// Bit 2: OS output polarity (0 = active-low)
    pub os_polarity: Polarity,
    /// Bits 3-4
    pub fault_queue: FaultQueue,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::ALERT_DEFAULT
    }
}

impl Configuration {
    /// Normal power, comparator, active-low OS, 2-fault queue (0x08)
    pub const ALERT_DEFAULT: Self = Self {
        shutdown: false,
        os_mode: OsMode::Comparator,
        os_polarity: Polarity::ActiveLow,
        fault_queue: FaultQueue::Two,
    };

    const SHUTDOWN_BIT: u8 = 1 << 0;
    const OS_MODE_BIT: u8 = 1 << 1;
    const OS_POLARITY_BIT: u8 = 1 << 2;
    const FAULT_QUEUE_SHIFT: u8 = 3;

    /// Encode to the register byte
    pub const fn bits(&self) -> u8 {
        let mut bits = (self.fault_queue as u8) << Self::FAULT_QUEUE_SHIFT;
        if self.shutdown {
            bits |= Self::SHUTDOWN_BIT;
        }
        if matches!(self.os_mode, OsMode::Interrupt) {
            bits |= Self::OS_MODE_BIT;
        }
        if matches!(self.os_polarity, Polarity::ActiveHigh) {
            bits |= Self::OS_POLARITY_BIT;
        }
        bits
    }
}

const _: () = assert!(Configuration::ALERT_DEFAULT.bits() == CONFIGURATION_BYTE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_values() {
        assert_eq!(Register::Temperature.pointer(), 0x00);
        assert_eq!(Register::Configuration.pointer(), 0x01);
        assert_eq!(Register::Hysteresis.pointer(), 0x02);
        assert_eq!(Register::Overtemp.pointer(), 0x03);
    }

    #[test]
    fn test_threshold_registers() {
        assert_eq!(Register::from(ThresholdKind::Overtemp), Register::Overtemp);
        assert_eq!(Register::from(ThresholdKind::Hysteresis), Register::Hysteresis);
    }

    #[test]
    fn test_alert_default_is_0x08() {
        assert_eq!(Configuration::ALERT_DEFAULT.bits(), 0x08);
        assert_eq!(Configuration::ALERT_DEFAULT.bits(), CONFIGURATION_BYTE);
        assert_eq!(Configuration::default(), Configuration::ALERT_DEFAULT);
    }

    #[test]
    fn test_individual_bits() {
        let base = Configuration {
            shutdown: false,
            os_mode: OsMode::Comparator,
            os_polarity: Polarity::ActiveLow,
            fault_queue: FaultQueue::One,
        };
        assert_eq!(base.bits(), 0x00);
        assert_eq!(Configuration { shutdown: true, ..base }.bits(), 0x01);
        assert_eq!(
            Configuration {
                os_mode: OsMode::Interrupt,
                ..base
            }
            .bits(),
            0x02
        );
        assert_eq!(
            Configuration {
                os_polarity: Polarity::ActiveHigh,
                ..base
            }
            .bits(),
            0x04
        );
        assert_eq!(
            Configuration {
                fault_queue: FaultQueue::Six,
                ..base
            }
            .bits(),
            0x18
        );
    }
}
