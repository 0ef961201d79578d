//! GPIO pin abstractions
//!
//! Provides the digital input trait used for sensor status lines.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Reads take `&mut self` so that embedded-hal 1.0
/// pins can be wrapped directly.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Logical level of a status line, independent of its electrical polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Asserted when the pin reads high
    ActiveHigh,
    /// Asserted when the pin reads low (open-drain alert outputs)
    ActiveLow,
}

impl Polarity {
    /// Translate a raw pin level into the asserted state
    pub fn is_asserted(self, pin_high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => pin_high,
            Polarity::ActiveLow => !pin_high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPin(bool);

    impl InputPin for FixedPin {
        fn is_high(&mut self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_is_low_default() {
        assert!(FixedPin(false).is_low());
        assert!(!FixedPin(true).is_low());
    }

    #[test]
    fn test_polarity() {
        assert!(Polarity::ActiveLow.is_asserted(false));
        assert!(!Polarity::ActiveLow.is_asserted(true));
        assert!(Polarity::ActiveHigh.is_asserted(true));
        assert!(!Polarity::ActiveHigh.is_asserted(false));
    }
}
