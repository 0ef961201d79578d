//! Temperature reading entity

/// Convert whole degrees Celsius to Fahrenheit, rounded to nearest
///
/// Integer-only: `c * 1.8 + 32` is computed as `(c * 18 + 320) / 10`
/// with a +5 rounding bias. `c * 18` never ends in 5, so there are no ties.
pub const fn celsius_to_fahrenheit(celsius: u8) -> u16 {
    (celsius as u16 * 18 + 320 + 5) / 10
}

/// One completed temperature poll
///
/// Produced on every successful read and replaced wholesale by the next
/// one; the poll time is implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// Raw first byte of the temperature register, read as unsigned
    pub celsius: u8,
    /// Derived from `celsius`
    pub fahrenheit: u16,
    /// OS alert asserted (already polarity-corrected)
    pub overtemp: bool,
}

impl SensorReading {
    /// Create a reading from the raw temperature byte and alert state
    pub const fn new(celsius: u8, overtemp: bool) -> Self {
        Self {
            celsius,
            fahrenheit: celsius_to_fahrenheit(celsius),
            overtemp,
        }
    }
}
