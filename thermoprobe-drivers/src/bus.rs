//! embedded-hal 1.0 bridges
//!
//! Chip HALs (embassy-rp included) implement the embedded-hal traits; these
//! wrappers adapt them to the `thermoprobe-hal` traits the drivers use.

use embedded_hal::digital::InputPin as EhInputPin;
use embedded_hal::i2c::I2c;
use thermoprobe_hal::{I2cBus, InputPin};

/// I2C master wrapping any embedded-hal 1.0 bus
pub struct HalI2c<I> {
    inner: I,
}

impl<I> HalI2c<I> {
    /// Wrap an embedded-hal I2C bus
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Return the wrapped bus
    pub fn release(self) -> I {
        self.inner
    }
}

impl<I: I2c> I2cBus for HalI2c<I> {
    type Error = I::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data)
    }

    /// embedded-hal reads either fill the buffer or fail, so a successful
    /// read always reports the full length and a refused one is an `Err`.
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.inner.read(address, buf)?;
        Ok(buf.len())
    }
}

/// Digital input wrapping any embedded-hal 1.0 pin
///
/// A failed read is reported as high, the idle level of a pulled-up
/// open-drain line, so an unreadable active-low alert stays deasserted.
pub struct HalInput<P> {
    inner: P,
}

impl<P> HalInput<P> {
    /// Wrap an embedded-hal input pin
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: EhInputPin> InputPin for HalInput<P> {
    fn is_high(&mut self) -> bool {
        self.inner.is_high().unwrap_or(true)
    }
}
