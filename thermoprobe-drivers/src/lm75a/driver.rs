//! LM75A register access layer

use thermoprobe_core::config::{SENSOR_ADDRESS, TEMPERATURE_READ_LEN, THRESHOLD_MAX_C, THRESHOLD_MIN_C};
use thermoprobe_core::traits::{AlertSensor, SensorError};
use thermoprobe_hal::{I2cBus, InputPin};
use thermoprobe_protocol::ThresholdKind;

use super::register::{Configuration, Register};

/// LM75A driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lm75aError<E> {
    /// Write transaction failed on the bus
    Bus(E),
    /// Read delivered a byte count other than requested (0 if refused)
    ByteMismatch { received: usize },
    /// Switching the pointer back to Temperature failed
    PointerPark(E),
}

impl<E> From<Lm75aError<E>> for SensorError {
    fn from(e: Lm75aError<E>) -> Self {
        match e {
            Lm75aError::Bus(_) => SensorError::Bus,
            Lm75aError::ByteMismatch { received } => SensorError::ByteMismatch { received },
            Lm75aError::PointerPark(_) => SensorError::PointerPark,
        }
    }
}

/// LM75A on an I2C bus, with its OS output wired to a GPIO input
pub struct Lm75a<I2C, PIN> {
    bus: I2C,
    alert: PIN,
    address: u8,
    configuration: Configuration,
}

impl<I2C: I2cBus, PIN: InputPin> Lm75a<I2C, PIN> {
    /// Create a driver at the default address with the default configuration
    pub fn new(bus: I2C, alert: PIN) -> Self {
        Self::with_config(bus, alert, SENSOR_ADDRESS, Configuration::ALERT_DEFAULT)
    }

    /// Create a driver with an explicit address and configuration
    pub fn with_config(bus: I2C, alert: PIN, address: u8, configuration: Configuration) -> Self {
        Self {
            bus,
            alert,
            address,
            configuration,
        }
    }

    /// Configuration this driver writes and interprets the OS pin by
    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    /// Release the bus and pin
    pub fn release(self) -> (I2C, PIN) {
        (self.bus, self.alert)
    }

    /// Point the device at a register
    pub fn select_register(&mut self, register: Register) -> Result<(), Lm75aError<I2C::Error>> {
        self.bus
            .write(self.address, &[register.pointer()])
            .map_err(Lm75aError::Bus)
    }

    /// Write the configuration register, then park on Temperature
    pub fn write_configuration(&mut self) -> Result<(), Lm75aError<I2C::Error>> {
        let bits = self.configuration.bits();
        self.write_then_park(Register::Configuration, bits)
    }

    /// Write a threshold register, then park on Temperature
    ///
    /// `value_c` is clamped to 0-127 without complaint. Returns the byte
    /// written.
    pub fn write_threshold_register(
        &mut self,
        register: Register,
        value_c: i32,
    ) -> Result<u8, Lm75aError<I2C::Error>> {
        let value = value_c.clamp(THRESHOLD_MIN_C, THRESHOLD_MAX_C) as u8;
        self.write_then_park(register, value)?;
        Ok(value)
    }

    /// Read a threshold register's whole-degree byte, then park on Temperature
    pub fn read_threshold_register(
        &mut self,
        register: Register,
    ) -> Result<u8, Lm75aError<I2C::Error>> {
        let read = self
            .select_register(register)
            .and_then(|_| self.read_two_bytes());
        let parked = self.park();
        let value = read?;
        parked?;
        Ok(value)
    }

    /// Read the temperature register's whole-degree byte
    ///
    /// Relies on the pointer being parked on Temperature. The byte is
    /// returned as unsigned and the fractional bits are dropped. A read
    /// the device NACKs counts as zero bytes delivered.
    pub fn read_temperature_raw(&mut self) -> Result<u8, Lm75aError<I2C::Error>> {
        self.read_two_bytes()
    }

    /// Read the OS output, corrected for the configured polarity
    pub fn overtemp_asserted(&mut self) -> bool {
        let high = self.alert.is_high();
        self.configuration.os_polarity.is_asserted(high)
    }

    fn read_two_bytes(&mut self) -> Result<u8, Lm75aError<I2C::Error>> {
        let mut buf = [0u8; TEMPERATURE_READ_LEN];
        // embedded-hal buses report a short read as an error, never a count
        let received = self.bus.read(self.address, &mut buf).unwrap_or(0);
        if received != TEMPERATURE_READ_LEN {
            return Err(Lm75aError::ByteMismatch { received });
        }
        Ok(buf[0])
    }

    /// One pointer+payload transaction, then an unconditional park
    ///
    /// The payload error wins if both fail.
    fn write_then_park(
        &mut self,
        register: Register,
        payload: u8,
    ) -> Result<(), Lm75aError<I2C::Error>> {
        let written = self
            .bus
            .write(self.address, &[register.pointer(), payload])
            .map_err(Lm75aError::Bus);
        let parked = self.park();
        written?;
        parked
    }

    fn park(&mut self) -> Result<(), Lm75aError<I2C::Error>> {
        self.bus
            .write(self.address, &[Register::Temperature.pointer()])
            .map_err(Lm75aError::PointerPark)
    }
}

impl<I2C: I2cBus, PIN: InputPin> AlertSensor for Lm75a<I2C, PIN> {
    fn configure(&mut self) -> Result<(), SensorError> {
        Ok(self.write_configuration()?)
    }

    fn write_threshold(&mut self, kind: ThresholdKind, value_c: i32) -> Result<u8, SensorError> {
        Ok(self.write_threshold_register(kind.into(), value_c)?)
    }

    fn read_threshold(&mut self, kind: ThresholdKind) -> Result<u8, SensorError> {
        Ok(self.read_threshold_register(kind.into())?)
    }

    fn read_temperature(&mut self) -> Result<u8, SensorError> {
        Ok(self.read_temperature_raw()?)
    }

    fn read_overtemp(&mut self) -> bool {
        self.overtemp_asserted()
    }
}
