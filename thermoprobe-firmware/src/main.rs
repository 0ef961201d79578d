//! Thermoprobe - LM75A Alert Monitor Firmware
//!
//! Polls an LM75A temperature sensor over I2C, reports each reading and
//! the state of its OS alert output on the serial console, and accepts
//! line commands to retune the alert thresholds and poll interval.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, UART0};
use embassy_rp::uart::{self, BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use thermoprobe_core::config::{I2C_FREQUENCY_HZ, SERIAL_BAUDRATE};
use thermoprobe_core::{Monitor, PollingState, SensorConfig, SensorState};
use thermoprobe_drivers::{HalI2c, HalInput, Lm75a};
use thermoprobe_hal::uart::{DataBits, Parity, StopBits};
use thermoprobe_hal::{I2cConfig, UartConfig};

// Board pins and power-on defaults, generated from probe.toml
include!(concat!(env!("OUT_DIR"), "/probe_config.rs"));

mod channels;
mod console;
mod tasks;

use crate::console::UartConsole;

/// The LM75A as wired on this board
pub type ProbeSensor =
    Lm75a<HalI2c<I2c<'static, I2C0, i2c::Blocking>>, HalInput<Input<'static>>>;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Thermoprobe firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let (i2c_sda, i2c_scl, uart_tx, uart_rx, os_pin) = board_pins!(p);

    // Sensor bus (blocking; every transaction is a few bytes)
    let bus_config = I2cConfig {
        frequency: I2C_FREQUENCY_HZ,
    };
    let i2c = I2c::new_blocking(p.I2C0, i2c_scl, i2c_sda, i2c_config(&bus_config));
    info!("I2C initialized at {} Hz", bus_config.frequency);

    // OS is open-drain and active-low; idle high through the pull-up
    let alert = Input::new(os_pin, Pull::Up);

    // Operator console
    let console_config = UartConfig::with_baudrate(SERIAL_BAUDRATE);
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, uart_tx, uart_rx, uart_config(&console_config));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", console_config.baudrate);

    let sensor = Lm75a::new(HalI2c::new(i2c), HalInput::new(alert));
    let state = SensorState::new(
        SensorConfig::new(
            i32::from(DEFAULT_OS_THRESHOLD_C),
            i32::from(DEFAULT_HYST_THRESHOLD_C),
        ),
        PollingState::new(DEFAULT_POLLING_ENABLED, DEFAULT_POLL_INTERVAL_MS),
    );
    let monitor = Monitor::new(sensor, state);

    spawner.spawn(unwrap!(tasks::serial_rx_task(rx)));
    spawner.spawn(unwrap!(tasks::monitor_task(monitor, UartConsole::new(tx))));

    info!("All tasks spawned, firmware running");
}

/// Map the bus settings onto the RP2040 I2C config
fn i2c_config(config: &I2cConfig) -> i2c::Config {
    let mut cfg = i2c::Config::default();
    cfg.frequency = config.frequency;
    cfg
}

/// Map the serial settings onto the RP2040 UART config
fn uart_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}
