//! Operator console on the UART TX half

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io::Write;

use thermoprobe_core::traits::{render, Console};
use thermoprobe_protocol::Response;

/// Line terminator sent after every console line
const LINE_END: &[u8] = b"\r\n";

/// Writes operator lines to the serial console
///
/// Writes block until the TX ring buffer has room.
pub struct UartConsole {
    tx: BufferedUartTx,
}

impl UartConsole {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl Console for UartConsole {
    fn write_line(&mut self, line: &str) {
        let result = self
            .tx
            .write_all(line.as_bytes())
            .and_then(|_| self.tx.write_all(LINE_END));
        if let Err(e) = result {
            warn!("Console write failed: {:?}", e);
        }
    }

    fn respond(&mut self, response: &Response<'_>) {
        if response.is_error() {
            warn!("{}", response);
        } else if response.is_warning() {
            info!("{}", response);
        }
        self.write_line(&render(response));
    }
}
