//! Console UART receive task
//!
//! Assembles operator input into lines and queues them for the monitor.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use thermoprobe_protocol::LineAssembler;

use crate::channels::LINE_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Serial RX task - turns console bytes into lines
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut assembler = LineAssembler::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    let item = match assembler.feed(byte) {
                        Ok(Some(line)) => Ok(line),
                        Ok(None) => continue,
                        Err(e) => {
                            warn!("Input line dropped: {:?}", e);
                            Err(e)
                        }
                    };

                    if LINE_CHANNEL.try_send(item).is_err() {
                        warn!("Line channel full, dropping input");
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
