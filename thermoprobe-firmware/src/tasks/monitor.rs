//! Monitor task
//!
//! Owns the sensor and its state. Each iteration polls (when enabled),
//! handles at most one queued line, then sleeps for the poll interval.

use defmt::*;
use embassy_time::Timer;

use thermoprobe_core::Monitor;

use crate::channels::LINE_CHANNEL;
use crate::console::UartConsole;
use crate::ProbeSensor;

/// Monitor task - the single owner of all sensor state
#[embassy_executor::task]
pub async fn monitor_task(mut monitor: Monitor<ProbeSensor>, mut console: UartConsole) {
    info!("Monitor task started");

    monitor.start(&mut console);
    info!(
        "Monitor running: T_os={} T_hyst={} interval={}ms",
        monitor.state().config.os_threshold_c,
        monitor.state().config.hyst_threshold_c,
        monitor.interval_ms()
    );

    loop {
        let input = LINE_CHANNEL.try_receive().ok();
        if let Some(Ok(line)) = &input {
            debug!("Command: {}", line.as_str());
        }

        let input = input
            .as_ref()
            .map(|item| item.as_ref().map(|line| line.as_str()).map_err(|e| *e));
        let interval_ms = monitor.step(input, &mut console);

        if let Some(reading) = monitor.state().last_reading {
            trace!("Last reading: {}", reading);
        }

        Timer::after_millis(u64::from(interval_ms)).await;
    }
}
