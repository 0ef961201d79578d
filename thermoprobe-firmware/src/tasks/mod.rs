//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod monitor;
pub mod serial_rx;

pub use monitor::monitor_task;
pub use serial_rx::serial_rx_task;
