//! Monitor loop logic
//!
//! The firmware's control loop is one cooperative task:
//!
//! ```text
//! loop {
//!     if polling enabled { poll sensor, report }
//!     if a command line is buffered { apply it }
//!     sleep(interval)
//! }
//! ```
//!
//! [`Monitor::step`] is the body of that loop minus the sleep, so the
//! ordering guarantees can be tested without hardware: a command applied
//! in iteration N only takes effect from iteration N+1's poll onward.

pub mod runner;

pub use runner::Monitor;
