//! Operator console trait

use core::fmt::Write;

use heapless::String;
use thermoprobe_protocol::Response;

use crate::config::OUTPUT_LINE_LEN;

/// Line-oriented output to the operator
///
/// Implementations append their own line terminator.
pub trait Console {
    /// Write one line of text
    fn write_line(&mut self, line: &str);

    /// Render and write one response
    fn respond(&mut self, response: &Response<'_>) {
        self.write_line(&render(response));
    }
}

/// Render a response into one output line
///
/// Text that does not fit in `OUTPUT_LINE_LEN` bytes is dropped.
pub fn render(response: &Response<'_>) -> String<OUTPUT_LINE_LEN> {
    let mut line = String::new();
    let _ = write!(line, "{}", response);
    line
}
