//! Line assembly for the console link.
//!
//! The UART delivers bytes in arbitrary chunks; this module turns them into
//! complete lines. A line ends at `\n` or `\r`, so CRLF terminals produce a
//! single line (the empty segment between `\r` and `\n` is swallowed).

use heapless::{String, Vec};

/// Longest accepted input line, excluding the terminator
pub const MAX_LINE_LEN: usize = 64;

/// One complete input line
pub type Line = String<MAX_LINE_LEN>;

/// Errors produced while assembling lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded `MAX_LINE_LEN`; the whole line was discarded
    Overflow,
    /// Line contained bytes that are not valid UTF-8
    InvalidEncoding,
}

/// Byte-wise line assembler
#[derive(Debug, Clone)]
pub struct LineAssembler {
    buffer: Vec<u8, MAX_LINE_LEN>,
    /// Set once the current line overflowed; cleared at the next terminator
    discarding: bool,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            discarding: false,
        }
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a non-empty
    /// line, `Ok(None)` when more bytes are needed, and an error when the
    /// line that just ended had to be dropped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match byte {
            b'\n' | b'\r' => self.finish(),
            _ => {
                if !self.discarding && self.buffer.push(byte).is_err() {
                    self.discarding = true;
                    self.buffer.clear();
                }
                Ok(None)
            }
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    fn finish(&mut self) -> Result<Option<Line>, LineError> {
        if self.discarding {
            self.reset();
            return Err(LineError::Overflow);
        }

        if self.buffer.is_empty() {
            return Ok(None);
        }

        let bytes = core::mem::take(&mut self.buffer);
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| LineError::InvalidEncoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(assembler: &mut LineAssembler, bytes: &[u8]) -> Option<Line> {
        let mut last = None;
        for &b in bytes {
            if let Some(line) = assembler.feed(b).unwrap() {
                last = Some(line);
            }
        }
        last
    }

    #[test]
    fn test_newline_terminates() {
        let mut asm = LineAssembler::new();
        let line = feed_all(&mut asm, b"SET_OS=80\n").unwrap();
        assert_eq!(line.as_str(), "SET_OS=80");
        assert_eq!(asm.buffer.len(), 0);
    }

    #[test]
    fn test_crlf_yields_single_line() {
        let mut asm = LineAssembler::new();
        let mut lines = 0;
        for &b in b"PAUSE\r\n" {
            if asm.feed(b).unwrap().is_some() {
                lines += 1;
            }
        }
        assert_eq!(lines, 1);
    }

    #[test]
    fn test_partial_line_waits() {
        let mut asm = LineAssembler::new();
        assert_eq!(feed_all(&mut asm, b"GET_"), None);
        assert_eq!(asm.buffer.len(), 4);
        let line = feed_all(&mut asm, b"TEMP\n").unwrap();
        assert_eq!(line.as_str(), "GET_TEMP");
    }

    #[test]
    fn test_blank_lines_ignored() {
        let mut asm = LineAssembler::new();
        assert_eq!(asm.feed(b'\n'), Ok(None));
        assert_eq!(asm.feed(b'\r'), Ok(None));
    }

    #[test]
    fn test_overflow_discards_whole_line() {
        let mut asm = LineAssembler::new();
        for _ in 0..MAX_LINE_LEN + 5 {
            assert_eq!(asm.feed(b'A'), Ok(None));
        }
        assert_eq!(asm.feed(b'\n'), Err(LineError::Overflow));

        // Next line is unaffected
        let line = feed_all(&mut asm, b"HELP\n").unwrap();
        assert_eq!(line.as_str(), "HELP");
    }

    #[test]
    fn test_exact_capacity_accepted() {
        let mut asm = LineAssembler::new();
        for _ in 0..MAX_LINE_LEN {
            asm.feed(b'X').unwrap();
        }
        let line = asm.feed(b'\n').unwrap().unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let mut asm = LineAssembler::new();
        asm.feed(0xFF).unwrap();
        assert_eq!(asm.feed(b'\n'), Err(LineError::InvalidEncoding));
        assert_eq!(asm.buffer.len(), 0);
    }
}
