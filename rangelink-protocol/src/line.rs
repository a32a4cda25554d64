//! Line assembly for incoming sensor bytes.
//!
//! Bytes are collected until a CR or LF arrives, then the collected text
//! is converted to a [`DistanceReport`]. A CR/LF (or LF/CR) pair ends one
//! line, not two: after a report the reader ignores further terminators
//! until a content byte arrives.

use heapless::Vec;

use crate::number::IntParser;
use crate::report::DistanceReport;

/// Maximum number of content bytes held for one line
///
/// Readings are a handful of digits. Bytes past this limit are dropped
/// from [`LineReader::pending`] only; the reported value always covers the
/// whole line.
pub const LINE_CAPACITY: usize = 64;

/// Check whether `byte` ends a line
pub const fn is_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Where the reader is within the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReaderState {
    /// Collecting content bytes (also the start state)
    Accumulating,
    /// A line was just reported; terminators are ignored
    JustTerminated,
}

/// Incremental line reader
///
/// Owns the pending line buffer and the "line just completed" flag.
/// Created once before polling starts and reused for every line.
#[derive(Debug, Clone)]
pub struct LineReader {
    buffer: Vec<u8, LINE_CAPACITY>,
    number: IntParser,
    line_complete: bool,
    dropped: u32,
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader {
    /// Create a reader with an empty buffer
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            number: IntParser::new(),
            line_complete: false,
            dropped: 0,
        }
    }

    /// Return to the start state, discarding any partial line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.number.reset();
        self.line_complete = false;
    }

    /// Current state of the line state machine
    pub fn state(&self) -> ReaderState {
        if self.line_complete {
            ReaderState::JustTerminated
        } else {
            ReaderState::Accumulating
        }
    }

    /// Content bytes received since the last report, up to [`LINE_CAPACITY`]
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Total content bytes dropped because the buffer was full
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Feed a single byte to the reader
    ///
    /// Returns `Some(report)` when the byte terminates a non-empty line.
    pub fn feed(&mut self, byte: u8) -> Option<DistanceReport> {
        if is_terminator(byte) {
            if self.buffer.is_empty() || self.line_complete {
                // Empty line, or second half of a CR/LF pair
                return None;
            }

            let report = DistanceReport::new(self.number.value());
            self.buffer.clear();
            self.number.reset();
            self.line_complete = true;
            return Some(report);
        }

        self.number.push(byte);
        if self.buffer.push(byte).is_err() {
            self.dropped = self.dropped.wrapping_add(1);
        }
        self.line_complete = false;
        None
    }

    /// Feed multiple bytes, calling `on_report` for every completed line
    ///
    /// Returns the number of reports produced.
    pub fn feed_bytes<F>(&mut self, bytes: &[u8], mut on_report: F) -> usize
    where
        F: FnMut(DistanceReport),
    {
        let mut count = 0;
        for &byte in bytes {
            if let Some(report) = self.feed(byte) {
                on_report(report);
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collect(reader: &mut LineReader, bytes: &[u8]) -> std::vec::Vec<i32> {
        let mut values = std::vec::Vec::new();
        reader.feed_bytes(bytes, |report| values.push(report.value));
        values
    }

    #[test]
    fn test_single_line() {
        let mut reader = LineReader::new();
        assert_eq!(reader.feed(b'1'), None);
        assert_eq!(reader.feed(b'2'), None);
        assert_eq!(reader.feed(b'3'), None);
        assert_eq!(reader.feed(b'\n'), Some(DistanceReport::new(123)));
        assert!(reader.pending().is_empty());
    }

    #[test]
    fn test_terminators_at_start_are_ignored() {
        let mut reader = LineReader::new();
        assert_eq!(reader.feed(b'\r'), None);
        assert_eq!(reader.feed(b'\n'), None);
        assert_eq!(reader.state(), ReaderState::Accumulating);
    }

    #[test]
    fn test_crlf_reports_once() {
        let mut reader = LineReader::new();
        assert_eq!(collect(&mut reader, b"45\r\n"), [45]);
        assert_eq!(collect(&mut reader, b"67\n"), [67]);
    }

    #[test]
    fn test_lfcr_reports_once() {
        let mut reader = LineReader::new();
        assert_eq!(collect(&mut reader, b"8\n\r9\n\r"), [8, 9]);
    }

    #[test]
    fn test_blank_lines_between_readings() {
        let mut reader = LineReader::new();
        assert_eq!(collect(&mut reader, b"1\r\n\r\n\n\n2\r"), [1, 2]);
    }

    #[test]
    fn test_non_numeric_line_reports_zero() {
        let mut reader = LineReader::new();
        assert_eq!(collect(&mut reader, b"abc\n"), [0]);
    }

    #[test]
    fn test_leading_digits_with_garbage() {
        let mut reader = LineReader::new();
        assert_eq!(collect(&mut reader, b"12a\n"), [12]);
    }

    #[test]
    fn test_state_transitions() {
        let mut reader = LineReader::new();
        assert_eq!(reader.state(), ReaderState::Accumulating);

        reader.feed(b'5');
        assert_eq!(reader.state(), ReaderState::Accumulating);

        reader.feed(b'\r');
        assert_eq!(reader.state(), ReaderState::JustTerminated);

        reader.feed(b'\n');
        assert_eq!(reader.state(), ReaderState::JustTerminated);

        reader.feed(b'6');
        assert_eq!(reader.state(), ReaderState::Accumulating);
    }

    #[test]
    fn test_partial_line_is_kept_across_feeds() {
        let mut reader = LineReader::new();
        assert!(collect(&mut reader, b"12").is_empty());
        assert_eq!(reader.pending(), b"12");
        assert_eq!(collect(&mut reader, b"34\n"), [1234]);
    }

    #[test]
    fn test_overlong_line_drops_tail() {
        let mut reader = LineReader::new();
        let mut long = [b'1'; LINE_CAPACITY + 5];
        long[0] = b'4';
        long[1] = b'2';
        long[2] = b'x';
        reader.feed_bytes(&long, |_| {});
        assert_eq!(reader.pending().len(), LINE_CAPACITY);
        assert_eq!(reader.dropped(), 5);

        assert_eq!(reader.feed(b'\n'), Some(DistanceReport::new(42)));
        assert_eq!(reader.dropped(), 5);
    }

    #[test]
    fn test_leading_zeros_past_capacity() {
        let mut reader = LineReader::new();
        let mut line = std::vec![b'0'; LINE_CAPACITY];
        line.extend_from_slice(b"7\n");
        assert_eq!(collect(&mut reader, &line), [7]);
        assert_eq!(reader.dropped(), 1);
    }

    #[test]
    fn test_leading_spaces_past_capacity() {
        let mut reader = LineReader::new();
        let mut line = std::vec![b' '; LINE_CAPACITY];
        line.extend_from_slice(b"12\n");
        assert_eq!(collect(&mut reader, &line), [12]);
    }

    #[test]
    fn test_value_resets_between_lines() {
        let mut reader = LineReader::new();
        assert_eq!(collect(&mut reader, b"-9\r\nabc\n5\n"), [-9, 0, 5]);
    }

    #[test]
    fn test_reset_discards_partial_line() {
        let mut reader = LineReader::new();
        reader.feed_bytes(b"99", |_| {});
        reader.reset();
        assert!(reader.pending().is_empty());
        assert_eq!(collect(&mut reader, b"7\n"), [7]);
    }

    proptest! {
        #[test]
        fn prop_no_report_without_terminator(
            bytes in proptest::collection::vec(any::<u8>().prop_filter("content", |b| !is_terminator(*b)), 0..128)
        ) {
            let mut reader = LineReader::new();
            prop_assert_eq!(reader.feed_bytes(&bytes, |_| {}), 0);
        }

        #[test]
        fn prop_digit_line_reports_its_value(n in 0u32..1_000_000_000, end in prop_oneof![Just("\n"), Just("\r"), Just("\r\n"), Just("\n\r")]) {
            let mut reader = LineReader::new();
            let line = format!("{}{}", n, end);
            prop_assert_eq!(collect(&mut reader, line.as_bytes()), [n as i32]);
        }

        #[test]
        fn prop_one_report_per_line(values in proptest::collection::vec(any::<u16>(), 1..16)) {
            let mut input = std::string::String::new();
            for v in &values {
                input.push_str(&format!("{}\r\n", v));
            }
            let mut reader = LineReader::new();
            let expected: std::vec::Vec<i32> = values.iter().map(|&v| v as i32).collect();
            prop_assert_eq!(collect(&mut reader, input.as_bytes()), expected);
        }
    }
}
