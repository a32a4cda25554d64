//! Outgoing text: the startup banner and per-line distance reports.

use core::fmt::{self, Write};

use heapless::String;

/// Sent once when the receiver starts
pub const BANNER: &str = "UART Receiver Started";

/// Terminator appended to every outgoing line
pub const LINE_ENDING: &str = "\r\n";

/// Capacity of an encoded output line
///
/// `"Distance: -2147483648 cm\r\n"` is 26 bytes, the longest report.
pub const REPORT_CAPACITY: usize = 32;

/// One parsed distance reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DistanceReport {
    /// Distance in centimetres, as sent by the sensor
    pub value: i32,
}

impl DistanceReport {
    /// Create a report for `value` centimetres
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    /// Render the report as a complete output line
    pub fn encode(&self) -> String<REPORT_CAPACITY> {
        let mut line = String::new();
        // Capacity covers the longest i32, so this cannot overflow
        let _ = write!(line, "{}{}", self, LINE_ENDING);
        line
    }
}

impl fmt::Display for DistanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance: {} cm", self.value)
    }
}

/// Render the startup banner as a complete output line
pub fn encode_banner() -> String<REPORT_CAPACITY> {
    let mut line = String::new();
    // Capacity covers the banner, so this cannot overflow
    let _ = write!(line, "{}{}", BANNER, LINE_ENDING);
    line
}
