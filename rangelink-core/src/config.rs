//! Receiver configuration
//!
//! Everything is fixed at build time; there is no runtime config source.

use rangelink_hal::uart::DEFAULT_BAUDRATE;
use rangelink_hal::UartConfig;

pub use rangelink_protocol::LINE_CAPACITY;

/// Sensor link baud rate
pub const BAUD_RATE: u32 = DEFAULT_BAUDRATE;

/// Pause between drain passes (ms)
pub const POLL_INTERVAL_MS: u32 = 100;

/// Receiver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReceiverConfig {
    /// Serial framing for the sensor link
    pub uart: UartConfig,
    /// Idle wait after each drain pass (ms)
    pub poll_interval_ms: u32,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            uart: UartConfig {
                baudrate: BAUD_RATE,
                ..UartConfig::default()
            },
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}
