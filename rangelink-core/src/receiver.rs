//! Receiver engine
//!
//! Drains every byte the UART has buffered, feeds it through a
//! [`LineReader`] and writes a report line back for each completed
//! reading. One [`Receiver`] exists for the life of the firmware; it owns
//! the line state that would otherwise be global.

use embedded_hal::delay::DelayNs;
use rangelink_hal::{UartRx, UartTx};
use rangelink_protocol::{encode_banner, DistanceReport, LineReader, ReaderState};

use crate::config::ReceiverConfig;

/// Errors raised by the serial link
///
/// Line content never produces an error; only the UART can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiverError<R, W> {
    /// Receiving from the sensor failed
    Read(R),
    /// Sending a report or the banner failed
    Write(W),
}

/// Error type of [`Receiver`] operations for a given UART
pub type PollError<U> = ReceiverError<<U as UartRx>::Error, <U as UartTx>::Error>;

/// Running counters, for diagnostics only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReceiverStats {
    /// Bytes read from the UART, terminators included
    pub bytes_received: u32,
    /// Distance reports written
    pub reports: u32,
    /// Content bytes discarded because a line overflowed the buffer
    pub dropped_bytes: u32,
}

/// Line receiver bound to one UART
pub struct Receiver<U> {
    uart: U,
    reader: LineReader,
    config: ReceiverConfig,
    stats: ReceiverStats,
}

impl<U> Receiver<U>
where
    U: UartRx + UartTx,
{
    /// Create a receiver; nothing is sent until [`Receiver::start`]
    pub fn new(uart: U, config: ReceiverConfig) -> Self {
        Self {
            uart,
            reader: LineReader::new(),
            config,
            stats: ReceiverStats::default(),
        }
    }

    /// Send the startup banner
    pub fn start(&mut self) -> Result<(), PollError<U>> {
        let banner = encode_banner();
        self.uart
            .write_blocking(banner.as_bytes())
            .map_err(PollError::<U>::Write)?;
        self.uart.flush().map_err(PollError::<U>::Write)
    }

    /// Process every byte currently available
    ///
    /// Returns the number of reports sent during this pass. On a read
    /// error the pass stops early; any partial line is kept for the next
    /// pass.
    pub fn poll(&mut self) -> Result<usize, PollError<U>> {
        let mut reports = 0;

        while let Some(byte) = self.uart.try_read_byte().map_err(PollError::<U>::Read)? {
            self.stats.bytes_received = self.stats.bytes_received.wrapping_add(1);

            if let Some(report) = self.reader.feed(byte) {
                self.send(report)?;
                reports += 1;
            }
        }

        Ok(reports)
    }

    /// One drain pass followed by the idle wait
    ///
    /// The wait happens even if the pass failed.
    pub fn step<D: DelayNs>(&mut self, delay: &mut D) -> Result<usize, PollError<U>> {
        let result = self.poll();
        delay.delay_ms(self.config.poll_interval_ms);
        result
    }

    fn send(&mut self, report: DistanceReport) -> Result<(), PollError<U>> {
        let line = report.encode();
        self.uart
            .write_blocking(line.as_bytes())
            .map_err(PollError::<U>::Write)?;
        self.stats.reports = self.stats.reports.wrapping_add(1);
        Ok(())
    }
}

impl<U> Receiver<U> {
    /// Active configuration
    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }

    /// Counters since startup
    pub fn stats(&self) -> ReceiverStats {
        ReceiverStats {
            dropped_bytes: self.reader.dropped(),
            ..self.stats
        }
    }

    /// Line state machine position
    pub fn state(&self) -> ReaderState {
        self.reader.state()
    }

    /// Release the UART
    pub fn into_inner(self) -> U {
        self.uart
    }
}
