//! UART driver glue for RP2040
//!
//! Wraps an embassy-rp UART (blocking `embedded-io` interface) so it can be
//! driven through the `rangelink-hal` serial traits.

use embassy_rp::uart::{self, Error as UsartError};
use embedded_io::{Read, ReadReady, Write};
use rangelink_hal::uart::{DataBits, Parity, StopBits};
use rangelink_hal::{UartConfig, UartRx, UartTx};

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Break condition on the line
    Break,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Other error
    Other,
}

impl From<UsartError> for UartBusError {
    fn from(e: UsartError) -> Self {
        match e {
            UsartError::Framing => UartBusError::Framing,
            UsartError::Break => UartBusError::Break,
            UsartError::Overrun => UartBusError::Overrun,
            UsartError::Parity => UartBusError::Parity,
            _ => UartBusError::Other,
        }
    }
}

/// Convert the shared serial settings into an embassy-rp UART config
pub fn to_embassy_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// Serial port backed by an embassy-rp UART
///
/// `T` is typically an embassy-rp `BufferedUart`, whose RX ring buffer
/// makes the "byte available" check in [`UartRx::try_read_byte`] cheap.
pub struct SerialPort<T> {
    inner: T,
}

impl<T> SerialPort<T> {
    /// Wrap a UART
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Release the wrapped UART
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> UartRx for SerialPort<T>
where
    T: Read + ReadReady,
    UartBusError: From<T::Error>,
{
    type Error = UartBusError;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.inner.read_ready()? {
            return Ok(None);
        }

        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }
}

impl<T> UartTx for SerialPort<T>
where
    T: Write,
    UartBusError: From<T::Error>,
{
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(self.inner.flush()?)
    }
}
