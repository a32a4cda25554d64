//! RP2040-specific HAL for the Rangelink firmware
//!
//! This crate provides the RP2040 implementation of the shared
//! `rangelink-hal` serial traits:
//!
//! - [`uart::SerialPort`] adapts an embassy-rp UART to
//!   [`rangelink_hal::UartRx`] / [`rangelink_hal::UartTx`]
//! - [`uart::UartBusError`] maps peripheral errors
//! - [`uart::to_embassy_config`] converts the shared serial settings

#![no_std]

pub mod uart;

// Re-export shared traits from rangelink-hal for convenience
pub use rangelink_hal::{UartConfig, UartRx, UartTx};
pub use uart::{SerialPort, UartBusError};
