//! Board-agnostic core logic for the Rangelink firmware
//!
//! This crate contains the application logic that does not depend on a
//! specific chip:
//!
//! - Receiver engine: drain the UART, assemble lines, send reports
//! - Compile-time configuration (baud rate, poll interval)
//!
//! Hardware access goes through the `rangelink-hal` traits, so the
//! receiver runs unchanged against a mock UART on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod receiver;

pub use config::ReceiverConfig;
pub use receiver::{PollError, Receiver, ReceiverError, ReceiverStats};
