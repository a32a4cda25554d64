//! Rangelink Line Protocol
//!
//! This crate defines the plain-text protocol spoken between the ranging
//! sensor and the receiver. The sensor sends one decimal reading per line;
//! the receiver answers each complete line with a human-readable report.
//!
//! # Protocol Overview
//!
//! ```text
//! sensor  ──▶  "123\r\n"                    (CR, LF, or CR/LF terminated)
//! board   ──▶  "Distance: 123 cm\r\n"
//! ```
//!
//! There is no framing beyond the line terminator and no checksum. A line
//! whose content does not start with a number reports a distance of zero.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod line;
pub mod number;
pub mod report;

pub use line::{is_terminator, LineReader, ReaderState, LINE_CAPACITY};
pub use number::{parse_int, IntParser};
pub use report::{encode_banner, DistanceReport, BANNER, LINE_ENDING, REPORT_CAPACITY};
