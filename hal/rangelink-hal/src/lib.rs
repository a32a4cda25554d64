//! Rangelink Hardware Abstraction Layer
//!
//! This crate defines the serial abstraction that the receiver engine is
//! written against. Chip-specific crates implement it so the same line
//! handling runs on the RP2040 board and on the host under test.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  rangelink-core (Receiver)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rangelink-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ rangelink-hal-    │
//!           │     rp2040        │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

pub use uart::{UartConfig, UartRx, UartTx};
