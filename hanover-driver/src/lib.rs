//! Driver for Hanover flip-dot and LED display boards
//!
//! The driver keeps one packed byte per column (bit 0 = top row) and turns
//! that buffer into wire frames via [`hanover-protocol`]. It is generic over
//! any [`embedded_io::Write`] transport, so the same code drives a board
//! over a hardware UART, a USB-serial adapter, or a test double.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (animation, text renderer) │
//! └─────────────────────────────────────────┘
//!                     │ write(bitmap)
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hanover-driver (column buffer + link)  │
//! └─────────────────────────────────────────┘
//!                     │ send() -> frame
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded_io::Write (serial transport)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The column buffer is independent of the link state: it can be edited
//! while disconnected, and a send never clears it.
//!
//! [`hanover-protocol`]: hanover_protocol

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;

pub use display::{Display, SendError};
pub use hanover_protocol::{ConfigError, DisplayConfig};
