//! Wire protocol for Hanover flip-dot and LED display boards
//!
//! Hanover boards are driven over a serial line with a framed, ASCII-hex
//! encoded protocol. Every data byte is expanded into the two ASCII
//! characters of its uppercase hexadecimal representation; only the framing
//! markers travel as raw bytes.
//!
//! # Frame Format
//!
//! ```text
//! ┌─────┬───────────┬───────────┬──────────────────┬─────┬──────────┐
//! │ STX │ ADDR+0x10 │ SIZE      │ COLUMN DATA      │ ETX │ CHECKSUM │
//! │ 1B  │ 2B ASCII  │ 2B ASCII  │ 2×N bytes ASCII  │ 1B  │ 2B ASCII │
//! └─────┴───────────┴───────────┴──────────────────┴─────┴──────────┘
//! ```
//!
//! The checksum is the two's-complement negation of the mod-256 sum of
//! everything after STX (ASCII header digits, ASCII data digits, and the raw
//! ETX byte), so the receiver can sum the frame body plus checksum and check
//! for zero.
//!
//! Each column byte packs one 8-row line block, bit 0 at the top. The size
//! field is a single byte, which caps a panel at 255 payload bytes.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod codec;
pub mod config;
pub mod frame;

pub use codec::{checksum, decode_hex, encode_hex, encode_hex_byte, CodecError};
pub use config::{ConfigError, DisplayConfig, ADDRESS_OFFSET, BLOCK_ROWS};
pub use frame::{encode_frame, encode_frame_to_vec, FrameError, ETX, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE, STX};
