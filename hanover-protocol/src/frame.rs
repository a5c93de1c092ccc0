//! Frame assembly
//!
//! A frame carries one full refresh of the panel:
//!
//! - STX (1 byte): raw 0x02 start marker
//! - HEADER (4 bytes): ASCII hex of address + 0x10 and the payload size
//! - DATA (2 bytes per column): ASCII hex of the packed column bytes
//! - ETX (1 byte): raw 0x03 end marker
//! - CHECKSUM (2 bytes): ASCII hex of the body checksum
//!
//! The framing markers are never hex-expanded; everything else is. The
//! checksum covers the frame body after STX, ETX included.

use heapless::Vec;

use crate::codec::{checksum, encode_hex, encode_hex_byte};
use crate::config::DisplayConfig;

/// Start-of-text framing marker
pub const STX: u8 = 0x02;

/// End-of-text framing marker
pub const ETX: u8 = 0x03;

/// Maximum payload size in bytes (one-byte size field)
pub const MAX_PAYLOAD_SIZE: usize = 0xFF;

/// Maximum complete frame size (STX + HEADER + DATA + ETX + CHECKSUM)
pub const MAX_FRAME_SIZE: usize = 1 + 4 + 2 * MAX_PAYLOAD_SIZE + 1 + 2;

/// Errors that can occur during frame assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Column data length does not match the configured payload size
    ColumnCountMismatch,
    /// Buffer too small for the assembled frame
    BufferTooSmall,
}

/// Assemble a complete frame for `columns` into `buffer`
///
/// `columns` must hold exactly the configured number of column bytes.
/// Returns the number of bytes written.
pub fn encode_frame(
    config: &DisplayConfig,
    columns: &[u8],
    buffer: &mut [u8],
) -> Result<usize, FrameError> {
    if columns.len() != usize::from(config.payload_size()) {
        return Err(FrameError::ColumnCountMismatch);
    }

    let frame_len = 1 + 4 + 2 * columns.len() + 1 + 2;
    if buffer.len() < frame_len {
        return Err(FrameError::BufferTooSmall);
    }

    buffer[0] = STX;
    buffer[1..5].copy_from_slice(&config.header());

    let data_end = 5 + 2 * columns.len();
    encode_hex(columns, &mut buffer[5..data_end]).map_err(|_| FrameError::BufferTooSmall)?;
    buffer[data_end] = ETX;

    // Checksum covers everything after STX, ETX included
    let crc = checksum(&buffer[1..=data_end]);
    buffer[data_end + 1..frame_len].copy_from_slice(&encode_hex_byte(crc));

    Ok(frame_len)
}

/// Assemble a frame into a heapless Vec
pub fn encode_frame_to_vec(
    config: &DisplayConfig,
    columns: &[u8],
) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
    let mut buffer = [0u8; MAX_FRAME_SIZE];
    let len = encode_frame(config, columns, &mut buffer)?;
    let mut vec = Vec::new();
    vec.extend_from_slice(&buffer[..len])
        .map_err(|_| FrameError::BufferTooSmall)?;
    Ok(vec)
}
