//! Display state and frame transmission
//!
//! [`Display`] owns the column buffer and the transport link. `write` and
//! `erase_all` edit the buffer; `send` assembles one frame and pushes it to
//! the transport.

use embedded_io::Write;
use heapless::Vec;

use hanover_protocol::{
    encode_frame, DisplayConfig, FrameError, BLOCK_ROWS, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE,
};

/// Errors that can occur when sending a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendError<E> {
    /// No transport is attached
    NotConnected,
    /// Frame assembly failed
    Frame(FrameError),
    /// The transport rejected the write
    Transport(E),
}

/// Transport link state
enum Link<T> {
    Disconnected,
    Connected(T),
}

/// Driver for one display board
///
/// Holds the packed column buffer (one byte per column, bit 0 = top row)
/// and the serial link. The buffer persists across sends and link changes;
/// callers that want a full-frame redraw must `erase_all` first, since
/// `write` only overwrites the bits its bitmap covers.
pub struct Display<T: Write> {
    config: DisplayConfig,
    columns: Vec<u8, MAX_PAYLOAD_SIZE>,
    link: Link<T>,
}

impl<T: Write> Display<T> {
    /// Create a disconnected display with a zeroed column buffer
    pub fn new(config: DisplayConfig) -> Self {
        let mut columns = Vec::new();
        // Payload size is a u8, so it always fits the buffer capacity
        let _ = columns.resize(usize::from(config.payload_size()), 0);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "display {}x{} at address {}, payload size {}",
            config.columns(),
            config.lines(),
            config.address(),
            config.payload_size()
        );

        Self {
            config,
            columns,
            link: Link::Disconnected,
        }
    }

    /// Attach an opened transport, replacing any existing link
    ///
    /// Opening the port belongs to the caller; a failed open simply leaves
    /// the display disconnected and `send` reports [`SendError::NotConnected`].
    pub fn connect(&mut self, transport: T) {
        self.link = Link::Connected(transport);
    }

    /// Detach and return the transport, leaving the display disconnected
    pub fn disconnect(&mut self) -> Option<T> {
        match core::mem::replace(&mut self.link, Link::Disconnected) {
            Link::Connected(transport) => Some(transport),
            Link::Disconnected => None,
        }
    }

    /// Check if a transport is attached
    pub fn is_connected(&self) -> bool {
        matches!(self.link, Link::Connected(_))
    }

    /// The validated geometry this display was built with
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Read-only view of the packed column bytes
    pub fn column_data(&self) -> &[u8] {
        &self.columns
    }

    /// Clear the whole screen buffer
    pub fn erase_all(&mut self) {
        for byte in &mut self.columns {
            *byte = 0;
        }
    }

    /// Overlay a row-major bitmap onto the column buffer
    ///
    /// Row `r`, column `c` of the bitmap drives bit `r` of column byte `c`.
    /// Only the first 8 rows and the first `columns` entries of each row are
    /// consulted; bits and columns beyond the bitmap's extent keep their
    /// prior value. Pure buffer mutation, permitted while disconnected.
    pub fn write<R: AsRef<[bool]>>(&mut self, bitmap: &[R]) {
        for (row, line) in bitmap.iter().take(BLOCK_ROWS as usize).enumerate() {
            let mask = 1u8 << row;
            for (byte, &lit) in self.columns.iter_mut().zip(line.as_ref()) {
                if lit {
                    *byte |= mask;
                } else {
                    *byte &= !mask;
                }
            }
        }
    }

    /// Assemble the current buffer into a frame and write it out
    ///
    /// The buffer is left untouched, so repeated sends emit identical
    /// frames. Transport failures are surfaced without retry; the link
    /// stays attached and retry policy is the caller's.
    pub fn send(&mut self) -> Result<(), SendError<T::Error>> {
        let transport = match &mut self.link {
            Link::Connected(transport) => transport,
            Link::Disconnected => return Err(SendError::NotConnected),
        };

        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = encode_frame(&self.config, &self.columns, &mut buffer).map_err(SendError::Frame)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("sending {} byte frame", len);

        transport.write_all(&buffer[..len]).map_err(SendError::Transport)?;
        transport.flush().map_err(SendError::Transport)
    }
}
