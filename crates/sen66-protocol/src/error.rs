//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when decoding SEN66 responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Raw frame length is not a whole number of 3-byte chunks.
    ///
    /// Every catalog entry has a conforming length, so this indicates a
    /// programming error rather than bus noise.
    #[error("frame length {length} is not a multiple of 3")]
    FrameLength {
        /// Length of the offending frame.
        length: usize,
    },

    /// A chunk's CRC-8 did not match its data word.
    #[error("checksum mismatch in chunk {chunk}: computed 0x{expected:02X}, received 0x{actual:02X}")]
    ChecksumMismatch {
        /// Index of the first failing chunk.
        chunk: usize,
        /// Checksum computed over the data word.
        expected: u8,
        /// Checksum byte found on the wire.
        actual: u8,
    },

    /// A payload to be framed does not consist of whole 2-byte words.
    #[error("payload length {length} is not a whole number of words")]
    OddPayload {
        /// Length of the offending payload.
        length: usize,
    },

    /// A compacted payload has the wrong size for the register it is decoded into.
    #[error("payload length mismatch: expected {expected} bytes, got {actual}")]
    PayloadLength {
        /// Register size.
        expected: usize,
        /// Actual payload size.
        actual: usize,
    },
}
