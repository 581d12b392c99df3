//! Driver error types.

use sen66_protocol::ProtocolError;
use thiserror::Error;

/// Errors returned by a driver operation.
///
/// `E` is the I2C bus error type. A failed operation never modifies the
/// sensor snapshot.
#[derive(Debug, Error)]
pub enum DriverError<E> {
    /// The bus write or read failed. The bus error is passed through unchanged.
    #[error("I2C transfer failed: {0:?}")]
    Transport(E),

    /// The response was received but did not validate.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl<E> DriverError<E> {
    /// Whether the error is a checksum rejection.
    pub fn is_checksum_error(&self) -> bool {
        matches!(
            self,
            DriverError::Protocol(ProtocolError::ChecksumMismatch { .. })
        )
    }

    /// Whether the error came from the bus.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, DriverError::Transport(_))
    }
}

/// Result type for driver operations.
pub type DriverResult<T, E> = Result<T, DriverError<E>>;
