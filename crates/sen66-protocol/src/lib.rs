//! Sensirion SEN66 I2C Protocol
//!
//! This crate provides the wire-level pieces needed to talk to a SEN66
//! air-quality module, without performing any I/O itself.
//!
//! # Protocol Overview
//!
//! - **Commands** (host → sensor): a bare 2-byte big-endian opcode.
//! - **Responses** (sensor → host): repeated 3-byte chunks of
//!   `data_hi, data_lo, crc8`, read after the command's execution window.
//!
//! A response is only trusted once every chunk's CRC-8 checks out; the
//! checksum bytes are then stripped and the remaining payload is decoded
//! into a typed register value.
//!
//! # Example
//!
//! ```rust
//! use sen66_protocol::{encode_frame, Command, RegisterValue};
//!
//! let opcode = Command::ReadMeasuredValues.encode();
//! assert_eq!(opcode, [0x03, 0x00]);
//!
//! // What the sensor would answer to `get_data_ready` when data is ready.
//! let raw = encode_frame(&[0x00, 0x01])?;
//! let value = RegisterValue::decode_response(Command::GetDataReady, &raw)?;
//! assert!(matches!(value, Some(RegisterValue::DataReady(ready)) if ready.is_ready()));
//! # Ok::<(), sen66_protocol::ProtocolError>(())
//! ```

pub mod checksum;
mod commands;
mod constants;
mod error;
mod frame;
mod responses;
mod timing;
mod types;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use responses::*;
pub use timing::*;
pub use types::*;

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
