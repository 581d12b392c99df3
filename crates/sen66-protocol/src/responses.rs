//! Responses from the SEN66.

use crate::commands::{Command, Register};
use crate::error::ProtocolError;
use crate::frame::decode_frame;
use crate::types::*;

/// A decoded register read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterValue {
    /// Product name string.
    ProductName(DeviceIdentity),
    /// Serial number string.
    SerialNumber(DeviceIdentity),
    /// Data-ready flag.
    DataReady(DataReady),
    /// Device status bit field.
    DeviceStatus(DeviceStatus),
    /// Measurement words.
    MeasuredValues(MeasuredValues),
}

impl RegisterValue {
    /// Decode a compacted payload into the given register.
    pub fn decode(register: Register, payload: &[u8]) -> Result<Self, ProtocolError> {
        match register {
            Register::ProductName => {
                DeviceIdentity::from_payload(payload).map(RegisterValue::ProductName)
            }
            Register::SerialNumber => {
                DeviceIdentity::from_payload(payload).map(RegisterValue::SerialNumber)
            }
            Register::DataReady => DataReady::from_payload(payload).map(RegisterValue::DataReady),
            Register::DeviceStatus => {
                DeviceStatus::from_payload(payload).map(RegisterValue::DeviceStatus)
            }
            Register::MeasuredValues => {
                MeasuredValues::from_payload(payload).map(RegisterValue::MeasuredValues)
            }
        }
    }

    /// Validate a raw frame for `command` and decode it.
    ///
    /// Returns `Ok(None)` for write-only commands, which have no response.
    pub fn decode_response(command: Command, raw: &[u8]) -> Result<Option<Self>, ProtocolError> {
        let descriptor = command.descriptor();
        let Some(register) = descriptor.register else {
            return Ok(None);
        };
        if raw.len() != descriptor.response_length {
            return Err(ProtocolError::PayloadLength {
                expected: descriptor.response_length,
                actual: raw.len(),
            });
        }
        let payload = decode_frame(raw)?;
        Self::decode(register, &payload).map(Some)
    }

    /// Register this value belongs to.
    pub fn register(&self) -> Register {
        match self {
            RegisterValue::ProductName(_) => Register::ProductName,
            RegisterValue::SerialNumber(_) => Register::SerialNumber,
            RegisterValue::DataReady(_) => Register::DataReady,
            RegisterValue::DeviceStatus(_) => Register::DeviceStatus,
            RegisterValue::MeasuredValues(_) => Register::MeasuredValues,
        }
    }
}
