//! Driver configuration.

use sen66_protocol::{DEFAULT_TOLERANCE_SHIFT, SEN66_I2C_ADDRESS};

/// Settings for a [`crate::Sen66`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverConfig {
    /// 7-bit bus address.
    pub address: u8,
    /// Execution windows are padded by `window >> tolerance_shift`.
    pub tolerance_shift: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            address: SEN66_I2C_ADDRESS,
            tolerance_shift: DEFAULT_TOLERANCE_SHIFT,
        }
    }
}

impl DriverConfig {
    /// Use a different bus address.
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Use a different timing margin.
    pub fn with_tolerance_shift(mut self, tolerance_shift: u32) -> Self {
        self.tolerance_shift = tolerance_shift;
        self
    }
}
