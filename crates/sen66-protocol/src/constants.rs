//! Protocol constants
//!
//! Opcodes, register sizes and execution windows of the SEN66 I2C
//! interface, plus the bit positions inside the device status register.

// ============================================================================
// Bus
// ============================================================================

/// 7-bit I2C address of the SEN66.
pub const SEN66_I2C_ADDRESS: u8 = 0x6B;

/// Size of a data word on the wire.
pub const WORD_SIZE: usize = 2;
/// Size of a response chunk: one data word followed by its CRC-8.
pub const CHUNK_SIZE: usize = 3;

// ============================================================================
// Checksum
// ============================================================================

/// CRC-8 generator polynomial (x^8 + x^5 + x^4 + 1).
pub const CRC8_POLYNOMIAL: u8 = 0x31;
/// CRC-8 initial register value.
pub const CRC8_INIT: u8 = 0xFF;

// ============================================================================
// Timing
// ============================================================================

/// Right-shift used to pad every execution window (adds ~12.5%).
pub const DEFAULT_TOLERANCE_SHIFT: u32 = 3;

// ============================================================================
// Opcodes (host → sensor)
// ============================================================================

/// Read the product name.
pub const CMD_GET_PRODUCT_NAME: u16 = 0xD014;
/// Read the serial number.
pub const CMD_GET_SERIAL_NUMBER: u16 = 0xD033;
/// Read the data-ready flag.
pub const CMD_GET_DATA_READY: u16 = 0x0202;
/// Read the device status register.
pub const CMD_READ_DEVICE_STATUS: u16 = 0xD206;
/// Read the device status register and clear latched flags.
pub const CMD_READ_AND_CLEAR_DEVICE_STATUS: u16 = 0xD210;
/// Read the latest measurement set.
pub const CMD_READ_MEASURED_VALUES: u16 = 0x0300;
/// Enter continuous measurement mode.
pub const CMD_START_CONTINUOUS_MEASUREMENT: u16 = 0x0021;
/// Return to idle mode.
pub const CMD_STOP_MEASUREMENT: u16 = 0x0104;
/// Soft reset.
pub const CMD_DEVICE_RESET: u16 = 0xD304;
/// Run the fan at full speed for ten seconds.
pub const CMD_START_FAN_CLEANING: u16 = 0x5607;
/// Heat the humidity/temperature sensor for one second.
pub const CMD_ACTIVATE_SHT_HEATER: u16 = 0x6765;

// ============================================================================
// Raw response lengths (data words + CRC bytes)
// ============================================================================

/// Product name response.
pub const PRODUCT_NAME_RESPONSE_LENGTH: usize = 48;
/// Serial number response.
pub const SERIAL_NUMBER_RESPONSE_LENGTH: usize = 48;
/// Data-ready response.
pub const DATA_READY_RESPONSE_LENGTH: usize = 3;
/// Device status response.
pub const DEVICE_STATUS_RESPONSE_LENGTH: usize = 6;
/// Measured values response.
pub const MEASURED_VALUES_RESPONSE_LENGTH: usize = 27;

// ============================================================================
// Compacted register sizes (CRC bytes removed)
// ============================================================================

/// Product name register.
pub const PRODUCT_NAME_LENGTH: usize = 32;
/// Serial number register.
pub const SERIAL_NUMBER_LENGTH: usize = 32;
/// Data-ready register.
pub const DATA_READY_LENGTH: usize = 2;
/// Device status register.
pub const DEVICE_STATUS_LENGTH: usize = 4;
/// Measured values register (nine big-endian words).
pub const MEASURED_VALUES_LENGTH: usize = 18;

// ============================================================================
// Execution windows (milliseconds)
// ============================================================================

/// Get product name.
pub const GET_PRODUCT_NAME_EXECUTION_TIME_MS: u32 = 20;
/// Get serial number.
pub const GET_SERIAL_NUMBER_EXECUTION_TIME_MS: u32 = 20;
/// Get data ready.
pub const GET_DATA_READY_EXECUTION_TIME_MS: u32 = 20;
/// Read device status.
pub const READ_DEVICE_STATUS_EXECUTION_TIME_MS: u32 = 20;
/// Read and clear device status.
pub const READ_AND_CLEAR_DEVICE_STATUS_EXECUTION_TIME_MS: u32 = 20;
/// Read measured values.
pub const READ_MEASURED_VALUES_EXECUTION_TIME_MS: u32 = 20;
/// Start continuous measurement.
pub const START_CONTINUOUS_MEASUREMENT_EXECUTION_TIME_MS: u32 = 50;
/// Stop measurement.
pub const STOP_MEASUREMENT_EXECUTION_TIME_MS: u32 = 1000;
/// Device reset.
pub const DEVICE_RESET_EXECUTION_TIME_MS: u32 = 1200;
/// Start fan cleaning.
pub const START_FAN_CLEANING_EXECUTION_TIME_MS: u32 = 10020;
/// Activate SHT heater.
pub const ACTIVATE_SHT_HEATER_EXECUTION_TIME_MS: u32 = 21300;

// ============================================================================
// Device status bit map (byte index, bit index)
// ============================================================================

/// Fan speed out of range.
pub const STATUS_FAN_SPEED_WARNING: (usize, u8) = (1, 5);
/// Particulate matter sensor error.
pub const STATUS_PM_SENSOR_ERROR: (usize, u8) = (2, 1);
/// CO2 sensor error.
// Shares its position with the PM sensor error bit in the register map.
pub const STATUS_CO2_SENSOR_ERROR: (usize, u8) = (2, 1);
/// Gas (VOC/NOx) sensor error.
pub const STATUS_GAS_SENSOR_ERROR: (usize, u8) = (3, 7);
/// Humidity/temperature sensor error.
pub const STATUS_RHT_SENSOR_ERROR: (usize, u8) = (3, 6);
/// Fan error (blocked or broken).
pub const STATUS_FAN_ERROR: (usize, u8) = (3, 4);
