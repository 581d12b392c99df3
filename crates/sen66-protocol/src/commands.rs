//! Commands that can be sent to the SEN66.
//!
//! Every command is a bare 2-byte big-endian opcode. What differs between
//! commands is captured as data in [`CATALOG`]: how many raw bytes the sensor
//! answers with, how long it needs before the answer is available, and which
//! register the answer decodes into.

use crate::constants::*;
use crate::frame::compacted_length;
use crate::timing::compensate;

/// Registers a read command can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// 32-byte product name string.
    ProductName,
    /// 32-byte serial number string.
    SerialNumber,
    /// 2-byte data-ready flag.
    DataReady,
    /// 4-byte device status bit field.
    DeviceStatus,
    /// Nine big-endian measurement words.
    MeasuredValues,
}

impl Register {
    /// Size of the register once checksum bytes are removed.
    pub const fn length(self) -> usize {
        match self {
            Register::ProductName => PRODUCT_NAME_LENGTH,
            Register::SerialNumber => SERIAL_NUMBER_LENGTH,
            Register::DataReady => DATA_READY_LENGTH,
            Register::DeviceStatus => DEVICE_STATUS_LENGTH,
            Register::MeasuredValues => MEASURED_VALUES_LENGTH,
        }
    }
}

/// Static description of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Stable snake_case name, used in logs and metric labels.
    pub name: &'static str,
    /// Big-endian opcode.
    pub opcode: u16,
    /// Raw response length in bytes; 0 for write-only commands.
    pub response_length: usize,
    /// Datasheet execution window.
    pub execution_time_ms: u32,
    /// Register the response decodes into, if any.
    pub register: Option<Register>,
}

impl CommandDescriptor {
    const fn read(
        name: &'static str,
        opcode: u16,
        response_length: usize,
        execution_time_ms: u32,
        register: Register,
    ) -> Self {
        CommandDescriptor {
            name,
            opcode,
            response_length,
            execution_time_ms,
            register: Some(register),
        }
    }

    const fn write(name: &'static str, opcode: u16, execution_time_ms: u32) -> Self {
        CommandDescriptor {
            name,
            opcode,
            response_length: 0,
            execution_time_ms,
            register: None,
        }
    }

    /// Opcode as transmitted on the bus.
    pub const fn opcode_bytes(&self) -> [u8; 2] {
        self.opcode.to_be_bytes()
    }

    /// Whether the command has no read phase.
    pub const fn is_write_only(&self) -> bool {
        self.response_length == 0
    }

    /// Compacted payload length of the response.
    pub const fn payload_length(&self) -> usize {
        compacted_length(self.response_length)
    }

    /// Execution window padded with [`compensate`].
    pub const fn compensated_wait_ms(&self, tolerance_shift: u32) -> u32 {
        compensate(self.execution_time_ms, tolerance_shift)
    }
}

/// All SEN66 commands supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Read the product name.
    GetProductName,
    /// Read the serial number.
    GetSerialNumber,
    /// Read the data-ready flag.
    GetDataReady,
    /// Read the device status register.
    ReadDeviceStatus,
    /// Read the device status register and clear it.
    ReadAndClearDeviceStatus,
    /// Read the latest measurements.
    ReadMeasuredValues,
    /// Start continuous measurement.
    StartContinuousMeasurement,
    /// Stop measurement and return to idle.
    StopMeasurement,
    /// Soft reset.
    DeviceReset,
    /// Run the fan cleaning cycle.
    StartFanCleaning,
    /// Heat the SHT humidity/temperature sensor.
    ActivateShtHeater,
}

/// Command table, indexed by `Command as usize`.
pub static CATALOG: [CommandDescriptor; 11] = [
    CommandDescriptor::read(
        "get_product_name",
        CMD_GET_PRODUCT_NAME,
        PRODUCT_NAME_RESPONSE_LENGTH,
        GET_PRODUCT_NAME_EXECUTION_TIME_MS,
        Register::ProductName,
    ),
    CommandDescriptor::read(
        "get_serial_number",
        CMD_GET_SERIAL_NUMBER,
        SERIAL_NUMBER_RESPONSE_LENGTH,
        GET_SERIAL_NUMBER_EXECUTION_TIME_MS,
        Register::SerialNumber,
    ),
    CommandDescriptor::read(
        "get_data_ready",
        CMD_GET_DATA_READY,
        DATA_READY_RESPONSE_LENGTH,
        GET_DATA_READY_EXECUTION_TIME_MS,
        Register::DataReady,
    ),
    CommandDescriptor::read(
        "read_device_status",
        CMD_READ_DEVICE_STATUS,
        DEVICE_STATUS_RESPONSE_LENGTH,
        READ_DEVICE_STATUS_EXECUTION_TIME_MS,
        Register::DeviceStatus,
    ),
    CommandDescriptor::read(
        "read_and_clear_device_status",
        CMD_READ_AND_CLEAR_DEVICE_STATUS,
        DEVICE_STATUS_RESPONSE_LENGTH,
        READ_AND_CLEAR_DEVICE_STATUS_EXECUTION_TIME_MS,
        Register::DeviceStatus,
    ),
    CommandDescriptor::read(
        "read_measured_values",
        CMD_READ_MEASURED_VALUES,
        MEASURED_VALUES_RESPONSE_LENGTH,
        READ_MEASURED_VALUES_EXECUTION_TIME_MS,
        Register::MeasuredValues,
    ),
    CommandDescriptor::write(
        "start_continuous_measurement",
        CMD_START_CONTINUOUS_MEASUREMENT,
        START_CONTINUOUS_MEASUREMENT_EXECUTION_TIME_MS,
    ),
    CommandDescriptor::write(
        "stop_measurement",
        CMD_STOP_MEASUREMENT,
        STOP_MEASUREMENT_EXECUTION_TIME_MS,
    ),
    CommandDescriptor::write(
        "device_reset",
        CMD_DEVICE_RESET,
        DEVICE_RESET_EXECUTION_TIME_MS,
    ),
    CommandDescriptor::write(
        "start_fan_cleaning",
        CMD_START_FAN_CLEANING,
        START_FAN_CLEANING_EXECUTION_TIME_MS,
    ),
    CommandDescriptor::write(
        "activate_sht_heater",
        CMD_ACTIVATE_SHT_HEATER,
        ACTIVATE_SHT_HEATER_EXECUTION_TIME_MS,
    ),
];

impl Command {
    /// Every command, in catalog order.
    pub const ALL: [Command; 11] = [
        Command::GetProductName,
        Command::GetSerialNumber,
        Command::GetDataReady,
        Command::ReadDeviceStatus,
        Command::ReadAndClearDeviceStatus,
        Command::ReadMeasuredValues,
        Command::StartContinuousMeasurement,
        Command::StopMeasurement,
        Command::DeviceReset,
        Command::StartFanCleaning,
        Command::ActivateShtHeater,
    ];

    /// Catalog entry for this command.
    pub fn descriptor(self) -> &'static CommandDescriptor {
        &CATALOG[self as usize]
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// 16-bit opcode.
    pub fn opcode(self) -> u16 {
        self.descriptor().opcode
    }

    /// Encode the command for transmission.
    pub fn encode(self) -> [u8; 2] {
        self.descriptor().opcode_bytes()
    }

    /// Whether the command has no read phase.
    pub fn is_write_only(self) -> bool {
        self.descriptor().is_write_only()
    }

    /// Execution window padded by `window >> tolerance_shift`.
    pub fn compensated_wait_ms(self, tolerance_shift: u32) -> u32 {
        self.descriptor().compensated_wait_ms(tolerance_shift)
    }

    /// Look up a command by opcode.
    pub fn from_opcode(opcode: u16) -> Option<Command> {
        Command::ALL
            .into_iter()
            .find(|command| command.descriptor().opcode == opcode)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
