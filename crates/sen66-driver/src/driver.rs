//! Blocking command executor.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};
use log::{debug, trace, warn};
use sen66_protocol::{Command, RegisterValue};

use crate::config::DriverConfig;
use crate::error::{DriverError, DriverResult};
use crate::snapshot::SensorSnapshot;
use crate::telemetry::{
    self, CHECKSUM_FAILURES, COMMANDS_SENT, READS_VALIDATED, TRANSPORT_ERRORS,
};

/// Progress of a single command exchange.
///
/// `Validated` and `Rejected` are terminal; every exchange ends in one of
/// them before control returns to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    /// No exchange in progress.
    Idle,
    /// Opcode written.
    Sent,
    /// Waiting out the execution window.
    Waiting,
    /// Reading the response frame.
    Receiving,
    /// Completed successfully; any response was stored.
    Validated,
    /// Failed on the bus or on a checksum; nothing was stored.
    Rejected,
}

/// SEN66 driver bound to one I2C bus handle and one delay source.
///
/// The driver owns both collaborators and the [`SensorSnapshot`]. Every
/// operation runs write, wait, read and validate to completion before
/// returning.
#[derive(Debug)]
pub struct Sen66<I2C, D> {
    i2c: I2C,
    delay: D,
    config: DriverConfig,
    snapshot: SensorSnapshot,
    last_exchange: ExchangeState,
}

impl<I2C, D> Sen66<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver with the default address and timing margin.
    ///
    /// No bus traffic happens until an operation is called.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, DriverConfig::default())
    }

    /// Create a driver with explicit settings.
    pub fn with_config(i2c: I2C, delay: D, config: DriverConfig) -> Self {
        Sen66 {
            i2c,
            delay,
            config,
            snapshot: SensorSnapshot::new(),
            last_exchange: ExchangeState::Idle,
        }
    }

    /// Give back the bus and delay handles.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Active settings.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Last-known-good sensor state.
    pub fn snapshot(&self) -> &SensorSnapshot {
        &self.snapshot
    }

    /// Terminal state of the most recent exchange, or `Idle` before the first.
    pub fn last_exchange(&self) -> ExchangeState {
        self.last_exchange
    }

    /// Read serial number, product name and device status.
    ///
    /// All three reads are attempted even if one fails; the first failure
    /// is returned.
    pub fn initialize(&mut self) -> DriverResult<(), I2C::Error> {
        let mut first_error = None;
        for command in [
            Command::GetSerialNumber,
            Command::GetProductName,
            Command::ReadDeviceStatus,
        ] {
            if let Err(err) = self.execute(command) {
                warn!("SEN66 initialization: {} failed: {}", command, err);
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Run one exchange for `command`.
    ///
    /// Returns the decoded register value for read commands and `None` for
    /// write-only commands. The snapshot is updated only when the whole
    /// response validates.
    pub fn execute(&mut self, command: Command) -> DriverResult<Option<RegisterValue>, I2C::Error> {
        let descriptor = command.descriptor();
        let address = self.config.address;
        self.last_exchange = ExchangeState::Idle;

        debug!(
            "SEN66 {}: opcode 0x{:04X}, response {} bytes",
            command, descriptor.opcode, descriptor.response_length
        );
        if let Err(err) = self.i2c.write(address, &descriptor.opcode_bytes()) {
            return Err(self.reject_transport(command, err));
        }
        telemetry::increment(COMMANDS_SENT, descriptor.name);
        self.enter(command, ExchangeState::Sent);

        let wait_ms = descriptor.compensated_wait_ms(self.config.tolerance_shift);
        self.enter(command, ExchangeState::Waiting);
        trace!("SEN66 {}: waiting {} ms", command, wait_ms);
        self.delay.delay_ms(wait_ms);

        if descriptor.is_write_only() {
            self.enter(command, ExchangeState::Validated);
            return Ok(None);
        }

        self.enter(command, ExchangeState::Receiving);
        let mut raw = vec![0u8; descriptor.response_length];
        if let Err(err) = self.i2c.read(address, &mut raw) {
            return Err(self.reject_transport(command, err));
        }

        match RegisterValue::decode_response(command, &raw) {
            Ok(value) => {
                if let Some(value) = value {
                    self.snapshot.apply(value);
                }
                telemetry::increment(READS_VALIDATED, descriptor.name);
                self.enter(command, ExchangeState::Validated);
                Ok(value)
            }
            Err(err) => {
                warn!("SEN66 {}: response rejected: {}", command, err);
                let err = DriverError::from(err);
                if err.is_checksum_error() {
                    telemetry::increment(CHECKSUM_FAILURES, descriptor.name);
                }
                self.enter(command, ExchangeState::Rejected);
                Err(err)
            }
        }
    }

    fn enter(&mut self, command: Command, state: ExchangeState) {
        trace!("SEN66 {}: {:?} -> {:?}", command, self.last_exchange, state);
        self.last_exchange = state;
    }

    fn reject_transport(&mut self, command: Command, err: I2C::Error) -> DriverError<I2C::Error> {
        warn!("SEN66 {}: bus error {:?}", command, err.kind());
        telemetry::increment(TRANSPORT_ERRORS, command.name());
        self.enter(command, ExchangeState::Rejected);
        DriverError::Transport(err)
    }

    // ========================================================================
    // Read-only operations
    // ========================================================================

    /// Read the product name into the snapshot.
    pub fn get_product_name(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::GetProductName).map(|_| ())
    }

    /// Read the serial number into the snapshot.
    pub fn get_serial_number(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::GetSerialNumber).map(|_| ())
    }

    /// Read the data-ready flag into the snapshot.
    pub fn get_data_ready(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::GetDataReady).map(|_| ())
    }

    /// Read the device status register into the snapshot.
    pub fn read_device_status(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::ReadDeviceStatus).map(|_| ())
    }

    /// Read the latest measurements into the snapshot.
    pub fn read_measured_values(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::ReadMeasuredValues).map(|_| ())
    }

    // ========================================================================
    // Read-write operations
    // ========================================================================

    /// Read the device status register into the snapshot and clear it on the sensor.
    pub fn read_and_clear_device_status(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::ReadAndClearDeviceStatus).map(|_| ())
    }

    // ========================================================================
    // Write-only operations
    // ========================================================================

    /// Enter continuous measurement mode.
    pub fn start_continuous_measurement(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::StartContinuousMeasurement).map(|_| ())
    }

    /// Return to idle mode.
    pub fn stop_measurement(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::StopMeasurement).map(|_| ())
    }

    /// Soft reset. The snapshot is kept.
    pub fn device_reset(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::DeviceReset).map(|_| ())
    }

    /// Run the fan cleaning cycle. Blocks for the whole cycle.
    pub fn start_fan_cleaning(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::StartFanCleaning).map(|_| ())
    }

    /// Heat the humidity/temperature sensor. Blocks until the heater is done.
    pub fn activate_sht_heater(&mut self) -> DriverResult<(), I2C::Error> {
        self.execute(Command::ActivateShtHeater).map(|_| ())
    }
}
