//! Last-known-good sensor state.

use sen66_protocol::{
    DataReady, DeviceIdentity, DeviceStatus, MeasuredValues, RegisterValue, StatusFlag,
};

/// Everything the driver has successfully read from the sensor.
///
/// A field is `None` until the corresponding read first validates. Each
/// field is replaced whole by a validated read and left alone by a failed
/// one, so stale values survive errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorSnapshot {
    product_name: Option<DeviceIdentity>,
    serial_number: Option<DeviceIdentity>,
    data_ready: Option<DataReady>,
    device_status: Option<DeviceStatus>,
    measured_values: Option<MeasuredValues>,
}

impl SensorSnapshot {
    /// Empty snapshot: nothing read yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a validated register value in its own field.
    pub(crate) fn apply(&mut self, value: RegisterValue) {
        match value {
            RegisterValue::ProductName(v) => self.product_name = Some(v),
            RegisterValue::SerialNumber(v) => self.serial_number = Some(v),
            RegisterValue::DataReady(v) => self.data_ready = Some(v),
            RegisterValue::DeviceStatus(v) => self.device_status = Some(v),
            RegisterValue::MeasuredValues(v) => self.measured_values = Some(v),
        }
    }

    /// Product name, if read.
    pub fn product_name(&self) -> Option<&DeviceIdentity> {
        self.product_name.as_ref()
    }

    /// Serial number, if read.
    pub fn serial_number(&self) -> Option<&DeviceIdentity> {
        self.serial_number.as_ref()
    }

    /// Data-ready register, if read.
    pub fn data_ready(&self) -> Option<&DataReady> {
        self.data_ready.as_ref()
    }

    /// Device status register, if read.
    pub fn device_status(&self) -> Option<&DeviceStatus> {
        self.device_status.as_ref()
    }

    /// Measured values, if read.
    pub fn measured_values(&self) -> Option<&MeasuredValues> {
        self.measured_values.as_ref()
    }

    /// New measurements are available. `false` until data-ready is read.
    pub fn is_data_ready(&self) -> bool {
        self.data_ready.map_or(false, |ready| ready.is_ready())
    }

    /// Test a status flag. Every flag reads as asserted until the status
    /// register has been read once.
    pub fn is_flag_set(&self, flag: StatusFlag) -> bool {
        self.device_status.map_or(true, |status| status.is_set(flag))
    }

    /// Fan speed warning.
    pub fn is_fan_speed_warning(&self) -> bool {
        self.is_flag_set(StatusFlag::FanSpeedWarning)
    }

    /// Particulate matter sensor error.
    pub fn is_particulate_matter_sensor_error(&self) -> bool {
        self.is_flag_set(StatusFlag::ParticulateMatterSensorError)
    }

    /// CO2 sensor error.
    pub fn is_co2_sensor_error(&self) -> bool {
        self.is_flag_set(StatusFlag::Co2SensorError)
    }

    /// Gas sensor error.
    pub fn is_gas_sensor_error(&self) -> bool {
        self.is_flag_set(StatusFlag::GasSensorError)
    }

    /// Humidity/temperature sensor error.
    pub fn is_humidity_temperature_sensor_error(&self) -> bool {
        self.is_flag_set(StatusFlag::HumidityTemperatureSensorError)
    }

    /// Fan error.
    pub fn is_fan_error(&self) -> bool {
        self.is_flag_set(StatusFlag::FanError)
    }

    /// PM1.0, 0.1 µg/m³.
    pub fn pm1p0(&self) -> Option<u16> {
        self.measured_values.map(|v| v.pm1p0())
    }

    /// PM2.5, 0.1 µg/m³.
    pub fn pm2p5(&self) -> Option<u16> {
        self.measured_values.map(|v| v.pm2p5())
    }

    /// PM4.0, 0.1 µg/m³.
    pub fn pm4p0(&self) -> Option<u16> {
        self.measured_values.map(|v| v.pm4p0())
    }

    /// PM10.0, 0.1 µg/m³.
    pub fn pm10p0(&self) -> Option<u16> {
        self.measured_values.map(|v| v.pm10p0())
    }

    /// Relative humidity, 0.01 %RH.
    pub fn humidity(&self) -> Option<i16> {
        self.measured_values.map(|v| v.humidity())
    }

    /// Temperature, 0.005 °C.
    pub fn temperature(&self) -> Option<i16> {
        self.measured_values.map(|v| v.temperature())
    }

    /// VOC index, 0.1.
    pub fn voc_index(&self) -> Option<i16> {
        self.measured_values.map(|v| v.voc_index())
    }

    /// NOx index, 0.1.
    pub fn nox_index(&self) -> Option<i16> {
        self.measured_values.map(|v| v.nox_index())
    }

    /// CO2, ppm.
    pub fn co2(&self) -> Option<u16> {
        self.measured_values.map(|v| v.co2())
    }
}
