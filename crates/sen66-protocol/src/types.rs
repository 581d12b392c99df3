//! Typed register values.
//!
//! Each type wraps the compacted bytes of one register and exposes the
//! fields the datasheet defines in it. Construction goes through
//! [`crate::RegisterValue::decode`] or `from_payload`, which check the
//! payload length.

use crate::constants::*;
use crate::error::ProtocolError;
use crate::Result;

fn fixed<const N: usize>(payload: &[u8]) -> Result<[u8; N]> {
    payload.try_into().map_err(|_| ProtocolError::PayloadLength {
        expected: N,
        actual: payload.len(),
    })
}

// ============================================================================
// Identity strings
// ============================================================================

/// Product name or serial number: up to 32 ASCII bytes, NUL padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceIdentity(pub [u8; PRODUCT_NAME_LENGTH]);

impl DeviceIdentity {
    /// Decode from a 32-byte compacted payload.
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        Ok(DeviceIdentity(fixed(payload)?))
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; PRODUCT_NAME_LENGTH] {
        &self.0
    }

    /// The string up to the first NUL, with non-ASCII bytes replaced.
    pub fn as_string(&self) -> String {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(self.0.len());
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl std::fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_string())
    }
}

// ============================================================================
// Data ready
// ============================================================================

/// Data-ready register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataReady(pub [u8; DATA_READY_LENGTH]);

impl DataReady {
    /// Decode from a 2-byte compacted payload.
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        Ok(DataReady(fixed(payload)?))
    }

    /// New measurements are available. Only the low byte carries the flag.
    pub fn is_ready(&self) -> bool {
        self.0[1] != 0
    }

    /// Get the underlying bytes.
    pub fn raw(&self) -> [u8; DATA_READY_LENGTH] {
        self.0
    }
}

// ============================================================================
// Device status
// ============================================================================

/// Named bits of the device status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFlag {
    /// Fan speed is more than 10% off target.
    FanSpeedWarning,
    /// Particulate matter sensor error.
    ParticulateMatterSensorError,
    /// CO2 sensor error.
    Co2SensorError,
    /// Gas (VOC/NOx) sensor error.
    GasSensorError,
    /// Humidity/temperature sensor error.
    HumidityTemperatureSensorError,
    /// Fan is blocked or broken.
    FanError,
}

impl StatusFlag {
    /// Every flag, in register order.
    pub const ALL: [StatusFlag; 6] = [
        StatusFlag::FanSpeedWarning,
        StatusFlag::ParticulateMatterSensorError,
        StatusFlag::Co2SensorError,
        StatusFlag::GasSensorError,
        StatusFlag::HumidityTemperatureSensorError,
        StatusFlag::FanError,
    ];

    /// `(byte index, bit index)` of the flag in the register.
    pub const fn position(self) -> (usize, u8) {
        match self {
            StatusFlag::FanSpeedWarning => STATUS_FAN_SPEED_WARNING,
            StatusFlag::ParticulateMatterSensorError => STATUS_PM_SENSOR_ERROR,
            StatusFlag::Co2SensorError => STATUS_CO2_SENSOR_ERROR,
            StatusFlag::GasSensorError => STATUS_GAS_SENSOR_ERROR,
            StatusFlag::HumidityTemperatureSensorError => STATUS_RHT_SENSOR_ERROR,
            StatusFlag::FanError => STATUS_FAN_ERROR,
        }
    }

    /// Short human-readable description.
    pub const fn as_str(self) -> &'static str {
        match self {
            StatusFlag::FanSpeedWarning => "fan speed warning",
            StatusFlag::ParticulateMatterSensorError => "PM sensor error",
            StatusFlag::Co2SensorError => "CO2 sensor error",
            StatusFlag::GasSensorError => "gas sensor error",
            StatusFlag::HumidityTemperatureSensorError => "RH/T sensor error",
            StatusFlag::FanError => "fan error",
        }
    }
}

impl std::fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device status register (4 bytes, big-endian bit field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceStatus(pub [u8; DEVICE_STATUS_LENGTH]);

impl DeviceStatus {
    /// Decode from a 4-byte compacted payload.
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        Ok(DeviceStatus(fixed(payload)?))
    }

    /// Test a single bit. `None` if the position is outside the register.
    pub fn bit(&self, byte_index: usize, bit_index: u8) -> Option<bool> {
        let byte = self.0.get(byte_index)?;
        let mask = 1u8.checked_shl(u32::from(bit_index))?;
        Some(byte & mask != 0)
    }

    /// Test a named flag.
    pub fn is_set(&self, flag: StatusFlag) -> bool {
        let (byte_index, bit_index) = flag.position();
        self.bit(byte_index, bit_index).unwrap_or(false)
    }

    /// All flags currently asserted.
    pub fn active_flags(&self) -> Vec<StatusFlag> {
        StatusFlag::ALL
            .into_iter()
            .filter(|&flag| self.is_set(flag))
            .collect()
    }

    /// Whether any named flag is asserted.
    pub fn has_fault(&self) -> bool {
        StatusFlag::ALL.into_iter().any(|flag| self.is_set(flag))
    }

    /// Fan speed warning.
    pub fn is_fan_speed_warning(&self) -> bool {
        self.is_set(StatusFlag::FanSpeedWarning)
    }

    /// Particulate matter sensor error.
    pub fn is_particulate_matter_sensor_error(&self) -> bool {
        self.is_set(StatusFlag::ParticulateMatterSensorError)
    }

    /// CO2 sensor error.
    pub fn is_co2_sensor_error(&self) -> bool {
        self.is_set(StatusFlag::Co2SensorError)
    }

    /// Gas sensor error.
    pub fn is_gas_sensor_error(&self) -> bool {
        self.is_set(StatusFlag::GasSensorError)
    }

    /// Humidity/temperature sensor error.
    pub fn is_humidity_temperature_sensor_error(&self) -> bool {
        self.is_set(StatusFlag::HumidityTemperatureSensorError)
    }

    /// Fan error.
    pub fn is_fan_error(&self) -> bool {
        self.is_set(StatusFlag::FanError)
    }

    /// Get the underlying bytes.
    pub fn raw(&self) -> [u8; DEVICE_STATUS_LENGTH] {
        self.0
    }
}

// ============================================================================
// Measured values
// ============================================================================

/// One word of the measured-values register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    /// PM1.0 mass concentration, 0.1 µg/m³.
    Pm1p0,
    /// PM2.5 mass concentration, 0.1 µg/m³.
    Pm2p5,
    /// PM4.0 mass concentration, 0.1 µg/m³.
    Pm4p0,
    /// PM10.0 mass concentration, 0.1 µg/m³.
    Pm10p0,
    /// Relative humidity, 0.01 %RH, signed.
    Humidity,
    /// Temperature, 0.005 °C, signed.
    Temperature,
    /// VOC index, 0.1, signed.
    VocIndex,
    /// NOx index, 0.1, signed.
    NoxIndex,
    /// CO2 concentration, 1 ppm.
    Co2,
}

impl Measurement {
    /// Every measurement, in register order.
    pub const ALL: [Measurement; 9] = [
        Measurement::Pm1p0,
        Measurement::Pm2p5,
        Measurement::Pm4p0,
        Measurement::Pm10p0,
        Measurement::Humidity,
        Measurement::Temperature,
        Measurement::VocIndex,
        Measurement::NoxIndex,
        Measurement::Co2,
    ];

    /// Word index within the compacted register.
    pub const fn word_index(self) -> usize {
        self as usize
    }

    /// Whether the raw word is two's complement.
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Measurement::Humidity
                | Measurement::Temperature
                | Measurement::VocIndex
                | Measurement::NoxIndex
        )
    }

    /// Multiplier from raw units to physical units.
    pub const fn scale(self) -> f32 {
        match self {
            Measurement::Pm1p0 | Measurement::Pm2p5 | Measurement::Pm4p0 | Measurement::Pm10p0 => 0.1,
            Measurement::Humidity => 0.01,
            Measurement::Temperature => 0.005,
            Measurement::VocIndex | Measurement::NoxIndex => 0.1,
            Measurement::Co2 => 1.0,
        }
    }
}

/// Measured-values register: nine big-endian words, unscaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasuredValues(pub [u8; MEASURED_VALUES_LENGTH]);

impl MeasuredValues {
    /// Decode from an 18-byte compacted payload.
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        Ok(MeasuredValues(fixed(payload)?))
    }

    /// Raw big-endian word at `index`. `None` past the ninth word.
    pub fn word(&self, index: usize) -> Option<u16> {
        let start = index.checked_mul(WORD_SIZE)?;
        let bytes = self.0.get(start..start.checked_add(WORD_SIZE)?)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Raw word of a measurement.
    pub fn raw(&self, measurement: Measurement) -> u16 {
        let start = measurement.word_index() * WORD_SIZE;
        u16::from_be_bytes([self.0[start], self.0[start + 1]])
    }

    /// Value of a measurement in physical units.
    pub fn physical(&self, measurement: Measurement) -> f32 {
        let raw = self.raw(measurement);
        let value = if measurement.is_signed() {
            f32::from(raw as i16)
        } else {
            f32::from(raw)
        };
        value * measurement.scale()
    }

    /// PM1.0, 0.1 µg/m³.
    pub fn pm1p0(&self) -> u16 {
        self.raw(Measurement::Pm1p0)
    }

    /// PM2.5, 0.1 µg/m³.
    pub fn pm2p5(&self) -> u16 {
        self.raw(Measurement::Pm2p5)
    }

    /// PM4.0, 0.1 µg/m³.
    pub fn pm4p0(&self) -> u16 {
        self.raw(Measurement::Pm4p0)
    }

    /// PM10.0, 0.1 µg/m³.
    pub fn pm10p0(&self) -> u16 {
        self.raw(Measurement::Pm10p0)
    }

    /// Relative humidity, 0.01 %RH.
    pub fn humidity(&self) -> i16 {
        self.raw(Measurement::Humidity) as i16
    }

    /// Temperature, 0.005 °C.
    pub fn temperature(&self) -> i16 {
        self.raw(Measurement::Temperature) as i16
    }

    /// VOC index, 0.1.
    pub fn voc_index(&self) -> i16 {
        self.raw(Measurement::VocIndex) as i16
    }

    /// NOx index, 0.1.
    pub fn nox_index(&self) -> i16 {
        self.raw(Measurement::NoxIndex) as i16
    }

    /// CO2, ppm.
    pub fn co2(&self) -> u16 {
        self.raw(Measurement::Co2)
    }

    /// Apply the datasheet scaling to every word.
    pub fn to_physical(&self) -> PhysicalValues {
        PhysicalValues {
            pm1p0_ugm3: self.physical(Measurement::Pm1p0),
            pm2p5_ugm3: self.physical(Measurement::Pm2p5),
            pm4p0_ugm3: self.physical(Measurement::Pm4p0),
            pm10p0_ugm3: self.physical(Measurement::Pm10p0),
            humidity_pct: self.physical(Measurement::Humidity),
            temperature_c: self.physical(Measurement::Temperature),
            voc_index: self.physical(Measurement::VocIndex),
            nox_index: self.physical(Measurement::NoxIndex),
            co2_ppm: self.physical(Measurement::Co2),
        }
    }
}

/// Measured values converted to physical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalValues {
    /// PM1.0 in µg/m³.
    pub pm1p0_ugm3: f32,
    /// PM2.5 in µg/m³.
    pub pm2p5_ugm3: f32,
    /// PM4.0 in µg/m³.
    pub pm4p0_ugm3: f32,
    /// PM10.0 in µg/m³.
    pub pm10p0_ugm3: f32,
    /// Relative humidity in %RH.
    pub humidity_pct: f32,
    /// Temperature in °C.
    pub temperature_c: f32,
    /// VOC index.
    pub voc_index: f32,
    /// NOx index.
    pub nox_index: f32,
    /// CO2 in ppm.
    pub co2_ppm: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: [u8; 18] = [
        0x00, 0x0A, 0x00, 0x19, 0x00, 0x28, 0x00, 0x37, 0x00, 0x32, 0x01, 0x90, 0x00, 0x05, 0xFF,
        0xFB, 0x01, 0x77,
    ];

    #[test]
    fn test_measured_values_decode() {
        let values = MeasuredValues::from_payload(&SAMPLE).expect("should decode");
        assert_eq!(values.pm1p0(), 10);
        assert_eq!(values.pm2p5(), 25);
        assert_eq!(values.pm4p0(), 40);
        assert_eq!(values.pm10p0(), 55);
        assert_eq!(values.humidity(), 50);
        assert_eq!(values.temperature(), 400);
        assert_eq!(values.voc_index(), 5);
        assert_eq!(values.nox_index(), -5);
        assert_eq!(values.co2(), 375);
    }

    #[test]
    fn test_measured_values_physical() {
        let physical = MeasuredValues(SAMPLE).to_physical();
        assert_relative_eq!(physical.pm1p0_ugm3, 1.0, epsilon = 1e-4);
        assert_relative_eq!(physical.pm2p5_ugm3, 2.5, epsilon = 1e-4);
        assert_relative_eq!(physical.pm10p0_ugm3, 5.5, epsilon = 1e-4);
        assert_relative_eq!(physical.humidity_pct, 0.5, epsilon = 1e-4);
        assert_relative_eq!(physical.temperature_c, 2.0, epsilon = 1e-4);
        assert_relative_eq!(physical.voc_index, 0.5, epsilon = 1e-4);
        assert_relative_eq!(physical.nox_index, -0.5, epsilon = 1e-4);
        assert_relative_eq!(physical.co2_ppm, 375.0, epsilon = 1e-4);
    }

    #[test]
    fn test_pm_and_co2_are_unsigned() {
        let mut bytes = [0u8; 18];
        bytes[0] = 0xFF;
        bytes[1] = 0xFE;
        bytes[16] = 0x80;
        bytes[17] = 0x00;
        let values = MeasuredValues(bytes);
        assert_eq!(values.pm1p0(), 0xFFFE);
        assert_eq!(values.co2(), 0x8000);
        assert_relative_eq!(values.physical(Measurement::Co2), 32768.0);
    }

    #[test]
    fn test_measured_values_wrong_length() {
        assert_eq!(
            MeasuredValues::from_payload(&SAMPLE[..16]),
            Err(ProtocolError::PayloadLength {
                expected: 18,
                actual: 16
            })
        );
    }

    #[test]
    fn test_fan_speed_warning_only() {
        let status = DeviceStatus([0x00, 0x20, 0x00, 0x00]);
        assert!(status.is_fan_speed_warning());
        assert!(!status.is_particulate_matter_sensor_error());
        assert!(!status.is_co2_sensor_error());
        assert!(!status.is_gas_sensor_error());
        assert!(!status.is_humidity_temperature_sensor_error());
        assert!(!status.is_fan_error());
        assert_eq!(status.active_flags(), vec![StatusFlag::FanSpeedWarning]);
    }

    #[test]
    fn test_status_byte_three_flags() {
        let status = DeviceStatus([0x00, 0x00, 0x00, 0xD0]);
        assert!(status.is_gas_sensor_error());
        assert!(status.is_humidity_temperature_sensor_error());
        assert!(status.is_fan_error());
        assert!(!status.is_fan_speed_warning());
    }

    #[test]
    fn test_pm_and_co2_errors_share_a_bit() {
        let status = DeviceStatus([0x00, 0x00, 0x02, 0x00]);
        assert!(status.is_particulate_matter_sensor_error());
        assert!(status.is_co2_sensor_error());
        assert!(status.has_fault());
    }

    #[test]
    fn test_clear_status() {
        let status = DeviceStatus([0; 4]);
        assert!(!status.has_fault());
        assert!(status.active_flags().is_empty());
    }

    #[test]
    fn test_bit_outside_register() {
        let status = DeviceStatus([0xFF; 4]);
        assert_eq!(status.bit(0, 7), Some(true));
        assert_eq!(status.bit(3, 0), Some(true));
        assert_eq!(status.bit(0, 8), None);
        assert_eq!(status.bit(4, 0), None);
        assert_eq!(status.bit(usize::MAX, u8::MAX), None);
    }

    #[test]
    fn test_flag_positions_inside_register() {
        let status = DeviceStatus([0; 4]);
        for flag in StatusFlag::ALL {
            let (byte_index, bit_index) = flag.position();
            assert_eq!(status.bit(byte_index, bit_index), Some(false), "{}", flag);
        }
    }

    #[test]
    fn test_word_outside_register() {
        let values = MeasuredValues(SAMPLE);
        assert_eq!(values.word(0), Some(10));
        assert_eq!(values.word(8), Some(375));
        assert_eq!(values.word(9), None);
        assert_eq!(values.word(usize::MAX), None);
        for measurement in Measurement::ALL {
            assert_eq!(values.word(measurement.word_index()), Some(values.raw(measurement)));
        }
    }

    #[test]
    fn test_data_ready_reads_low_byte() {
        assert!(!DataReady([0x80, 0x00]).is_ready());
        assert!(DataReady([0x00, 0x80]).is_ready());
        assert!(DataReady([0x00, 0x01]).is_ready());
    }

    #[test]
    fn test_identity_string() {
        let mut bytes = [0u8; 32];
        bytes[..5].copy_from_slice(b"SEN66");
        let identity = DeviceIdentity::from_payload(&bytes).expect("should decode");
        assert_eq!(identity.as_string(), "SEN66");
        assert_eq!(identity.to_string(), "SEN66");
    }

    #[test]
    fn test_identity_without_terminator() {
        let identity = DeviceIdentity([b'A'; 32]);
        assert_eq!(identity.as_string().len(), 32);
    }
}
