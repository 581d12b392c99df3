//! # sen66-driver
//!
//! Blocking I2C driver for the Sensirion SEN66 air-quality module.
//!
//! The driver is generic over the `embedded-hal` 1.0 [`I2c`] and [`DelayNs`]
//! traits, so it runs on any HAL (or Linux `i2cdev`) that implements them.
//! Each operation writes a command opcode, waits out the padded execution
//! window, reads the checksummed response and, once every chunk validates,
//! stores the decoded register in the driver's [`SensorSnapshot`].
//!
//! The `serde` feature derives `Serialize`/`Deserialize` for [`DriverConfig`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use sen66_driver::Sen66;
//!
//! let mut sensor = Sen66::new(i2c, delay);
//! sensor.initialize()?;
//! sensor.start_continuous_measurement()?;
//!
//! loop {
//!     sensor.get_data_ready()?;
//!     if sensor.snapshot().is_data_ready() {
//!         sensor.read_measured_values()?;
//!         let values = sensor.snapshot().measured_values().unwrap().to_physical();
//!         println!("PM2.5: {:.1} µg/m³, CO2: {} ppm", values.pm2p5_ugm3, values.co2_ppm);
//!     }
//! }
//! ```
//!
//! [`I2c`]: embedded_hal::i2c::I2c
//! [`DelayNs`]: embedded_hal::delay::DelayNs

mod config;
mod driver;
mod error;
mod snapshot;
pub mod telemetry;

pub use config::DriverConfig;
pub use driver::{ExchangeState, Sen66};
pub use error::{DriverError, DriverResult};
pub use snapshot::SensorSnapshot;

pub use sen66_protocol as protocol;
