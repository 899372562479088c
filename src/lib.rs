//! Read identity, history and telemetry from LXT-family battery packs over their
//! single-wire service port.
//!
//! The pack speaks an undocumented request-response protocol on top of a 1-Wire style
//! bus. Each request is framed in one of three ways (read ROM, skip ROM, or wake then
//! skip ROM) and answered with a fixed number of bytes. There is no checksum.
//! Several fields are stored with swapped nibbles.
//!
//! Currently the following data can be accessed:
//!
//! - Model name
//! - ROM ID
//! - Manufacturing date, capacity and battery type
//! - Charge count, lock state and status code
//! - Pack and cell voltages (mV)
//! - Temperatures (°C/100)
//!
//! The pack's LEDs can also be switched and its latched errors cleared.
//!
//! The bus and the line powering its transceiver are supplied by the caller through
//! [`BusTransport`] and [`PowerGate`].
//!
//! # Example
//!
//! ```no_run
//! # fn run<B: lxtread::BusTransport, G: lxtread::PowerGate>(bus: B, gate: G) {
//!     let mut driver = lxtread::BatteryDriver::new(bus, gate);
//!     match driver.fetch_state() {
//!         Ok(battery_data) => println!("{battery_data}"),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! # }
//! ```

mod battery_data;
mod battery_driver;
mod bus;
mod command;
mod decode;
mod error;
#[cfg(test)]
mod fake;
mod framer;
mod message;
mod timing;

pub use battery_data::{BatteryData, ManufacturingDate};
pub use battery_driver::{BatteryDriver, LAST_ERROR_CAPACITY};
pub use bus::{BusTransport, PowerGate};
pub use command::{Command, Framing};
pub use error::Error;
pub use framer::{CommandFramer, RawResponse, MAX_RAW_LEN};
pub use timing::Timing;

/// Pure decoding rules, exposed for tools that work on captured responses.
pub mod fields {
    pub use crate::decode::{
        bit_field, charge_count, date_triplet, le_i16, le_u16, nibble_swap,
    };
}
