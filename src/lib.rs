//! Platform-agnostic driver for TinkerKit sensor modules.
//!
//! TinkerKit modules are simple one- or two-wire sensors wired straight to a
//! microcontroller's digital and analog pins. This crate wraps those raw pin
//! reads with the per-module signal conditioning: edge-detecting debounce for
//! buttons and switches, and the fixed conversion formulas that turn 10-bit
//! ADC samples into temperatures, angular rates, g-forces, and pole
//! classifications.
//!
//! ## Architecture
//!
//! Pin access goes through three capability traits in [`io`]:
//!
//! - [`DigitalReadable`] - a single digital line
//! - [`AnalogReadable`] - a single 10-bit ADC channel (samples in `0..=1023`)
//! - [`DualAnalogReadable`] - an ADC channel pair for 2-axis sensors
//!
//! Sensor types are thin sampling shells over those traits; the actual
//! conversion math lives in [`convert`] as pure functions so it can be tested
//! without any hardware. [`DigitalPin`] adapts any
//! [`embedded_hal::digital::InputPin`]; analog sources are platform-specific,
//! so the platform implements [`AnalogReadable`] over its own ADC driver.
//!
//! ## Example
//!
//! Polling a button (the source here replays a canned trace; on hardware it
//! would be a [`DigitalPin`]):
//!
//! ```
//! use tinkerkit::{Button, DigitalReadable};
//!
//! struct Replay(&'static [bool], usize);
//!
//! impl DigitalReadable for Replay {
//!     type Error = core::convert::Infallible;
//!
//!     fn read_level(&mut self) -> Result<bool, Self::Error> {
//!         let level = self.0[self.1.min(self.0.len() - 1)];
//!         self.1 += 1;
//!         Ok(level)
//!     }
//! }
//!
//! let mut button = Button::new(Replay(&[false, true, true, false], 0));
//!
//! button.sample()?;
//! assert!(!button.pressed());
//! button.sample()?;
//! assert!(button.pressed());
//! button.sample()?;
//! assert!(!button.pressed() && button.held());
//! button.sample()?;
//! assert!(button.released());
//! # Ok::<(), tinkerkit::Error<core::convert::Infallible>>(())
//! ```
//!
//! ## Polling contract
//!
//! The debounce layer detects edges by comparing consecutive polls; it has no
//! internal timing filter. The caller chooses the polling cadence, and with it
//! how much mechanical contact bounce is visible. One `sample()` per control
//! loop iteration is the intended usage.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod analog;
pub mod board;
pub mod convert;
pub mod digital;
pub mod error;
pub mod io;

pub use analog::{Accelerometer, Gyroscope, HallSensor, Potentiometer, Thermistor};
pub use board::BoardPinout;
pub use convert::{GyroModel, Polarity, TK_MAX};
pub use digital::{Button, DebouncedInput, TiltSwitch, TouchSensor};
pub use error::Error;
pub use io::{AnalogPair, AnalogReadable, DigitalPin, DigitalReadable, DualAnalogReadable};
