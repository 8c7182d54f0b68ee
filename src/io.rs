//! Pin source abstraction
//!
//! This module provides the capability traits the sensor types sample
//! through, plus adapters for embedded-hal pin types.
//!
//! ## Traits
//!
//! - [`DigitalReadable`]: a single digital line
//! - [`AnalogReadable`]: a single ADC channel delivering 10-bit samples
//! - [`DualAnalogReadable`]: an ADC channel pair for 2-axis sensors
//!
//! embedded-hal v1.0 has no ADC trait, so there is no blanket analog
//! adapter: the platform implements [`AnalogReadable`] over its own ADC
//! driver (scaling to 10 bits if its ADC is wider). Two single-channel
//! sources combine into a [`DualAnalogReadable`] with [`AnalogPair`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use tinkerkit::{AnalogPair, DigitalPin, Gyroscope, GyroModel, Button};
//!
//! // Digital: wrap any embedded-hal InputPin
//! let mut button = Button::new(DigitalPin::new(gpio4));
//!
//! // Analog: platform-provided AnalogReadable impls, paired for 2 axes
//! let mut gyro = Gyroscope::new(AnalogPair::new(adc_ch0, adc_ch1), GyroModel::X1);
//! ```

use core::fmt::Debug;

use embedded_hal::digital::InputPin;

/// Source of a digital level
///
/// Implementations return the instantaneous logical level of a line:
/// `true` for the active state, `false` otherwise. Reads are synchronous
/// and must not block.
pub trait DigitalReadable {
    /// Error type for read operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Read the current logical level
    fn read_level(&mut self) -> Result<bool, Self::Error>;
}

/// Source of raw 10-bit ADC samples
///
/// Implementations must deliver samples in `0..=1023`. All conversion
/// formulas in this crate assume that range; a wider ADC must be scaled
/// down by the implementation.
pub trait AnalogReadable {
    /// Error type for read operations
    type Error: Debug;

    /// Read one raw sample in `0..=1023`
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

/// Source of raw 10-bit ADC samples from two axes
///
/// The same sample contract as [`AnalogReadable`] applies to both axes.
pub trait DualAnalogReadable {
    /// Error type for read operations
    type Error: Debug;

    /// Read one raw X-axis sample in `0..=1023`
    fn read_x_raw(&mut self) -> Result<u16, Self::Error>;

    /// Read one raw Y-axis sample in `0..=1023`
    fn read_y_raw(&mut self) -> Result<u16, Self::Error>;
}

/// Adapter implementing [`DigitalReadable`] for any embedded-hal input pin
///
/// TinkerKit digital modules pull the line high when active, so
/// [`DigitalPin::new`] treats a high pin as the active level. For switches
/// wired against a pull-up, use [`DigitalPin::active_low`] to invert.
pub struct DigitalPin<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> DigitalPin<P> {
    /// Wrap a pin whose high level is the active state
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Wrap a pin whose low level is the active state
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }
}

impl<P: InputPin> DigitalReadable for DigitalPin<P> {
    type Error = P::Error;

    fn read_level(&mut self) -> Result<bool, Self::Error> {
        let high = self.pin.is_high()?;
        Ok(high != self.active_low)
    }
}

/// Two single-channel sources combined into a 2-axis source
///
/// Both channels must share an error type, the same way a platform's ADC
/// driver yields uniformly-typed channels.
pub struct AnalogPair<X, Y> {
    x: X,
    y: Y,
}

impl<X, Y> AnalogPair<X, Y> {
    /// Combine an X-axis and a Y-axis channel
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }
}

impl<X, Y, E> DualAnalogReadable for AnalogPair<X, Y>
where
    X: AnalogReadable<Error = E>,
    Y: AnalogReadable<Error = E>,
    E: Debug,
{
    type Error = E;

    fn read_x_raw(&mut self) -> Result<u16, Self::Error> {
        self.x.read_raw()
    }

    fn read_y_raw(&mut self) -> Result<u16, Self::Error> {
        self.y.read_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    struct FakePin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    struct FixedChannel(u16);

    impl AnalogReadable for FixedChannel {
        type Error = Infallible;

        fn read_raw(&mut self) -> Result<u16, Self::Error> {
            Ok(self.0)
        }
    }

    #[test]
    fn active_high_pin_follows_level() {
        let mut src = DigitalPin::new(FakePin { high: true });
        assert_eq!(src.read_level(), Ok(true));

        let mut src = DigitalPin::new(FakePin { high: false });
        assert_eq!(src.read_level(), Ok(false));
    }

    #[test]
    fn active_low_pin_inverts_level() {
        let mut src = DigitalPin::active_low(FakePin { high: false });
        assert_eq!(src.read_level(), Ok(true));

        let mut src = DigitalPin::active_low(FakePin { high: true });
        assert_eq!(src.read_level(), Ok(false));
    }

    #[test]
    fn pair_routes_axes() {
        let mut pair = AnalogPair::new(FixedChannel(100), FixedChannel(900));
        assert_eq!(pair.read_x_raw(), Ok(100));
        assert_eq!(pair.read_y_raw(), Ok(900));
    }
}
