//! Debounced digital input
//!
//! [`DebouncedInput`] turns the noisy raw level of a digital line into
//! single-pulse press/release events, a level-sensitive hold flag, and a
//! toggle latch. Edges are detected by comparing consecutive polls; there
//! is no internal timing filter, so the polling cadence (and with it any
//! residual contact bounce) is under the caller's control.

use crate::error::Error;
use crate::io::DigitalReadable;

/// Edge-detecting poll state machine over a digital source
///
/// Call [`sample()`](Self::sample) once per poll cycle, then read the
/// event flags. [`pressed()`](Self::pressed) and
/// [`released()`](Self::released) are true for exactly the one sample on
/// which the level transitioned; [`held()`](Self::held) is true for every
/// sample at the active level.
pub struct DebouncedInput<D> {
    source: D,
    level: bool,
    pressed: bool,
    released: bool,
    toggle: bool,
}

/// A push button module
pub type Button<D> = DebouncedInput<D>;

/// A capacitive touch module, behaviorally identical to a button
pub type TouchSensor<D> = DebouncedInput<D>;

/// A tilt switch module, behaviorally identical to a button
pub type TiltSwitch<D> = DebouncedInput<D>;

impl<D: DigitalReadable> DebouncedInput<D> {
    /// Wrap a digital source; the line starts out considered inactive
    pub fn new(source: D) -> Self {
        Self {
            source,
            level: false,
            pressed: false,
            released: false,
            toggle: false,
        }
    }

    /// Poll the line once and recompute all event flags
    ///
    /// On a source error the previous state is left untouched and the
    /// error is returned.
    pub fn sample(&mut self) -> Result<(), Error<D::Error>> {
        let raw = self.source.read_level().map_err(Error::Source)?;
        self.pressed = raw && !self.level;
        self.released = !raw && self.level;
        if self.pressed {
            self.toggle = !self.toggle;
        }
        self.level = raw;
        Ok(())
    }

    /// True exactly once per inactive-to-active transition
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// True exactly once per active-to-inactive transition
    pub fn released(&self) -> bool {
        self.released
    }

    /// True for every sample at the active level, transitions included
    pub fn held(&self) -> bool {
        self.level
    }

    /// The level seen by the most recent [`sample()`](Self::sample)
    pub fn level(&self) -> bool {
        self.level
    }

    /// Latch that flips on every press, like a soft on/off switch
    pub fn toggled(&self) -> bool {
        self.toggle
    }
}
