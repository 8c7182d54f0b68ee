//! Board pin configuration tables
//!
//! TinkerKit shields label their sockets I0..In (analog inputs) and
//! O0..O5 (PWM outputs); which microcontroller pin sits behind each label
//! depends on the board the shield is stacked on. Rather than baking one
//! variant in behind compile-time pin constants, the mapping is an
//! explicit table chosen at startup, so one binary can support several
//! board variants.
//!
//! ```
//! use tinkerkit::BoardPinout;
//!
//! let board = BoardPinout::MEGA;
//! let channel = board.input(7).expect("Mega-class boards expose I7");
//! // hand `channel` to the platform ADC driver
//! ```

/// Socket-label-to-pin table for one board variant
///
/// All entries are raw pin or ADC channel numbers as the platform I/O
/// layer understands them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPinout {
    name: &'static str,
    analog_inputs: &'static [u8],
    pwm_outputs: &'static [u8],
    digital_pins: &'static [u8],
}

impl BoardPinout {
    /// Uno-class boards: inputs I0-I5, outputs O0-O5
    pub const UNO: BoardPinout = BoardPinout {
        name: "uno",
        analog_inputs: &[0, 1, 2, 3, 4, 5],
        pwm_outputs: &[11, 10, 9, 6, 5, 3],
        digital_pins: &[],
    };

    /// Mega-class boards: adds inputs I6-I9 and six plain digital pins
    pub const MEGA: BoardPinout = BoardPinout {
        name: "mega",
        analog_inputs: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        pwm_outputs: &[11, 10, 9, 6, 5, 3],
        digital_pins: &[13, 12, 8, 7, 4, 2],
    };

    /// Describe a custom board variant
    pub const fn new(
        name: &'static str,
        analog_inputs: &'static [u8],
        pwm_outputs: &'static [u8],
        digital_pins: &'static [u8],
    ) -> Self {
        Self {
            name,
            analog_inputs,
            pwm_outputs,
            digital_pins,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// ADC channel behind socket In, if this variant has one
    pub fn input(&self, n: usize) -> Option<u8> {
        self.analog_inputs.get(n).copied()
    }

    /// PWM pin behind socket On, if this variant has one
    pub fn output(&self, n: usize) -> Option<u8> {
        self.pwm_outputs.get(n).copied()
    }

    /// Plain digital pin behind socket Dn, if this variant has one
    pub fn digital(&self, n: usize) -> Option<u8> {
        self.digital_pins.get(n).copied()
    }

    pub const fn input_count(&self) -> usize {
        self.analog_inputs.len()
    }

    pub const fn output_count(&self) -> usize {
        self.pwm_outputs.len()
    }
}
