//! Pure sample conversion routines
//!
//! Every function here is a total, stateless mapping from raw 10-bit ADC
//! samples to a physical or classified quantity (the one exception is the
//! thermistor at raw 0, which has no defined resistance and returns `None`).
//! The sampling shells in [`analog`](crate::analog) are thin wrappers over
//! these functions; keeping the math free of I/O keeps it testable on its
//! own.
//!
//! The constants reproduce the deployed module behavior exactly; changing
//! them changes readings on hardware that has been characterized against
//! the originals.

/// Full-scale raw sample of the 10-bit ADC
pub const TK_MAX: u16 = 1023;

/// Zero-g ADC offset of the accelerometer module
pub const ZERO_G_OFFSET: i32 = 478;

/// ADC counts per g of acceleration
const COUNTS_PER_G: f32 = 96.0;

/// Zero-field reference sample of the hall sensor
const ZERO_FIELD: u16 = 512;

// Thermistor circuit constants: 10 kOhm balance resistor against a 4.7 kOhm
// (at 25 C) NTC element with Beta = 3950.
// G_INF = 1/R_inf, R_inf = R0 * e^(-Beta/T0) = 4700 * e^(-3950/298.15)
const ADC_SPAN: f32 = 1023.0;
const BETA: f32 = 3950.0;
const KELVIN: f32 = 273.15;
const R_BALANCE: f32 = 10_000.0;
const G_INF: f32 = 120.6685;

// Gyro datasheet values, both scaled by 1000 to stay in integer math:
// 4.88 mV per ADC count, 0.334 mV/deg/s sensitivity of the 1x module
// (the module amplifies the bare element's output 2x).
const MV_PER_COUNT_X1000: i32 = 4_880;
const SENSITIVITY_X1_MV_PER_DPS_X1000: i32 = 334;

/// Magnetic pole facing a hall sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    North,
    South,
}

/// Gyroscope module variant
///
/// The 4x module amplifies the element output four times as much as the
/// 1x module, quartering the angular rate each ADC count represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroModel {
    X1,
    X4,
}

/// Linearly map a raw sample onto `out_min..=out_max`
///
/// Integer arithmetic with truncating division; raw 0 maps to `out_min`
/// and raw 1023 to `out_max` exactly.
pub fn map_range(raw: u16, out_min: i32, out_max: i32) -> i32 {
    i32::from(raw) * (out_max - out_min) / i32::from(TK_MAX) + out_min
}

/// Quantize a raw sample into `steps` buckets
///
/// Floor semantics; the result is always in `0..steps` for `steps >= 1`.
/// The divisor is 1024 rather than 1023 so the top bucket closes: raw 1023
/// lands in bucket `steps - 1`, never `steps`.
pub fn step_index(raw: u16, steps: u16) -> u16 {
    (u32::from(raw) * u32::from(steps) / (u32::from(TK_MAX) + 1)) as u16
}

/// Convert a raw thermistor sample to degrees Celsius
///
/// Computes the element resistance from the voltage-divider relation, then
/// applies the Beta-parameter form of the Steinhart-Hart equation. Returns
/// `None` for raw 0, which the divider relation cannot represent.
pub fn thermistor_celsius(raw: u16) -> Option<f32> {
    if raw == 0 {
        return None;
    }
    let resistance = R_BALANCE * (ADC_SPAN / f32::from(raw) - 1.0);
    Some(BETA / libm::logf(resistance * G_INF) - KELVIN)
}

/// Convert a raw thermistor sample to degrees Fahrenheit
pub fn thermistor_fahrenheit(raw: u16) -> Option<f32> {
    thermistor_celsius(raw).map(|c| c * 9.0 / 5.0 + 32.0)
}

/// Classify the pole facing a hall sensor
///
/// Samples above the zero-field reference (512) read as north; everything
/// else, the reference itself included, reads as south.
pub fn hall_polarity(raw: u16) -> Polarity {
    if raw > ZERO_FIELD {
        Polarity::North
    } else {
        Polarity::South
    }
}

/// Angular rate represented by one ADC count, in milli-degrees/second
pub const fn milli_dps_per_count(model: GyroModel) -> i32 {
    let x1 = MV_PER_COUNT_X1000 * 1000 / SENSITIVITY_X1_MV_PER_DPS_X1000;
    match model {
        GyroModel::X1 => x1,
        GyroModel::X4 => x1 / 4,
    }
}

/// Convert a raw gyro axis sample to an angular rate in degrees/second
///
/// `zero` is the at-rest baseline captured by calibration; a sample equal
/// to the baseline yields exactly 0.
pub fn gyro_axis_rate(raw: u16, zero: i32, model: GyroModel) -> i32 {
    (i32::from(raw) - zero) * milli_dps_per_count(model) / 1000
}

/// Convert a raw accelerometer axis sample to g-force
pub fn accel_g_force(raw: u16) -> f32 {
    (i32::from(raw) - ZERO_G_OFFSET) as f32 / COUNTS_PER_G
}

/// Derive an inclination angle from the two accelerometer axes
///
/// The tilt magnitude is the combined in-plane g-force, clamped to 1 g;
/// the angle is its arcsine in whole degrees, `0..=90`. Monotonic in tilt
/// magnitude and symmetric across quadrants.
pub fn accel_inclination(x_raw: u16, y_raw: u16) -> i16 {
    let gx = accel_g_force(x_raw);
    let gy = accel_g_force(y_raw);
    let magnitude = libm::sqrtf(gx * gx + gy * gy);
    let clamped = if magnitude > 1.0 { 1.0 } else { magnitude };
    let degrees = libm::asinf(clamped) * 180.0 / core::f32::consts::PI;
    libm::roundf(degrees) as i16
}
