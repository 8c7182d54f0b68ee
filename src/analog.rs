//! Analog sensor sampling shells
//!
//! One type per module, each a thin wrapper that polls its
//! [`AnalogReadable`]/[`DualAnalogReadable`] source and applies the
//! matching conversion from [`convert`](crate::convert). The shells hold
//! no state beyond what the sensor semantics require (the potentiometer's
//! output range, the gyro's calibration baseline).

use embedded_hal::delay::DelayNs;

use crate::convert;
use crate::convert::{GyroModel, Polarity};
use crate::error::Error;
use crate::io::{AnalogReadable, DualAnalogReadable};

/// Rotary or slider potentiometer
///
/// Reads map linearly onto an output range, `0..=1023` unless re-targeted
/// with [`with_range()`](Self::with_range).
pub struct Potentiometer<A> {
    source: A,
    min_val: i32,
    max_val: i32,
}

impl<A: AnalogReadable> Potentiometer<A> {
    pub fn new(source: A) -> Self {
        Self {
            source,
            min_val: 0,
            max_val: i32::from(convert::TK_MAX),
        }
    }

    /// Re-target the output range of [`value()`](Self::value)
    pub fn with_range(mut self, min_val: i32, max_val: i32) -> Self {
        self.min_val = min_val;
        self.max_val = max_val;
        self
    }

    /// Sample and map onto the output range
    pub fn value(&mut self) -> Result<i32, Error<A::Error>> {
        let raw = self.source.read_raw().map_err(Error::Source)?;
        Ok(convert::map_range(raw, self.min_val, self.max_val))
    }

    /// Sample and quantize into `steps` discrete buckets
    ///
    /// The bucket index is in `0..steps`. Returns
    /// [`Error::InvalidStepCount`] for `steps == 0`.
    pub fn step(&mut self, steps: u16) -> Result<u16, Error<A::Error>> {
        if steps == 0 {
            return Err(Error::InvalidStepCount);
        }
        let raw = self.source.read_raw().map_err(Error::Source)?;
        Ok(convert::step_index(raw, steps))
    }
}

/// NTC thermistor temperature module
pub struct Thermistor<A> {
    source: A,
}

impl<A: AnalogReadable> Thermistor<A> {
    pub fn new(source: A) -> Self {
        Self { source }
    }

    /// Sample and convert to degrees Celsius
    ///
    /// Returns [`Error::ZeroSample`] if the line reads 0, which the
    /// voltage-divider relation cannot represent.
    pub fn celsius(&mut self) -> Result<f32, Error<A::Error>> {
        let raw = self.source.read_raw().map_err(Error::Source)?;
        convert::thermistor_celsius(raw).ok_or(Error::ZeroSample)
    }

    /// Sample and convert to degrees Fahrenheit
    pub fn fahrenheit(&mut self) -> Result<f32, Error<A::Error>> {
        let raw = self.source.read_raw().map_err(Error::Source)?;
        convert::thermistor_fahrenheit(raw).ok_or(Error::ZeroSample)
    }
}

/// Hall-effect magnetic pole detector
pub struct HallSensor<A> {
    source: A,
}

impl<A: AnalogReadable> HallSensor<A> {
    pub fn new(source: A) -> Self {
        Self { source }
    }

    /// Sample and classify the facing magnetic pole
    pub fn polarity(&mut self) -> Result<Polarity, Error<A::Error>> {
        let raw = self.source.read_raw().map_err(Error::Source)?;
        Ok(convert::hall_polarity(raw))
    }
}

/// Number of at-rest samples averaged per axis during gyro calibration
const CALIBRATION_SAMPLES: i32 = 50;

/// Interval between gyro calibration samples
const CALIBRATION_INTERVAL_MS: u32 = 20;

/// Two-axis analog gyroscope
///
/// Rate queries need a zero-rate baseline first: call
/// [`calibrate()`](Self::calibrate) once, with the sensor stationary,
/// before reading rates. Until then [`x_rate()`](Self::x_rate) and
/// [`y_rate()`](Self::y_rate) return [`Error::Uncalibrated`].
pub struct Gyroscope<A> {
    source: A,
    model: GyroModel,
    x_zero: i32,
    y_zero: i32,
    calibrated: bool,
}

impl<A: DualAnalogReadable> Gyroscope<A> {
    pub fn new(source: A, model: GyroModel) -> Self {
        Self {
            source,
            model,
            x_zero: 0,
            y_zero: 0,
            calibrated: false,
        }
    }

    pub fn model(&self) -> GyroModel {
        self.model
    }

    /// Capture the zero-rate baseline from the stationary sensor
    ///
    /// Averages 50 samples per axis, 20 ms apart, and overwrites any
    /// previous baseline. The sensor must not rotate while this runs; the
    /// crate cannot check that, so it is part of the usage contract. On a
    /// source error the previous baseline (and calibration state) is kept.
    pub fn calibrate<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<A::Error>> {
        let mut x_sum = 0i32;
        let mut y_sum = 0i32;
        for _ in 0..CALIBRATION_SAMPLES {
            x_sum += i32::from(self.source.read_x_raw().map_err(Error::Source)?);
            y_sum += i32::from(self.source.read_y_raw().map_err(Error::Source)?);
            delay.delay_ms(CALIBRATION_INTERVAL_MS);
        }
        self.x_zero = x_sum / CALIBRATION_SAMPLES;
        self.y_zero = y_sum / CALIBRATION_SAMPLES;
        self.calibrated = true;
        log::debug!(
            "gyro calibrated: x_zero={}, y_zero={}",
            self.x_zero,
            self.y_zero
        );
        Ok(())
    }

    /// Sample the X axis and convert to degrees/second
    pub fn x_rate(&mut self) -> Result<i32, Error<A::Error>> {
        if !self.calibrated {
            return Err(Error::Uncalibrated);
        }
        let raw = self.source.read_x_raw().map_err(Error::Source)?;
        Ok(convert::gyro_axis_rate(raw, self.x_zero, self.model))
    }

    /// Sample the Y axis and convert to degrees/second
    pub fn y_rate(&mut self) -> Result<i32, Error<A::Error>> {
        if !self.calibrated {
            return Err(Error::Uncalibrated);
        }
        let raw = self.source.read_y_raw().map_err(Error::Source)?;
        Ok(convert::gyro_axis_rate(raw, self.y_zero, self.model))
    }
}

/// Two-axis analog accelerometer
pub struct Accelerometer<A> {
    source: A,
}

impl<A: DualAnalogReadable> Accelerometer<A> {
    pub fn new(source: A) -> Self {
        Self { source }
    }

    /// Sample the X axis and convert to g-force
    pub fn x_g(&mut self) -> Result<f32, Error<A::Error>> {
        let raw = self.source.read_x_raw().map_err(Error::Source)?;
        Ok(convert::accel_g_force(raw))
    }

    /// Sample the Y axis and convert to g-force
    pub fn y_g(&mut self) -> Result<f32, Error<A::Error>> {
        let raw = self.source.read_y_raw().map_err(Error::Source)?;
        Ok(convert::accel_g_force(raw))
    }

    /// Sample both axes and derive the inclination angle in degrees
    pub fn inclination(&mut self) -> Result<i16, Error<A::Error>> {
        let x_raw = self.source.read_x_raw().map_err(Error::Source)?;
        let y_raw = self.source.read_y_raw().map_err(Error::Source)?;
        Ok(convert::accel_inclination(x_raw, y_raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::AnalogPair;
    use core::convert::Infallible;

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    struct FixedChannel(u16);

    impl AnalogReadable for FixedChannel {
        type Error = Infallible;

        fn read_raw(&mut self) -> Result<u16, Self::Error> {
            Ok(self.0)
        }
    }

    /// Returns `initial` for the first `holds` reads, then `after` forever
    struct SettlingChannel {
        initial: u16,
        after: u16,
        holds: usize,
        reads: usize,
    }

    impl SettlingChannel {
        fn new(initial: u16, after: u16, holds: usize) -> Self {
            Self {
                initial,
                after,
                holds,
                reads: 0,
            }
        }
    }

    impl AnalogReadable for SettlingChannel {
        type Error = Infallible;

        fn read_raw(&mut self) -> Result<u16, Self::Error> {
            let value = if self.reads < self.holds {
                self.initial
            } else {
                self.after
            };
            self.reads += 1;
            Ok(value)
        }
    }

    #[test]
    fn potentiometer_defaults_to_full_range() {
        let mut pot = Potentiometer::new(FixedChannel(700));
        assert_eq!(pot.value(), Ok(700));
    }

    #[test]
    fn potentiometer_maps_custom_range() {
        let mut pot = Potentiometer::new(FixedChannel(1023)).with_range(0, 100);
        assert_eq!(pot.value(), Ok(100));

        let mut pot = Potentiometer::new(FixedChannel(0)).with_range(-50, 50);
        assert_eq!(pot.value(), Ok(-50));
    }

    #[test]
    fn potentiometer_steps() {
        let mut pot = Potentiometer::new(FixedChannel(700));
        assert_eq!(pot.step(4), Ok(2));
        assert_eq!(pot.step(0), Err(Error::InvalidStepCount));
    }

    #[test]
    fn thermistor_reports_ambient_band() {
        let mut therm = Thermistor::new(FixedChannel(512));
        let c = therm.celsius().unwrap();
        assert!((0.0..30.0).contains(&c));
        let f = therm.fahrenheit().unwrap();
        assert!((f - (c * 9.0 / 5.0 + 32.0)).abs() < 1e-4);
    }

    #[test]
    fn thermistor_rejects_grounded_line() {
        let mut therm = Thermistor::new(FixedChannel(0));
        assert_eq!(therm.celsius(), Err(Error::ZeroSample));
        assert_eq!(therm.fahrenheit(), Err(Error::ZeroSample));
    }

    #[test]
    fn hall_classifies_polarity() {
        let mut hall = HallSensor::new(FixedChannel(600));
        assert_eq!(hall.polarity(), Ok(Polarity::North));

        let mut hall = HallSensor::new(FixedChannel(400));
        assert_eq!(hall.polarity(), Ok(Polarity::South));
    }

    #[test]
    fn gyro_requires_calibration() {
        let pair = AnalogPair::new(FixedChannel(500), FixedChannel(500));
        let mut gyro = Gyroscope::new(pair, GyroModel::X1);
        assert_eq!(gyro.x_rate(), Err(Error::Uncalibrated));
        assert_eq!(gyro.y_rate(), Err(Error::Uncalibrated));
    }

    #[test]
    fn gyro_reads_zero_at_baseline() {
        let pair = AnalogPair::new(FixedChannel(500), FixedChannel(520));
        let mut gyro = Gyroscope::new(pair, GyroModel::X1);
        gyro.calibrate(&mut NoopDelay).unwrap();
        assert_eq!(gyro.x_rate(), Ok(0));
        assert_eq!(gyro.y_rate(), Ok(0));
    }

    #[test]
    fn gyro_rate_after_calibration() {
        // 50 at-rest reads for calibration, then the sensor starts turning
        let x = SettlingChannel::new(500, 600, 50);
        let y = SettlingChannel::new(500, 500, 50);
        let mut gyro = Gyroscope::new(AnalogPair::new(x, y), GyroModel::X1);
        gyro.calibrate(&mut NoopDelay).unwrap();
        assert_eq!(gyro.x_rate(), Ok(1461));
        assert_eq!(gyro.y_rate(), Ok(0));
    }

    #[test]
    fn recalibration_overwrites_baseline() {
        // Baseline drifts from 500 to 600 after the first calibration pass
        let x = SettlingChannel::new(500, 600, 50);
        let y = SettlingChannel::new(500, 600, 50);
        let mut gyro = Gyroscope::new(AnalogPair::new(x, y), GyroModel::X4);
        gyro.calibrate(&mut NoopDelay).unwrap();
        gyro.calibrate(&mut NoopDelay).unwrap();
        assert_eq!(gyro.x_rate(), Ok(0));
        assert_eq!(gyro.y_rate(), Ok(0));
    }

    #[test]
    fn accelerometer_zero_offset_reads_zero_g() {
        let pair = AnalogPair::new(FixedChannel(478), FixedChannel(574));
        let mut accel = Accelerometer::new(pair);
        assert_eq!(accel.x_g(), Ok(0.0));
        assert!((accel.y_g().unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn accelerometer_inclination() {
        let pair = AnalogPair::new(FixedChannel(574), FixedChannel(478));
        let mut accel = Accelerometer::new(pair);
        assert_eq!(accel.inclination(), Ok(90));

        let pair = AnalogPair::new(FixedChannel(478), FixedChannel(478));
        let mut accel = Accelerometer::new(pair);
        assert_eq!(accel.inclination(), Ok(0));
    }
}
