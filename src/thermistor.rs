//! Thermistor temperature estimation.
//!
//! The sensor is a 10k NTC thermistor in a divider with a 10k series
//! resistor, read through a 12-bit ADC. Conversion uses the simplified
//! Beta-parameter equation.

/// Reported when the ADC reads zero and no resistance can be derived.
/// Callers render it as-is instead of failing.
pub const SENSOR_FAULT_C: i16 = -999;

const ADC_MAX: f32 = 4095.0;
const SERIES_RESISTOR_OHMS: f32 = 10_000.0;
const NOMINAL_RESISTANCE_OHMS: f32 = 10_000.0;
const NOMINAL_TEMPERATURE_K: f32 = 298.15; // 25C reference point
const BETA_COEFFICIENT: f32 = 3950.0;
const KELVIN_OFFSET: f32 = 273.15;

/// Converts a raw 12-bit ADC reading into whole degrees Celsius.
/// param raw: ADC counts in [0, 4095]
/// returns the rounded temperature, or SENSOR_FAULT_C for a zero reading
pub fn celsius_from_raw(raw: u16) -> i16 {
    if raw == 0 {
        return SENSOR_FAULT_C;
    }

    let resistance = (ADC_MAX / raw as f32 - 1.0) * SERIES_RESISTOR_OHMS;

    let mut inv_temperature = libm::logf(resistance / NOMINAL_RESISTANCE_OHMS) / BETA_COEFFICIENT;
    inv_temperature += 1.0 / NOMINAL_TEMPERATURE_K;
    let celsius = 1.0 / inv_temperature - KELVIN_OFFSET;

    libm::roundf(celsius) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_reading_yields_sentinel() {
        assert_eq!(celsius_from_raw(0), SENSOR_FAULT_C);
    }

    #[test]
    fn midrange_reading_is_calibration_point() {
        // 4095/2048 - 1 leaves ~9995 ohms, right at the 25C reference.
        assert_eq!(celsius_from_raw(2048), 25);
    }

    #[test]
    fn every_nonzero_reading_is_finite_and_plausible() {
        // The extremes are physically silly (a near-shorted divider
        // reads hundreds of degrees) but must stay finite.
        for raw in 1..=4095u16 {
            let c = celsius_from_raw(raw);
            assert!((-274..600).contains(&c), "raw {} gave {}", raw, c);
        }
    }

    #[test]
    fn sentinel_is_outside_the_valid_range() {
        for raw in 1..=4095u16 {
            assert_ne!(celsius_from_raw(raw), SENSOR_FAULT_C);
        }
    }

    #[test]
    fn warmer_readings_for_higher_counts() {
        // Higher counts mean lower thermistor resistance on this divider,
        // which maps to higher temperature.
        assert!(celsius_from_raw(3000) > celsius_from_raw(2048));
        assert!(celsius_from_raw(1000) < celsius_from_raw(2048));
    }
}
