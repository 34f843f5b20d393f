// src/common/types.rs

/// Full-scale value of a 16-bit sensor word.
const WORD_FULL_SCALE: f32 = 65535.0;

/// Converts a raw SHTC3 temperature word to degrees Celsius.
#[inline]
pub fn temperature_from_raw(raw: u16) -> f32 {
    -45.0 + 175.0 * f32::from(raw) / WORD_FULL_SCALE
}

/// Converts a raw SHTC3 humidity word to percent relative humidity.
#[inline]
pub fn humidity_from_raw(raw: u16) -> f32 {
    100.0 * f32::from(raw) / WORD_FULL_SCALE
}

/// Temperature and humidity produced by one SHTC3 measurement.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ThermalReading {
    pub temperature_celsius: f32,
    pub humidity_percent: f32,
}

impl ThermalReading {
    /// Builds a reading from the two verified words of a measurement frame.
    pub fn from_raw(raw_temperature: u16, raw_humidity: u16) -> Self {
        ThermalReading {
            temperature_celsius: temperature_from_raw(raw_temperature),
            humidity_percent: humidity_from_raw(raw_humidity),
        }
    }
}

/// Air-quality values produced by one SGP30 measurement. Both are unscaled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct AirQualityReading {
    /// Total volatile organic compounds, ppb.
    pub tvoc_ppb: u16,
    /// CO2 equivalent, ppm.
    pub co2eq_ppm: u16,
}

impl AirQualityReading {
    /// The SGP30 sends CO2eq first, then TVOC.
    pub fn from_raw(raw_co2eq: u16, raw_tvoc: u16) -> Self {
        AirQualityReading {
            tvoc_ppb: raw_tvoc,
            co2eq_ppm: raw_co2eq,
        }
    }
}
