//! Sensor command definitions.
//!
//! Every command is a fixed 16-bit code sent MSB first. Commands that
//! produce data are followed by a measurement wait and a six-byte read of two
//! CRC-protected words.

use core::fmt;
use core::time::Duration;

use super::{address::DeviceAddr, crc::WORD_WITH_CRC_LEN, timing};

/// Length of every command code on the wire.
pub const COMMAND_LEN: usize = 2;

/// Length of a measurement response: two words, each followed by its CRC.
pub const MEASUREMENT_RESPONSE_LEN: usize = 2 * WORD_WITH_CRC_LEN;

/// Represents a command understood by one of the two sensors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// SHTC3 measure, normal mode, temperature first, clock stretching disabled.
    MeasureThermal,

    /// SGP30 `iaq_init`: starts the air-quality algorithm. No response.
    InitAirQuality,

    /// SGP30 `measure_iaq`: returns CO2eq then TVOC.
    MeasureAirQuality,
}

impl Command {
    /// Raw command bytes, MSB first.
    pub const fn bytes(&self) -> [u8; COMMAND_LEN] {
        match self {
            Command::MeasureThermal => [0x78, 0x66],
            Command::InitAirQuality => [0x20, 0x03],
            Command::MeasureAirQuality => [0x20, 0x08],
        }
    }

    /// Device the command is addressed to.
    pub const fn address(&self) -> DeviceAddr {
        match self {
            Command::MeasureThermal => DeviceAddr::THERMAL,
            Command::InitAirQuality | Command::MeasureAirQuality => DeviceAddr::AIR_QUALITY,
        }
    }

    /// Time to wait between sending the command and reading its response.
    pub const fn measurement_delay(&self) -> Option<Duration> {
        match self {
            Command::MeasureThermal => Some(timing::THERMAL_MEASUREMENT_DELAY),
            Command::MeasureAirQuality => Some(timing::AIR_QUALITY_MEASUREMENT_DELAY),
            Command::InitAirQuality => None,
        }
    }

    /// Number of bytes the sensor returns.
    pub const fn response_len(&self) -> usize {
        match self {
            Command::MeasureThermal | Command::MeasureAirQuality => MEASUREMENT_RESPONSE_LEN,
            Command::InitAirQuality => 0,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [msb, lsb] = self.bytes();
        write!(f, "0x{:02X}{:02X}@{}", msb, lsb, self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_bytes() {
        assert_eq!(Command::MeasureThermal.bytes(), [0x78, 0x66]);
        assert_eq!(Command::InitAirQuality.bytes(), [0x20, 0x03]);
        assert_eq!(Command::MeasureAirQuality.bytes(), [0x20, 0x08]);
    }

    #[test]
    fn test_command_routing() {
        assert_eq!(Command::MeasureThermal.address(), DeviceAddr::THERMAL);
        assert_eq!(Command::InitAirQuality.address(), DeviceAddr::AIR_QUALITY);
        assert_eq!(Command::MeasureAirQuality.address(), DeviceAddr::AIR_QUALITY);
    }

    #[test]
    fn test_command_timing_and_response() {
        assert_eq!(Command::MeasureThermal.measurement_delay(), Some(Duration::from_millis(15)));
        assert_eq!(Command::MeasureAirQuality.measurement_delay(), Some(Duration::from_millis(50)));
        assert_eq!(Command::InitAirQuality.measurement_delay(), None);
        assert_eq!(Command::MeasureThermal.response_len(), 6);
        assert_eq!(Command::InitAirQuality.response_len(), 0);
    }
}
