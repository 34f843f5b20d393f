// src/common/frame.rs

use super::address::BusHandle;

/// Role this driver takes on the bus.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BusMode {
    Master,
    Slave,
}

/// Bus clock rate class.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BusSpeed {
    /// 100 kHz.
    Standard,
    /// 400 kHz.
    Fast,
}

/// Peripheral profile programmed into the transport before any transaction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BusProfile {
    pub mode: BusMode,
    pub speed: BusSpeed,
}

impl BusProfile {
    /// Both sensors are driven as a master at standard speed.
    pub const SENSOR_PAIR: BusProfile = BusProfile {
        mode: BusMode::Master,
        speed: BusSpeed::Standard,
    };
}

/// Session configuration: which bus instance to use.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct EssConfig {
    pub bus: BusHandle,
}

impl EssConfig {
    pub const fn new(bus: BusHandle) -> Self {
        EssConfig { bus }
    }
}
