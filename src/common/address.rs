// src/common/address.rs

use core::fmt;

/// Opaque identifier of the bus instance a session talks through.
///
/// The driver never interprets the value; it is handed back verbatim to the
/// transport on every call.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct BusHandle(u32);

impl BusHandle {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        BusHandle(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl From<u32> for BusHandle {
    fn from(value: u32) -> Self {
        BusHandle(value)
    }
}

impl From<BusHandle> for u32 {
    fn from(value: BusHandle) -> Self {
        value.0
    }
}

impl fmt::Display for BusHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bus#{}", self.0)
    }
}

/// 7-bit address of a device on the bus.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct DeviceAddr(u8);

impl DeviceAddr {
    /// SHTC3 temperature/humidity sensor.
    pub const THERMAL: DeviceAddr = DeviceAddr(0x70);
    /// SGP30 air-quality sensor.
    pub const AIR_QUALITY: DeviceAddr = DeviceAddr(0x58);

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl From<DeviceAddr> for u8 {
    fn from(value: DeviceAddr) -> Self {
        value.0
    }
}

impl fmt::Display for DeviceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
