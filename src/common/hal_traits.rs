// src/common/hal_traits.rs

use super::address::{BusHandle, DeviceAddr};
use super::frame::BusProfile;
use core::convert::Infallible;
use core::fmt::Debug;

/// Abstraction for the monotonic clock and measurement delays.
pub trait EssTimer {
    /// Milliseconds since boot. Must never decrease.
    fn uptime_ms(&self) -> u64;

    /// Arms a countdown of at least `ms` milliseconds.
    fn start_delay(&mut self, ms: u32);

    /// Polls the countdown armed by `start_delay`.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` until the full delay has elapsed.
    /// Implementations may yield to other host work before returning.
    fn poll_delay(&mut self) -> nb::Result<(), Infallible>;
}

/// Abstraction for the two-wire bus the sensors sit on.
pub trait EssBus {
    /// Associated error type for bus errors.
    type Error: Debug;

    /// Programs the peripheral behind `bus` with the given profile.
    fn configure(&mut self, bus: BusHandle, profile: BusProfile) -> Result<(), Self::Error>;

    /// Writes `bytes` to the device at `address` as one transfer.
    fn write(
        &mut self,
        bus: BusHandle,
        address: DeviceAddr,
        bytes: &[u8],
    ) -> Result<(), Self::Error>;

    /// Reads exactly `buffer.len()` bytes from the device at `address`.
    fn read(
        &mut self,
        bus: BusHandle,
        address: DeviceAddr,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error>;
}

/// Adapter exposing any `embedded_hal::i2c::I2c` as an [`EssBus`].
///
/// The HAL peripheral is configured when it is constructed, so `configure`
/// only records the requested profile. The bus handle is ignored: the adapter
/// owns exactly one bus.
#[cfg(feature = "impl-native")]
#[derive(Debug)]
pub struct NativeBus<I2C> {
    i2c: I2C,
    profile: Option<BusProfile>,
}

#[cfg(feature = "impl-native")]
impl<I2C> NativeBus<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2C) -> Self {
        NativeBus { i2c, profile: None }
    }

    /// Profile most recently requested through `configure`.
    pub fn profile(&self) -> Option<BusProfile> {
        self.profile
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(feature = "impl-native")]
impl<I2C> EssBus for NativeBus<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = I2C::Error;

    fn configure(&mut self, _bus: BusHandle, profile: BusProfile) -> Result<(), Self::Error> {
        self.profile = Some(profile);
        Ok(())
    }

    fn write(
        &mut self,
        _bus: BusHandle,
        address: DeviceAddr,
        bytes: &[u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write(address.as_u8(), bytes)
    }

    fn read(
        &mut self,
        _bus: BusHandle,
        address: DeviceAddr,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.read(address.as_u8(), buffer)
    }
}

/// Adapter building an [`EssTimer`] from an `embedded_hal::delay::DelayNs`
/// and an uptime source.
///
/// The countdown is served by blocking in the HAL delay on the first poll,
/// so it never reports `WouldBlock`.
#[cfg(feature = "impl-native")]
pub struct NativeTimer<D, F> {
    delay: D,
    uptime: F,
    pending_ms: u32,
}

#[cfg(feature = "impl-native")]
impl<D, F> NativeTimer<D, F>
where
    D: embedded_hal::delay::DelayNs,
    F: Fn() -> u64,
{
    pub fn new(delay: D, uptime: F) -> Self {
        NativeTimer { delay, uptime, pending_ms: 0 }
    }
}

#[cfg(feature = "impl-native")]
impl<D, F> EssTimer for NativeTimer<D, F>
where
    D: embedded_hal::delay::DelayNs,
    F: Fn() -> u64,
{
    fn uptime_ms(&self) -> u64 {
        (self.uptime)()
    }

    fn start_delay(&mut self, ms: u32) {
        self.pending_ms = ms;
    }

    fn poll_delay(&mut self) -> nb::Result<(), Infallible> {
        let ms = core::mem::take(&mut self.pending_ms);
        if ms > 0 {
            self.delay.delay_ms(ms);
        }
        Ok(())
    }
}

/// A bus and a timer bundled into the single interface a session owns.
#[derive(Debug)]
pub struct Interface<B, T> {
    pub bus: B,
    pub timer: T,
}

impl<B, T> Interface<B, T> {
    pub fn new(bus: B, timer: T) -> Self {
        Interface { bus, timer }
    }
}

impl<B: EssBus, T> EssBus for Interface<B, T> {
    type Error = B::Error;

    fn configure(&mut self, bus: BusHandle, profile: BusProfile) -> Result<(), Self::Error> {
        self.bus.configure(bus, profile)
    }

    fn write(
        &mut self,
        bus: BusHandle,
        address: DeviceAddr,
        bytes: &[u8],
    ) -> Result<(), Self::Error> {
        self.bus.write(bus, address, bytes)
    }

    fn read(
        &mut self,
        bus: BusHandle,
        address: DeviceAddr,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.bus.read(bus, address, buffer)
    }
}

impl<B, T: EssTimer> EssTimer for Interface<B, T> {
    fn uptime_ms(&self) -> u64 {
        self.timer.uptime_ms()
    }

    fn start_delay(&mut self, ms: u32) {
        self.timer.start_delay(ms)
    }

    fn poll_delay(&mut self) -> nb::Result<(), Infallible> {
        self.timer.poll_delay()
    }
}
