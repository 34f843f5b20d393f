// src/session/update.rs

use super::EssSession;
use crate::common::{
    address::BusHandle,
    command::{Command, MEASUREMENT_RESPONSE_LEN},
    crc::verify_frame,
    error::EssError,
    hal_traits::{EssBus, EssTimer},
    timing,
    types::{AirQualityReading, ThermalReading},
};
use log::{debug, trace, warn};

// Per-sensor read / verify / convert / cache pipeline
impl<IF> EssSession<IF>
where
    IF: EssBus + EssTimer,
{
    /// Refreshes the temperature/humidity cache if it has gone stale.
    pub(super) fn update_thermal(&mut self) -> Result<(), EssError<IF::Error>> {
        let now = self.interface.uptime_ms();
        if !self.thermal.claim_refresh(now) {
            trace!(
                "thermal cache fresh at {} ms (last refresh {:?})",
                now,
                self.thermal.last_update_ms()
            );
            return Ok(());
        }

        let (raw_temperature, raw_humidity) = self
            .measure(Command::MeasureThermal)
            .inspect_err(|e| warn!("thermal refresh failed: {}", e))?;

        let reading = ThermalReading::from_raw(raw_temperature, raw_humidity);
        debug!(
            "thermal refreshed: {} C, {} %RH",
            reading.temperature_celsius, reading.humidity_percent
        );
        self.thermal.store(reading);
        Ok(())
    }

    /// Refreshes the TVOC/CO2eq cache if it has gone stale.
    pub(super) fn update_air_quality(&mut self) -> Result<(), EssError<IF::Error>> {
        let now = self.interface.uptime_ms();
        if !self.air_quality.claim_refresh(now) {
            trace!(
                "air-quality cache fresh at {} ms (last refresh {:?})",
                now,
                self.air_quality.last_update_ms()
            );
            return Ok(());
        }

        let (raw_co2eq, raw_tvoc) = self
            .measure(Command::MeasureAirQuality)
            .inspect_err(|e| warn!("air-quality refresh failed: {}", e))?;

        let reading = AirQualityReading::from_raw(raw_co2eq, raw_tvoc);
        debug!(
            "air quality refreshed: {} ppb TVOC, {} ppm CO2eq",
            reading.tvoc_ppb, reading.co2eq_ppm
        );
        self.air_quality.store(reading);
        Ok(())
    }

    /// Sends the air-quality algorithm start command. Expects no response.
    pub(super) fn init_air_quality(&mut self) -> Result<(), EssError<IF::Error>> {
        let bus = self.bus()?;
        self.send_command(bus, Command::InitAirQuality)
            .inspect_err(|e| warn!("air-quality init failed: {}", e))
    }

    // --- Transaction Helpers ---

    /// Runs one measurement: command, full measurement wait, six-byte read, CRC check.
    fn measure(&mut self, command: Command) -> Result<(u16, u16), EssError<IF::Error>> {
        let bus = self.bus()?;
        self.send_command(bus, command)?;

        if let Some(delay) = command.measurement_delay() {
            self.wait_ms(timing::as_millis_u32(delay));
        }

        let mut frame = [0u8; MEASUREMENT_RESPONSE_LEN];
        self.interface
            .read(bus, command.address(), &mut frame)
            .map_err(EssError::Io)?;

        verify_frame(&frame)
    }

    fn send_command(
        &mut self,
        bus: BusHandle,
        command: Command,
    ) -> Result<(), EssError<IF::Error>> {
        trace!("sending {} on {}", command, bus);
        self.interface
            .write(bus, command.address(), &command.bytes())
            .map_err(EssError::Io)
    }

    /// Blocks until the host timer reports the full delay has elapsed.
    fn wait_ms(&mut self, ms: u32) {
        self.interface.start_delay(ms);
        nb::block!(self.interface.poll_delay()).unwrap_or_else(|never| match never {});
    }

    fn bus(&self) -> Result<BusHandle, EssError<IF::Error>> {
        self.config.map(|c| c.bus).ok_or(EssError::NotConfigured)
    }
}
