// src/session/mod.rs

mod cache;
mod update;

#[cfg(test)]
mod mock;

use crate::common::{
    error::EssError,
    frame::{BusProfile, EssConfig},
    hal_traits::{EssBus, EssTimer},
    types::{AirQualityReading, ThermalReading},
};
use cache::CachedReading;
use log::{info, warn};

/// A driver session for one SHTC3 + SGP30 sensor pair.
///
/// Owns the bus/timer interface, the configuration and the per-sensor caches.
/// Every getter refreshes its sensor family when the cached value is at least
/// 800 ms old and otherwise serves the cache without bus traffic.
///
/// A failed refresh still starts a new 800 ms window: the failing call
/// returns the error, and calls inside that window return the last verified
/// values without retrying.
#[derive(Debug)]
pub struct EssSession<IF>
where
    IF: EssBus + EssTimer,
{
    interface: IF,
    config: Option<EssConfig>,
    thermal: CachedReading<ThermalReading>,
    air_quality: CachedReading<AirQualityReading>,
}

impl<IF> EssSession<IF>
where
    IF: EssBus + EssTimer,
{
    /// Creates an unconfigured session. No bus traffic happens until a
    /// configuration is applied.
    pub fn new(interface: IF) -> Self {
        EssSession {
            interface,
            config: None,
            thermal: CachedReading::new(),
            air_quality: CachedReading::new(),
        }
    }

    /// Initializes the session.
    ///
    /// With a configuration: applies it, starts the air-quality algorithm and
    /// primes both caches. Only an air-quality start failure is returned. A
    /// rejected configuration is logged and any earlier one stays in use; with
    /// none at all the start command fails as not configured. A failed priming
    /// read is logged and left for the next getter call. Without a
    /// configuration: marks the session unconfigured.
    pub fn init(&mut self, config: Option<EssConfig>) -> Result<(), EssError<IF::Error>> {
        let Some(config) = config else {
            self.config = None;
            return Ok(());
        };

        if let Err(e) = self.set_configuration(config) {
            warn!("init continuing without new configuration: {}", e);
        }
        self.init_air_quality()?;

        if let Err(e) = self.update_thermal() {
            warn!("thermal priming failed: {}", e);
        }
        if let Err(e) = self.update_air_quality() {
            warn!("air-quality priming failed: {}", e);
        }
        Ok(())
    }

    /// Programs the bus with the sensor profile and stores `config`.
    ///
    /// On failure the previous configuration, if any, is kept.
    pub fn set_configuration(&mut self, config: EssConfig) -> Result<(), EssError<IF::Error>> {
        self.interface
            .configure(config.bus, BusProfile::SENSOR_PAIR)
            .map_err(EssError::Io)
            .inspect_err(|e| warn!("configuring {} failed: {}", config.bus, e))?;

        self.config = Some(config);
        info!("session configured on {}", config.bus);
        Ok(())
    }

    /// Same as [`set_configuration`](Self::set_configuration) but rejects a missing configuration.
    pub fn try_set_configuration(
        &mut self,
        config: Option<EssConfig>,
    ) -> Result<(), EssError<IF::Error>> {
        match config {
            Some(config) => self.set_configuration(config),
            None => Err(EssError::MissingConfiguration),
        }
    }

    /// The stored configuration.
    pub fn configuration(&self) -> Result<EssConfig, EssError<IF::Error>> {
        self.config.ok_or(EssError::NotConfigured)
    }

    /// Whether a configuration has been applied.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    // --- Public Blocking Readings ---

    /// Temperature in degrees Celsius.
    pub fn temperature(&mut self) -> Result<f32, EssError<IF::Error>> {
        Ok(self.thermal()?.temperature_celsius)
    }

    /// Relative humidity in percent.
    pub fn humidity(&mut self) -> Result<f32, EssError<IF::Error>> {
        Ok(self.thermal()?.humidity_percent)
    }

    /// Total VOC in ppb.
    pub fn tvoc(&mut self) -> Result<u16, EssError<IF::Error>> {
        Ok(self.air_quality()?.tvoc_ppb)
    }

    /// CO2 equivalent in ppm.
    pub fn co2eq(&mut self) -> Result<u16, EssError<IF::Error>> {
        Ok(self.air_quality()?.co2eq_ppm)
    }

    /// Temperature and humidity from the same measurement.
    pub fn thermal(&mut self) -> Result<ThermalReading, EssError<IF::Error>> {
        self.update_thermal()?;
        Ok(self.thermal.reading())
    }

    /// TVOC and CO2eq from the same measurement.
    pub fn air_quality(&mut self) -> Result<AirQualityReading, EssError<IF::Error>> {
        self.update_air_quality()?;
        Ok(self.air_quality.reading())
    }

    /// Consumes the session and hands back the interface.
    pub fn release(self) -> IF {
        self.interface
    }
}
