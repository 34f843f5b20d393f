// src/common/timing.rs

use core::time::Duration;

// === Cache Staleness ===

/// A cached reading younger than this is returned without touching the bus.
pub const STALENESS_THRESHOLD: Duration = Duration::from_millis(800);

// === Measurement Latency ===

/// SHTC3 normal-mode measurement with clock stretching disabled (max 12.1 ms).
pub const THERMAL_MEASUREMENT_DELAY: Duration = Duration::from_millis(15);
/// SGP30 `measure_iaq` command execution time (max 12 ms, padded for warm-up).
pub const AIR_QUALITY_MEASUREMENT_DELAY: Duration = Duration::from_millis(50);

/// Whole milliseconds of `d`, saturating at `u32::MAX`.
#[inline]
pub(crate) fn as_millis_u32(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}
