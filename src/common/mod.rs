// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod command;
pub mod crc;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::{BusHandle, DeviceAddr};

// From command.rs
pub use command::Command;

// From crc.rs
pub use crc::{calculate_crc8, verify_frame, verify_word};

// From error.rs
pub use error::{EssError, EssStatus};

// From frame.rs
pub use frame::{BusMode, BusProfile, BusSpeed, EssConfig};

// From hal_traits.rs
pub use hal_traits::{EssBus, EssTimer, Interface};

// From types.rs
pub use types::{humidity_from_raw, temperature_from_raw, AirQualityReading, ThermalReading};

// --- Feature-gated re-exports ---

// Native HAL adapters (from hal_traits.rs)
#[cfg(feature = "impl-native")]
pub use hal_traits::{NativeBus, NativeTimer};
