// src/lib.rs

#![cfg_attr(not(test), no_std)]

pub mod common;
pub mod session;

// Re-export key types for convenience
pub use common::{BusHandle, EssConfig, EssError, EssStatus};
pub use session::EssSession;
