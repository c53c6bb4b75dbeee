//! Core types and constants for position arbitration

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
