//! Best-position arbitration for mobile positioning
//!
//! Chooses a single trusted fix from a high-precision satellite source and a
//! coarse network source, fails over between them as either goes stale or
//! misbehaves, and reports when no usable position remains.

pub mod core;
pub mod validation;
pub mod arbiter;
pub mod sources;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{Position, Provider, Timestamp};
pub use crate::arbiter::{ArbiterState, FixOutcome, PositionArbiter};
pub use crate::sources::{MockSatelliteStatus, SatelliteInfo, SatelliteStatus, SatelliteStatusSource};
pub use crate::utils::config::{ArbiterConfig, ConfigError};
pub use crate::api::{Announcement, FixConsumer, ProviderStatus, RawFixListener, SatelliteEvent, TrackingSession};
