//! Fix quality checks

pub mod plausibility;
pub mod satellite;

pub use plausibility::is_implausible;
pub use satellite::LowSatelliteEpisode;
