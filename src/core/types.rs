//! Core data types for position arbitration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of source a fix came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// High-precision satellite receiver
    Satellite,
    /// Coarse network-derived location
    Network,
}

impl Provider {
    /// Short lowercase name, as shown to the user
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Satellite => "gps",
            Provider::Network => "network",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Monotonic capture time in milliseconds.
///
/// The default is [`Timestamp::EPOCH`]; bookkeeping that has never been
/// touched has an [`age_of`](Timestamp::age_of) of `u64::MAX`, so it reads as
/// already expired rather than as missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Timestamp = Timestamp(0);

    pub const fn from_millis(ms: u64) -> Self {
        Timestamp(ms)
    }

    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`, zero if `earlier` is in the future
    pub fn millis_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Age of a recorded arrival time. EPOCH means nothing was ever recorded
    /// and is older than any timeout.
    pub fn age_of(&self, recorded: Timestamp) -> u64 {
        if recorded == Timestamp::EPOCH {
            u64::MAX
        } else {
            self.millis_since(recorded)
        }
    }
}

/// A single reported fix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub provider: Provider,
    /// Degrees, valid range -90..=90
    pub latitude: f64,
    /// Degrees, valid range -180..=180
    pub longitude: f64,
    /// Horizontal accuracy radius in meters, if the provider reported one
    pub accuracy: Option<f64>,
    /// Ground speed in m/s
    pub speed: f64,
    pub timestamp: Timestamp,
}

impl Position {
    pub fn new(provider: Provider, latitude: f64, longitude: f64, timestamp: Timestamp) -> Self {
        Self {
            provider,
            latitude,
            longitude,
            accuracy: None,
            speed: 0.0,
            timestamp,
        }
    }

    pub fn satellite(latitude: f64, longitude: f64, timestamp: Timestamp) -> Self {
        Self::new(Provider::Satellite, latitude, longitude, timestamp)
    }

    pub fn network(latitude: f64, longitude: f64, timestamp: Timestamp) -> Self {
        Self::new(Provider::Network, latitude, longitude, timestamp)
    }

    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy = Some(accuracy_m);
        self
    }

    pub fn with_speed(mut self, speed_mps: f64) -> Self {
        self.speed = speed_mps;
        self
    }

    pub fn is_from(&self, provider: Provider) -> bool {
        self.provider == provider
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.6},{:.6}", self.provider, self.latitude, self.longitude)?;
        if let Some(accuracy) = self.accuracy {
            write!(f, " acc={:.1}m", accuracy)?;
        }
        write!(f, " spd={:.1}m/s t={}", self.speed, self.timestamp.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timestamp_is_epoch() {
        assert_eq!(Timestamp::default(), Timestamp::EPOCH);
        assert_eq!(Timestamp::from_millis(20_000).millis_since(Timestamp::EPOCH), 20_000);
    }

    #[test]
    fn test_epoch_is_always_expired() {
        assert_eq!(Timestamp::from_millis(1_000).age_of(Timestamp::EPOCH), u64::MAX);
        assert_eq!(
            Timestamp::from_millis(1_000).age_of(Timestamp::from_millis(400)),
            600
        );
    }

    #[test]
    fn test_millis_since_saturates() {
        let early = Timestamp::from_millis(1_000);
        let late = Timestamp::from_millis(4_000);
        assert_eq!(late.millis_since(early), 3_000);
        assert_eq!(early.millis_since(late), 0);
    }

    #[test]
    fn test_position_builders() {
        let pos = Position::network(47.6, -122.3, Timestamp::from_millis(5))
            .with_accuracy(1200.0)
            .with_speed(2.5);
        assert!(pos.is_from(Provider::Network));
        assert_eq!(pos.accuracy, Some(1200.0));
        assert_eq!(pos.speed, 2.5);
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(Provider::Satellite.to_string(), "gps");
        assert_eq!(Provider::Network.to_string(), "network");
    }
}
