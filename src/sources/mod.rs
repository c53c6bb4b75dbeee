//! Input-side collaborators
//!
//! The arbiter never talks to a receiver directly. Each tick the session asks
//! a [`SatelliteStatusSource`] for the latest satellite snapshot and derives
//! the "used in fix" count from it.

pub mod mock;

pub use mock::MockSatelliteStatus;

/// One satellite in view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteInfo {
    /// Pseudo-random noise code identifying the satellite
    pub prn: u16,
    /// Signal to noise ratio (dB-Hz)
    pub snr: f32,
    pub used_in_fix: bool,
}

/// Satellites reported by the receiver at one instant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SatelliteStatus {
    pub satellites: Vec<SatelliteInfo>,
}

impl SatelliteStatus {
    pub fn new(satellites: Vec<SatelliteInfo>) -> Self {
        Self { satellites }
    }

    pub fn used_in_fix_count(&self) -> u32 {
        self.satellites.iter().filter(|sat| sat.used_in_fix).count() as u32
    }
}

/// Provider of satellite status snapshots
pub trait SatelliteStatusSource {
    /// Latest status, or `None` if the receiver has not reported any
    fn satellite_status(&mut self) -> Option<SatelliteStatus>;

    /// Satellites currently used in the fix, 0 when no status is available
    fn used_in_fix_count(&mut self) -> u32 {
        self.satellite_status()
            .map_or(0, |status| status.used_in_fix_count())
    }

    /// Drop any cached status, e.g. when scanning stops
    fn clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_in_fix_count() {
        let status = SatelliteStatus::new(vec![
            SatelliteInfo { prn: 3, snr: 38.0, used_in_fix: true },
            SatelliteInfo { prn: 9, snr: 12.5, used_in_fix: false },
            SatelliteInfo { prn: 17, snr: 41.0, used_in_fix: true },
        ]);
        assert_eq!(status.used_in_fix_count(), 2);
        assert_eq!(SatelliteStatus::default().used_in_fix_count(), 0);
    }
}
