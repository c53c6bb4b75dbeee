//! Scriptable satellite status source for testing and replay

use crate::sources::{SatelliteInfo, SatelliteStatus, SatelliteStatusSource};

/// Satellite source whose snapshot is set by the caller
#[derive(Debug, Clone, Default)]
pub struct MockSatelliteStatus {
    status: Option<SatelliteStatus>,
    queries: u32,
}

impl MockSatelliteStatus {
    /// A source that has not reported yet
    pub fn new() -> Self {
        Self::default()
    }

    /// A source reporting `used` satellites in fix
    pub fn with_used(used: u16) -> Self {
        let mut source = Self::new();
        source.set_used(used);
        source
    }

    /// Report `used` satellites in fix plus a couple that are only in view
    pub fn set_used(&mut self, used: u16) {
        let mut satellites: Vec<SatelliteInfo> = (1..=used)
            .map(|prn| SatelliteInfo {
                prn,
                snr: 35.0,
                used_in_fix: true,
            })
            .collect();
        satellites.extend((1..=2u16).map(|i| SatelliteInfo {
            prn: used.wrapping_add(i),
            snr: 10.0,
            used_in_fix: false,
        }));
        self.status = Some(SatelliteStatus::new(satellites));
    }

    /// Report an exact snapshot
    pub fn set_status(&mut self, status: SatelliteStatus) {
        self.status = Some(status);
    }

    /// Stop reporting status
    pub fn set_unavailable(&mut self) {
        self.status = None;
    }

    /// How many times the status was requested
    pub fn query_count(&self) -> u32 {
        self.queries
    }
}

impl SatelliteStatusSource for MockSatelliteStatus {
    fn satellite_status(&mut self) -> Option<SatelliteStatus> {
        self.queries += 1;
        self.status.clone()
    }

    fn clear(&mut self) {
        self.status = None;
    }
}
