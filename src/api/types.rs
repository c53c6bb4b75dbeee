//! Collaborator contracts and event types for tracking sessions

use crate::arbiter::FixOutcome;
use crate::core::{Position, Provider};
use std::fmt;

/// Availability reported by a location provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    Available,
    TemporarilyUnavailable,
    OutOfService,
}

/// Satellite receiver status notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatelliteEvent {
    Started,
    /// Known to fire spuriously on some devices when another provider is disabled
    Stopped,
    FirstFix,
    StatusUpdate,
}

/// Human-visible notice of a source transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    Gained(Provider),
    Lost,
}

impl Announcement {
    /// Announcement for a tick, if its source changed
    pub fn from_outcome(outcome: &FixOutcome) -> Option<Self> {
        if !outcome.source_changed {
            return None;
        }
        Some(match outcome.accepted {
            Some(position) => Announcement::Gained(position.provider),
            None => Announcement::Lost,
        })
    }

    /// Text for speech output. No quotes, they make voices pause.
    pub fn speech(&self) -> String {
        match self {
            Announcement::Gained(provider) => format!("Now have location from {}.", provider),
            Announcement::Lost => "Lost Location".to_string(),
        }
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Announcement::Gained(provider) => write!(f, "Have location from \"{}\"", provider),
            Announcement::Lost => f.write_str("Lost location"),
        }
    }
}

/// Receives the side effects of each tick
pub trait FixConsumer {
    /// Start a new scan. Called at most once per tick.
    fn request_rescan(&mut self);

    /// Make sure location updates are still subscribed after losing position
    fn resubscribe_location_updates(&mut self);

    /// Store coordinates for warm start in a later session
    fn persist_position(&mut self, latitude: f64, longitude: f64);

    /// Show (and, if `speak`, say) a source transition
    fn announce(&mut self, announcement: &Announcement, speak: bool);

    /// Refresh whatever displays the accepted position
    fn update_location_ui(&mut self, _accepted: Option<&Position>) {}
}

/// Secondary observer of raw location events, such as a map view
pub trait RawFixListener {
    fn on_fix(&mut self, fix: &Position);
    fn on_provider_enabled(&mut self, _provider: Provider) {}
    fn on_provider_disabled(&mut self, _provider: Provider) {}
    fn on_status_changed(&mut self, _provider: Provider, _status: ProviderStatus) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Timestamp;

    fn outcome(accepted: Option<Position>, source_changed: bool) -> FixOutcome {
        FixOutcome {
            accepted,
            source_changed,
            rescan_by_speed: false,
            resubscribe: accepted.is_none(),
        }
    }

    #[test]
    fn test_announcement_from_outcome() {
        let fix = Position::network(1.0, 2.0, Timestamp::from_millis(10));
        assert_eq!(
            Announcement::from_outcome(&outcome(Some(fix), true)),
            Some(Announcement::Gained(Provider::Network))
        );
        assert_eq!(
            Announcement::from_outcome(&outcome(None, true)),
            Some(Announcement::Lost)
        );
        assert_eq!(Announcement::from_outcome(&outcome(Some(fix), false)), None);
    }

    #[test]
    fn test_announcement_text() {
        let gained = Announcement::Gained(Provider::Satellite);
        assert_eq!(gained.to_string(), "Have location from \"gps\"");
        assert_eq!(gained.speech(), "Now have location from gps.");
        assert_eq!(Announcement::Lost.to_string(), "Lost location");
        assert_eq!(Announcement::Lost.speech(), "Lost Location");
    }
}
