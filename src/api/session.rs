//! Event-driven tracking session

use crate::api::types::{Announcement, FixConsumer, ProviderStatus, RawFixListener, SatelliteEvent};
use crate::arbiter::{FixOutcome, PositionArbiter};
use crate::core::{Position, Provider, Timestamp};
use crate::sources::SatelliteStatusSource;
use crate::utils::config::{ArbiterConfig, ConfigError};
use log::info;

/// One tracking session: an arbiter, its satellite status source, and the
/// consumer that acts on each outcome.
///
/// All methods run synchronously on the caller's thread; events must arrive
/// in non-decreasing time order.
pub struct TrackingSession<S: SatelliteStatusSource, C: FixConsumer> {
    arbiter: PositionArbiter,
    satellites: S,
    consumer: C,
    forward: Option<Box<dyn RawFixListener>>,
}

impl<S: SatelliteStatusSource, C: FixConsumer> TrackingSession<S, C> {
    pub fn new(config: ArbiterConfig, satellites: S, consumer: C) -> Result<Self, ConfigError> {
        Ok(Self {
            arbiter: PositionArbiter::with_config(config)?,
            satellites,
            consumer,
            forward: None,
        })
    }

    /// Forward raw events to a secondary listener after each tick
    pub fn set_forward_listener(&mut self, listener: Box<dyn RawFixListener>) {
        self.forward = Some(listener);
    }

    pub fn clear_forward_listener(&mut self) {
        self.forward = None;
    }

    pub fn accepted(&self) -> Option<&Position> {
        self.arbiter.accepted()
    }

    pub fn arbiter(&self) -> &PositionArbiter {
        &self.arbiter
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    pub fn satellites_mut(&mut self) -> &mut S {
        &mut self.satellites
    }

    /// A new fix from either provider
    pub fn on_location_changed(&mut self, fix: Position, now: Timestamp) -> FixOutcome {
        let outcome = self.tick(Some(fix), now);
        if let Some(listener) = self.forward.as_mut() {
            listener.on_fix(&fix);
        }
        outcome
    }

    /// Satellite receiver status changed; re-runs the tick without a fix
    pub fn on_satellite_status_changed(&mut self, event: SatelliteEvent, now: Timestamp) -> FixOutcome {
        if event == SatelliteEvent::Stopped {
            // unreliable on some devices, so it gets no special handling
            info!("satellite receiver stopped");
        }
        self.tick(None, now)
    }

    pub fn on_provider_enabled(&mut self, provider: Provider, now: Timestamp) -> FixOutcome {
        info!("provider enabled: {}", provider);
        let outcome = self.tick(None, now);
        if let Some(listener) = self.forward.as_mut() {
            listener.on_provider_enabled(provider);
        }
        outcome
    }

    pub fn on_provider_disabled(&mut self, provider: Provider, now: Timestamp) -> FixOutcome {
        info!("provider disabled: {}", provider);
        let outcome = self.tick(None, now);
        if let Some(listener) = self.forward.as_mut() {
            listener.on_provider_disabled(provider);
        }
        outcome
    }

    pub fn on_status_changed(
        &mut self,
        provider: Provider,
        status: ProviderStatus,
        now: Timestamp,
    ) -> FixOutcome {
        info!("provider status changed: {} status: {:?}", provider, status);
        let outcome = self.tick(None, now);
        if let Some(listener) = self.forward.as_mut() {
            listener.on_status_changed(provider, status);
        }
        outcome
    }

    /// Periodic self-check. Returns the outcome if acceptance had to be re-derived.
    pub fn check_location(&mut self, now: Timestamp) -> Option<FixOutcome> {
        let used = self.satellites.used_in_fix_count();
        let outcome = self.arbiter.force_revalidate(used, now)?;
        self.dispatch(&outcome);
        Some(outcome)
    }

    /// Scanning stopped: forget the session's position and satellite status
    pub fn handle_scan_stop(&mut self) {
        info!("scan stop: resetting position state");
        self.arbiter.reset();
        self.satellites.clear();
    }

    /// Persist the accepted coordinates, if any
    pub fn save_position(&mut self) -> bool {
        match self.arbiter.accepted() {
            Some(position) => {
                self.consumer
                    .persist_position(position.latitude, position.longitude);
                true
            }
            None => false,
        }
    }

    fn tick(&mut self, fix: Option<Position>, now: Timestamp) -> FixOutcome {
        let used = self.satellites.used_in_fix_count();
        let outcome = self.arbiter.on_raw_fix(fix, used, now);
        self.dispatch(&outcome);
        outcome
    }

    fn dispatch(&mut self, outcome: &FixOutcome) {
        if outcome.resubscribe {
            self.consumer.resubscribe_location_updates();
        }

        if let Some(announcement) = Announcement::from_outcome(outcome) {
            if let Some(position) = outcome.accepted {
                self.consumer
                    .persist_position(position.latitude, position.longitude);
            }
            let speak = self.arbiter.config().speech_announcements;
            self.consumer.announce(&announcement, speak);
        }

        if outcome.should_rescan() {
            info!(
                "scheduling scan (source changed: {}, speed: {})",
                outcome.source_changed, outcome.rescan_by_speed
            );
            self.consumer.request_rescan();
        }

        self.consumer.update_location_ui(outcome.accepted.as_ref());
    }
}
