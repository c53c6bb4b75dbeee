//! Best-position arbitration between the satellite and network sources
//!
//! Every input event is a tick. A tick refreshes the per-source bookkeeping,
//! re-evaluates the validity of the held position and both candidates, runs
//! the [`policy`] table, and reports the result as a [`FixOutcome`]. Nothing
//! here fails: bad or missing data reads as "invalid" and the worst case is
//! holding no position at all.

pub mod policy;
pub mod speed;

use crate::core::{Position, Provider, Timestamp};
use crate::utils::config::{ArbiterConfig, ConfigError};
use crate::validation::{is_implausible, LowSatelliteEpisode};
use log::{debug, info, warn};
use policy::{Candidates, Incoming, Selection};

/// Mutable arbitration state for one tracking session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArbiterState {
    /// Currently trusted fix
    pub accepted: Option<Position>,
    /// Latest raw fix per source, accepted or not
    pub last_satellite_fix: Option<Position>,
    pub last_network_fix: Option<Position>,
    /// Arrival time of the latest fix per source. EPOCH until the first one.
    pub last_satellite_fix_time: Timestamp,
    pub last_network_fix_time: Timestamp,
    pub low_satellites: LowSatelliteEpisode,
    pub used_satellite_count: u32,
    /// Speed of the accepted fix on the previous tick, 0 while none is held
    pub previous_speed: f64,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixOutcome {
    pub accepted: Option<Position>,
    /// The accepted source was gained, lost, or switched this tick
    pub source_changed: bool,
    /// The accepted speed crossed a rescan threshold upward
    pub rescan_by_speed: bool,
    /// Position was lost; location updates should be (re)subscribed
    pub resubscribe: bool,
}

impl FixOutcome {
    /// One combined rescan request covers both triggers
    pub fn should_rescan(&self) -> bool {
        self.source_changed || self.rescan_by_speed
    }
}

/// Decides which single fix to trust, and when to trust none
#[derive(Debug, Clone)]
pub struct PositionArbiter {
    config: ArbiterConfig,
    state: ArbiterState,
}

impl Default for PositionArbiter {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionArbiter {
    /// Create an arbiter with the default thresholds
    pub fn new() -> Self {
        Self {
            config: ArbiterConfig::default(),
            state: ArbiterState::default(),
        }
    }

    pub fn with_config(config: ArbiterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: ArbiterState::default(),
        })
    }

    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    pub fn state(&self) -> &ArbiterState {
        &self.state
    }

    pub fn accepted(&self) -> Option<&Position> {
        self.state.accepted.as_ref()
    }

    pub fn used_satellite_count(&self) -> u32 {
        self.state.used_satellite_count
    }

    /// Discard everything learned this session
    pub fn reset(&mut self) {
        self.state = ArbiterState::default();
    }

    /// Process one tick. `fix` is `None` for a bare status change.
    pub fn on_raw_fix(
        &mut self,
        fix: Option<Position>,
        used_satellite_count: u32,
        now: Timestamp,
    ) -> FixOutcome {
        self.state.used_satellite_count = used_satellite_count;

        if let Some(new_fix) = fix {
            match new_fix.provider {
                Provider::Network => {
                    self.state.last_network_fix = Some(new_fix);
                    self.state.last_network_fix_time = now;
                }
                Provider::Satellite => {
                    self.state.last_satellite_fix = Some(new_fix);
                    self.state.last_satellite_fix_time = now;
                }
            }
            if !self.config.emulator_mode
                && is_implausible(&new_fix, self.config.max_valid_accuracy_m)
            {
                warn!("ignoring implausible fix: {}", new_fix);
            }
        }

        let accepted = self.state.accepted;
        let current_valid = self.is_valid(accepted, now);
        let new_fix_valid = match fix {
            Some(_) if self.config.emulator_mode => true,
            Some(_) => self.is_valid(fix, now),
            None => false,
        };
        let last_network_fix = self.state.last_network_fix;
        let network_valid = self.is_valid(last_network_fix, now);

        let candidates = Candidates {
            current_valid,
            accepted_provider: accepted.map(|position| position.provider),
            incoming: fix.map(|position| Incoming {
                provider: position.provider,
                valid: new_fix_valid,
            }),
            network_valid,
        };
        let selection = policy::select(&candidates);
        debug!("tick at {}: {:?} -> {:?}", now.as_millis(), candidates, selection);

        let mut resubscribe = false;
        match selection {
            Selection::Keep => {}
            Selection::AcceptIncoming { .. } => self.state.accepted = fix,
            Selection::FailOverToNetwork => self.state.accepted = self.state.last_network_fix,
            Selection::DropPosition => {
                if let Some(lost) = accepted {
                    info!("nulling location: {}", lost);
                }
                self.state.accepted = None;
                resubscribe = true;
            }
        }

        let source_changed = selection.source_changed();
        if source_changed {
            info!(
                "provider change: sat count: {} new valid: {} current valid: {} network valid: {} now: {}",
                used_satellite_count,
                new_fix_valid,
                current_valid,
                network_valid,
                self.state
                    .accepted
                    .map_or_else(|| "none".to_string(), |position| position.to_string())
            );
        }

        let rescan_by_speed = self.track_speed();

        FixOutcome {
            accepted: self.state.accepted,
            source_changed,
            rescan_by_speed,
            resubscribe,
        }
    }

    /// Validity of `position` at `now`, judged against its source's bookkeeping.
    ///
    /// Evaluating a satellite fix folds the current satellite count into the
    /// low-count episode, which is idempotent for a fixed `now` and count.
    pub fn is_valid(&mut self, position: Option<Position>, now: Timestamp) -> bool {
        let Some(position) = position else {
            return false;
        };

        let lost = match position.provider {
            Provider::Satellite => {
                self.state.low_satellites.observe(
                    self.state.used_satellite_count,
                    self.config.min_valid_sat_count,
                    now,
                );
                self.state
                    .low_satellites
                    .exceeded(now, self.config.satellite_timeout_ms)
                    || now.age_of(self.state.last_satellite_fix_time)
                        > self.config.satellite_timeout_ms
            }
            Provider::Network => {
                now.age_of(self.state.last_network_fix_time) > self.config.network_timeout_ms
            }
        };

        !lost && !is_implausible(&position, self.config.max_valid_accuracy_m)
    }

    /// Periodic self-check: re-derive acceptance if the held fix has gone bad.
    /// `used_satellite_count` is the receiver's current count, not the one
    /// from the last tick.
    pub fn force_revalidate(
        &mut self,
        used_satellite_count: u32,
        now: Timestamp,
    ) -> Option<FixOutcome> {
        self.state.used_satellite_count = used_satellite_count;
        let accepted = self.state.accepted;
        if self.is_valid(accepted, now) {
            return None;
        }
        Some(self.on_raw_fix(None, used_satellite_count, now))
    }

    fn track_speed(&mut self) -> bool {
        match self.state.accepted {
            Some(position) => {
                let crossed = speed::crossed_upward(
                    self.state.previous_speed,
                    position.speed,
                    &self.config.rescan_speed_thresholds_mps,
                );
                if crossed {
                    info!("going faster ({:.1} m/s), scheduling scan", position.speed);
                }
                self.state.previous_speed = position.speed;
                crossed
            }
            None => {
                self.state.previous_speed = 0.0;
                false
            }
        }
    }
}
