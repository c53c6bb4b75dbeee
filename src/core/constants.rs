//! Default arbitration thresholds

/// A satellite fix older than this (or a low-satellite episode longer than this) is stale (ms)
pub const SATELLITE_TIMEOUT_MS: u64 = 15_000;

/// A network fix older than this is stale (ms)
pub const NETWORK_TIMEOUT_MS: u64 = 60_000;

/// Satellites used in fix at or above which the satellite source is considered healthy
pub const MIN_VALID_SAT_COUNT: u32 = 3;

/// Reported accuracy beyond this radius (roughly ten miles) marks a fix as implausible (m)
pub const MAX_VALID_ACCURACY_M: f64 = 16_000.0;

/// Speeds (m/s) whose upward crossing hints that the scan cadence should change
pub const RESCAN_SPEED_THRESHOLDS_MPS: [f64; 2] = [0.0, 5.0];
