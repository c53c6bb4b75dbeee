use crate::core::{
    MAX_VALID_ACCURACY_M, MIN_VALID_SAT_COUNT, NETWORK_TIMEOUT_MS, RESCAN_SPEED_THRESHOLDS_MPS,
    SATELLITE_TIMEOUT_MS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Tunable parameters for a tracking session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArbiterConfig {
    /// Satellite fix staleness limit, also the low-satellite episode limit (milliseconds)
    pub satellite_timeout_ms: u64,
    /// Network fix staleness limit (milliseconds)
    pub network_timeout_ms: u64,
    /// Satellites used in fix needed to end a low-satellite episode
    pub min_valid_sat_count: u32,
    /// Accuracy radius beyond which a fix is implausible (meters)
    pub max_valid_accuracy_m: f64,
    /// Speeds whose upward crossing triggers a rescan hint (m/s, strictly increasing)
    pub rescan_speed_thresholds_mps: Vec<f64>,
    /// Accept every incoming fix without validity checks. Verification environments only.
    pub emulator_mode: bool,
    /// Ask the consumer to speak source change announcements
    pub speech_announcements: bool,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            satellite_timeout_ms: SATELLITE_TIMEOUT_MS,
            network_timeout_ms: NETWORK_TIMEOUT_MS,
            min_valid_sat_count: MIN_VALID_SAT_COUNT,
            max_valid_accuracy_m: MAX_VALID_ACCURACY_M,
            rescan_speed_thresholds_mps: RESCAN_SPEED_THRESHOLDS_MPS.to_vec(),
            emulator_mode: false,
            speech_announcements: true,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    #[error("config file I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("config serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    fn invalid(parameter: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl ArbiterConfig {
    /// Configuration for emulators and replay rigs, where every fix is trusted
    pub fn emulator() -> Self {
        Self {
            emulator_mode: true,
            ..Default::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ArbiterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate, then write as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        self.validate()?;
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.satellite_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "satellite_timeout_ms",
                self.satellite_timeout_ms,
                "must be greater than zero",
            ));
        }
        if self.network_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "network_timeout_ms",
                self.network_timeout_ms,
                "must be greater than zero",
            ));
        }
        if self.min_valid_sat_count == 0 {
            return Err(ConfigError::invalid(
                "min_valid_sat_count",
                self.min_valid_sat_count,
                "must be at least 1",
            ));
        }
        if !self.max_valid_accuracy_m.is_finite() || self.max_valid_accuracy_m <= 0.0 {
            return Err(ConfigError::invalid(
                "max_valid_accuracy_m",
                self.max_valid_accuracy_m,
                "must be a positive finite distance",
            ));
        }

        let thresholds = &self.rescan_speed_thresholds_mps;
        if thresholds.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(ConfigError::invalid(
                "rescan_speed_thresholds_mps",
                format!("{:?}", thresholds),
                "speeds must be finite and non-negative",
            ));
        }
        if thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::invalid(
                "rescan_speed_thresholds_mps",
                format!("{:?}", thresholds),
                "speeds must be strictly increasing",
            ));
        }

        Ok(())
    }
}
