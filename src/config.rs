//! Settings for a verification run

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionRate;
use crate::types::*;
use crate::utils::validation::validate_progress_interval;

/// Rows between two progress notifications
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// Verifier configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Rate used to convert BGN amounts
    pub rate: ConversionRate,
    /// Notify the progress observer every this many rows
    pub progress_interval: usize,
}

impl VerifierConfig {
    /// Use a different conversion rate
    pub fn with_rate(mut self, rate: ConversionRate) -> Self {
        self.rate = rate;
        self
    }

    /// Notify progress every `progress_interval` rows
    pub fn with_progress_interval(mut self, progress_interval: usize) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Check that the configuration can be used for a run
    pub fn validate(&self) -> VerifierResult<()> {
        validate_progress_interval(self.progress_interval)
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            rate: ConversionRate::bgn_to_eur(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}
