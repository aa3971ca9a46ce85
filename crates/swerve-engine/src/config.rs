//! Engine configuration and validation.
//!
//! [`EngineConfig`] carries the parameters shared by every maneuver in a
//! run. [`validate()`](EngineConfig::validate) is called by
//! [`SceneRunner::new`](crate::SceneRunner::new) before any frame is
//! processed.

use swerve_core::ConfigError;
use swerve_maneuver::StopTuning;

/// Parameters shared by every driver in a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineConfig {
    /// Braking tuning for sudden stops. Default: distance 10, margin 2,
    /// z tolerance 0.3.
    pub stop: StopTuning,
}

impl EngineConfig {
    /// Check every invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.stop.validate()
    }

    /// Replace the braking tuning.
    pub fn with_stop(mut self, stop: StopTuning) -> Self {
        self.stop = stop;
        self
    }
}
