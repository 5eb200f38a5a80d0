use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analyzers::CategoryWeights;
use crate::error::{BcaError, Result};
use crate::normalize::{AUTHORIZED_MATCH_THRESHOLD, STRICT_MATCH_THRESHOLD};

/// Engine configuration, loadable from a TOML file. CLI flags override
/// config values; config values override the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pass/fail threshold applied to the overall score at the output
    /// boundary.
    pub threshold: f32,
    pub weights: CategoryWeights,
    pub thresholds: MatchThresholds,
    /// Score assigned to the logo category when constraints exist but no
    /// logo was detected. Raise toward 0.3-0.4 when the scraper is known to
    /// miss logos.
    pub logo_missing_score: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchThresholds {
    /// Similarity above which two colors count as the same brand color.
    pub strict: f32,
    /// Similarity above which a color counts as authorized at all.
    pub authorized: f32,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            strict: STRICT_MATCH_THRESHOLD,
            authorized: AUTHORIZED_MATCH_THRESHOLD,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 0.75,
            weights: CategoryWeights::default(),
            thresholds: MatchThresholds::default(),
            logo_missing_score: 0.0,
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let raw = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw).map_err(|e| {
            BcaError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(BcaError::Config(format!(
                "pass threshold must lie in [0, 1], got {}",
                self.threshold
            )));
        }
        let w = &self.weights;
        if w.colors < 0.0 || w.typography < 0.0 || w.logo < 0.0 || w.layout < 0.0 {
            return Err(BcaError::Config(
                "category weights must be non-negative".to_string(),
            ));
        }
        if w.sum() <= 0.0 {
            return Err(BcaError::Config(
                "category weights must sum to a positive value".to_string(),
            ));
        }
        let t = &self.thresholds;
        if !(0.0..=1.0).contains(&t.strict) || !(0.0..=1.0).contains(&t.authorized) {
            return Err(BcaError::Config(
                "color match thresholds must lie in [0, 1]".to_string(),
            ));
        }
        if t.strict <= t.authorized {
            return Err(BcaError::Config(format!(
                "strict color threshold ({}) must exceed the authorization threshold ({})",
                t.strict, t.authorized
            )));
        }
        if !(0.0..=1.0).contains(&self.logo_missing_score) {
            return Err(BcaError::Config(format!(
                "logo_missing_score must lie in [0, 1], got {}",
                self.logo_missing_score
            )));
        }
        Ok(())
    }
}
