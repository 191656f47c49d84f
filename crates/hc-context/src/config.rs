//! Interpreter tuning, loadable from the `[processor]` and `[dispatch]`
//! tables of a TOML config.

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Upper bound on candidates per command.
pub const MAX_MATCHES: usize = 5;
/// Scores at or below this never count as a match.
pub const MIN_MATCH_CONFIDENCE: f64 = 0.1;

/// Ranking limits for the interpretation pipeline.
///
/// Configs may only tighten the built-in limits; `validate` rejects anything
/// looser.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessorConfig {
    /// Most candidates returned per command, 1 to 5.
    #[serde(default = "default_max_matches")]
    pub max_matches: usize,
    /// Devices scoring at or below this are dropped. At least 0.1.
    #[serde(default = "default_min_match_confidence")]
    pub min_match_confidence: f64,
}

fn default_max_matches() -> usize {
    MAX_MATCHES
}
fn default_min_match_confidence() -> f64 {
    MIN_MATCH_CONFIDENCE
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            max_matches: default_max_matches(),
            min_match_confidence: default_min_match_confidence(),
        }
    }
}

impl ProcessorConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_MATCHES).contains(&self.max_matches) {
            return Err(ConfigError::MaxMatches {
                value: self.max_matches,
            });
        }
        // NaN fails this comparison too.
        if !(self.min_match_confidence >= MIN_MATCH_CONFIDENCE) {
            return Err(ConfigError::MinMatchConfidence {
                value: self.min_match_confidence,
            });
        }
        Ok(())
    }
}

/// Target selection policy for control planning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DispatchConfig {
    /// Top two candidates closer than this are treated as ambiguous.
    #[serde(default = "default_ambiguity_margin")]
    pub ambiguity_margin: f64,
}

fn default_ambiguity_margin() -> f64 {
    0.05
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            ambiguity_margin: default_ambiguity_margin(),
        }
    }
}

impl DispatchConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.ambiguity_margin >= 0.0) {
            return Err(ConfigError::AmbiguityMargin {
                value: self.ambiguity_margin,
            });
        }
        Ok(())
    }
}
