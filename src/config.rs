//! Engine configuration
//!
//! Holds the overridable tunables: fold window per device profile, length
//! bounds, jargon lexicon, element-position tolerance and score weights.
//! Every default is a named constant so tests can assert against it.
//!
//! A config can be loaded from TOML; omitted fields keep their defaults.
//!
//! ```toml
//! profile = "desktop"
//! position_tolerance = 0.25
//!
//! [weights]
//! hook = 0.4
//! structure = 0.2
//! clarity = 0.1
//! pattern = 0.3
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

pub const MIN_POST_CHARS: usize = 50;
pub const MAX_POST_CHARS: usize = 5000;

pub const MOBILE_FOLD_CHARS: usize = 210;
pub const DESKTOP_FOLD_CHARS: usize = 260;

/// How far, as a fraction of text length, an element may sit outside its
/// expected window and still count as detected
pub const POSITION_TOLERANCE: f64 = 0.20;

pub const JARGON_PENALTY_PER_TERM: u32 = 10;

pub const HOOK_WEIGHT: f64 = 0.30;
pub const STRUCTURE_WEIGHT: f64 = 0.20;
pub const CLARITY_WEIGHT: f64 = 0.20;
pub const PATTERN_WEIGHT: f64 = 0.30;

const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Buzzwords and filler that cost clarity points
pub const DEFAULT_JARGON: &[&str] = &[
    "revolutionizing",
    "revolutionize",
    "game-changer",
    "game changer",
    "game-changing",
    "seamless integration",
    "synergy",
    "synergies",
    "paradigm shift",
    "disruptive",
    "cutting-edge",
    "best-in-class",
    "world-class",
    "next-level",
    "thought leader",
    "thought leadership",
    "circle back",
    "move the needle",
    "low-hanging fruit",
    "value-add",
    "leverage",
    "leveraging",
    "holistic",
    "robust solution",
    "end-to-end",
    "basically",
    "literally",
];

// ---------------------------------------------------------------------------
// Device profile
// ---------------------------------------------------------------------------

/// Channel profile that decides how much of the post shows above the fold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceProfile {
    #[default]
    Mobile,
    Desktop,
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => f.write_str("mobile"),
            Self::Desktop => f.write_str("desktop"),
        }
    }
}

impl FromStr for DeviceProfile {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            other => Err(EngineError::UnknownProfile(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldConfig {
    pub mobile: usize,
    pub desktop: usize,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            mobile: MOBILE_FOLD_CHARS,
            desktop: DESKTOP_FOLD_CHARS,
        }
    }
}

impl FoldConfig {
    pub const fn chars_for(&self, profile: DeviceProfile) -> usize {
        match profile {
            DeviceProfile::Mobile => self.mobile,
            DeviceProfile::Desktop => self.desktop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JargonConfig {
    pub terms: Vec<String>,
    pub penalty_per_term: u32,
}

impl Default for JargonConfig {
    fn default() -> Self {
        Self {
            terms: DEFAULT_JARGON.iter().map(|t| (*t).to_string()).collect(),
            penalty_per_term: JARGON_PENALTY_PER_TERM,
        }
    }
}

/// Weights for the overall score; must sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub hook: f64,
    pub structure: f64,
    pub clarity: f64,
    pub pattern: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            hook: HOOK_WEIGHT,
            structure: STRUCTURE_WEIGHT,
            clarity: CLARITY_WEIGHT,
            pattern: PATTERN_WEIGHT,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.hook + self.structure + self.clarity + self.pattern
    }

    fn all_non_negative(&self) -> bool {
        [self.hook, self.structure, self.clarity, self.pattern]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }
}

// ---------------------------------------------------------------------------
// Engine config
// ---------------------------------------------------------------------------

/// Immutable configuration handed to [`crate::Engine::new`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub profile: DeviceProfile,
    pub fold: FoldConfig,
    pub min_chars: usize,
    pub max_chars: usize,
    /// Element-position tolerance as a fraction of text length (default: 0.20)
    pub position_tolerance: f64,
    pub jargon: JargonConfig,
    pub weights: Weights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            profile: DeviceProfile::default(),
            fold: FoldConfig::default(),
            min_chars: MIN_POST_CHARS,
            max_chars: MAX_POST_CHARS,
            position_tolerance: POSITION_TOLERANCE,
            jargon: JargonConfig::default(),
            weights: Weights::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| EngineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded engine config from {}", path.display());
        Self::from_toml_str(&source)
    }

    pub fn with_profile(mut self, profile: DeviceProfile) -> Self {
        self.profile = profile;
        self
    }

    pub const fn fold_chars(&self) -> usize {
        self.fold.chars_for(self.profile)
    }

    /// Reject configurations the scoring rules cannot honor
    pub fn validate(&self) -> Result<()> {
        if !self.weights.all_non_negative() {
            return Err(EngineError::InvalidConfig(
                "weights must be finite and non-negative".to_string(),
            ));
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(EngineError::InvalidConfig(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        if !(0.0..=1.0).contains(&self.position_tolerance) {
            return Err(EngineError::InvalidConfig(format!(
                "position_tolerance must be within [0, 1], got {}",
                self.position_tolerance
            )));
        }
        if self.fold.mobile == 0 {
            return Err(EngineError::InvalidConfig(
                "mobile fold must be at least one character".to_string(),
            ));
        }
        if self.fold.desktop < self.fold.mobile {
            return Err(EngineError::InvalidConfig(format!(
                "desktop fold ({}) must not be smaller than mobile fold ({})",
                self.fold.desktop, self.fold.mobile
            )));
        }
        if self.min_chars > self.max_chars {
            return Err(EngineError::InvalidConfig(format!(
                "min_chars ({}) exceeds max_chars ({})",
                self.min_chars, self.max_chars
            )));
        }
        if self.jargon.terms.iter().any(|t| t.trim().is_empty()) {
            return Err(EngineError::InvalidConfig(
                "jargon terms must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.weights.sum() - 1.0).abs() < 1e-9);
        assert_eq!(config.fold_chars(), MOBILE_FOLD_CHARS);
    }

    #[test]
    fn desktop_profile_uses_wider_fold() {
        let config = EngineConfig::default().with_profile(DeviceProfile::Desktop);
        assert_eq!(config.fold_chars(), DESKTOP_FOLD_CHARS);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            profile = "desktop"

            [jargon]
            penalty_per_term = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.profile, DeviceProfile::Desktop);
        assert_eq!(config.jargon.penalty_per_term, 5);
        assert_eq!(config.jargon.terms.len(), DEFAULT_JARGON.len());
        assert_eq!(config.min_chars, MIN_POST_CHARS);
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let result = EngineConfig::from_toml_str(
            r#"
            [weights]
            hook = 0.9
            "#,
        );
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_desktop_fold_below_mobile() {
        let mut config = EngineConfig::default();
        config.fold.desktop = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_jargon_term() {
        let mut config = EngineConfig::default();
        config.jargon.terms.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = EngineConfig::from_toml_str("profile = [");
        assert!(matches!(result, Err(EngineError::ConfigParse(_))));
    }

    #[test]
    fn parses_profile_names() {
        assert_eq!("Desktop".parse::<DeviceProfile>().unwrap(), DeviceProfile::Desktop);
        assert_eq!("mobile".parse::<DeviceProfile>().unwrap(), DeviceProfile::Mobile);
        assert!("tablet".parse::<DeviceProfile>().is_err());
    }
}
