//! Engine entry point
//!
//! `Engine` owns a validated configuration, the compiled jargon lexicon and
//! the matcher registry. It is immutable after construction, so a single
//! instance can serve concurrent callers.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::compose::compose;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::features::{extract_features, FeatureSet, Lexicon};
use crate::patterns::{default_matchers, run_matchers, FrameworkMatcher};
use crate::result::AnalysisResult;
use crate::scoring::aggregate;

pub struct Engine {
    config: EngineConfig,
    lexicon: Lexicon,
    matchers: Vec<Box<dyn FrameworkMatcher>>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.matchers.iter().map(|m| m.name()).collect();
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("matchers", &names)
            .finish_non_exhaustive()
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_matchers(config, default_matchers())
    }

    /// Build an engine with a custom matcher registry. Registry order breaks
    /// full ties when picking the dominant pattern.
    pub fn with_matchers(
        config: EngineConfig,
        matchers: Vec<Box<dyn FrameworkMatcher>>,
    ) -> Result<Self> {
        config.validate()?;
        let lexicon = Lexicon::new(config.jargon.terms.as_slice())?;
        log::debug!(
            "Engine ready: profile={}, fold={} chars, {} jargon terms, {} matchers",
            config.profile,
            config.fold_chars(),
            config.jargon.terms.len(),
            matchers.len()
        );
        Ok(Self {
            config,
            lexicon,
            matchers,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn extract(&self, text: &str) -> FeatureSet {
        extract_features(text, self.config.fold_chars(), &self.lexicon)
    }

    /// Score a post. Accepts any string; length bounds are not checked here.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let body = text.trim();
        let features = self.extract(body);
        let matches = run_matchers(
            &self.matchers,
            body,
            &features,
            self.config.position_tolerance,
        );
        let scores = aggregate(&features, &matches, &self.config);

        log::debug!(
            "Analyzed {} chars: overall={}, hook={}, structure={}, clarity={}, pattern={}",
            features.char_count,
            scores.overall,
            scores.sub_scores.hook,
            scores.sub_scores.structure,
            scores.sub_scores.clarity,
            scores.sub_scores.pattern
        );

        compose(&features, matches, scores)
    }

    /// Validate length bounds, then score. A panic inside the analysis is
    /// logged and reported as [`EngineError::UnexpectedComputation`].
    pub fn analyze_post(&self, text: &str) -> Result<AnalysisResult> {
        validate_post(text, &self.config)?;
        panic::catch_unwind(AssertUnwindSafe(|| self.analyze(text))).map_err(|payload| {
            log::error!("Post analysis panicked: {}", panic_message(payload.as_ref()));
            EngineError::UnexpectedComputation
        })
    }
}

pub fn validate_post(text: &str, config: &EngineConfig) -> Result<()> {
    let len = text.trim().chars().count();
    if len < config.min_chars {
        return Err(EngineError::InputTooShort {
            len,
            min: config.min_chars,
        });
    }
    if len > config.max_chars {
        return Err(EngineError::InputTooLong {
            len,
            max: config.max_chars,
        });
    }
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
