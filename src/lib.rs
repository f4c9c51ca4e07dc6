//! # hook-score
//!
//! Deterministic scoring for social-media posts. Given the text of a post it
//! reports a virality score, hook/structure/clarity/pattern sub-scores, which
//! rhetorical framework (PAS, AIDA, narrative arc) the post follows, and
//! concrete highlights, red flags and suggestions.
//!
//! Every number traces back to a textual feature; there is no model, no
//! randomness and no I/O. The same text always yields the same result.
//!
//! ```
//! use hook_score::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default())?;
//! let result = engine.analyze_post(
//!     "Struggling to get replies on your posts?\n\
//!      Every post without a hook is wasted effort.\n\
//!      Here's how to fix it: open with a question.",
//! )?;
//! assert!(result.overall_score <= 100);
//! # Ok::<(), hook_score::EngineError>(())
//! ```
//!
//! Pipeline: text → [`features`] → [`patterns`] → [`scoring`] → [`compose`].

pub mod compose;
pub mod config;
pub mod engine;
pub mod error;
pub mod features;
pub mod patterns;
pub mod result;
pub mod scoring;
pub mod text;

use once_cell::sync::Lazy;

pub use config::{DeviceProfile, EngineConfig};
pub use engine::{validate_post, Engine};
pub use error::{EngineError, Result};
pub use features::{extract_features, FeatureSet, Lexicon};
pub use patterns::{ElementStatus, FrameworkMatcher, PatternElement, PatternMatch};
pub use result::AnalysisResult;
pub use scoring::{Aggregate, SubScores};

static DEFAULT_ENGINE: Lazy<Engine> =
    Lazy::new(|| Engine::new(EngineConfig::default()).expect("default config is valid"));

/// Score `text` with the default configuration (mobile fold, default lexicon).
///
/// Length bounds are not enforced; use [`Engine::analyze_post`] at a
/// user-facing boundary.
pub fn analyze(text: &str) -> AnalysisResult {
    DEFAULT_ENGINE.analyze(text)
}
