//! Error types for the scoring engine

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// The analysis itself never fails for a string input; everything here comes
/// from length validation, configuration loading, or a caught panic.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("post is too short: {len} characters (minimum {min})")]
    InputTooShort { len: usize, min: usize },

    #[error("post is too long: {len} characters (maximum {max})")]
    InputTooLong { len: usize, max: usize },

    /// Analysis panicked; detail is logged, never shown to the caller
    #[error("analysis failed unexpectedly, please try again later")]
    UnexpectedComputation,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid jargon lexicon: {0}")]
    Lexicon(#[from] regex::Error),

    #[error("unknown device profile '{0}' (expected 'mobile' or 'desktop')")]
    UnknownProfile(String),
}

impl EngineError {
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InputTooShort { .. } | Self::InputTooLong { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
