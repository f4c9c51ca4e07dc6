//! Analysis result returned to callers

use serde::Serialize;

use crate::patterns::PatternMatch;
use crate::scoring::SubScores;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub band: String,
    pub sub_scores: SubScores,
    /// Best-scoring framework, if any matcher ran
    pub dominant_pattern: Option<PatternMatch>,
    pub pattern_matches: Vec<PatternMatch>,
    pub highlights: Vec<String>,
    pub red_flags: Vec<String>,
    pub suggestions: Vec<String>,
    pub word_count: usize,
    pub fold_limit: usize,
}
