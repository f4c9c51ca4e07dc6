//! Score aggregation
//!
//! Combines feature signals and pattern matches into the hook, structure,
//! clarity and pattern sub-scores and the weighted overall score. Every
//! threshold is a named constant; the weights and jargon penalty come from
//! [`EngineConfig`].

use serde::Serialize;

use crate::config::EngineConfig;
use crate::features::FeatureSet;
use crate::patterns::PatternMatch;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

pub const SCORE_MIN: i64 = 0;
pub const SCORE_MAX: i64 = 100;

pub const HOOK_BASE: i64 = 40;
pub const HOOK_QUESTION_BONUS: i64 = 20;
pub const HOOK_NUMERAL_BONUS: i64 = 15;
pub const HOOK_SHORT_SENTENCE_WORDS: f64 = 12.0;
pub const HOOK_SIMPLICITY_BONUS: i64 = 15;
pub const HOOK_MODERATE_SENTENCE_WORDS: f64 = 20.0;
pub const HOOK_MODERATE_SIMPLICITY_BONUS: i64 = 7;
pub const HOOK_CURIOSITY_GAP_BONUS: i64 = 10;
pub const HOOK_MIN_FOLD_CHARS: usize = 60;
pub const HOOK_SHORT_FOLD_PENALTY: i64 = 15;
pub const HOOK_MIDPOINT: u8 = 50;

pub const STRUCTURE_BASE: i64 = 40;
pub const STRUCTURE_MIN_LINE_BREAKS: usize = 2;
pub const STRUCTURE_LINE_BREAK_BONUS: i64 = 30;
pub const STRUCTURE_DENSITY_MIN: f64 = 1.0;
pub const STRUCTURE_DENSITY_MAX: f64 = 3.0;
pub const STRUCTURE_DENSITY_BONUS: i64 = 20;
pub const STRUCTURE_MIN_SENTENCES: usize = 3;
pub const STRUCTURE_SENTENCE_BONUS: i64 = 10;
/// Cap applied when the post has fewer than `STRUCTURE_MIN_LINE_BREAKS`
pub const STRUCTURE_LOW_BREAK_CEILING: u8 = 40;

pub const CLARITY_MAX: u32 = 100;

pub const BAND_VIRAL_MIN: u8 = 80;
pub const BAND_STRONG_MIN: u8 = 60;
pub const BAND_AVERAGE_MIN: u8 = 40;
pub const BAND_WEAK_MIN: u8 = 20;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubScores {
    pub hook: u8,
    pub structure: u8,
    pub clarity: u8,
    pub pattern: u8,
}

impl SubScores {
    pub const fn named(&self) -> [(&'static str, u8); 4] {
        [
            ("hook", self.hook),
            ("structure", self.structure),
            ("clarity", self.clarity),
            ("pattern", self.pattern),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    pub overall: u8,
    pub sub_scores: SubScores,
}

// ---------------------------------------------------------------------------
// Sub-scores
// ---------------------------------------------------------------------------

fn clamp_score(raw: i64) -> u8 {
    raw.clamp(SCORE_MIN, SCORE_MAX) as u8
}

pub fn hook_score(features: &FeatureSet) -> u8 {
    let mut score = HOOK_BASE;
    if features.fold_has_question() {
        score += HOOK_QUESTION_BONUS;
    }
    if features.fold_has_numeral() {
        score += HOOK_NUMERAL_BONUS;
    }

    let avg_words = features.fold_avg_sentence_words();
    if features.fold_sentence_count > 0 {
        if avg_words <= HOOK_SHORT_SENTENCE_WORDS {
            score += HOOK_SIMPLICITY_BONUS;
        } else if avg_words <= HOOK_MODERATE_SENTENCE_WORDS {
            score += HOOK_MODERATE_SIMPLICITY_BONUS;
        }
    }

    if features.exceeds_fold {
        score += HOOK_CURIOSITY_GAP_BONUS;
    }
    if features.fold_window.chars().count() < HOOK_MIN_FOLD_CHARS {
        score -= HOOK_SHORT_FOLD_PENALTY;
    }
    clamp_score(score)
}

pub fn structure_score(features: &FeatureSet) -> u8 {
    let mut score = STRUCTURE_BASE;
    let broken_up = features.line_break_count >= STRUCTURE_MIN_LINE_BREAKS;
    if broken_up {
        score += STRUCTURE_LINE_BREAK_BONUS;
    }

    let density = features.sentences_per_paragraph();
    if (STRUCTURE_DENSITY_MIN..=STRUCTURE_DENSITY_MAX).contains(&density) {
        score += STRUCTURE_DENSITY_BONUS;
    }
    if features.sentence_count >= STRUCTURE_MIN_SENTENCES {
        score += STRUCTURE_SENTENCE_BONUS;
    }

    let score = clamp_score(score);
    if broken_up {
        score
    } else {
        score.min(STRUCTURE_LOW_BREAK_CEILING)
    }
}

pub fn clarity_score(features: &FeatureSet, penalty_per_term: u32) -> u8 {
    let occurrences = u32::try_from(features.jargon_hits.len()).unwrap_or(u32::MAX);
    let penalty = occurrences.saturating_mul(penalty_per_term);
    CLARITY_MAX.saturating_sub(penalty) as u8
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Highest-scoring match; ties go to more detected elements, then to the
/// earlier matcher. A post where every framework scores zero has none.
pub fn dominant_pattern(matches: &[PatternMatch]) -> Option<&PatternMatch> {
    matches
        .iter()
        .enumerate()
        .filter(|(_, m)| m.overall_score > 0)
        .max_by(|(ia, a), (ib, b)| {
            a.overall_score
                .cmp(&b.overall_score)
                .then_with(|| a.detected_count().cmp(&b.detected_count()))
                .then_with(|| ib.cmp(ia))
        })
        .map(|(_, m)| m)
}

pub fn aggregate(features: &FeatureSet, matches: &[PatternMatch], config: &EngineConfig) -> Aggregate {
    let sub_scores = SubScores {
        hook: hook_score(features),
        structure: structure_score(features),
        clarity: clarity_score(features, config.jargon.penalty_per_term),
        pattern: dominant_pattern(matches).map_or(0, |m| m.overall_score),
    };

    let w = &config.weights;
    let weighted = w.hook * f64::from(sub_scores.hook)
        + w.structure * f64::from(sub_scores.structure)
        + w.clarity * f64::from(sub_scores.clarity)
        + w.pattern * f64::from(sub_scores.pattern);

    Aggregate {
        overall: clamp_score(weighted.round() as i64),
        sub_scores,
    }
}

pub fn band_for_score(score: u8) -> &'static str {
    if score >= BAND_VIRAL_MIN {
        "viral"
    } else if score >= BAND_STRONG_MIN {
        "strong"
    } else if score >= BAND_AVERAGE_MIN {
        "average"
    } else if score >= BAND_WEAK_MIN {
        "weak"
    } else {
        "flat"
    }
}
