//! Result composition
//!
//! Turns features, pattern matches and scores into the caller-facing
//! highlights, red flags and suggestions. Output order is fixed so identical
//! inputs always compose identical results.

use crate::features::FeatureSet;
use crate::patterns::{ElementStatus, PatternMatch};
use crate::result::AnalysisResult;
use crate::scoring::{
    band_for_score, dominant_pattern, Aggregate, SubScores, HOOK_MIN_FOLD_CHARS,
    STRUCTURE_MIN_LINE_BREAKS,
};
use crate::text::dedup_in_order;

pub const MAX_HIGHLIGHTS: usize = 8;
pub const MAX_SUGGESTIONS: usize = 5;
/// Sub-scores below this get a suggestion
pub const WEAK_SUBSCORE_THRESHOLD: u8 = 60;

pub fn compose(features: &FeatureSet, matches: Vec<PatternMatch>, aggregate: Aggregate) -> AnalysisResult {
    let dominant = dominant_pattern(&matches).cloned();

    AnalysisResult {
        overall_score: aggregate.overall,
        band: band_for_score(aggregate.overall).to_string(),
        sub_scores: aggregate.sub_scores,
        highlights: highlights(features, dominant.as_ref()),
        red_flags: red_flags(features),
        suggestions: suggestions(features, dominant.as_ref(), &aggregate.sub_scores),
        dominant_pattern: dominant,
        pattern_matches: matches,
        word_count: features.word_count,
        fold_limit: features.fold_limit,
    }
}

fn highlights(features: &FeatureSet, dominant: Option<&PatternMatch>) -> Vec<String> {
    let mut items = features.questions.clone();
    items.extend(features.numerals.iter().cloned());
    if let Some(pattern) = dominant {
        items.extend(pattern.elements.iter().filter_map(|e| e.evidence_span.clone()));
    }
    let mut items = dedup_in_order(items);
    items.truncate(MAX_HIGHLIGHTS);
    items
}

fn red_flags(features: &FeatureSet) -> Vec<String> {
    let mut flags = dedup_in_order(features.jargon_hits.clone());
    if features.exceeds_fold && !features.fold_has_stop {
        flags.push(format!(
            "opening runs past the {}-character fold without a clear stopping point",
            features.fold_limit
        ));
    }
    flags
}

fn suggestions(
    features: &FeatureSet,
    dominant: Option<&PatternMatch>,
    scores: &SubScores,
) -> Vec<String> {
    let mut weak: Vec<(&str, u8)> = scores
        .named()
        .into_iter()
        .filter(|(_, score)| *score < WEAK_SUBSCORE_THRESHOLD)
        .collect();
    // Stable sort keeps the fixed order among equal scores
    weak.sort_by_key(|(_, score)| *score);

    let mut out: Vec<String> = weak
        .into_iter()
        .filter_map(|(name, _)| weak_signal_advice(name, features, dominant))
        .collect();

    if let Some(pattern) = dominant {
        for element in pattern.gaps() {
            out.push(match element.status {
                ElementStatus::Misplaced => format!(
                    "Move the {} of your {} structure to where readers expect it.",
                    element.label, pattern.framework
                ),
                _ => format!(
                    "Add a clear {} to complete the {} structure.",
                    element.label, pattern.framework
                ),
            });
        }
    }

    let mut out = dedup_in_order(out);
    out.truncate(MAX_SUGGESTIONS);
    out
}

fn weak_signal_advice(
    signal: &str,
    features: &FeatureSet,
    dominant: Option<&PatternMatch>,
) -> Option<String> {
    let advice = match signal {
        "hook" => {
            if !features.fold_has_question() {
                format!(
                    "Open with a question in the first {} characters so readers tap \"see more\".",
                    features.fold_limit
                )
            } else if !features.fold_has_numeral() {
                "Put a concrete number in your opening line.".to_string()
            } else if features.fold_window.chars().count() < HOOK_MIN_FOLD_CHARS {
                "Give the opening more room before the fold.".to_string()
            } else {
                "Shorten the opening sentences to a dozen words or fewer.".to_string()
            }
        }
        "structure" => {
            if features.line_break_count < STRUCTURE_MIN_LINE_BREAKS {
                "Break the post into short paragraphs; blank lines make it easier to skim."
                    .to_string()
            } else {
                "Keep paragraphs to one to three sentences each.".to_string()
            }
        }
        "clarity" => match features.jargon_hits.first() {
            Some(term) => format!("Replace '{term}' with plain language that says what you mean."),
            None => "Use plain, specific words instead of buzzwords.".to_string(),
        },
        "pattern" => match dominant {
            Some(p) => format!("Tighten the {} structure so every step lands in order.", p.framework),
            None => "Give the post a clear shape, for example problem, agitation, then solution."
                .to_string(),
        },
        _ => return None,
    };
    Some(advice)
}
