//! Framework pattern matchers
//!
//! Each matcher describes a rhetorical framework as an ordered list of slots.
//! A slot has a cue (regex tested per sentence) and an expected window, the
//! span of the post (as a fraction of its length) where that element belongs.
//!
//! Matching walks the slots in order. An element counts as detected when its
//! cue fires in a sentence after the previous detected element and inside the
//! window widened by the position tolerance. A cue found anywhere else earns
//! [`MISPLACED_CREDIT`]; no cue at all earns nothing.

pub mod aida;
pub mod narrative;
pub mod pas;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::features::FeatureSet;
use crate::text::{prefix_chars, split_sentences};

pub use aida::Aida;
pub use narrative::NarrativeArc;
pub use pas::ProblemAgitateSolve;

/// Credit for an element whose cue appears outside its expected position
pub const MISPLACED_CREDIT: f64 = 0.5;

pub const EVIDENCE_MAX_CHARS: usize = 140;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementStatus {
    Detected,
    Misplaced,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternElement {
    pub label: String,
    pub detected: bool,
    pub status: ElementStatus,
    /// Literal excerpt of the post; only present when detected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_span: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub framework: String,
    pub overall_score: u8,
    pub elements: Vec<PatternElement>,
}

impl PatternMatch {
    pub fn detected_count(&self) -> usize {
        self.elements.iter().filter(|e| e.detected).count()
    }

    pub fn gaps(&self) -> impl Iterator<Item = &PatternElement> {
        self.elements.iter().filter(|e| !e.detected)
    }
}

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub start: f64,
    pub end: f64,
}

impl Window {
    fn contains(self, position: f64, tolerance: f64) -> bool {
        position >= self.start - tolerance && position <= self.end + tolerance
    }
}

pub struct Slot {
    pub label: &'static str,
    pub cue: &'static Lazy<Regex>,
    pub window: Window,
}

// ---------------------------------------------------------------------------
// Matcher trait
// ---------------------------------------------------------------------------

/// Detects the elements of one framework in a post
pub trait FrameworkMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    fn slots(&self) -> &'static [Slot];

    fn detect(&self, text: &str, features: &FeatureSet, tolerance: f64) -> PatternMatch {
        if features.sentence_count == 0 {
            return unmatched(self.name(), self.slots());
        }
        match_slots(self.name(), self.slots(), text, tolerance)
    }
}

/// Matchers in registry order; this order also breaks full ties
pub fn default_matchers() -> Vec<Box<dyn FrameworkMatcher>> {
    vec![
        Box::new(ProblemAgitateSolve),
        Box::new(Aida),
        Box::new(NarrativeArc),
    ]
}

pub fn run_matchers(
    matchers: &[Box<dyn FrameworkMatcher>],
    text: &str,
    features: &FeatureSet,
    tolerance: f64,
) -> Vec<PatternMatch> {
    matchers
        .iter()
        .map(|m| m.detect(text, features, tolerance))
        .collect()
}

fn unmatched(name: &str, slots: &[Slot]) -> PatternMatch {
    PatternMatch {
        framework: name.to_string(),
        overall_score: 0,
        elements: slots
            .iter()
            .map(|slot| PatternElement {
                label: slot.label.to_string(),
                detected: false,
                status: ElementStatus::Missing,
                evidence_span: None,
            })
            .collect(),
    }
}

fn match_slots(name: &str, slots: &[Slot], text: &str, tolerance: f64) -> PatternMatch {
    let sentences = split_sentences(text);
    let length = text.len().max(1) as f64;

    // Index of the first sentence the next element may occupy
    let mut cursor = 0;
    let mut credit = 0.0;
    let mut elements = Vec::with_capacity(slots.len());

    for slot in slots {
        let mut placed = None;
        let mut seen_elsewhere = false;
        for (idx, sentence) in sentences.iter().enumerate() {
            if !slot.cue.is_match(sentence.text) {
                continue;
            }
            let position = sentence.start as f64 / length;
            if idx >= cursor && slot.window.contains(position, tolerance) {
                placed = Some((idx, sentence.text));
                break;
            }
            seen_elsewhere = true;
        }

        let element = match placed {
            Some((idx, evidence)) => {
                cursor = idx + 1;
                credit += 1.0;
                PatternElement {
                    label: slot.label.to_string(),
                    detected: true,
                    status: ElementStatus::Detected,
                    evidence_span: Some(prefix_chars(evidence, EVIDENCE_MAX_CHARS).to_string()),
                }
            }
            None if seen_elsewhere => {
                credit += MISPLACED_CREDIT;
                PatternElement {
                    label: slot.label.to_string(),
                    detected: false,
                    status: ElementStatus::Misplaced,
                    evidence_span: None,
                }
            }
            None => PatternElement {
                label: slot.label.to_string(),
                detected: false,
                status: ElementStatus::Missing,
                evidence_span: None,
            },
        };
        elements.push(element);
    }

    let overall_score = if slots.is_empty() {
        0
    } else {
        (credit / slots.len() as f64 * 100.0).round().clamp(0.0, 100.0) as u8
    };

    PatternMatch {
        framework: name.to_string(),
        overall_score,
        elements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_JARGON, MOBILE_FOLD_CHARS, POSITION_TOLERANCE};
    use crate::features::{extract_features, Lexicon};

    static FIRST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfirst\b").unwrap());
    static LAST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\blast\b").unwrap());

    static TWO_SLOTS: [Slot; 2] = [
        Slot {
            label: "opening",
            cue: &FIRST_RE,
            window: Window { start: 0.0, end: 0.3 },
        },
        Slot {
            label: "closing",
            cue: &LAST_RE,
            window: Window { start: 0.7, end: 1.0 },
        },
    ];

    struct TwoStep;

    impl FrameworkMatcher for TwoStep {
        fn name(&self) -> &'static str {
            "TwoStep"
        }

        fn slots(&self) -> &'static [Slot] {
            &TWO_SLOTS
        }
    }

    fn detect(text: &str) -> PatternMatch {
        let lexicon = Lexicon::new(DEFAULT_JARGON).unwrap();
        let features = extract_features(text, MOBILE_FOLD_CHARS, &lexicon);
        TwoStep.detect(text.trim(), &features, POSITION_TOLERANCE)
    }

    const FILLER: &str = "This middle sentence only adds some length to the post body.";

    #[test]
    fn full_match_scores_100_with_evidence() {
        let text = format!("The first thing to know.\n{FILLER}\n{FILLER}\nThat is the last word.");
        let result = detect(&text);
        assert_eq!(result.overall_score, 100);
        assert_eq!(result.detected_count(), 2);
        assert_eq!(
            result.elements[0].evidence_span.as_deref(),
            Some("The first thing to know.")
        );
        for element in &result.elements {
            assert!(text.contains(element.evidence_span.as_deref().unwrap()));
        }
    }

    #[test]
    fn reversed_order_earns_half_credit() {
        let text = format!("The last word comes early.\n{FILLER}\n{FILLER}\nNow the first point.");
        let result = detect(&text);
        assert_eq!(result.elements[0].status, ElementStatus::Misplaced);
        assert_eq!(result.elements[1].status, ElementStatus::Misplaced);
        assert!(result.elements.iter().all(|e| e.evidence_span.is_none()));
        assert_eq!(result.overall_score, 50);
    }

    #[test]
    fn missing_cues_score_zero() {
        let text = format!("{FILLER}\n{FILLER}");
        let result = detect(&text);
        assert_eq!(result.overall_score, 0);
        assert!(result
            .elements
            .iter()
            .all(|e| e.status == ElementStatus::Missing && !e.detected));
    }

    #[test]
    fn empty_text_reports_all_missing() {
        let result = detect("");
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.gaps().count(), 2);
    }

    #[test]
    fn tolerance_widens_window() {
        let text = format!(
            "{FILLER}\n{FILLER}\nThe first point sits a little late.\n{FILLER}\n{FILLER}\n{FILLER}\nThe last word."
        );
        let lexicon = Lexicon::new(DEFAULT_JARGON).unwrap();
        let features = extract_features(&text, MOBILE_FOLD_CHARS, &lexicon);
        let strict = TwoStep.detect(&text, &features, 0.0);
        let loose = TwoStep.detect(&text, &features, POSITION_TOLERANCE);
        assert_eq!(strict.elements[0].status, ElementStatus::Misplaced);
        assert_eq!(loose.elements[0].status, ElementStatus::Detected);
    }
}
