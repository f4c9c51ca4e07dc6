//! Feature extraction
//!
//! Turns raw post text into the handful of measurable signals every score is
//! computed from: length, line and sentence structure, punctuation, numerals,
//! jargon hits and the fold window.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::text::{dedup_in_order, first_sentence_end, prefix_chars, split_sentences, word_count};

static NUMERAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:[.,]\d+)*%?").unwrap());

// ---------------------------------------------------------------------------
// Jargon lexicon
// ---------------------------------------------------------------------------

/// Compiled jargon lexicon; case-insensitive, whole-word matching
#[derive(Debug, Clone)]
pub struct Lexicon {
    pattern: Option<Regex>,
}

impl Lexicon {
    /// Compile the terms into one alternation. Longer terms are tried first so
    /// "game-changer" wins over a shorter overlapping entry.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self> {
        let mut sorted: Vec<&str> = terms
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .collect();
        if sorted.is_empty() {
            return Ok(Self { pattern: None });
        }
        sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        sorted.dedup();

        let alt = sorted
            .iter()
            .map(|term| term_pattern(term))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("(?i){alt}"))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn find_all(&self, text: &str) -> Vec<String> {
        match &self.pattern {
            Some(re) => re
                .find_iter(text)
                .map(|m| {
                    m.as_str()
                        .split_whitespace()
                        .collect::<Vec<_>>()
                        .join(" ")
                        .to_lowercase()
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

// `\b` only holds next to a word character, so "C++" or ".NET" anchor on
// one side at most.
fn term_pattern(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let body = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let head = if term.starts_with(is_word) { r"\b" } else { "" };
    let tail = if term.ends_with(is_word) { r"\b" } else { "" };
    format!("{head}{body}{tail}")
}

// ---------------------------------------------------------------------------
// Feature set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureSet {
    pub char_count: usize,
    pub word_count: usize,
    pub line_break_count: usize,
    pub line_count: usize,
    pub paragraph_count: usize,
    pub sentence_count: usize,
    pub question_count: usize,
    pub exclamation_count: usize,
    pub has_numeral: bool,
    pub numerals: Vec<String>,
    pub questions: Vec<String>,
    pub jargon_hits: Vec<String>,
    pub fold_limit: usize,
    pub fold_window: String,
    pub fold_sentence_count: usize,
    pub fold_word_count: usize,
    pub exceeds_fold: bool,
    /// Fold window contains a sentence end or line break
    pub fold_has_stop: bool,
}

impl FeatureSet {
    pub fn fold_avg_sentence_words(&self) -> f64 {
        if self.fold_sentence_count == 0 {
            0.0
        } else {
            self.fold_word_count as f64 / self.fold_sentence_count as f64
        }
    }

    pub fn sentences_per_paragraph(&self) -> f64 {
        if self.paragraph_count == 0 {
            0.0
        } else {
            self.sentence_count as f64 / self.paragraph_count as f64
        }
    }

    pub fn fold_has_question(&self) -> bool {
        self.fold_window.contains('?')
    }

    pub fn fold_has_numeral(&self) -> bool {
        self.fold_window.chars().any(|c| c.is_ascii_digit())
    }
}

/// Extract features from `text`. Never fails; empty input gives a zeroed set.
pub fn extract_features(text: &str, fold_limit: usize, lexicon: &Lexicon) -> FeatureSet {
    let body = text.trim();
    let sentences = split_sentences(body);

    let line_break_count = body.matches('\n').count();
    let line_count = if body.is_empty() { 0 } else { line_break_count + 1 };
    let paragraph_count = body.lines().filter(|l| !l.trim().is_empty()).count();

    let numerals = dedup_in_order(
        NUMERAL_RE
            .find_iter(body)
            .map(|m| m.as_str().to_string())
            .collect(),
    );
    let questions = sentences
        .iter()
        .filter(|s| s.text.contains('?'))
        .map(|s| s.text.to_string())
        .collect();

    let fold_window = prefix_chars(body, fold_limit);
    let char_count = body.chars().count();

    FeatureSet {
        char_count,
        word_count: word_count(body),
        line_break_count,
        line_count,
        paragraph_count,
        sentence_count: sentences.len(),
        question_count: body.matches('?').count(),
        exclamation_count: body.matches('!').count(),
        has_numeral: !numerals.is_empty(),
        numerals,
        questions,
        jargon_hits: lexicon.find_all(body),
        fold_limit,
        fold_sentence_count: split_sentences(fold_window).len(),
        fold_word_count: word_count(fold_window),
        exceeds_fold: char_count > fold_limit,
        fold_has_stop: first_sentence_end(body).is_some_and(|at| at < fold_window.len()),
        fold_window: fold_window.to_string(),
    }
}
