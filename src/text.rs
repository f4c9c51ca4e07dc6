//! Low-level text helpers: sentence splitting and char-safe prefixes

use once_cell::sync::Lazy;
use regex::Regex;

// Terminal punctuation and closing quotes, then whitespace or end of text;
// or a line break.
static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*(?:[ \t]+|$)|\s*\n\s*"#).unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub start: usize,
}

pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut last = 0;
    for m in SENTENCE_END_RE.find_iter(text) {
        push_trimmed(&mut sentences, text, last, m.end());
        last = m.end();
    }
    push_trimmed(&mut sentences, text, last, text.len());
    sentences
}

fn push_trimmed<'a>(out: &mut Vec<Sentence<'a>>, text: &'a str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let offset = raw.len() - raw.trim_start().len();
    out.push(Sentence {
        text: trimmed,
        start: start + offset,
    });
}

/// Byte offset of the first sentence boundary; decimals like "3.5" are not one
pub fn first_sentence_end(text: &str) -> Option<usize> {
    SENTENCE_END_RE.find(text).map(|m| m.start())
}

/// First `n` characters of `text`, never splitting a multi-byte char
pub fn prefix_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            unique.push(item);
        }
    }
    unique
}
