//! Attention–Interest–Desire–Action

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FrameworkMatcher, Slot, Window};

static ATTENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\?|!|\d|\b(?:stop|warning|secret|truth|nobody|everyone|most people",
        r"|unpopular opinion|hot take|breaking)\b",
    ))
    .unwrap()
});

static INTEREST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:because|here(?:'|\u{2019})s why|the reason|that(?:'|\u{2019})s why|turns out",
        r"|research|data|study|studies|found|discovered|what if)\b",
    ))
    .unwrap()
});

static DESIRE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:imagine|you(?:'|\u{2019})ll|you will|you could|picture|without|finally",
        r"|results?|save|grow|double|more time|freedom)\b",
    ))
    .unwrap()
});

static ACTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:comment|share|follow|sign up|join|download|grab|book|dm me|click",
        r"|subscribe|reply|try it|get started|start today|let me know|repost)\b",
    ))
    .unwrap()
});

static SLOTS: [Slot; 4] = [
    Slot {
        label: "attention",
        cue: &ATTENTION_RE,
        window: Window { start: 0.0, end: 0.25 },
    },
    Slot {
        label: "interest",
        cue: &INTEREST_RE,
        window: Window { start: 0.25, end: 0.5 },
    },
    Slot {
        label: "desire",
        cue: &DESIRE_RE,
        window: Window { start: 0.5, end: 0.75 },
    },
    Slot {
        label: "action",
        cue: &ACTION_RE,
        window: Window { start: 0.75, end: 1.0 },
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Aida;

impl FrameworkMatcher for Aida {
    fn name(&self) -> &'static str {
        "AIDA"
    }

    fn slots(&self) -> &'static [Slot] {
        &SLOTS
    }
}
