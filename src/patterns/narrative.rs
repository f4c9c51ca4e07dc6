//! Narrative arc: setup, conflict, resolution

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FrameworkMatcher, Slot, Window};

static SETUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:i|we)\s+(?:was|were|used to|had|started|spent|thought|remember|joined",
        r"|grew up|worked|launched)\b|\b(?:years? ago|last (?:year|month|week|summer)|back in|when i)\b",
    ))
    .unwrap()
});

static CONFLICT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:but|until|suddenly|then|failed|lost|rejected|fired|broke|crashed",
        r"|hit a wall|burn(?:ed|t) out|struggled|realized)\b",
    ))
    .unwrap()
});

static RESOLUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:now|today|since then|learned|lesson|turns out|that(?:'|\u{2019})s when",
        r"|finally|grateful|here(?:'|\u{2019})s what)\b",
    ))
    .unwrap()
});

static SLOTS: [Slot; 3] = [
    Slot {
        label: "setup",
        cue: &SETUP_RE,
        window: Window { start: 0.0, end: 0.34 },
    },
    Slot {
        label: "conflict",
        cue: &CONFLICT_RE,
        window: Window { start: 0.33, end: 0.67 },
    },
    Slot {
        label: "resolution",
        cue: &RESOLUTION_RE,
        window: Window { start: 0.66, end: 1.0 },
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct NarrativeArc;

impl FrameworkMatcher for NarrativeArc {
    fn name(&self) -> &'static str {
        "Narrative Arc"
    }

    fn slots(&self) -> &'static [Slot] {
        &SLOTS
    }
}
