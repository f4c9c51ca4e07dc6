//! Problem–Agitate–Solve

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FrameworkMatcher, Slot, Window};

// A question, or negative framing of the reader's situation
static PROBLEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\?|\b(?:struggl\w*|problems?|mistakes?|wrong|fail\w*|stuck|tired of|sick of",
        r"|frustrat\w*|can't|cannot|don't|doesn't|won't|never|nobody|no one|hate|broken)\b",
    ))
    .unwrap()
});

// Emotional intensifiers that twist the knife
static AGITATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)!|\b(?:worse|worst|costs?|costing|losing|lose|lost|wast\w*|every single",
        r"|terrif\w*|scary|scared|nightmare|burn\w*|kill\w*|hurts?|exhaust\w*|painful",
        r"|again and again|keeps? (?:happening|getting))\b",
    ))
    .unwrap()
});

// Imperatives and "here's how" style resolutions
static SOLUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:here(?:'|\u{2019})s how|here is how|the fix|the solution|solution|the answer",
        r"|try this|do this|start by|start with|instead|steps?|follow|sign up|join|comment",
        r"|download|grab|book|dm me|click|learn how)\b",
    ))
    .unwrap()
});

static SLOTS: [Slot; 3] = [
    Slot {
        label: "problem",
        cue: &PROBLEM_RE,
        window: Window { start: 0.0, end: 0.34 },
    },
    Slot {
        label: "agitation",
        cue: &AGITATION_RE,
        window: Window { start: 0.33, end: 0.67 },
    },
    Slot {
        label: "solution",
        cue: &SOLUTION_RE,
        window: Window { start: 0.66, end: 1.0 },
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemAgitateSolve;

impl FrameworkMatcher for ProblemAgitateSolve {
    fn name(&self) -> &'static str {
        "PAS"
    }

    fn slots(&self) -> &'static [Slot] {
        &SLOTS
    }
}
