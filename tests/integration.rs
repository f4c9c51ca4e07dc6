use std::io::Write;

use hook_score::config::{
    DeviceProfile, EngineConfig, DESKTOP_FOLD_CHARS, JARGON_PENALTY_PER_TERM, MOBILE_FOLD_CHARS,
};
use hook_score::scoring::{CLARITY_MAX, HOOK_MIDPOINT, STRUCTURE_LOW_BREAK_CEILING};
use hook_score::{analyze, Engine, EngineError};

const PAS_POST: &str = "Struggling to get replies on your posts?\n\
                        Every post you write without a hook is wasted effort, and it gets worse each week.\n\
                        Here's how to fix it: open with a question people can't ignore.";

#[test]
fn short_question_with_numeral_has_strong_hook() {
    let text = "Want 3 more replies on every post?\nStart with a question.\nKeep each line short and clear.";
    let result = analyze(text);
    assert!(
        result.sub_scores.hook > HOOK_MIDPOINT,
        "hook should be above {HOOK_MIDPOINT}, got {}",
        result.sub_scores.hook
    );
    assert!(result
        .highlights
        .contains(&"Want 3 more replies on every post?".to_string()));
    assert!(result.highlights.contains(&"3".to_string()));
    assert!(result.red_flags.is_empty());
}

#[test]
fn repeated_jargon_is_flagged_and_penalized() {
    let text = "Our app is revolutionizing how teams plan. Honestly, it is a game-changer.\n\
                We keep revolutionizing the calendar, and users call it a game-changer too.";
    let result = analyze(text);
    assert!(result.red_flags.contains(&"revolutionizing".to_string()));
    assert!(result.red_flags.contains(&"game-changer".to_string()));
    assert_eq!(
        u32::from(result.sub_scores.clarity),
        CLARITY_MAX.saturating_sub(4 * JARGON_PENALTY_PER_TERM)
    );
}

#[test]
fn wall_of_text_is_capped_on_structure() {
    let sentence = "Did you know that 9 out of 10 readers skim the opening before deciding to stay? ";
    let text = sentence.repeat(8);
    assert!(text.trim().chars().count() >= 500);
    assert!(!text.contains('\n'));

    let result = analyze(&text);
    assert!(
        result.sub_scores.structure <= STRUCTURE_LOW_BREAK_CEILING,
        "structure should be capped at {STRUCTURE_LOW_BREAK_CEILING}, got {}",
        result.sub_scores.structure
    );
}

#[test]
fn problem_agitate_solve_post_is_dominant() {
    let result = analyze(PAS_POST);
    let dominant = result.dominant_pattern.expect("a dominant pattern");
    assert_eq!(dominant.framework, "PAS");
    assert_eq!(dominant.overall_score, 100);
    assert_eq!(result.sub_scores.pattern, 100);
    for element in &dominant.elements {
        let evidence = element.evidence_span.as_deref().expect("evidence for detected element");
        assert!(PAS_POST.contains(evidence));
    }
}

#[test]
fn every_framework_is_reported() {
    let result = analyze(PAS_POST);
    let names: Vec<&str> = result
        .pattern_matches
        .iter()
        .map(|m| m.framework.as_str())
        .collect();
    assert_eq!(names, vec!["PAS", "AIDA", "Narrative Arc"]);
}

#[test]
fn analysis_is_deterministic() {
    let first = analyze(PAS_POST);
    let second = analyze(PAS_POST);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn json_output_is_valid() {
    let result = analyze(PAS_POST);
    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in [
        "overall_score",
        "band",
        "sub_scores",
        "dominant_pattern",
        "pattern_matches",
        "highlights",
        "red_flags",
        "suggestions",
        "word_count",
        "fold_limit",
    ] {
        assert!(parsed.get(key).is_some(), "missing key {key}");
    }
    assert!(parsed["sub_scores"].get("hook").is_some());
    let interest = &parsed["pattern_matches"][1]["elements"][1];
    assert_eq!(interest["detected"], serde_json::Value::Bool(false));
    assert!(interest.get("evidence_span").is_none());
}

#[test]
fn boundary_rejects_out_of_range_length() {
    let engine = Engine::new(EngineConfig::default()).unwrap();
    let err = engine.analyze_post("Too short to score.").unwrap_err();
    assert!(matches!(err, EngineError::InputTooShort { .. }));
    assert!(err.is_input_error());

    let err = engine.analyze_post(&"word ".repeat(1200)).unwrap_err();
    assert!(matches!(err, EngineError::InputTooLong { .. }));
}

#[test]
fn desktop_profile_widens_the_fold() {
    let text = "Nobody reads past the first two lines unless you give them a reason to, so the opening has to earn every single click it gets from a reader who is busy scrolling through a crowded feed full of noise and other people's news and hot takes.";
    let mobile = Engine::new(EngineConfig::default()).unwrap().analyze(text);
    let desktop = Engine::new(EngineConfig::default().with_profile(DeviceProfile::Desktop))
        .unwrap()
        .analyze(text);
    assert_eq!(mobile.fold_limit, MOBILE_FOLD_CHARS);
    assert_eq!(desktop.fold_limit, DESKTOP_FOLD_CHARS);
    assert!(mobile
        .red_flags
        .iter()
        .any(|f| f.contains("210-character fold")));
    assert!(desktop.red_flags.is_empty());
}

#[test]
fn config_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
profile = "desktop"

[jargon]
terms = ["synergy"]
penalty_per_term = 25
"#
    )
    .unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    let engine = Engine::new(config).unwrap();
    let result = engine.analyze("Synergy is the word of the day, and synergy is what our revolutionizing team sells.");
    assert_eq!(result.fold_limit, DESKTOP_FOLD_CHARS);
    assert_eq!(result.sub_scores.clarity, 50);
    assert_eq!(result.red_flags, vec!["synergy".to_string()]);
}

#[test]
fn missing_config_file_reports_path() {
    let err = EngineConfig::load("/nonexistent/hook-score.toml").unwrap_err();
    assert!(matches!(err, EngineError::ConfigIo { .. }));
    assert!(err.to_string().contains("/nonexistent/hook-score.toml"));
}

#[test]
fn weak_post_gets_capped_suggestions() {
    let text = "our synergy platform is basically a holistic end-to-end value-add that will leverage world-class thought leadership across every channel we touch";
    let result = analyze(text);
    assert!(!result.suggestions.is_empty());
    assert!(result.suggestions.len() <= hook_score::compose::MAX_SUGGESTIONS);
    assert!(result.suggestions.iter().any(|s| s.contains("'synergy'")));
}

#[test]
fn decimal_in_fold_does_not_count_as_a_stop() {
    let text = format!(
        "Revenue grew 3.5 times while {}",
        "the team kept shipping features without pausing ".repeat(5)
    );
    let result = analyze(&text);
    assert!(
        result
            .red_flags
            .iter()
            .any(|f| f.contains("210-character fold")),
        "expected a fold flag, got {:?}",
        result.red_flags
    );
}

#[test]
fn punctuated_jargon_terms_are_flagged() {
    let config = EngineConfig::from_toml_str(
        r#"
[jargon]
terms = ["A.I.", "C++"]
"#,
    )
    .unwrap();
    let engine = Engine::new(config).unwrap();
    let result = engine.analyze("Our A.I. is written in C++ and ships to every customer this spring.");
    assert_eq!(result.red_flags, vec!["a.i.".to_string(), "c++".to_string()]);
    assert_eq!(
        u32::from(result.sub_scores.clarity),
        CLARITY_MAX - 2 * JARGON_PENALTY_PER_TERM
    );
}
