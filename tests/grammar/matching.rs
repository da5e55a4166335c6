//! Matching properties of compiled templates.

use proptest::prelude::*;
use toi_grammar::{CaptureContext, compile};

fn context() -> CaptureContext {
    CaptureContext::new(Vec::new().into(), Vec::new().into())
}

fn matches(templates: &[&str], line: &str) -> bool {
    compile(templates, &context())
        .unwrap()
        .match_line(line)
        .is_some()
}

/// Joins the non-empty parts with single spaces.
fn words(parts: &[&str]) -> String {
    parts
        .iter()
        .copied()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

proptest! {
    #[test]
    fn literal_template_matches_itself(words in prop::collection::vec("[a-z]{1,8}", 1..5)) {
        let template = words.join(" ");
        let matcher = compile(&[template.as_str()], &context()).unwrap();
        let captures = matcher.match_line(&template);
        prop_assert!(captures.is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn literal_template_rejects_trailing_text(
        words in prop::collection::vec("[a-z]{1,8}", 1..5),
        extra in "[a-z0-9]{1,4}",
    ) {
        let template = words.join(" ");
        let matcher = compile(&[template.as_str()], &context()).unwrap();
        let joined = format!("{template}{extra}");
        let spaced = format!("{template} {extra}");
        prop_assert!(matcher.match_line(&joined).is_none());
        prop_assert!(matcher.match_line(&spaced).is_none());
    }

    #[test]
    fn literal_match_ignores_case_and_padding(
        words in prop::collection::vec("[a-z]{1,8}", 1..5),
        pad in " {0,3}",
    ) {
        let template = words.join(" ");
        let line = format!("{pad}{}{pad}", template.to_uppercase());
        prop_assert!(matches(&[template.as_str()], &line));
    }

    #[test]
    fn optional_word_appears_once_or_not_at_all(
        before in prop::collection::vec("[a-m]{1,6}", 1..4),
        word in "[n-q]{1,6}",
        after in prop::collection::vec("[r-z]{1,6}", 0..3),
    ) {
        let before = before.join(" ");
        let after = after.join(" ");
        let group = format!("[{word}]");
        let template = words(&[before.as_str(), group.as_str(), after.as_str()]);
        let matcher = compile(&[template.as_str()], &context()).unwrap();

        let without = words(&[before.as_str(), after.as_str()]);
        let once = words(&[before.as_str(), word.as_str(), after.as_str()]);
        let twice = words(&[before.as_str(), word.as_str(), word.as_str(), after.as_str()]);
        prop_assert!(matcher.match_line(&without).is_some());
        prop_assert!(matcher.match_line(&once).is_some());
        prop_assert!(matcher.match_line(&twice).is_none());
    }
}

#[test]
fn optional_group_is_all_or_nothing() {
    assert!(matches(&["a [b] c"], "a c"));
    assert!(matches(&["a [b] c"], "a b c"));
    assert!(!matches(&["a [b] c"], "a b b c"));
    assert!(!matches(&["a [b] c"], "a b"));
}

#[test]
fn nested_optional_groups() {
    let templates = ["start [a [new]] game"];
    assert!(matches(&templates, "start game"));
    assert!(matches(&templates, "start a game"));
    assert!(matches(&templates, "start a new game"));
    assert!(!matches(&templates, "start new game"));
}

#[test]
fn command_is_anchored_at_end_of_input() {
    assert!(matches(&["go"], "go"));
    assert!(!matches(&["go"], "go north"));
}

#[test]
fn literal_needs_word_boundary() {
    assert!(!matches(&["go"], "gone"));
    assert!(matches(&["?"], "?"));
}

#[test]
fn alternatives_do_not_block_each_other() {
    let templates = ["new [game]", "new party"];
    assert!(matches(&templates, "new"));
    assert!(matches(&templates, "new game"));
    assert!(matches(&templates, "new party"));
    assert!(!matches(&templates, "new world"));
}

#[test]
fn escaped_brackets_are_literal() {
    assert!(matches(&[r"say \[hi\]"], "say [hi]"));
    assert!(!matches(&[r"say \[hi\]"], "say"));
}

#[test]
fn malformed_templates_fail_at_compile_time() {
    for template in ["a [b", "a b]", "pick {species", "pick {colour}", "{name} {topic}"] {
        let err = compile(&[template], &context()).unwrap_err();
        assert_eq!(err.template, template);
    }
}

#[test]
fn pc_capture_without_party_fails_at_compile_time() {
    assert!(compile(&["edit {pc}"], &context()).is_err());
}
