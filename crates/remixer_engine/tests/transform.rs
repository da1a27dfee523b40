use pretty_assertions::assert_eq;
use remixer_engine::{transform, RemixMode};

#[test]
fn summarize_keeps_the_first_ten_tokens() {
    let input = "The quick brown fox jumps over the lazy dog and runs away fast";

    let output = transform("summarize", input);

    assert_eq!(
        output,
        "Summary: The quick brown fox jumps over the lazy dog and..."
    );
    assert!(output.starts_with("Summary: The quick brown fox jumps over the"));
    assert!(output.ends_with("..."));
}

#[test]
fn summarize_collapses_whitespace_between_tokens() {
    let output = transform("summarize", "one\t two\n  three");
    assert_eq!(output, "Summary: one two three...");
}

#[test]
fn simplify_strips_punctuation_and_lowercases() {
    assert_eq!(transform("simplify", "hello, world!!!"), "hello world");
    assert_eq!(transform("simplify", "Mixed CASE? Yes."), "mixed case yes");
}

#[test]
fn simplify_keeps_word_characters() {
    assert_eq!(transform("simplify", "snake_case_42"), "snake_case_42");
}

#[test]
fn expand_appends_the_elaboration_sentence() {
    let output = transform("expand", "test");

    assert!(output.starts_with("Expanded version: test"));
    assert!(output.contains("elaborates on the original text"));
}

#[test]
fn formal_and_casual_wrap_the_original_text() {
    let formal = transform("formal", "the report");
    assert!(formal.starts_with("Formal version: the report"));

    let casual = transform("casual", "the report");
    assert!(casual.contains("the report"));
    assert!(casual.ends_with("Pretty cool, right?"));
}

#[test]
fn creative_adds_markers_and_a_closing_line() {
    let output = transform("creative", "a story");

    assert!(output.starts_with("✨ Creative remix: a story ✨"));
    assert!(output.contains('\n'));
    assert!(output.ends_with("magical and inspiring!"));
}

#[test]
fn unknown_mode_label_falls_back_to_identity() {
    assert_eq!(transform("made-up-mode", "abc"), "abc");
    assert_eq!(transform("", "abc"), "abc");
}

#[test]
fn every_mode_yields_non_empty_deterministic_output() {
    for mode in RemixMode::ALL {
        let first = transform(mode.label(), "non-empty input");
        let second = transform(mode.label(), "non-empty input");

        assert!(!first.is_empty(), "mode {mode:?} produced empty output");
        assert_eq!(first, second, "mode {mode:?} is not deterministic");
    }
}

#[test]
fn mode_labels_round_trip_through_parse() {
    for mode in RemixMode::ALL {
        assert_eq!(RemixMode::parse(mode.label()), Some(mode));
    }
    assert_eq!(RemixMode::parse("nonsense"), None);
}
