use std::sync::Once;

use remixer_core::{
    update, AppState, Effect, Msg, RemixMode, RemixOutcome, BUSY_BUTTON_LABEL, IDLE_BUTTON_LABEL,
    PROCESSING_FAILURE_TEXT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(remixer_logging::initialize_for_tests);
}

fn request_remix(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::RemixClicked)
}

#[test]
fn noop_message_changes_nothing() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn remix_click_starts_request_and_clears_output() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = request_remix(state, "some text to remix");
    let view = next.view();

    assert!(view.busy);
    assert!(!view.can_remix);
    assert_eq!(view.remix_button_label, BUSY_BUTTON_LABEL);
    assert_eq!(view.output_text, "");
    assert_eq!(view.input_text, "some text to remix");
    assert_eq!(
        effects,
        vec![Effect::RunRemix {
            request_id: 1,
            mode: RemixMode::Summarize,
            text: "some text to remix".to_string(),
        }]
    );
}

#[test]
fn blank_input_is_rejected() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = request_remix(state, "   \n\t ");

    assert!(!next.view().busy);
    assert_eq!(next.view().output_text, "");
    assert!(effects.is_empty());
}

#[test]
fn second_click_while_busy_is_rejected() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = request_remix(state, "hello");

    let before = state.view();
    let (next, effects) = update(state, Msg::RemixClicked);

    assert_eq!(next.view(), before);
    assert!(effects.is_empty());
}

#[test]
fn settlement_publishes_output_and_drops_busy() {
    init_logging();
    let state = AppState::new();
    let (mut state, effects) = request_remix(state, "hello");
    assert!(state.consume_dirty());
    let request_id = match &effects[0] {
        Effect::RunRemix { request_id, .. } => *request_id,
        other => panic!("unexpected effect {other:?}"),
    };

    let (mut next, effects) = update(
        state,
        Msg::RemixSettled {
            request_id,
            outcome: RemixOutcome::Success("Summary: hello...".to_string()),
        },
    );

    let view = next.view();
    assert!(!view.busy);
    assert!(view.can_remix);
    assert_eq!(view.remix_button_label, IDLE_BUTTON_LABEL);
    assert_eq!(view.output_text, "Summary: hello...");
    assert!(view.show_output_actions);
    assert!(effects.is_empty());
    assert!(next.consume_dirty());
}

#[test]
fn failed_settlement_shows_retry_message_and_keeps_input() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = request_remix(state, "hello");

    let (next, _effects) = update(
        state,
        Msg::RemixSettled {
            request_id: 1,
            outcome: RemixOutcome::Failed,
        },
    );

    let view = next.view();
    assert!(!view.busy);
    assert_eq!(view.output_text, PROCESSING_FAILURE_TEXT);
    assert_eq!(view.input_text, "hello");
}

#[test]
fn stale_settlement_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = request_remix(state, "hello");

    let before = state.view();
    let (next, effects) = update(
        state,
        Msg::RemixSettled {
            request_id: 99,
            outcome: RemixOutcome::Success("late".to_string()),
        },
    );

    assert_eq!(next.view(), before);
    assert!(effects.is_empty());
}

#[test]
fn settlement_without_request_in_flight_is_ignored() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(
        state.clone(),
        Msg::RemixSettled {
            request_id: 1,
            outcome: RemixOutcome::Success("orphan".to_string()),
        },
    );

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn new_request_gets_a_fresh_id() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = request_remix(state, "first");
    let (state, _effects) = update(
        state,
        Msg::RemixSettled {
            request_id: 1,
            outcome: RemixOutcome::Success("out".to_string()),
        },
    );

    let (_state, effects) = update(state, Msg::RemixClicked);

    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::RunRemix { request_id, .. } => assert_eq!(*request_id, 2),
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn selected_mode_travels_with_the_request() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::ModeSelected(RemixMode::Creative));
    let (state, _) = update(state, Msg::InputChanged("spark".to_string()));

    let (next, effects) = update(state, Msg::RemixClicked);

    assert_eq!(next.view().mode, RemixMode::Creative);
    assert_eq!(
        effects,
        vec![Effect::RunRemix {
            request_id: 1,
            mode: RemixMode::Creative,
            text: "spark".to_string(),
        }]
    );
}
