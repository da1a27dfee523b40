use crate::{AppState, Effect, Msg, RemixOutcome, PROCESSING_FAILURE_TEXT};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ModeSelected(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::RemixClicked => {
            // Blank input and re-entry while busy are both silent no-ops;
            // the trigger widget is disabled in those states anyway.
            if state.input_text().trim().is_empty() || state.busy() {
                return (state, Vec::new());
            }
            let text = state.input_text().to_string();
            let mode = state.mode();
            let request_id = state.begin_remix();
            vec![Effect::RunRemix {
                request_id,
                mode,
                text,
            }]
        }
        Msg::RemixSettled {
            request_id,
            outcome,
        } => {
            // Only the settlement of the request that is actually in
            // flight may touch the output; stale ids are dropped.
            if state.in_flight() != Some(request_id) {
                return (state, Vec::new());
            }
            let output = match outcome {
                RemixOutcome::Success(text) => text,
                RemixOutcome::Failed => PROCESSING_FAILURE_TEXT.to_string(),
            };
            state.settle_remix(output);
            Vec::new()
        }
        Msg::ClearAllClicked => {
            state.clear_all();
            Vec::new()
        }
        Msg::ClearOutputClicked => {
            state.clear_output();
            Vec::new()
        }
        Msg::CopyOutputClicked => {
            if state.output_text().is_empty() {
                Vec::new()
            } else {
                vec![Effect::CopyToClipboard {
                    text: state.output_text().to_string(),
                }]
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
