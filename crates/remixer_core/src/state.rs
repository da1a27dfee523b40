use crate::view_model::{AppViewModel, BUSY_BUTTON_LABEL, IDLE_BUTTON_LABEL};
use crate::RemixMode;

pub type RequestId = u64;

/// Fixed output shown when the asynchronous path fails. The input is
/// preserved so the user can retry without retyping.
pub const PROCESSING_FAILURE_TEXT: &str =
    "Error: Unable to process your request. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input_text: String,
    output_text: String,
    mode: RemixMode,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let busy = self.busy();
        AppViewModel {
            input_text: self.input_text.clone(),
            output_text: self.output_text.clone(),
            mode: self.mode,
            busy,
            can_remix: !busy && !self.input_text.trim().is_empty(),
            remix_button_label: if busy {
                BUSY_BUTTON_LABEL
            } else {
                IDLE_BUTTON_LABEL
            },
            show_output_actions: !self.output_text.is_empty(),
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    pub fn mode(&self) -> RemixMode {
        self.mode
    }

    /// True exactly while a remix request is in flight.
    pub fn busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns whether the UI needs a redraw and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input_text != text {
            self.input_text = text;
            self.dirty = true;
        }
    }

    pub(crate) fn set_mode(&mut self, mode: RemixMode) {
        if self.mode != mode {
            self.mode = mode;
            self.dirty = true;
        }
    }

    /// Marks a new request as in flight and clears the previous output.
    /// The caller must have checked the preconditions first.
    pub(crate) fn begin_remix(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        self.output_text.clear();
        self.dirty = true;
        request_id
    }

    /// Settles the in-flight request: the busy flag drops no matter how
    /// the request ended.
    pub(crate) fn settle_remix(&mut self, output: String) {
        self.in_flight = None;
        self.output_text = output;
        self.dirty = true;
    }

    pub(crate) fn clear_all(&mut self) {
        if !self.input_text.is_empty() || !self.output_text.is_empty() {
            self.input_text.clear();
            self.output_text.clear();
            self.dirty = true;
        }
    }

    pub(crate) fn clear_output(&mut self) {
        if !self.output_text.is_empty() {
            self.output_text.clear();
            self.dirty = true;
        }
    }
}
