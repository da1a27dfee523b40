#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the input text area.
    InputChanged(String),
    /// User picked a transformation mode from the selector.
    ModeSelected(crate::RemixMode),
    /// User clicked Remix Content.
    RemixClicked,
    /// Engine settlement for an in-flight remix request.
    RemixSettled {
        request_id: crate::RequestId,
        outcome: RemixOutcome,
    },
    /// User clicked Clear (resets both text fields).
    ClearAllClicked,
    /// User clicked Clear Output.
    ClearOutputClicked,
    /// User clicked Copy to Clipboard.
    CopyOutputClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// How an asynchronous remix request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemixOutcome {
    Success(String),
    Failed,
}
