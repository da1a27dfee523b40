#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start an asynchronous remix of `text` under `mode`.
    RunRemix {
        request_id: crate::RequestId,
        mode: crate::RemixMode,
        text: String,
    },
    /// Put `text` on the host clipboard.
    CopyToClipboard { text: String },
}
