use crate::RemixMode;

pub const IDLE_BUTTON_LABEL: &str = "Remix Content";
pub const BUSY_BUTTON_LABEL: &str = "Processing...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input_text: String,
    pub output_text: String,
    pub mode: RemixMode,
    pub busy: bool,
    /// Whether the Remix Content trigger is enabled: non-blank input
    /// and no request in flight.
    pub can_remix: bool,
    pub remix_button_label: &'static str,
    /// Copy/Clear Output actions are shown only for non-empty output.
    pub show_output_actions: bool,
}
