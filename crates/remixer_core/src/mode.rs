/// The transformation category applied to input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemixMode {
    #[default]
    Summarize,
    Expand,
    Simplify,
    Formalize,
    Casualize,
    Creative,
}

impl RemixMode {
    pub const ALL: [RemixMode; 6] = [
        RemixMode::Summarize,
        RemixMode::Expand,
        RemixMode::Simplify,
        RemixMode::Formalize,
        RemixMode::Casualize,
        RemixMode::Creative,
    ];

    /// Caption shown in the mode selector.
    pub fn label(self) -> &'static str {
        match self {
            RemixMode::Summarize => "Summarize",
            RemixMode::Expand => "Expand",
            RemixMode::Simplify => "Simplify",
            RemixMode::Formalize => "Make Formal",
            RemixMode::Casualize => "Make Casual",
            RemixMode::Creative => "Make Creative",
        }
    }
}
