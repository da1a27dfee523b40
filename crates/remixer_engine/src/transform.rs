//! Deterministic placeholder transforms standing in for a real
//! text-generation backend. Each strategy is a pure function of the
//! input text and produces non-empty output for non-empty input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemixMode {
    Summarize,
    Expand,
    Simplify,
    Formalize,
    Casualize,
    Creative,
}

const SUMMARY_TOKEN_LIMIT: usize = 10;

impl RemixMode {
    pub const ALL: [RemixMode; 6] = [
        RemixMode::Summarize,
        RemixMode::Expand,
        RemixMode::Simplify,
        RemixMode::Formalize,
        RemixMode::Casualize,
        RemixMode::Creative,
    ];

    /// Wire label for the mode, as a request field of a real backend
    /// call would carry it.
    pub fn label(self) -> &'static str {
        match self {
            RemixMode::Summarize => "summarize",
            RemixMode::Expand => "expand",
            RemixMode::Simplify => "simplify",
            RemixMode::Formalize => "formal",
            RemixMode::Casualize => "casual",
            RemixMode::Creative => "creative",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        RemixMode::ALL.into_iter().find(|mode| mode.label() == label)
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            RemixMode::Summarize => summarize(text),
            RemixMode::Expand => expand(text),
            RemixMode::Simplify => simplify(text),
            RemixMode::Formalize => formalize(text),
            RemixMode::Casualize => casualize(text),
            RemixMode::Creative => creative(text),
        }
    }
}

/// Applies the transform selected by `mode_label`. Unknown labels fall
/// through to identity, matching the default branch a real request
/// dispatcher would need.
pub fn transform(mode_label: &str, text: &str) -> String {
    match RemixMode::parse(mode_label) {
        Some(mode) => mode.apply(text),
        None => text.to_string(),
    }
}

fn summarize(text: &str) -> String {
    let lead = text
        .split_whitespace()
        .take(SUMMARY_TOKEN_LIMIT)
        .collect::<Vec<_>>()
        .join(" ");
    format!("Summary: {lead}...")
}

fn expand(text: &str) -> String {
    format!(
        "Expanded version: {text} This is additional content that elaborates on the original text."
    )
}

fn simplify(text: &str) -> String {
    // Drop everything that is neither a word character nor whitespace,
    // then lower-case the remainder.
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn formalize(text: &str) -> String {
    format!(
        "Formal version: {text}. It is imperative to note that the aforementioned content requires careful consideration."
    )
}

fn casualize(text: &str) -> String {
    format!("Hey! So like, here's the casual version: {text}. Pretty cool, right?")
}

fn creative(text: &str) -> String {
    format!(
        "✨ Creative remix: {text} ✨\n\nLet your imagination soar as we transform this text into something magical and inspiring!"
    )
}
