use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use arboard::Clipboard;
use remixer_core::{Effect, Msg, RemixMode, RemixOutcome};
use remixer_engine::{EngineEvent, EngineHandle, EngineSettings};
use remixer_logging::{remix_info, remix_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(EngineSettings::default());
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RunRemix {
                    request_id,
                    mode,
                    text,
                } => {
                    remix_info!(
                        "RunRemix request_id={} mode={} input_len={}",
                        request_id,
                        mode.label(),
                        text.len()
                    );
                    self.engine.remix(request_id, map_mode(mode), text);
                }
                Effect::CopyToClipboard { text } => copy_to_clipboard(&text),
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::RemixCompleted { request_id, result } => {
                        let outcome = match result {
                            Ok(output) => RemixOutcome::Success(output),
                            Err(failure) => {
                                remix_warn!("remix request {} failed: {}", request_id, failure);
                                RemixOutcome::Failed
                            }
                        };
                        let settled = Msg::RemixSettled {
                            request_id,
                            outcome,
                        };
                        if msg_tx.send(settled).is_err() {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

/// The controller enum maps onto the wire labels the engine expects.
fn map_mode(mode: RemixMode) -> &'static str {
    match mode {
        RemixMode::Summarize => "summarize",
        RemixMode::Expand => "expand",
        RemixMode::Simplify => "simplify",
        RemixMode::Formalize => "formal",
        RemixMode::Casualize => "casual",
        RemixMode::Creative => "creative",
    }
}

fn copy_to_clipboard(text: &str) {
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => remix_info!("copied {} chars to clipboard", text.chars().count()),
        Err(err) => remix_warn!("clipboard copy failed: {}", err),
    }
}
