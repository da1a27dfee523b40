use std::sync::mpsc;
use std::time::Duration;

use remixer_core::{update, AppState, Msg, RemixMode};
use remixer_logging::remix_info;

use crate::effects::EffectRunner;

/// Repaint cadence while a remix request is in flight, so the
/// settlement shows up without further user interaction.
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct RemixerApp {
    state: AppState,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl RemixerApp {
    pub fn new() -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let effects = EffectRunner::new(msg_tx);
        remix_info!("remixer app started");
        Self {
            state: AppState::new(),
            effects,
            msg_rx,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if !effects.is_empty() {
            self.effects.run(effects);
        }
    }

    fn process_pending_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }
}

impl Default for RemixerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for RemixerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending_messages();

        let view = self.state.view();
        let mut pending: Vec<Msg> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Content Remixer");
                ui.weak("Transform your content with AI-powered remixing");
            });
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Choose Remix Type");
                let mut selected = view.mode;
                egui::ComboBox::from_id_source("remix_mode")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for mode in RemixMode::ALL {
                            ui.selectable_value(&mut selected, mode, mode.label());
                        }
                    });
                if selected != view.mode {
                    pending.push(Msg::ModeSelected(selected));
                }
            });

            ui.add_space(6.0);
            ui.label("Input Text");
            let mut input = view.input_text.clone();
            let input_edit = egui::TextEdit::multiline(&mut input)
                .hint_text("Paste your text here...")
                .desired_rows(8)
                .desired_width(f32::INFINITY);
            if ui.add(input_edit).changed() {
                pending.push(Msg::InputChanged(input));
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let remix_button = egui::Button::new(view.remix_button_label);
                if ui.add_enabled(view.can_remix, remix_button).clicked() {
                    pending.push(Msg::RemixClicked);
                }
                if ui.button("Clear").clicked() {
                    pending.push(Msg::ClearAllClicked);
                }
            });

            ui.add_space(10.0);
            ui.separator();
            ui.label("Remixed Output");
            // Immutable text buffer: selectable and copyable, never editable.
            let mut output_buffer = view.output_text.as_str();
            let output_edit = egui::TextEdit::multiline(&mut output_buffer)
                .hint_text("Your remixed content will appear here...")
                .desired_rows(8)
                .desired_width(f32::INFINITY);
            ui.add(output_edit);

            if view.show_output_actions {
                ui.horizontal(|ui| {
                    if ui.button("Copy to Clipboard").clicked() {
                        pending.push(Msg::CopyOutputClicked);
                    }
                    if ui.button("Clear Output").clicked() {
                        pending.push(Msg::ClearOutputClicked);
                    }
                });
            }

            ui.add_space(12.0);
            ui.group(|ui| {
                ui.label(egui::RichText::new("How to use:").strong());
                ui.label("1. Choose the type of remixing you want to apply");
                ui.label("2. Paste your text in the input box");
                ui.label("3. Click \"Remix Content\" to process");
                ui.label("4. View and copy your remixed content");
            });
        });

        for msg in pending {
            self.dispatch(msg);
        }

        if self.state.consume_dirty() {
            ctx.request_repaint();
        }
        if self.state.busy() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}
