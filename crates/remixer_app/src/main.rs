mod app;
mod effects;
mod logging;

fn main() -> eframe::Result<()> {
    logging::initialize(logging::LogDestination::from_env());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Content Remixer")
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Content Remixer",
        options,
        Box::new(|_cc| Ok(Box::new(app::RemixerApp::new()))),
    )
}
