// Parish Calendar Application
// Main entry point

use parish_calendar::ui_egui::ParishCalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Parish Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Parish Calendar")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Parish Calendar",
        options,
        Box::new(|cc| Ok(Box::new(ParishCalendarApp::new(cc)))),
    )
}
