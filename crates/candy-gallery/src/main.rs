#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

pub mod app;
pub mod logger;
pub mod widgets;

fn main() {
    if let Err(err) = logger::setup_loggers("candy-gallery.log") {
        eprintln!("setup loggers fails: {err}");
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    if let Err(err) = eframe::run_native(
        "candy-gallery",
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    ) {
        log::error!("run native fails: {err}");
    }
}
