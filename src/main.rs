mod logic;
mod models;
mod mvu;
mod ui;
mod utils;

use eframe::egui;
use egui_phosphor::Variant;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CardDesk",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ui::CardDeskApp::default()))
        }),
    )
}
