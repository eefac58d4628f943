mod logic;
mod models;
mod mvu;
mod ui;

use eframe::egui;
use egui_phosphor::Variant;

use crate::logic::store::RecordStore;

fn main() -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 520.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    let store = RecordStore::at_default_location();

    eframe::run_native(
        "FormVault",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(ui::FormVaultApp::new(store)))
        }),
    )
}
