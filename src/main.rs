mod app;
mod checkout;
mod geometry;
mod model;
mod packing;
mod pricing;
mod store;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Gang Sheet Builder",
        native_options,
        Box::new(|cc| Ok(Box::new(app::GangApp::new(cc)))),
    )
}
