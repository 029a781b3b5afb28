//! pocketcalc - an iOS-styled four-function calculator
//!
//! Settings are read from the user config directory, or from the file named
//! by `POCKETCALC_CONFIG`. Set `RUST_LOG=debug` to log every key press.

mod app;
mod keys;

use app::CalculatorApp;
use eframe::NativeOptions;
use pocketcore::{CalcSettings, PocketTheme};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = CalcSettings::load_or_default(&CalcSettings::default_path());
    log::info!("starting pocketcalc ({:?})", settings);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_resizable(false)
            .with_title("iOS Style Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "pocketcalc",
        options,
        Box::new(move |cc| {
            let theme = PocketTheme::default();
            theme.apply(&cc.egui_ctx);
            Box::new(CalculatorApp::new(cc, settings, theme))
        }),
    )
}
