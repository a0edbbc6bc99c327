mod app;

use anyhow::anyhow;
use clap::Parser;

use app::PagerApp;
use paged_text_viewer::{logging, Args};

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Args::parse();
    let reader = args.build_reader()?;
    let encoding = args.encoding.choice();
    let initial_file = args.file.clone();

    tracing::debug!(?args, "starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 360.0])
            .with_title("Paged Text Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Paged Text Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(PagerApp::new(reader, encoding, initial_file)))),
    )
    .map_err(|e| anyhow!("Failed to start window: {}", e))
}
