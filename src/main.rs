mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use app::PlotLogApp;
use config::PlotConfig;
use eframe::egui;
use state::PlotSession;

/// Printed on stdout, followed by exit status 1, when no log is given.
const USAGE: &str = "Usage: plot.py <log_file>";

/// The log path from the arguments after the program name. Anything past
/// the first argument is ignored.
fn log_path<I>(args: I) -> Result<PathBuf, &'static str>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let path = args.next().map(PathBuf::from).ok_or(USAGE)?;
    if args.next().is_some() {
        log::warn!("ignoring arguments after {}", path.display());
    }
    Ok(path)
}

fn main() -> Result<()> {
    env_logger::init();

    let path = match log_path(std::env::args_os().skip(1)) {
        Ok(path) => path,
        Err(usage) => {
            println!("{usage}");
            std::process::exit(1);
        }
    };

    let config = PlotConfig::default();
    let session = PlotSession::open(config.clone(), &path)?;
    let title = session.window_title();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(PlotLogApp::new(session)))),
    )
    .map_err(|e| anyhow!("running plot window: {e}"))
}
