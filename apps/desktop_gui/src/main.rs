mod backend_bridge;
mod controller;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use client_core::config::{load_settings, Settings};
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::UiEvent;
use crate::ui::{DesktopGuiApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Contact form desktop window")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keep the profile database in this directory instead of the user data dir.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let mut startup_errors = Vec::new();
    let settings = match load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            startup_errors.push(format!("config: {err:#}"));
            Settings::default()
        }
    };
    if let Err(err) = settings.relay_endpoint() {
        startup_errors.push(format!("{err:#}"));
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    for err in &startup_errors {
        tracing::warn!("startup: {err}");
    }

    let startup = StartupConfig::from_settings(&settings, args.data_dir.as_deref());
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(32);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    runtime::launch(cmd_rx, ui_tx, startup.backend_config());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Contact")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Contact",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(DesktopGuiApp::bootstrap(
                cmd_tx,
                ui_rx,
                startup,
                startup_errors,
            )))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_dir_override() {
        let args = Args::try_parse_from(["desktop_gui", "--data-dir", "/tmp/profile"])
            .expect("parse");
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/profile")));
        assert!(args.config.is_none());
    }
}
