//! Main entry point for the User Management System
//! Loads configuration, opens the user store and hands control to the egui event loop.

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use std::path::PathBuf;

use usermgr::application::auth::{AccessGate, FixedCredentialVerifier};
use usermgr::infra::app_config::{load_config, load_config_from};
use usermgr::infra::db::Database;
use usermgr::ui::app::UserManagerApp;

#[derive(Parser, Debug)]
#[command(name = "usermgr")]
#[command(version)]
#[command(about = "Desktop user registry", long_about = None)]
struct Args {
    /// SQLite file to use instead of the configured one
    #[arg(long)]
    db: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    let db_path = config.resolve_database_path(args.db);
    log::info!("opening user store at {}", db_path.display());
    let db = Database::open_at(db_path).context("Failed to open the user store")?;
    let gate = AccessGate::new(FixedCredentialVerifier::from(&config.login));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_title("User Management System"),
        ..Default::default()
    };

    eframe::run_native(
        "User Management System",
        options,
        Box::new(move |cc| Ok(Box::new(UserManagerApp::new_egui(cc, &db, gate)))),
    )
    .map_err(|err| anyhow::anyhow!("UI event loop failed: {err}"))
}
