use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tuikit_core::{App, AppConfig, KeyProfile};
use tuikit_crossterm::CrosstermDriver;
use tuikit_demos::build_menu;
use tuikit_ui::MenuConfig;

#[derive(Parser)]
#[command(name = "menu", about = "Interactive terminal menu demo")]
struct Args {
    /// Name shown in the menu header
    #[arg(short, long, default_value = "tuikit demo")]
    name: String,

    /// Wait for a keypress after each action before redrawing
    #[arg(short, long)]
    pause: bool,

    /// Write debug logs to this file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Decode Windows console arrow sequences instead of ANSI ones
    #[arg(long)]
    windows_keys: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, file);
    }

    let profile = if args.windows_keys {
        KeyProfile::WindowsConsole
    } else {
        KeyProfile::native()
    };
    let config = MenuConfig {
        name: args.name,
        pause_after_invoke: args.pause,
        ..MenuConfig::default()
    };
    log::info!("menu demo starting, profile {profile:?}");

    let driver = CrosstermDriver::new().with_profile(profile);
    let model = build_menu(config);
    let mut app = App::new(AppConfig { model, driver });

    match app.run() {
        Ok(()) => Ok(()),
        Err(e) if e.is_interrupt() => {
            log::info!("interrupted");
            std::process::exit(130);
        }
        Err(e) => Err(e).context("menu loop failed"),
    }
}
