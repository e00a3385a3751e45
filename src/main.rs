#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level as TraceLevel;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use gridwm_config::Config;
use gridwm_config::config::screen::Screen;

#[derive(Parser)]
#[command(name = "gridwm-config")]
#[command(version)]
#[command(about = "Validate and inspect a gridwm configuration", long_about = None)]
struct Cli {
    /// Config file to check instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the resolved descriptor as JSON
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(TraceLevel::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    config.validate()?;

    let resolved = config.resolved_keys();
    let widgets: usize = config
        .screens
        .iter()
        .filter_map(Screen::bar_widget_count)
        .sum();
    info!(
        keys = resolved.len(),
        groups = config.groups.len(),
        layouts = config.layouts.len(),
        screens = config.screens.len(),
        widgets,
        "Config OK"
    );

    if cli.dump {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        for binding in &resolved {
            println!("{:24} {}", binding.chord.display_name(), binding.desc);
        }
    }

    Ok(())
}
