// Cyber Countdown - single-window countdown timer with tick/tock and alarm sounds

use anyhow::{Context, Result};
use clap::Parser;
use cyber_countdown::config_file::Config;
use cyber_countdown::{assets, config, LaunchSettings};
use log::{error, info, warn};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Neon-themed desktop countdown timer
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Neon-themed desktop countdown timer",
    long_about = "Neon-themed desktop countdown timer.

Enter hours, minutes and seconds, press Start, and the timer counts down once
per second with alternating tick/tock sounds. At zero it shows \"Time's Up!\"
and loops an alarm until Reset.

RESOURCES:
  Sounds are read from assets/sounds/{tick,tock,alarm}.wav and the window icon
  from assets/images/Icon.png under the resource directory. Missing files only
  disable the matching sound or icon.

ENVIRONMENT:
  CYBER_COUNTDOWN_ASSETS    Resource directory (overridden by --assets-dir)
  CYBER_COUNTDOWN_SOUND     on/off (overridden by --no-sound)
  RUST_LOG                  Log filter, e.g. RUST_LOG=debug"
)]
struct Args {
    /// Start with sound disabled
    #[arg(long)]
    no_sound: bool,

    /// Directory containing the assets/ folder
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    write_config: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    std::panic::set_hook(Box::new(|panic_info| {
        error!("CRITICAL: Unhandled panic: {}", panic_info);
    }));

    info!("Starting Cyber Countdown v{}", VERSION);

    let cfg = load_config(&args);

    if args.write_config {
        return write_config(&args, &cfg);
    }

    // Flags beat environment, environment beats the config file
    let sound_enabled = if args.no_sound {
        false
    } else {
        config::parse_sound_override().unwrap_or(cfg.sound_enabled)
    };
    let assets_override = args
        .assets_dir
        .clone()
        .or_else(config::parse_assets_override)
        .or_else(|| cfg.assets_dir.clone());

    let resource_root = assets::resolve_resource_root(assets_override.as_deref());
    info!("Resource directory: {}", resource_root.display());

    let settings = LaunchSettings { sound_enabled };

    let icon = assets::load_icon_or_default(&resource_root);
    let controller = cyber_countdown::build_controller(&resource_root, &settings);

    if let Err(e) = cyber_countdown::ui::run(controller, icon) {
        error!("CRITICAL: {:#}", e);
        return Err(e);
    }

    info!("Window closed, exiting");
    Ok(())
}

/// Handle --write-config: save the loaded (or default) settings
fn write_config(args: &Args, cfg: &Config) -> Result<()> {
    let path = match args.config.clone().or_else(Config::config_path) {
        Some(path) => path,
        None => anyhow::bail!("No platform config directory, pass --config <PATH>"),
    };
    cfg.save_to_path(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Configuration written to: {}", path.display());
    Ok(())
}

/// Load the config file, falling back to defaults on any error
fn load_config(args: &Args) -> Config {
    let result = match &args.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    result.unwrap_or_else(|e| {
        warn!("{:#}. Using default settings.", e);
        Config::default()
    })
}
