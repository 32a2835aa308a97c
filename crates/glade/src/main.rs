use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use glade_config::Config;
use glade_core::ColorTheme;

mod app;
mod logging;
mod pointer;
mod quotes;
mod scheduler;
mod stopwatch;

use app::{App, SettingsFile};
use pointer::PointerCapture;

/// A terminal stopwatch with a living park in the background
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the park animation
    #[arg(long)]
    seed: Option<u64>,

    /// Target animation frames per second
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=240))]
    fps: Option<u16>,

    /// Color theme: moss, sunflower, sky, bark, blossom or snow
    #[arg(short, long, value_parser = parse_theme)]
    theme: Option<ColorTheme>,

    /// Start without the animated park
    #[arg(long)]
    no_background: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Layer command-line overrides over the file settings.
    fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(fps) = self.fps {
            config.frame_interval_ms = (1000 / u64::from(fps)).max(1);
        }
        if let Some(theme) = self.theme {
            config.color_theme = theme;
        }
        if self.no_background {
            config.background = false;
        }
    }
}

fn parse_theme(name: &str) -> Result<ColorTheme, String> {
    ColorTheme::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = ColorTheme::ALL.iter().map(|t| t.name()).collect();
        format!("unknown theme `{name}`, expected one of: {}", names.join(", "))
    })
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    if let Some(path) = logging::init(args.verbose) {
        log::info!("logging to {}", path.display());
    }

    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => Config::default_path()
            .inspect_err(|e| log::warn!("{e}; settings will not be saved"))
            .ok(),
    };
    let settings = match config_path {
        Some(path) => {
            let config = Config::load(&path)
                .wrap_err_with(|| format!("failed to load {}", path.display()))?;
            Some(SettingsFile { path, config })
        }
        None => None,
    };

    let mut config = settings
        .as_ref()
        .map(|file| file.config.clone())
        .unwrap_or_default();
    args.apply(&mut config);
    config.validate()?;

    let terminal = ratatui::init();
    let result = PointerCapture::enable(stdout())
        .wrap_err("failed to enable mouse capture")
        .and_then(|_capture| App::new(config, settings).run(terminal));
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from(["glade", "--fps", "50", "--theme", "sky", "--no-background"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.frame_interval_ms, 20);
        assert_eq!(config.color_theme, ColorTheme::Sky);
        assert!(!config.background);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(Args::try_parse_from(["glade", "--theme", "neon"]).is_err());
        assert!(Args::try_parse_from(["glade", "--fps", "0"]).is_err());
    }
}
