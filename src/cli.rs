use std::path::PathBuf;
use clap::Parser;
use tracing::info;
use crate::constants::*;
use crate::settings::*;

/// Flying images screensaver.
///
/// Values given here are clamped to the settings panel ranges and saved as
/// the new settings.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Directory holding the sprite images
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets: PathBuf,

    /// Settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Number of sprites (50-1000)
    #[arg(long)]
    pub count: Option<usize>,

    /// Flying speed (1-20)
    #[arg(long)]
    pub speed: Option<f32>,

    /// Canvas width (320-1920)
    #[arg(long)]
    pub width: Option<i32>,

    /// Canvas height (240-1080)
    #[arg(long)]
    pub height: Option<i32>,

    /// Periodically slow down to 1/5 of the speed
    #[arg(long, value_name = "BOOL")]
    pub randomize_mode: Option<bool>,

    /// Max seconds of each randomize phase (1-300)
    #[arg(long, value_name = "SECONDS")]
    pub randomize_n: Option<f64>,

    /// Seed for reproducible sprite placement and randomize timing
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reset all settings to defaults before applying other options
    #[arg(long)]
    pub reset_defaults: bool,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}

impl Cli {
    /// Applies the reset flag and overrides. Returns true when `settings` changed.
    pub fn apply(&self, settings: &mut Settings) -> bool {
        let before = settings.clone();

        if self.reset_defaults {
            info!("resetting settings to defaults");
            settings.reset();
        }
        if let Some(count) = self.count {
            settings.count = clamp_count(count);
        }
        if let Some(speed) = self.speed.filter(|s| s.is_finite()) {
            settings.speed = clamp_speed(speed);
        }
        if let Some(width) = self.width {
            settings.width = clamp_width(width);
        }
        if let Some(height) = self.height {
            settings.height = clamp_height(height);
        }
        if let Some(enabled) = self.randomize_mode {
            settings.randomize_mode = enabled;
        }
        if let Some(seconds) = self.randomize_n.filter(|n| n.is_finite() && *n > 0.0) {
            settings.randomize_n = clamp_randomize_n(seconds);
        }

        *settings != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("flying-images").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.assets, PathBuf::from("png"));
        assert_eq!(cli.settings, PathBuf::from(DEFAULT_SETTINGS_FILE));
        assert_eq!(cli.fps, FPS);

        let mut settings = Settings::default();
        assert!(!cli.apply(&mut settings));
    }

    #[test]
    fn test_overrides_are_clamped() {
        let cli = parse(&[
            "--count", "5000", "--speed", "0.5", "--width", "100", "--height", "900",
            "--randomize-mode", "true", "--randomize-n", "600",
        ]);
        let mut settings = Settings::default();

        assert!(cli.apply(&mut settings));

        assert_eq!(settings.count, 1000);
        assert_eq!(settings.speed, 1.0);
        assert_eq!(settings.width, 320);
        assert_eq!(settings.height, 900);
        assert!(settings.randomize_mode);
        assert_eq!(settings.randomize_n, 300.0);
    }

    #[test]
    fn test_non_positive_randomize_n_is_ignored() {
        let cli = parse(&["--randomize-n=-3"]);
        let mut settings = Settings::default();

        assert!(!cli.apply(&mut settings));
        assert_eq!(settings.randomize_n, DEFAULT_RANDOMIZE_N);
    }

    #[test]
    fn test_reset_then_override() {
        let cli = parse(&["--reset-defaults", "--speed", "9"]);
        let mut settings = Settings { count: 70, speed: 2.0, ..Settings::default() };

        assert!(cli.apply(&mut settings));
        assert_eq!(settings.count, DEFAULT_COUNT);
        assert_eq!(settings.speed, 9.0);
    }
}
