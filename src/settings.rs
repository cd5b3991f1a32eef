//! Operator settings persisted between sessions.
//!
//! Settings are stored as pretty printed JSON. Keys missing from the file take
//! their default value, so older files keep loading.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::animation::StartupValues;
use crate::constants::*;
use crate::error::SettingsError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub speed: f32,
    pub count: usize,
    pub width: i32,
    pub height: i32,
    /// Restore the last session at startup instead of the defaults.
    pub autoload: bool,
    pub randomize_mode: bool,
    /// Upper bound (seconds) of each slow / normal phase in randomize mode.
    pub randomize_n: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            count: DEFAULT_COUNT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            autoload: DEFAULT_AUTOLOAD,
            randomize_mode: DEFAULT_RANDOMIZE_MODE,
            randomize_n: DEFAULT_RANDOMIZE_N,
        }
    }
}

impl Settings {
    /// Returns `Ok(None)` when the file does not exist yet.
    pub fn load(path: &Path) -> Result<Option<Self>, SettingsError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(SettingsError::Io { path: path.to_path_buf(), source }),
        };
        let settings = serde_json::from_str(&json)
            .map_err(|source| SettingsError::Format { path: path.to_path_buf(), source })?;
        Ok(Some(settings))
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|source| SettingsError::Format { path: path.to_path_buf(), source })?;
        fs::write(path, json).map_err(|source| SettingsError::Io { path: path.to_path_buf(), source })
    }

    /// Pulls hand-edited values back into the panel ranges. Non-finite numbers
    /// take their default.
    pub fn sanitized(self) -> Self {
        let sanitized = Settings {
            speed: if self.speed.is_finite() { clamp_speed(self.speed) } else { DEFAULT_SPEED },
            count: clamp_count(self.count),
            width: clamp_width(self.width),
            height: clamp_height(self.height),
            randomize_n: if self.randomize_n.is_finite() {
                clamp_randomize_n(self.randomize_n)
            } else {
                DEFAULT_RANDOMIZE_N
            },
            ..self
        };
        if sanitized != self {
            warn!(stored = ?self, "stored settings out of range, clamped");
        }
        sanitized
    }

    /// Back to the defaults. The autoload choice is kept.
    pub fn reset(&mut self) {
        *self = Settings { autoload: self.autoload, ..Settings::default() };
    }

    pub fn startup_values(&self) -> StartupValues {
        StartupValues {
            speed: self.speed,
            count: self.count,
            width: self.width,
            height: self.height,
            randomize_mode: self.randomize_mode,
            randomize_n: self.randomize_n,
        }
    }
}

pub fn clamp_speed(speed: f32) -> f32 {
    speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1)
}

pub fn clamp_count(count: usize) -> usize {
    count.clamp(COUNT_RANGE.0, COUNT_RANGE.1)
}

pub fn clamp_width(width: i32) -> i32 {
    width.clamp(WIDTH_RANGE.0, WIDTH_RANGE.1)
}

pub fn clamp_height(height: i32) -> i32 {
    height.clamp(HEIGHT_RANGE.0, HEIGHT_RANGE.1)
}

pub fn clamp_randomize_n(seconds: f64) -> f64 {
    seconds.clamp(RANDOMIZE_N_RANGE.0, RANDOMIZE_N_RANGE.1)
}

/// The live settings together with the file they are written back to.
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Never fails: a missing file is created with the defaults, an unreadable
    /// one is reported and replaced by the defaults on the next save. With
    /// autoload off the stored values are ignored.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match Settings::load(&path) {
            Ok(Some(stored)) if stored.autoload => {
                info!(path = %path.display(), "restored settings");
                stored.sanitized()
            }
            Ok(Some(_)) => {
                info!(path = %path.display(), "autoload disabled, starting from defaults");
                Settings { autoload: false, ..Settings::default() }
            }
            Ok(None) => {
                let defaults = Settings::default();
                if let Err(e) = defaults.save(&path) {
                    warn!("{}", e);
                }
                defaults
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Settings::default()
            }
        };
        Self { path, settings }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Applies `change` and writes the result back. A failed write is logged;
    /// the in-memory change is kept.
    pub fn update(&mut self, change: impl FnOnce(&mut Settings)) {
        change(&mut self.settings);
        if let Err(e) = self.settings.save(&self.path) {
            warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("flying-images-{}-{}.json", std::process::id(), name));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let path = temp_path("missing");

        let store = SettingsStore::open(&path);

        assert_eq!(store.settings(), &Settings::default());
        assert_eq!(Settings::load(&path).unwrap(), Some(Settings::default()));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_update_persists() {
        let path = temp_path("update");
        let mut store = SettingsStore::open(&path);

        store.update(|s| {
            s.speed = 12.0;
            s.randomize_mode = true;
            s.randomize_n = 42.5;
        });

        let reopened = SettingsStore::open(&path);
        assert_eq!(reopened.settings().speed, 12.0);
        assert!(reopened.settings().randomize_mode);
        assert_eq!(reopened.settings().randomize_n, 42.5);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_autoload_off_starts_from_defaults() {
        let path = temp_path("autoload");
        let stored = Settings { autoload: false, count: 90, ..Settings::default() };
        stored.save(&path).unwrap();

        let store = SettingsStore::open(&path);

        assert_eq!(store.settings().count, DEFAULT_COUNT);
        assert!(!store.settings().autoload);
        // The file is left alone until something changes
        assert_eq!(Settings::load(&path).unwrap(), Some(stored));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Settings::load(&path), Err(SettingsError::Format { .. })));
        let store = SettingsStore::open(&path);
        assert_eq!(store.settings(), &Settings::default());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_partial_file_fills_missing_keys() {
        let path = temp_path("partial");
        fs::write(&path, r#"{ "count": 120, "randomize_mode": true }"#).unwrap();

        let settings = Settings::load(&path).unwrap().unwrap();

        assert_eq!(settings.count, 120);
        assert!(settings.randomize_mode);
        assert_eq!(settings.width, DEFAULT_WIDTH);
        assert_eq!(settings.randomize_n, DEFAULT_RANDOMIZE_N);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_out_of_range_file_is_clamped() {
        let path = temp_path("out-of-range");
        fs::write(&path, r#"{ "count": 0, "width": -5, "height": 5000, "randomize_n": 1e30, "speed": 500.0 }"#).unwrap();

        let store = SettingsStore::open(&path);

        assert_eq!(
            store.settings(),
            &Settings { speed: 20.0, count: 50, width: 320, height: 1080, randomize_n: 300.0, ..Settings::default() }
        );
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let settings = Settings { speed: 7.0, count: 120, randomize_mode: true, ..Settings::default() };
        assert_eq!(settings.clone().sanitized(), settings);

        let broken = Settings { speed: f32::NAN, randomize_n: f64::INFINITY, ..Settings::default() };
        assert_eq!(broken.sanitized(), Settings::default());
    }

    #[test]
    fn test_reset_keeps_autoload() {
        let mut settings = Settings { autoload: false, speed: 19.0, count: 70, ..Settings::default() };
        settings.reset();
        assert_eq!(settings, Settings { autoload: false, ..Settings::default() });
    }

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_speed(0.0), 1.0);
        assert_eq!(clamp_speed(35.0), 20.0);
        assert_eq!(clamp_count(5), 50);
        assert_eq!(clamp_count(5000), 1000);
        assert_eq!(clamp_width(100), 320);
        assert_eq!(clamp_height(4000), 1080);
        assert_eq!(clamp_randomize_n(0.2), 1.0);
        assert_eq!(clamp_randomize_n(301.0), 300.0);
    }
}
