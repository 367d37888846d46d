use directories::ProjectDirs;
use pathrecall_core::GameConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::APP_NAME;

pub const SETTINGS_FORMAT_VERSION: u32 = 1;

/// Player preferences plus game tuning, stored as TOML between runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsFile {
    pub format_version: u32,
    pub length: usize,
    pub timed: bool,
    pub game: GameConfig,
}

impl Default for SettingsFile {
    fn default() -> Self {
        let game = GameConfig::default();
        Self {
            format_version: SETTINGS_FORMAT_VERSION,
            length: game.default_length,
            timed: false,
            game,
        }
    }
}

impl SettingsFile {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.config_dir().to_path_buf();
            path.push("settings.toml");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        let text = toml::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, text)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(settings)
    }

    /// Missing files give defaults silently; unreadable or invalid ones are logged and replaced.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) if settings.game.validate().is_ok() => settings,
            Ok(_) => {
                warn!(path = %path.display(), "settings_invalid_game_config");
                Self::default()
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                warn!(path = %path.display(), %err, "settings_load_failed");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_toml_roundtrip() {
        let mut settings = SettingsFile { length: 14, timed: true, ..SettingsFile::default() };
        settings.game.reveal_step_ms = 150;
        settings.game.start_cell = Some(5);

        let text = toml::to_string_pretty(&settings).unwrap();
        let decoded: SettingsFile = toml::from_str(&text).unwrap();
        assert_eq!(settings, decoded);
    }

    #[test]
    fn test_atomic_write_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let settings = SettingsFile { length: 3, ..SettingsFile::default() };
        settings.write_atomic(&path).unwrap();
        assert!(path.exists());

        let loaded = SettingsFile::load(&path).unwrap();
        assert_eq!(settings, loaded);

        let tmp_path = path.with_extension("toml.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "timed = true\n\n[game]\ndisplay_ms = 500\n").unwrap();

        let loaded = SettingsFile::load(&path).unwrap();
        assert!(loaded.timed);
        assert_eq!(loaded.length, SettingsFile::default().length);
        assert_eq!(loaded.game.display_ms, 500);
        assert_eq!(loaded.game.grid_size, GameConfig::default().grid_size);
    }

    #[test]
    fn load_or_default_handles_missing_and_garbage_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert_eq!(SettingsFile::load_or_default(&missing), SettingsFile::default());

        let garbage = dir.path().join("garbage.toml");
        fs::write(&garbage, "length = \"lots\"").unwrap();
        assert_eq!(SettingsFile::load_or_default(&garbage), SettingsFile::default());
    }

    #[test]
    fn load_or_default_rejects_invalid_game_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[game]\ngrid_size = 0\n").unwrap();
        assert_eq!(SettingsFile::load_or_default(&path), SettingsFile::default());

        fs::write(&path, "[game]\ngrid_size = 8589934592\n").unwrap();
        assert_eq!(SettingsFile::load_or_default(&path), SettingsFile::default());
    }
}
