//! Persistence of the last session's input journal for offline replay.

use directories::ProjectDirs;
use pathrecall_core::InputJournal;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub fn default_journal_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.data_dir().to_path_buf();
        path.push("last_session.json");
        path
    })
}

pub fn save_journal_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

pub fn load_journal(path: &Path) -> io::Result<InputJournal> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathrecall_core::{GameConfig, InputPayload};
    use tempfile::tempdir;

    fn sample_journal() -> InputJournal {
        let mut journal = InputJournal::new(77, GameConfig::default());
        journal.append(InputPayload::StartGame { length: 4, timed: true });
        journal.append_advance(500);
        journal.append_advance(500);
        journal.append(InputPayload::SubmitTile { index: 78 });
        journal
    }

    #[test]
    fn save_then_load_preserves_journal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session").join("last_session.json");
        let journal = sample_journal();

        save_journal_atomic(&journal, &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = load_journal(&path).unwrap();
        assert_eq!(loaded, journal);
    }

    #[test]
    fn load_reports_invalid_data_for_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_journal(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
