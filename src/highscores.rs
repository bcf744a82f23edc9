//! High score persistence
//!
//! A single integer saved best-effort to a small JSON file. Load failures
//! mean "no high score yet"; save failures keep the in-memory value and are
//! only logged. Persistence must never interrupt the tick loop.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk envelope
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ScoreRecord {
    high_score: u32,
}

/// Handle to the high score file
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score, defaulting to 0 if absent or unreadable
    pub fn load(&self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<ScoreRecord>(&json) {
                Ok(record) => {
                    log::info!("Loaded high score {}", record.high_score);
                    record.high_score
                }
                Err(e) => {
                    log::warn!("Corrupt high score file {}: {e}", self.path.display());
                    0
                }
            },
            Err(_) => {
                log::info!("No high score file, starting fresh");
                0
            }
        }
    }

    /// Write the high score, best-effort
    pub fn save(&self, high_score: u32) {
        let record = ScoreRecord { high_score };
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode high score: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            log::warn!("Failed to save high score to {}: {e}", self.path.display());
        } else {
            log::info!("High score saved ({high_score})");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join("scores.json"));
        assert_eq!(file.load(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join("scores.json"));
        file.save(417);
        assert_eq!(file.load(), 417);
    }

    #[test]
    fn corrupt_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, "{not json").unwrap();
        let file = HighScoreFile::new(path);
        assert_eq!(file.load(), 0);
    }

    #[test]
    fn save_to_unwritable_path_is_silent() {
        let file = HighScoreFile::new("/nonexistent/dir/scores.json");
        file.save(10); // Must not panic
    }
}
