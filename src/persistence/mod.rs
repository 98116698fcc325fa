//! High score persistence
//!
//! The high score is a single integer in a plain-text file, overwritten on
//! every new record. Reads never fail: anything unusable counts as 0.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Somewhere the high score can be kept between sessions
pub trait HighScoreStore {
    /// Stored high score, or 0 if there is none
    fn load(&self) -> u32;

    /// Overwrite the stored high score
    fn save(&mut self, score: u32) -> io::Result<()>;
}

/// High score kept in a text file
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
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse() {
                Ok(score) => {
                    log::info!("Loaded high score {} from {}", score, self.path.display());
                    score
                }
                Err(e) => {
                    log::debug!("Ignoring unreadable high score file: {}", e);
                    0
                }
            },
            Err(e) => {
                log::debug!("No high score at {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        fs::write(&self.path, score.to_string())?;
        log::debug!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u32>,
    /// Every value written, in order
    pub writes: Vec<u32>,
    /// Make every save fail
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::other("store is read-only"));
        }
        self.value = Some(score);
        self.writes.push(score);
        Ok(())
    }
}
