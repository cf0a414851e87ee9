//! High-score persistence: one integer per line, easy/normal/hard.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use bevy::log::info;
use thiserror::Error;

use crate::engine::Difficulty;

/// Errors raised while reading or writing the high-score file.
#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score file has no line for {difficulty}")]
    MissingTier { difficulty: Difficulty },
    #[error("line {line} ({difficulty}) is not a score: {value:?}")]
    InvalidScore {
        line: usize,
        difficulty: Difficulty,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Best score per difficulty tier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HighScores {
    scores: [u32; 3],
}

impl HighScores {
    /// Parses file contents. Lines past the third are ignored.
    pub fn parse(contents: &str) -> Result<Self, HighScoreError> {
        let mut lines = contents.lines();
        let mut scores = [0; 3];
        for difficulty in Difficulty::ALL {
            let line = lines
                .next()
                .ok_or(HighScoreError::MissingTier { difficulty })?;
            let value = line.trim();
            let score: u32 = value
                .parse()
                .map_err(|source| HighScoreError::InvalidScore {
                    line: difficulty.index(),
                    difficulty,
                    value: value.to_string(),
                    source,
                })?;
            scores[difficulty.index()] = score;
        }
        Ok(HighScores { scores })
    }

    pub fn to_file_contents(&self) -> String {
        self.scores
            .iter()
            .map(|score| format!("{score}\n"))
            .collect()
    }

    pub fn get(&self, difficulty: Difficulty) -> u32 {
        self.scores[difficulty.index()]
    }

    /// Keeps `score` if it beats the stored value. Returns whether it did.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        let slot = &mut self.scores[difficulty.index()];
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, difficulty: Difficulty) {
        self.scores[difficulty.index()] = 0;
    }
}

/// [`HighScores`] bound to the file they are saved in.
#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    scores: HighScores,
}

impl HighScoreStore {
    /// Loads the store at `path`. The file must exist and hold all three tiers.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HighScoreError> {
        let path = path.into();
        let scores = HighScores::parse(&fs::read_to_string(&path)?)?;
        info!("Loaded high scores from {}: {:?}", path.display(), scores);
        Ok(HighScoreStore { path, scores })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn get(&self, difficulty: Difficulty) -> u32 {
        self.scores.get(difficulty)
    }

    /// Records `score` and saves if it is a new best. Returns whether it was.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> Result<bool, HighScoreError> {
        if !self.scores.record(difficulty, score) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Zeroes one tier and saves.
    pub fn reset(&mut self, difficulty: Difficulty) -> Result<(), HighScoreError> {
        self.scores.reset(difficulty);
        self.save()
    }

    pub fn save(&self) -> Result<(), HighScoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, self.scores.to_file_contents())?;
        info!("Saved high scores to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "snake_arcade_{}_{}_highscores.txt",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn parses_three_lines() {
        let scores = HighScores::parse("12\n7\n3").unwrap();
        assert_eq!(scores.get(Difficulty::Easy), 12);
        assert_eq!(scores.get(Difficulty::Normal), 7);
        assert_eq!(scores.get(Difficulty::Hard), 3);
    }

    #[test]
    fn tolerates_whitespace_and_trailing_lines() {
        let scores = HighScores::parse(" 1 \r\n2\n 3\nextra\n").unwrap();
        assert_eq!(scores, HighScores { scores: [1, 2, 3] });
    }

    #[test]
    fn missing_line_names_the_tier() {
        let err = HighScores::parse("4\n5\n").unwrap_err();
        assert!(matches!(
            err,
            HighScoreError::MissingTier {
                difficulty: Difficulty::Hard
            }
        ));
    }

    #[test]
    fn non_numeric_line_is_rejected() {
        let err = HighScores::parse("4\nabc\n6\n").unwrap_err();
        match err {
            HighScoreError::InvalidScore {
                line,
                difficulty,
                value,
                ..
            } => {
                assert_eq!(line, 1);
                assert_eq!(difficulty, Difficulty::Normal);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(HighScores::parse("-1\n0\n0\n").is_err());
    }

    #[test]
    fn record_only_keeps_improvements() {
        let mut scores = HighScores::default();
        assert!(scores.record(Difficulty::Hard, 9));
        assert!(!scores.record(Difficulty::Hard, 9));
        assert!(!scores.record(Difficulty::Hard, 2));
        assert_eq!(scores.get(Difficulty::Hard), 9);
        assert_eq!(scores.to_file_contents(), "0\n0\n9\n");
    }

    #[test]
    fn missing_file_fails_to_open() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let err = HighScoreStore::open(&path).unwrap_err();

        assert!(matches!(
            err,
            HighScoreError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound
        ));
        assert!(!path.exists());
    }

    #[test]
    fn record_and_reset_round_trip_through_the_file() {
        let path = temp_path("round_trip");
        fs::write(&path, "1\n2\n3\n").unwrap();

        let mut store = HighScoreStore::open(&path).unwrap();
        assert!(store.record(Difficulty::Normal, 10).unwrap());
        assert!(!store.record(Difficulty::Easy, 1).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n10\n3\n");

        store.reset(Difficulty::Hard).unwrap();
        let reopened = HighScoreStore::open(&path).unwrap();
        assert_eq!(reopened.get(Difficulty::Normal), 10);
        assert_eq!(reopened.get(Difficulty::Hard), 0);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corrupt_file_fails_to_open() {
        let path = temp_path("corrupt");
        fs::write(&path, "lots\n").unwrap();

        assert!(HighScoreStore::open(&path).is_err());

        fs::remove_file(&path).unwrap();
    }
}
