//! Puzzle files on disk
//!
//! Reads `<dir>/YYYY-MM-DD.json` on demand, so puzzles can be added without rebuilding.

use super::repository::{PuzzleRepository, RepositoryError, parse_puzzle};
use crate::core::{DailyPuzzle, parse_date};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Repository over a directory of dated JSON files
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    root: PathBuf,
}

impl DirectoryRepository {
    /// Use a directory of puzzle files
    ///
    /// # Errors
    /// Returns `RepositoryError::Io` if `root` is not a readable directory.
    ///
    /// # Examples
    /// ```no_run
    /// use konekcije::puzzles::{DirectoryRepository, PuzzleRepository};
    ///
    /// let repository = DirectoryRepository::open("data/puzzles").unwrap();
    /// println!("{} puzzles", repository.all_dates().len());
    /// ```
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, RepositoryError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(RepositoryError::Io {
                source: io::Error::new(io::ErrorKind::NotFound, "not a directory"),
                path: root,
            });
        }
        Ok(Self { root })
    }

    fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root.join(format!("{date}.json"))
    }
}

impl PuzzleRepository for DirectoryRepository {
    fn puzzle_by_date(&self, date: NaiveDate) -> Result<Option<DailyPuzzle>, RepositoryError> {
        let path = self.path_for(date);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(RepositoryError::Io { path, source }),
        };
        parse_puzzle(date, &content).map(Some)
    }

    fn all_dates(&self) -> Vec<NaiveDate> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Cannot list {}: {e}", self.root.display());
                return Vec::new();
            }
        };

        let mut dates: Vec<NaiveDate> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| parse_date(path.file_stem()?.to_str()?).ok())
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "id": 1,
        "categories": [
            { "name": "A", "words": ["a", "b", "c", "d"], "difficulty": 1 },
            { "name": "B", "words": ["e", "f", "g", "h"], "difficulty": 2 },
            { "name": "C", "words": ["i", "j", "k", "l"], "difficulty": 3 },
            { "name": "D", "words": ["m", "n", "o", "p"], "difficulty": 4 }
        ]
    }"#;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("konekcije-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reads_dated_files() {
        let dir = temp_dir("reads");
        fs::write(dir.join("2026-02-07.json"), JSON).unwrap();
        fs::write(dir.join("2026-02-09.json"), JSON).unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();
        fs::write(dir.join("draft.json"), JSON).unwrap();

        let repository = DirectoryRepository::open(&dir).unwrap();
        let dates = repository.all_dates();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].to_string(), "2026-02-09");

        let puzzle = repository.puzzle_by_date(dates[1]).unwrap().unwrap();
        assert_eq!(puzzle.id(), 1);
        assert!(
            repository
                .puzzle_by_date("2026-02-08".parse().unwrap())
                .unwrap()
                .is_none()
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn broken_file_is_an_error() {
        let dir = temp_dir("broken");
        fs::write(dir.join("2026-02-07.json"), "{ broken").unwrap();

        let repository = DirectoryRepository::open(&dir).unwrap();
        assert!(
            repository
                .puzzle_by_date("2026-02-07".parse().unwrap())
                .is_err()
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn open_requires_directory() {
        let missing = std::env::temp_dir().join("konekcije-definitely-missing-dir");
        assert!(DirectoryRepository::open(missing).is_err());
    }
}
