//! Author statistics over the archive

use super::repository::PuzzleRepository;
use rustc_hash::FxHashMap;

/// Number of puzzles credited to one author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCount {
    pub name: String,
    pub puzzles: usize,
}

/// Count puzzles per author, most prolific first
///
/// Co-authored puzzles count once for each author. Puzzles that fail to load are skipped.
pub fn author_counts<R: PuzzleRepository + ?Sized>(repository: &R) -> Vec<AuthorCount> {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();

    for date in repository.all_dates() {
        let puzzle = match repository.puzzle_by_date(date) {
            Ok(Some(puzzle)) => puzzle,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("Skipping {date}: {e}");
                continue;
            }
        };
        for author in puzzle.authors() {
            let name = author.name.trim();
            if !name.is_empty() {
                *counts.entry(name.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut rows: Vec<AuthorCount> = counts
        .into_iter()
        .map(|(name, puzzles)| AuthorCount { name, puzzles })
        .collect();
    rows.sort_by(|a, b| b.puzzles.cmp(&a.puzzles).then_with(|| a.name.cmp(&b.name)));
    rows
}
