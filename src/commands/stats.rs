//! Author statistics

use crate::puzzles::PuzzleRepository;
use crate::puzzles::stats::author_counts;

/// One author's share of the archive
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorShare {
    pub name: String,
    pub puzzles: usize,
    /// Percentage of all puzzles in the archive
    pub percent: f64,
}

/// Authors with their puzzle counts and share, most prolific first
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorStatistics {
    pub total_puzzles: usize,
    pub authors: Vec<AuthorShare>,
}

#[must_use]
pub fn author_statistics<R: PuzzleRepository + ?Sized>(repository: &R) -> AuthorStatistics {
    let total_puzzles = repository.all_dates().len();
    let authors = author_counts(repository)
        .into_iter()
        .map(|count| AuthorShare {
            percent: if total_puzzles == 0 {
                0.0
            } else {
                count.puzzles as f64 * 100.0 / total_puzzles as f64
            },
            name: count.name,
            puzzles: count.puzzles,
        })
        .collect();

    AuthorStatistics {
        total_puzzles,
        authors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::sample_daily;
    use crate::core::{Author, DailyPuzzle, Puzzle};
    use crate::puzzles::MemoryRepository;

    fn by(date: &str, names: &[&str]) -> DailyPuzzle {
        let base = sample_daily(date);
        let authors = names
            .iter()
            .map(|name| Author {
                name: (*name).to_string(),
            })
            .collect();
        let puzzle = Puzzle::new(base.id(), base.categories().clone(), authors).unwrap();
        DailyPuzzle::new(base.date(), puzzle)
    }

    #[test]
    fn shares_add_up() {
        let repository = MemoryRepository::new()
            .with(by("2026-02-05", &["Amra"]))
            .with(by("2026-02-06", &["Haris"]))
            .with(by("2026-02-07", &["Amra"]))
            .with(by("2026-02-08", &["Amra"]));

        let stats = author_statistics(&repository);
        assert_eq!(stats.total_puzzles, 4);
        assert_eq!(stats.authors[0].name, "Amra");
        assert_eq!(stats.authors[0].puzzles, 3);
        assert!((stats.authors[0].percent - 75.0).abs() < f64::EPSILON);
        assert!((stats.authors[1].percent - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_repository() {
        let stats = author_statistics(&MemoryRepository::new());
        assert_eq!(stats.total_puzzles, 0);
        assert!(stats.authors.is_empty());
    }
}
