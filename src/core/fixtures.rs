//! Shared test puzzles

use super::{Author, Category, DailyPuzzle, Puzzle};

/// Four categories with difficulties 1..4
pub(crate) fn sample_puzzle() -> Puzzle {
    Puzzle::new(
        7,
        [
            Category::new("Voće", ["Jabuka", "Kruška", "Banana", "Narandža"], 1).unwrap(),
            Category::new("Boje", ["Crvena", "Plava", "Zelena", "Žuta"], 2).unwrap(),
            Category::new("Gradovi", ["Sarajevo", "Mostar", "Tuzla", "Zenica"], 3).unwrap(),
            Category::new("Rijeke", ["Bosna", "Neretva", "Drina", "Una"], 4).unwrap(),
        ],
        vec![Author {
            name: "Lejla".to_string(),
        }],
    )
    .unwrap()
}

pub(crate) fn sample_daily(date: &str) -> DailyPuzzle {
    DailyPuzzle::new(date.parse().unwrap(), sample_puzzle())
}

/// Owned copy of a word list
pub(crate) fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}
