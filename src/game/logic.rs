//! Pure puzzle evaluation
//!
//! Stateless functions over categories and selections. Callers pass only the categories
//! still in play; these functions never look at which ones were already found.

use crate::core::{Category, WORDS_PER_CATEGORY};
use rand::Rng;
use rand::seq::SliceRandom;

/// Wrong guesses allowed before the game is lost
pub const MAX_MISTAKES: u32 = 4;

/// Words in a full selection
pub const MAX_SELECTIONS: usize = WORDS_PER_CATEGORY;

/// Return a uniformly shuffled copy of `items`, leaving the input untouched
///
/// # Examples
/// ```
/// use konekcije::game::shuffle;
///
/// let words = vec!["a", "b", "c"];
/// let mut shuffled = shuffle(&words);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, words);
/// ```
#[must_use]
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Shuffle with a caller-supplied random source
#[must_use]
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Find the candidate whose words equal the selection as a set
///
/// Word order in the selection is irrelevant. An empty or partial selection never matches.
#[must_use]
pub fn evaluate_guess<'a, S, I>(selection: &[S], candidates: I) -> Option<&'a Category>
where
    S: AsRef<str>,
    I: IntoIterator<Item = &'a Category>,
{
    if selection.len() != WORDS_PER_CATEGORY {
        return None;
    }
    candidates
        .into_iter()
        .find(|category| category.shared_count(selection) == WORDS_PER_CATEGORY)
}

/// True when some candidate shares exactly three words with the selection
#[must_use]
pub fn is_near_miss<'a, S, I>(selection: &[S], candidates: I) -> bool
where
    S: AsRef<str>,
    I: IntoIterator<Item = &'a Category>,
{
    candidates
        .into_iter()
        .any(|category| category.shared_count(selection) == WORDS_PER_CATEGORY - 1)
}

/// True when every category has been found
#[inline]
#[must_use]
pub const fn is_won<T>(found: &[T], total: usize) -> bool {
    found.len() == total
}

/// True once the mistake budget is spent
#[inline]
#[must_use]
pub const fn is_lost(mistakes: u32, max_mistakes: u32) -> bool {
    mistakes >= max_mistakes
}
