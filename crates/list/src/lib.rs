//! Small list helpers.
//!
//! - [`randomize`], [`randomized_list`], [`shuffle`]: random orderings
//! - [`index_of`]: insertion index in a sorted list
//! - [`insert_at`], [`remove_at`]: in-place edits with bounds checks
//!
//! Functions that need randomness take any [`rand::Rng`], so callers can pass
//! a seeded generator for reproducible results.

mod error;

pub use error::ListError;

use rand::{Rng, seq::SliceRandom};
use tracing::{trace, warn};

/// Returns the last element, if any.
pub fn last<T>(list: &[T]) -> Option<&T> {
    list.last()
}

/// Returns a random permutation of `0..len`.
///
/// The result describes a new ordering: position `i` of the reordered list
/// takes the element at `order[i]` of the original. See [`randomized_list`].
pub fn randomize<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();

    for i in (1..len).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    trace!(len, "randomized order");
    order
}

/// Like [`randomize`], using the thread-local generator.
pub fn randomize_thread(len: usize) -> Vec<usize> {
    randomize(len, &mut rand::thread_rng())
}

/// Returns a reordered copy of `list`, leaving `list` untouched.
///
/// # Example
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use scraps_list::randomized_list;
///
/// let original = ["a", "b", "c", "d"];
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let mut reordered = randomized_list(&original, &mut rng);
/// reordered.sort_unstable();
///
/// assert_eq!(reordered, original);
/// ```
pub fn randomized_list<T: Clone, R: Rng + ?Sized>(list: &[T], rng: &mut R) -> Vec<T> {
    randomize(list.len(), rng)
        .into_iter()
        .map(|idx| list[idx].clone())
        .collect()
}

/// Returns a shuffled copy of `list`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(list: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = list.to_vec();
    copy.shuffle(rng);
    copy
}

/// Returns where `key` sits, or would be inserted, in the ascending `keys`.
///
/// An empty list or a key before the first element gives `0`. A key after
/// the last element gives `keys.len()`.
///
/// # Example
///
/// ```
/// use scraps_list::index_of;
///
/// let keys = ["apple", "fig", "pear"];
///
/// assert_eq!(index_of(&"fig", &keys), 1);
/// assert_eq!(index_of(&"kiwi", &keys), 2);
/// assert_eq!(index_of(&"zucchini", &keys), 3);
/// ```
pub fn index_of<T: Ord>(key: &T, keys: &[T]) -> usize {
    match keys.binary_search(key) {
        Ok(idx) | Err(idx) => idx,
    }
}

/// Inserts `item` at `index`, shifting later elements right.
///
/// `index` may equal the length, which appends.
///
/// # Errors
///
/// Returns [`ListError::OutOfBounds`] if `index` is past the end. The list is
/// left unchanged.
pub fn insert_at<T>(list: &mut Vec<T>, index: usize, item: T) -> Result<(), ListError> {
    let len = list.len();
    if index > len {
        warn!(index, len, "rejected insert past the end of a list");
        return Err(ListError::OutOfBounds { index, len });
    }

    list.insert(index, item);
    Ok(())
}

/// Removes and returns the element at `index`, shifting later elements left.
///
/// # Errors
///
/// Returns [`ListError::OutOfBounds`] if no element is at `index`.
pub fn remove_at<T>(list: &mut Vec<T>, index: usize) -> Result<T, ListError> {
    let len = list.len();
    if index >= len {
        warn!(index, len, "rejected removal outside a list");
        return Err(ListError::OutOfBounds { index, len });
    }

    Ok(list.remove(index))
}

/// Returns a shallow copy of `list`.
pub fn clone_list<T: Clone>(list: &[T]) -> Vec<T> {
    list.to_vec()
}
