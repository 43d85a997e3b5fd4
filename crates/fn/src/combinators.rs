//! Logical reducers over predicate thunks and lists.
//!
//! Two families with different evaluation rules live here:
//!
//! - [`all_of`] and [`any_of`] combine zero-argument thunks, folding from the
//!   right. Every thunk is always called, even once the answer is known.
//! - [`any`] and [`some`] test a predicate against list elements from the
//!   left and stop at the first element that decides the answer.

use std::cmp::Ordering;

use crate::{Callable, Truthiness};

/// Returns `true` if every thunk returns a truthy value.
///
/// Thunks are called from last to first and none is skipped. An empty input
/// is `true`.
pub fn all_of<I, F, T>(thunks: I) -> bool
where
    I: IntoIterator<Item = F>,
    I::IntoIter: DoubleEndedIterator,
    F: FnOnce() -> T,
    T: Truthiness,
{
    thunks.into_iter().rev().fold(true, |truth, thunk| {
        let value = thunk().is_truthy();
        truth && value
    })
}

/// Returns `true` if any thunk returns a truthy value.
///
/// Thunks are called from last to first and none is skipped. An empty input
/// is `false`.
pub fn any_of<I, F, T>(thunks: I) -> bool
where
    I: IntoIterator<Item = F>,
    I::IntoIter: DoubleEndedIterator,
    F: FnOnce() -> T,
    T: Truthiness,
{
    thunks.into_iter().rev().fold(false, |truth, thunk| {
        let value = thunk().is_truthy();
        truth || value
    })
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Elements are tested in order; testing stops at the first failure.
pub fn any<T, P, R>(list: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> R,
    R: Truthiness,
{
    list.iter().all(|item| predicate(item).is_truthy())
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Elements are tested in order; testing stops at the first success.
pub fn some<T, P, R>(list: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> R,
    R: Truthiness,
{
    list.iter().any(|item| predicate(item).is_truthy())
}

/// A predicate that negates another predicate.
///
/// Created by [`complement()`].
#[derive(Debug, Clone)]
pub struct Complement<P> {
    predicate: P,
}

/// Returns a predicate that is truthy exactly when `predicate` is not.
///
/// The full argument list is forwarded and the wrapped predicate is called
/// without a receiver.
///
/// # Example
///
/// ```
/// use scraps_fn::{callable, complement};
///
/// let count = callable(|_: Option<&()>, args: Vec<u8>| args.len());
/// let none_given = complement(count);
///
/// assert!(none_given.invoke(Vec::new()));
/// assert!(!none_given.invoke(vec![1, 2]));
/// ```
pub fn complement<P>(predicate: P) -> Complement<P> {
    Complement { predicate }
}

impl<P> Complement<P> {
    /// Calls the wrapped predicate and negates its truthiness.
    pub fn invoke<C, A>(&self, args: Vec<A>) -> bool
    where
        P: Callable<C, A>,
        P::Output: Truthiness,
    {
        !self.predicate.call_with(None, args).is_truthy()
    }
}

impl<P, C, A> Callable<C, A> for Complement<P>
where
    P: Callable<C, A>,
    P::Output: Truthiness,
{
    type Output = bool;

    fn call_with(&self, _receiver: Option<&C>, args: Vec<A>) -> bool {
        self.invoke(args)
    }
}

/// Turns a "comes before" predicate into an ordering function.
///
/// The returned function yields `Less` when `before(x, y)` is truthy,
/// `Greater` when `before(y, x)` is truthy, and `Equal` otherwise, which makes
/// it usable with [`slice::sort_by`].
///
/// # Example
///
/// ```
/// use scraps_fn::comparator;
///
/// let mut words = vec!["pear", "fig", "banana"];
/// words.sort_by(comparator(|a: &&str, b: &&str| a.len() < b.len()));
///
/// assert_eq!(words, ["fig", "pear", "banana"]);
/// ```
pub fn comparator<T, P, R>(before: P) -> impl Fn(&T, &T) -> Ordering
where
    P: Fn(&T, &T) -> R,
    R: Truthiness,
{
    move |x: &T, y: &T| {
        if before(x, y).is_truthy() {
            Ordering::Less
        } else if before(y, x).is_truthy() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
