//! Sequence normalization and slice helpers.

/// Collects any iterable into a `Vec`, treating an absent input as empty.
pub fn to_array<I>(input: Option<I>) -> Vec<I::Item>
where
    I: IntoIterator,
{
    input.map_or_else(Vec::new, |items| items.into_iter().collect())
}

/// Returns the keys of a mapping in its iteration order.
///
/// Accepts a borrowed `HashMap`, `BTreeMap`, or anything else that iterates
/// over key/value reference pairs.
pub fn keys<'m, K, V, M>(map: M) -> Vec<K>
where
    M: IntoIterator<Item = (&'m K, &'m V)>,
    K: Clone + 'm,
    V: 'm,
{
    map.into_iter().map(|(key, _)| key.clone()).collect()
}

/// Returns the first element, if any.
pub fn first<T>(list: &[T]) -> Option<&T> {
    list.first()
}

/// Returns up to the first `n` elements.
pub fn first_n<T>(list: &[T], n: usize) -> &[T] {
    &list[..n.min(list.len())]
}

/// Returns everything after the first element.
pub fn rest<T>(list: &[T]) -> &[T] {
    rest_from(list, 1)
}

/// Returns everything from index `n` on; empty if `n` is past the end.
pub fn rest_from<T>(list: &[T], n: usize) -> &[T] {
    &list[n.min(list.len())..]
}

/// Concatenates lists into a new list.
pub fn cat<T: Clone>(lists: &[&[T]]) -> Vec<T> {
    lists.concat()
}

/// Returns a new list with `head` in front of `tail`.
pub fn construct<T: Clone>(head: T, tail: &[T]) -> Vec<T> {
    cat(&[&[head], tail])
}

/// Maps every element to a list and concatenates the results.
pub fn mapcat<T, U, F>(list: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> Vec<U>,
{
    list.iter().flat_map(f).collect()
}

/// Returns every element except the last.
pub fn but_last<T>(list: &[T]) -> &[T] {
    list.split_last().map_or(list, |(_, init)| init)
}

/// Places `separator` between each pair of adjacent elements.
///
/// # Example
///
/// ```
/// use scraps_fn::array::interpose;
///
/// assert_eq!(interpose(",", &["a", "b", "c"]), ["a", ",", "b", ",", "c"]);
/// ```
pub fn interpose<T: Clone>(separator: T, list: &[T]) -> Vec<T> {
    let spread = mapcat(list, |item| construct(item.clone(), &[separator.clone()]));
    but_last(&spread).to_vec()
}
