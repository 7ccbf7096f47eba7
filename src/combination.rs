//! Enumeration of k-element combinations of a slice.

extern crate alloc;

use alloc::vec::Vec;
use core::iter::FusedIterator;

/// Number of ways to choose `k` elements out of `n`, or `None` on overflow.
fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1)
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

/// Returns an iterator over every `k`-element combination of `items`.
///
/// Combinations are produced lazily in lexicographic order of their
/// positions, so the sequence is the same on every call. Elements inside a
/// combination keep their relative order from `items`. Choosing zero
/// elements yields a single empty combination; choosing more elements than
/// `items` holds yields nothing.
///
/// # Example
///
/// ```
/// use pokerhands::combinations;
///
/// let groups: Vec<Vec<char>> = combinations(&['a', 'b', 'c'], 2)
///     .map(|c| c.iter().copied().collect())
///     .collect();
/// assert_eq!(groups, [['a', 'b'], ['a', 'c'], ['b', 'c']]);
/// ```
#[must_use]
pub fn combinations<T>(items: &[T], k: usize) -> Combinations<'_, T> {
    let fits = k <= items.len();
    Combinations {
        items,
        indices: if fits { (0..k).collect() } else { Vec::new() },
        exhausted: !fits,
        remaining: binomial(items.len(), k),
    }
}

/// Iterator returned by [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    /// Positions of the next combination to yield.
    indices: Vec<usize>,
    exhausted: bool,
    /// Combinations still to come, `None` if the count overflows `usize`.
    remaining: Option<usize>,
}

impl<T> Combinations<'_, T> {
    /// Moves `indices` to the next combination in lexicographic order.
    ///
    /// Returns `false` when the current combination was the last one.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();
        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            return false;
        };
        self.indices[pivot] += 1;
        for i in pivot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Combination<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = Combination {
            items: self.items,
            positions: self.indices.clone(),
        };
        self.exhausted = !self.advance();
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for Combinations<'_, T> {}

/// One combination drawn from a slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<'a, T> {
    items: &'a [T],
    positions: Vec<usize>,
}

impl<'a, T> Combination<'a, T> {
    /// Returns the positions of the chosen elements, in ascending order.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Iterates over the chosen elements in their original order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        let items = self.items;
        self.positions.iter().map(move |&i| &items[i])
    }

    /// Returns the number of chosen elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether no element was chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns whether every chosen element has the same key.
    ///
    /// An empty combination is trivially uniform.
    pub fn all_equal_by<K, F>(&self, mut key: F) -> bool
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        let mut chosen = self.iter();
        let Some(first) = chosen.next() else {
            return true;
        };
        let first = key(first);
        chosen.all(|item| key(item) == first)
    }

    /// Returns the elements that were not chosen, in their original order.
    ///
    /// Removal is by position, so equal elements outside the combination are
    /// kept.
    #[must_use]
    pub fn remainder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, _)| self.positions.binary_search(i).is_err())
            .map(|(_, item)| item.clone())
            .collect()
    }
}
