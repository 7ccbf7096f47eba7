//! Combination enumeration tests.

use std::collections::HashSet;

use pokerhands::combinations;

const ITEMS: [u8; 5] = [10, 20, 30, 40, 50];

fn positions(k: usize) -> Vec<Vec<usize>> {
    combinations(&ITEMS, k)
        .map(|c| c.positions().to_vec())
        .collect()
}

#[test]
fn counts_match_binomials() {
    let expected = [1, 5, 10, 10, 5, 1, 0];
    for (k, count) in expected.into_iter().enumerate() {
        assert_eq!(combinations(&ITEMS, k).count(), count, "k = {k}");
        assert_eq!(
            combinations(&ITEMS, k).size_hint(),
            (count, Some(count)),
            "k = {k}"
        );
    }
}

#[test]
fn combinations_are_distinct_and_cover_all_subsets() {
    for k in 2..=4 {
        let all = positions(k);
        let unique: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(unique.len(), all.len(), "k = {k}");
        for group in &all {
            assert_eq!(group.len(), k);
            assert!(group.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn enumeration_is_lexicographic_and_repeatable() {
    assert_eq!(
        positions(2),
        [
            [0, 1],
            [0, 2],
            [0, 3],
            [0, 4],
            [1, 2],
            [1, 3],
            [1, 4],
            [2, 3],
            [2, 4],
            [3, 4],
        ]
    );
    assert_eq!(positions(3), positions(3));
}

#[test]
fn elements_keep_relative_order() {
    let groups: Vec<Vec<u8>> = combinations(&ITEMS, 4)
        .map(|c| c.iter().copied().collect())
        .collect();
    assert_eq!(groups[0], [10, 20, 30, 40]);
    assert_eq!(groups[4], [20, 30, 40, 50]);
}

#[test]
fn remainder_removes_by_position() {
    let items = [7, 7, 7, 8];
    let first = combinations(&items, 2).next().expect("one combination");
    assert_eq!(first.remainder(), [7, 8]);

    let last = combinations(&ITEMS, 3).last().expect("one combination");
    assert_eq!(last.positions(), [2, 3, 4]);
    assert_eq!(last.remainder(), [10, 20]);
}

#[test]
fn all_equal_by_compares_keys() {
    let words = ["apple", "avocado", "banana"];
    let mut groups = combinations(&words, 2);
    let first = groups.next().expect("combination");
    assert!(first.all_equal_by(|w| w.as_bytes()[0]));
    assert!(!groups.next().expect("combination").all_equal_by(|w| w.len()));

    let empty = combinations(&words, 0).next().expect("empty combination");
    assert!(empty.is_empty());
    assert!(empty.all_equal_by(|w| w.len()));
}

#[test]
fn iteration_stops_early_and_stays_finished() {
    let mut groups = combinations(&ITEMS, 2);
    assert_eq!(groups.size_hint(), (10, Some(10)));
    let found = groups.by_ref().position(|c| c.iter().sum::<u8>() == 50);
    assert_eq!(found, Some(2));
    assert_eq!(groups.size_hint(), (7, Some(7)));

    let mut none = combinations(&ITEMS, 6);
    assert!(none.next().is_none());
    assert!(none.next().is_none());
}

#[test]
fn oversized_k_yields_nothing_without_allocating() {
    assert_eq!(combinations(&ITEMS, usize::MAX).count(), 0);
    assert_eq!(combinations(&[1u8, 2, 3], usize::MAX / 4).count(), 0);
    assert_eq!(combinations(&ITEMS, usize::MAX).size_hint(), (0, Some(0)));
}

#[test]
fn overflowing_count_has_no_upper_bound() {
    let units = vec![(); usize::MAX];
    let mut pairs = combinations(&units, 2);
    assert_eq!(pairs.size_hint(), (usize::MAX, None));
    assert_eq!(pairs.next().expect("first pair").positions(), [0, 1]);
    assert_eq!(pairs.next().expect("second pair").positions(), [0, 2]);
    assert_eq!(
        combinations(&units, 1).size_hint(),
        (usize::MAX, Some(usize::MAX))
    );
}
