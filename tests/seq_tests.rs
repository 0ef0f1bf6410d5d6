//! Integration tests for the `Maybe`-returning sequence helpers.

#![cfg(feature = "seq")]

use funkit::control::Maybe;
use funkit::ord::{self, Comparator};
use funkit::seq::{
    Indexed, NonEmpty, maybe_element_at, maybe_first, maybe_first_by, maybe_last, maybe_last_by,
    maybe_max, maybe_max_by, maybe_min, maybe_min_by, maybe_single, maybe_single_by, partition,
    singleton, unfold,
};
use rstest::rstest;
use std::cell::Cell;
use std::collections::{BTreeSet, VecDeque};

// =============================================================================
// Element Lookup
// =============================================================================

#[rstest]
#[case(-1, Maybe::none())]
#[case(0, Maybe::some('a'))]
#[case(2, Maybe::some('c'))]
#[case(3, Maybe::none())]
fn element_at_over_chars(#[case] index: isize, #[case] expected: Maybe<char>) {
    assert_eq!(maybe_element_at("abc".chars(), index), expected);
}

#[rstest]
fn element_at_over_set_iterator() {
    let set: BTreeSet<i32> = [5, 1, 3].into_iter().collect();
    assert_eq!(maybe_element_at(&set, 1), Maybe::some(&3));
    assert_eq!(maybe_element_at(&set, 10), Maybe::none());
}

#[rstest]
fn indexed_fast_path_matches_linear_lookup() {
    let values = vec![10, 20, 30];
    for index in -2..5 {
        assert_eq!(
            values.maybe_element_at(index),
            maybe_element_at(&values, index)
        );
    }
}

#[rstest]
fn indexed_last_on_deque() {
    let mut deque = VecDeque::from([2, 3]);
    deque.push_front(1);
    assert_eq!(deque.maybe_last(), Maybe::some(&3));
    assert_eq!(deque.maybe_element_at(0), Maybe::some(&1));
}

// =============================================================================
// First / Last / Single
// =============================================================================

#[rstest]
fn first_and_last_of_empty() {
    let empty: Vec<u8> = Vec::new();
    assert_eq!(maybe_first(&empty), Maybe::none());
    assert_eq!(maybe_last(&empty), Maybe::none());
}

#[rstest]
fn first_by_stops_at_match() {
    let visited = Cell::new(0);
    let found = maybe_first_by(1..100, |value| {
        visited.set(visited.get() + 1);
        value % 7 == 0
    });
    assert_eq!(found, Maybe::some(7));
    assert_eq!(visited.get(), 7);
}

#[rstest]
fn last_by_scans_everything() {
    assert_eq!(maybe_last_by([1, 4, 6, 7], |value| value % 2 == 0), Maybe::some(6));
    assert_eq!(maybe_last_by([1, 3], |value| value % 2 == 0), Maybe::none());
}

#[rstest]
#[case(vec![], Maybe::none())]
#[case(vec![4], Maybe::some(4))]
#[case(vec![4, 5], Maybe::none())]
fn single_requires_exactly_one(#[case] values: Vec<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(maybe_single(values), expected);
}

#[rstest]
fn single_by_counts_matches_only() {
    assert_eq!(maybe_single_by(["a", "bb", "c"], |text| text.len() == 2), Maybe::some("bb"));
    assert_eq!(maybe_single_by(["a", "bb", "cc"], |text| text.len() == 2), Maybe::none());
}

// =============================================================================
// Max / Min
// =============================================================================

#[rstest]
fn max_keeps_last_of_equal_maxima() {
    let words = ["apple", "kiwi", "mango", "fig"];
    let longest = maybe_max_by(words, ord::by(|word: &&str| word.len()));
    assert_eq!(longest, Maybe::some("mango"));
}

#[rstest]
fn min_keeps_first_of_equal_minima() {
    let words = ["apple", "kiwi", "mango", "fig", "pea"];
    let shortest = maybe_min_by(words, ord::by(|word: &&str| word.len()));
    assert_eq!(shortest, Maybe::some("fig"));
}

#[rstest]
fn natural_max_and_min() {
    assert_eq!(maybe_max([3, -1, 8, 2]), Maybe::some(8));
    assert_eq!(maybe_min([3, -1, 8, 2]), Maybe::some(-1));
    assert_eq!(maybe_max(Vec::<i32>::new()), Maybe::none());
}

#[rstest]
fn max_of_maybes_prefers_populated_values() {
    let values = [Maybe::some(5), Maybe::none(), Maybe::some(2)];
    assert_eq!(maybe_max(values), Maybe::some(Maybe::some(5)));
    assert_eq!(maybe_min(values), Maybe::some(Maybe::none()));
}

#[rstest]
fn max_with_reversed_comparator_is_min() {
    let values = [4, 2, 9];
    assert_eq!(
        maybe_max_by(values, ord::natural::<i32>().reversed()),
        Maybe::some(2)
    );
}

// =============================================================================
// Generation
// =============================================================================

#[rstest]
fn unfold_produces_collatz_sequence() {
    let steps: Vec<u64> = unfold(6_u64, |current| {
        if current == 1 {
            Maybe::none()
        } else {
            let next = if current % 2 == 0 { current / 2 } else { 3 * current + 1 };
            Maybe::some((current, next))
        }
    })
    .collect();
    assert_eq!(steps, vec![6, 3, 10, 5, 16, 8, 4, 2]);
}

#[rstest]
fn unfold_is_lazy() {
    let calls = Cell::new(0);
    let naturals = unfold(0, |n| {
        calls.set(calls.get() + 1);
        Maybe::some((n, n + 1))
    });
    assert_eq!(calls.get(), 0);
    let first_three: Vec<i32> = naturals.take(3).collect();
    assert_eq!(first_three, vec![0, 1, 2]);
    assert_eq!(calls.get(), 3);
}

#[rstest]
fn singleton_and_partition() {
    assert_eq!(singleton("only").collect::<Vec<_>>(), vec!["only"]);
    let (even, odd) = partition(1..=6, |value| value % 2 == 0);
    assert_eq!(even, vec![2, 4, 6]);
    assert_eq!(odd, vec![1, 3, 5]);
}

#[rstest]
fn non_empty_always_has_a_first_element() {
    let mut values = NonEmpty::singleton("head");
    values.push("tail");
    assert_eq!(*values.first(), "head");
    assert_eq!(*values.last(), "tail");
    assert_eq!(values.rest(), &["tail"]);

    let lengths = values.map(str::len);
    assert_eq!(Vec::from(lengths), vec![4, 4]);
}
