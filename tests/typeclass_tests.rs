//! Integration tests for the type class traits and their wrappers.

#![cfg(feature = "typeclass")]

use funkit::control::{Either, Maybe};
use funkit::ord::Ordering;
use funkit::typeclass::{
    All, Any, Bifunctor, Bounded, Dual, Enumeration, First, Last, Max, Min, Monoid, Num, Product,
    Semigroup, Sum,
};
use rstest::rstest;

// =============================================================================
// Semigroup / Monoid
// =============================================================================

#[rstest]
fn combine_all_of_strings() {
    let words = ["fun", "kit"].map(String::from);
    assert_eq!(String::combine_all(words), "funkit");
    assert_eq!(String::combine_all(Vec::new()), "");
}

#[rstest]
fn ordering_monoid_compares_lexicographically() {
    let key_orderings = [Ordering::Equal, Ordering::GreaterThan, Ordering::LessThan];
    assert_eq!(Ordering::combine_all(key_orderings), Ordering::GreaterThan);
    assert_eq!(Ordering::combine_all([]), Ordering::Equal);
}

#[rstest]
fn maybe_monoid_skips_empty_values() {
    let parts = [Maybe::some(Sum(2)), Maybe::none(), Maybe::some(Sum(5))];
    assert_eq!(Maybe::combine_all(parts), Maybe::some(Sum(7)));
    assert_eq!(Maybe::<Sum<i32>>::combine_all([]), Maybe::none());
}

#[rstest]
fn statistics_in_one_fold() {
    let samples = [4, 8, 15, 16, 23, 42];
    let (total, (largest, smallest)) = Monoid::combine_all(
        samples
            .iter()
            .map(|&sample| (Sum(sample), (Max(sample), Min(sample)))),
    );
    assert_eq!(total, Sum(108));
    assert_eq!(largest, Max(42));
    assert_eq!(smallest, Min(4));
}

#[rstest]
#[case(vec![], true, false)]
#[case(vec![true, true], true, true)]
#[case(vec![true, false], false, true)]
fn boolean_monoids(#[case] flags: Vec<bool>, #[case] all: bool, #[case] any: bool) {
    assert_eq!(All::combine_all(flags.iter().copied().map(All)), All(all));
    assert_eq!(Any::combine_all(flags.into_iter().map(Any)), Any(any));
}

#[rstest]
fn first_and_last_keep_populated_ends() {
    let values = [Maybe::none(), Maybe::some(1), Maybe::some(2), Maybe::none()];
    assert_eq!(First::combine_all(values.map(First)), First(Maybe::some(1)));
    assert_eq!(Last::combine_all(values.map(Last)), Last(Maybe::some(2)));
}

#[rstest]
fn dual_flips_operands() {
    let left = Dual(vec![1]);
    let right = Dual(vec![2]);
    assert_eq!(left.combine(right), Dual(vec![2, 1]));
}

#[rstest]
fn combine_n_and_reduce_all() {
    assert_eq!("ab".to_string().combine_n(3), "ababab");
    assert_eq!(Sum::reduce_all([Sum(1), Sum(2)]), Maybe::some(Sum(3)));
    assert_eq!(Sum::<i32>::reduce_all([]), Maybe::none());
    assert_eq!(Product::combine_all([2, 3, 4].map(Product)), Product(24));
    assert_eq!(Product::<i64>::combine_all([]), Product(1));
}

// =============================================================================
// Bounded / Num
// =============================================================================

#[rstest]
fn bounds_of_builtin_types() {
    assert_eq!(<u8 as Bounded>::MIN_BOUND, 0);
    assert_eq!(<i16 as Bounded>::MAX_BOUND, i16::MAX);
    assert_eq!(<char as Bounded>::MAX_BOUND, char::MAX);
    assert_eq!(<Ordering as Bounded>::MIN_BOUND, Ordering::LessThan);
    assert_eq!(<Ordering as Bounded>::MAX_BOUND, Ordering::GreaterThan);
}

#[rstest]
#[case(-7, 7, -1)]
#[case(0, 0, 0)]
#[case(3, 3, 1)]
fn num_abs_and_signum(#[case] value: i64, #[case] absolute: i64, #[case] sign: i32) {
    assert_eq!(Num::abs(value), absolute);
    assert_eq!(Num::signum(value), sign);
    assert_eq!(Num::plus(value, Num::negate(value)), <i64 as Num>::ZERO);
}

#[rstest]
fn float_num() {
    assert_eq!(Num::mult(2.5_f64, 4.0), 10.0);
    assert_eq!(Num::signum(-0.5_f32), -1);
    assert_eq!(<f64 as Num>::ONE, 1.0);
}

// =============================================================================
// Enumeration
// =============================================================================

#[rstest]
fn successor_and_predecessor() {
    assert_eq!(Ordering::LessThan.succ(), Maybe::some(Ordering::Equal));
    assert_eq!(Ordering::GreaterThan.succ(), Maybe::none());
    assert_eq!(false.pred(), Maybe::none());
    assert_eq!(i32::MIN.pred(), Maybe::none());
}

#[rstest]
fn enum_ranges() {
    assert_eq!(i32::enum_from_to(&1, &4).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(i32::enum_from_to(&4, &1).count(), 0);
    assert_eq!(
        i32::enum_from_then_to(&1, &4, &12).collect::<Vec<_>>(),
        vec![1, 4, 7, 10]
    );
    assert_eq!(
        Ordering::LessThan.enum_from().collect::<Vec<_>>(),
        vec![Ordering::LessThan, Ordering::Equal, Ordering::GreaterThan]
    );
}

#[rstest]
fn enum_range_is_lazy_at_the_top_of_i32() {
    let tail: Vec<i32> = (i32::MAX - 1).enum_from().collect();
    assert_eq!(tail, vec![i32::MAX - 1, i32::MAX]);
}

// =============================================================================
// Bifunctor
// =============================================================================

#[rstest]
fn bifunctor_over_either_and_pairs() {
    let parsed: Either<String, i32> = Either::Right(4);
    assert_eq!(
        Bifunctor::bimap(parsed, |error: String| error.len(), |value| value + 1),
        Either::Right(5)
    );
    assert_eq!(("k", 2).second(|value| value * 3), ("k", 6));
}
