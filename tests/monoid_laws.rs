//! Property-based tests for Semigroup and Monoid laws.
//!
//! - Associativity: (a <> b) <> c == a <> (b <> c)
//! - Left Identity: empty <> a == a
//! - Right Identity: a <> empty == a

#![cfg(feature = "typeclass")]

use funkit::control::Maybe;
use funkit::ord::Ordering;
use funkit::typeclass::{All, Any, Dual, First, Last, Max, Min, Monoid, Semigroup, Sum};
use proptest::prelude::*;

fn ordering_strategy() -> impl Strategy<Value = Ordering> {
    prop_oneof![
        Just(Ordering::LessThan),
        Just(Ordering::Equal),
        Just(Ordering::GreaterThan),
    ]
}

fn maybe_text() -> impl Strategy<Value = Maybe<String>> {
    prop::option::of("[a-z]{0,6}").prop_map(Maybe::from)
}

fn identity_of<T: Monoid>(_witness: &T) -> T {
    T::empty()
}

macro_rules! monoid_laws {
    ($module:ident, $strategy:expr) => {
        mod $module {
            use super::*;

            proptest! {
                #[test]
                fn associativity(a in $strategy, b in $strategy, c in $strategy) {
                    prop_assert_eq!(
                        a.clone().combine(b.clone()).combine(c.clone()),
                        a.combine(b.combine(c))
                    );
                }

                #[test]
                fn left_identity(a in $strategy) {
                    prop_assert_eq!(identity_of(&a).combine(a.clone()), a);
                }

                #[test]
                fn right_identity(a in $strategy) {
                    prop_assert_eq!(a.clone().combine(identity_of(&a)), a);
                }
            }
        }
    };
}

monoid_laws!(string, "[a-z]{0,8}");
monoid_laws!(vector, prop::collection::vec(any::<u8>(), 0..8));
monoid_laws!(ordering, ordering_strategy());
monoid_laws!(maybe_string, maybe_text());
monoid_laws!(sum, (-1000i32..1000).prop_map(Sum));
monoid_laws!(max, any::<i64>().prop_map(Max));
monoid_laws!(min, any::<u16>().prop_map(Min));
monoid_laws!(all, any::<bool>().prop_map(All));
monoid_laws!(any_bool, any::<bool>().prop_map(Any));
monoid_laws!(first, maybe_text().prop_map(First));
monoid_laws!(last, maybe_text().prop_map(Last));
monoid_laws!(dual_string, "[a-z]{0,8}".prop_map(Dual));
monoid_laws!(pair, ("[a-z]{0,4}", (-100i32..100).prop_map(Sum)));

proptest! {
    #[test]
    fn combine_all_matches_fold(values in prop::collection::vec(-100i32..100, 0..16)) {
        let expected: i32 = values.iter().sum();
        prop_assert_eq!(Sum::combine_all(values.into_iter().map(Sum)), Sum(expected));
    }

    #[test]
    fn reduce_all_is_empty_only_for_empty_input(values in prop::collection::vec("[a-z]{0,3}", 0..6)) {
        let is_empty = values.is_empty();
        prop_assert_eq!(String::reduce_all(values).is_none(), is_empty);
    }
}
