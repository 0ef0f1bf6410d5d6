//! Integration tests for `Ordering` and the comparator combinators.

#![cfg(feature = "ord")]

use funkit::ord::{self, Comparator, NaturalOrder, Ordering};
use rstest::rstest;
use std::cmp;

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    name: &'static str,
    department: &'static str,
    salary: u32,
}

fn staff() -> Vec<Employee> {
    vec![
        Employee { name: "carol", department: "ops", salary: 70 },
        Employee { name: "alice", department: "dev", salary: 90 },
        Employee { name: "bob", department: "dev", salary: 90 },
        Employee { name: "dave", department: "ops", salary: 50 },
    ]
}

fn names(employees: &[Employee]) -> Vec<&'static str> {
    employees.iter().map(|employee| employee.name).collect()
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
#[case(i32::MIN, Ordering::LessThan)]
#[case(-1, Ordering::LessThan)]
#[case(0, Ordering::Equal)]
#[case(1, Ordering::GreaterThan)]
#[case(i32::MAX, Ordering::GreaterThan)]
fn from_comparison_result_uses_sign(#[case] input: i32, #[case] expected: Ordering) {
    assert_eq!(Ordering::from_comparison_result(input), expected);
}

#[rstest]
#[case(Ordering::LessThan, Ordering::GreaterThan)]
#[case(Ordering::Equal, Ordering::Equal)]
#[case(Ordering::GreaterThan, Ordering::LessThan)]
fn reverse_swaps_strict_orderings(#[case] input: Ordering, #[case] expected: Ordering) {
    assert_eq!(input.reverse(), expected);
}

#[rstest]
fn then_only_consults_tie_breaker_on_equal() {
    assert_eq!(Ordering::Equal.then(Ordering::LessThan), Ordering::LessThan);
    assert_eq!(Ordering::GreaterThan.then(Ordering::LessThan), Ordering::GreaterThan);
}

#[rstest]
fn std_ordering_conversion() {
    assert_eq!(Ordering::from(cmp::Ordering::Less), Ordering::LessThan);
    assert_eq!(cmp::Ordering::from(Ordering::GreaterThan), cmp::Ordering::Greater);
}

// =============================================================================
// Comparators
// =============================================================================

#[rstest]
fn sort_by_department_then_descending_salary_then_name() {
    let comparator = ord::by(|employee: &Employee| employee.department)
        .then(ord::by(|employee: &Employee| employee.salary).reversed())
        .then(ord::by(|employee: &Employee| employee.name));

    let mut employees = staff();
    employees.sort_by(comparator.to_std());
    assert_eq!(names(&employees), vec!["alice", "bob", "carol", "dave"]);
}

#[rstest]
fn reversed_natural_order_sorts_descending() {
    let mut values = vec![3, 9, 1, 4];
    values.sort_by(NaturalOrder::<i32>::new().reversed().to_std());
    assert_eq!(values, vec![9, 4, 3, 1]);
}

#[rstest]
fn double_reverse_is_identity() {
    let comparator = ord::reverse::<i32, _>(ord::reverse::<i32, _>(ord::natural()));
    assert_eq!(comparator.compare(&1, &2), Ordering::LessThan);
}

#[rstest]
fn then_function_matches_method() {
    let by_length = |left: &&str, right: &&str| Ordering::from(left.len().cmp(&right.len()));
    let combined = ord::then::<&str, _, _>(by_length, ord::natural());
    assert_eq!(combined.compare(&"bb", &"aa"), Ordering::GreaterThan);
    assert_eq!(combined.compare(&"b", &"aa"), Ordering::LessThan);
}

#[rstest]
fn by_with_uses_key_comparator() {
    let by_name_length = ord::by_with(
        |employee: &Employee| employee.name,
        |left: &&str, right: &&str| Ordering::from(left.len().cmp(&right.len())),
    );
    let employees = staff();
    assert_eq!(
        by_name_length.compare(&employees[2], &employees[3]),
        Ordering::LessThan
    );
}

#[rstest]
fn comparison_adapters_agree() {
    let from_int = ord::from_comparison(|left: &i64, right: &i64| (left - right).signum() as i32);
    let from_std = ord::from_std(|left: &i64, right: &i64| left.cmp(right));
    for (left, right) in [(1, 2), (2, 2), (3, 2)] {
        assert_eq!(from_int.compare(&left, &right), from_std.compare(&left, &right));
    }
}

#[rstest]
fn to_comparison_returns_signed_integers() {
    let comparison = ord::natural::<char>().to_comparison();
    assert!(comparison(&'a', &'b') < 0);
    assert_eq!(comparison(&'z', &'z'), 0);
    assert!(comparison(&'z', &'a') > 0);
}
