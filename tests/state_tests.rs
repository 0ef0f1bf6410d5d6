//! Integration tests for the State monad.
//!
//! Uses a small stack machine and a label generator as realistic
//! stateful programs.

#![cfg(feature = "effect")]

use funkit::effect::{State, StateResult};
use rstest::rstest;

fn push(value: i32) -> State<Vec<i32>, ()> {
    State::modify(move |mut stack: Vec<i32>| {
        stack.push(value);
        stack
    })
}

fn pop() -> State<Vec<i32>, Option<i32>> {
    State::from_transition(|mut stack: Vec<i32>| {
        let top = stack.pop();
        (stack, top)
    })
}

fn fresh_label(prefix: &'static str) -> State<u32, String> {
    State::from_transition(move |counter: u32| (counter + 1, format!("{prefix}{counter}")))
}

// =============================================================================
// Running
// =============================================================================

#[rstest]
fn run_returns_state_and_result() {
    let output = pop().run(vec![1, 2, 3]);
    assert_eq!(output, StateResult::new(vec![1, 2], Some(3)));
}

#[rstest]
fn run_result_and_run_state_project() {
    let computation = fresh_label("tmp");
    assert_eq!(computation.run_result(7), "tmp7");
    assert_eq!(computation.run_state(7), 8);
}

#[rstest]
fn computations_are_reusable() {
    let computation = fresh_label("x");
    assert_eq!(computation.run(0).result, "x0");
    assert_eq!(computation.run(0).result, "x0");
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn stack_program_threads_state() {
    let program = push(3)
        .then(push(4))
        .then(pop())
        .bind(|top| {
            State::modify(move |mut stack: Vec<i32>| {
                stack.push(top.unwrap_or(0) * 10);
                stack
            })
        })
        .then(State::gets(|stack: &Vec<i32>| stack.len()));

    let StateResult { state, result } = program.run(Vec::new());
    assert_eq!(state, vec![3, 40]);
    assert_eq!(result, 2);
}

#[rstest]
fn product_runs_left_to_right() {
    let labels = fresh_label("a").product(fresh_label("b"));
    assert_eq!(labels.run(1), StateResult::new(3, ("a1".to_string(), "b2".to_string())));
}

#[rstest]
fn map2_combines_results() {
    let joined = fresh_label("v").map2(fresh_label("v"), |first, second| format!("{first}+{second}"));
    assert_eq!(joined.run_result(0), "v0+v1");
}

#[rstest]
fn ap_applies_function_before_argument() {
    let prefixed: State<u32, Box<dyn Fn(String) -> String + Send + Sync>> =
        fresh_label("p").map(|prefix| {
            Box::new(move |label: String| format!("{prefix}:{label}"))
                as Box<dyn Fn(String) -> String + Send + Sync>
        });
    let applied = prefixed.ap(fresh_label("q"));
    assert_eq!(applied.run(4), StateResult::new(6, "p4:q5".to_string()));
}

#[rstest]
#[case(0, 10)]
#[case(5, 15)]
fn map_output_sees_state_and_result(#[case] initial: u32, #[case] expected_state: u32) {
    let rewritten = fresh_label("n").map_output(|output| {
        StateResult::new(output.state + 9, output.result.len())
    });
    assert_eq!(rewritten.run(initial), StateResult::new(expected_state, 2));
}

#[rstest]
fn get_put_modify() {
    let program = State::<i32, i32>::get()
        .bind(|current| State::put(current * 2))
        .then(State::modify(|value: i32| value + 1))
        .then(State::get());
    assert_eq!(program.run(5), StateResult::new(11, 11));
}

#[rstest]
#[case(0)]
#[case(41)]
fn pure_leaves_state_alone(#[case] initial: i32) {
    let computation: State<i32, &'static str> = State::pure("done");
    assert_eq!(computation.run(initial), StateResult::new(initial, "done"));
}

#[rstest]
fn join_flattens_nested_computation() {
    let nested: State<u32, State<u32, String>> = fresh_label("outer").map(|_| fresh_label("inner"));
    assert_eq!(nested.join().run(0), StateResult::new(2, "inner1".to_string()));
}

#[rstest]
fn shared_across_threads() {
    let computation = fresh_label("t");
    let handles: Vec<_> = (0..4)
        .map(|start| {
            let computation = computation.clone();
            std::thread::spawn(move || computation.run_result(start))
        })
        .collect();
    let labels: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker thread panicked"))
        .collect();
    assert_eq!(labels, vec!["t0", "t1", "t2", "t3"]);
}
