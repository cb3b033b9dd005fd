//! Tests for partial application.
//!
//! `partial(f)` accumulates arguments across calls until the signature of
//! `f` is complete, then calls `f`.

#![cfg(feature = "partial")]

use fnfit::{Callable, ParamLimit, partial};
use rstest::rstest;
use std::cell::Cell;

fn volume(width: u32, height: u32, depth: u32) -> u32 {
    width * height * depth
}

fn label(prefix: &str, value: i32, suffix: char) -> String {
    format!("{prefix}{value}{suffix}")
}

// =============================================================================
// Accumulation
// =============================================================================

#[rstest]
#[case::all_at_once(partial(volume).call((2, 3, 4)))]
#[case::one_then_two(partial(volume).call((2,)).call((3, 4)))]
#[case::two_then_one(partial(volume).call((2, 3)).call((4,)))]
#[case::one_at_a_time(partial(volume).call((2,)).call((3,)).call((4,)))]
fn test_every_split_gives_the_same_result(#[case] result: u32) {
    assert_eq!(result, volume(2, 3, 4));
}

#[test]
fn test_empty_call_returns_equivalent_accumulator() {
    let unchanged = partial(volume).call(());

    assert_eq!(unchanged.call((1, 2, 3)), 6);
    assert_eq!(unchanged.call(()).call((1,)).call((2, 3)), 6);
}

#[test]
fn test_accumulator_is_reusable() {
    let prefixed = partial(label).call(("#",));

    assert_eq!(prefixed.call((1, '!')), "#1!");
    assert_eq!(prefixed.call((2, '?')), "#2?");

    let numbered = prefixed.call((7,));
    assert_eq!(numbered.call(('.',)), "#7.");
    assert_eq!(numbered.call((',',)), "#7,");
}

#[test]
fn test_captured_owned_arguments_are_cloned_per_call() {
    let greet = |greeting: String, name: &str| format!("{greeting}, {name}");
    let hello = partial(greet).call((String::from("hello"),));

    assert_eq!(hello.call(("alice",)), "hello, alice");
    assert_eq!(hello.call(("bob",)), "hello, bob");
}

#[test]
fn test_call_once_moves_captured_arguments() {
    let join = |left: Vec<u8>, right: Vec<u8>| [left, right].concat();
    let started = partial(join).call((vec![1, 2],));

    assert_eq!(started.call_once((vec![3],)), vec![1, 2, 3]);
}

#[test]
fn test_function_runs_only_when_saturated() {
    let calls = Cell::new(0);
    let counted = |first: i32, second: i32| {
        calls.set(calls.get() + 1);
        first + second
    };

    let waiting = partial(&counted).call((1,));
    assert_eq!(calls.get(), 0);

    assert_eq!(waiting.call((2,)), 3);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_captured_arguments_are_observable() {
    let waiting = partial(volume).call((2, 3));

    assert_eq!(waiting.captured(), (2, 3));
}

#[test]
fn test_nullary_function() {
    let answer = partial(|| 42);

    assert_eq!(answer.call(()), 42);
}

// =============================================================================
// Parameter limits
// =============================================================================

#[test]
fn test_param_limit_counts_missing_arguments() {
    fn limit_of<T: ParamLimit>(_: &T) -> usize {
        T::PARAM_LIMIT
    }

    let fresh = partial(volume);
    let one_left = partial(volume).call((1, 2));

    assert_eq!(limit_of(&fresh), 3);
    assert_eq!(limit_of(&one_left), 1);
}
