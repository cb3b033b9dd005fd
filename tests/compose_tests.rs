//! Unit tests for composition utilities.
//!
//! Tests for identity, constant, flip, flow, the compose!/flow! macros and
//! combine.

#![cfg(feature = "compose")]

use fnfit::compose::{Always, Flow};
use fnfit::{Callable, combine, compose, constant, flip, flow, identity};
use std::cell::RefCell;

// =============================================================================
// identity / constant / flip
// =============================================================================

#[test]
fn test_identity_returns_same_value() {
    assert_eq!(identity(42), 42);
    assert_eq!(identity(String::from("world")), "world");
    assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
}

#[test]
fn test_identity_is_callable() {
    let same = identity::<&str>;

    assert_eq!(Callable::call(&same, ("through",)), "through");
}

#[test]
fn test_constant_ignores_any_arguments() {
    let always_seven: Always<i32> = constant(7);

    assert_eq!(always_seven.call(()), 7);
    assert_eq!(always_seven.call((1,)), 7);
    assert_eq!(always_seven.call(("a", 2.5, 'c')), 7);
}

#[test]
fn test_flip_swaps_two_arguments() {
    let divide = |numerator: f64, denominator: f64| numerator / denominator;
    let flipped = flip(divide);

    assert!((flipped.call((2.0, 10.0)) - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_double_flip_restores_the_function() {
    let subtract = |left: i32, right: i32| left - right;
    let restored = flip(flip(subtract));

    assert_eq!(restored.call((10, 3)), 7);
    assert_eq!(Callable::call(&flip(subtract).into_inner(), (10, 3)), 7);
}

// =============================================================================
// flow / compose
// =============================================================================

#[test]
fn test_flow_runs_first_then_second() {
    let add_one = |value: i32| value + 1;
    let double = |value: i32| value * 2;

    assert_eq!(flow(add_one, double).call((5,)), 12);
    assert_eq!(flow(double, add_one).call((5,)), 11);
}

#[test]
fn test_flow_first_stage_takes_all_arguments() {
    let area = |width: u32, height: u32| width * height;
    let describe = |size: u32| format!("{size} m2");

    assert_eq!(flow(area, describe).call((3, 4)), "12 m2");
}

#[test]
fn test_flow_macro_with_many_stages() {
    let parse = |text: &str| text.len();
    let double = |value: usize| value * 2;
    let describe = |value: usize| format!("<{value}>");

    let pipeline = fnfit::flow!(parse, double, describe);
    assert_eq!(pipeline.call(("abc",)), "<6>");
}

#[test]
fn test_compose_is_reversed_flow() {
    let add_one = |value: i32| value + 1;
    let double = |value: i32| value * 2;
    let square = |value: i32| value * value;

    let composed = compose!(add_one, double, square);
    let flowed = fnfit::flow!(square, double, add_one);

    for value in -5..5 {
        assert_eq!(composed.call((value,)), flowed.call((value,)));
    }
}

#[test]
fn test_flow_into_parts() {
    let stages = Flow::new(|x: i32| x + 1, |x: i32| x * 3);
    let (first, second) = stages.into_parts();

    assert_eq!(second(first(1)), 6);
}

#[test]
fn test_flow_of_adaptors() {
    let to_pair = |value: i32| (value, 1);
    let difference = |(left, right): (i32, i32)| left - right;

    assert_eq!(flow(to_pair, difference).call((4,)), 3);
    assert_eq!(flow(|x: i32| x * 2, constant("done")).call((1,)), "done");
    assert_eq!(flow(flip(|a: i32, b: i32| a - b), identity::<i32>).call((1, 10)), 9);
}

// =============================================================================
// combine
// =============================================================================

#[test]
fn test_combine_projects_each_argument() {
    let pair = |left: String, right: i32| format!("{left}={right}");
    let labelled = combine(pair, (|key: &str| key.to_uppercase(), |value: i32| value * 10));

    assert_eq!(labelled.call(("x", 4)), "X=40");
}

#[test]
fn test_combine_macro_and_identity_projections() {
    let sum = |a: i32, b: i32, c: i32| a + b + c;
    let same = |value: i32| value;
    let double = |value: i32| value * 2;

    let combined = fnfit::combine!(sum, same, double, same);
    assert_eq!(combined.call((1, 2, 3)), 8);
}

#[test]
fn test_combine_with_no_projections() {
    let answer = || 42;

    assert_eq!(combine(answer, ()).call(()), 42);
}

#[test]
fn test_combine_projects_left_to_right() {
    let log = RefCell::new(Vec::new());
    let record = |name: &'static str| {
        let log = &log;
        move |value: i32| {
            log.borrow_mut().push(name);
            value
        }
    };
    let sum = |a: i32, b: i32, c: i32| a + b + c;

    let combined = combine(sum, (record("first"), record("second"), record("third")));
    assert_eq!(combined.call((1, 2, 3)), 6);
    assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
}
