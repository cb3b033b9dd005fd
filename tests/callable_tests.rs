//! Tests for the `Callable` capability and call-time argument packs.
//!
//! These tests cover:
//!
//! - Calling ordinary functions, closures and trait objects through `Callable`
//! - The `apply` function and `apply!` macro
//! - The type-level saturation predicate used by partial application
//! - Argument pack conversion between tuples and lists

use fnfit::callable::{OutcomeOf, Pending, Ready, is_saturated};
use fnfit::pack::{Append, List, ListOf, Tuple};
use fnfit::{Callable, ResultOf, apply, list};
use rstest::rstest;
use static_assertions::assert_type_eq_all;

fn subtract(minuend: i64, subtrahend: i64) -> i64 {
    minuend - subtrahend
}

// =============================================================================
// Calling through Callable
// =============================================================================

#[rstest]
#[case(10, 3, 7)]
#[case(0, 5, -5)]
#[case(-2, -2, 0)]
fn test_function_item_is_callable(#[case] minuend: i64, #[case] subtrahend: i64, #[case] expected: i64) {
    assert_eq!(Callable::call(&subtract, (minuend, subtrahend)), expected);
}

#[test]
fn test_closure_with_captured_state_is_callable() {
    let offset = 100;
    let shifted = |value: i32| value + offset;

    assert_eq!(Callable::call(&shifted, (1,)), 101);
}

#[test]
fn test_boxed_trait_object_is_callable() {
    let boxed: Box<dyn Fn(&str) -> usize> = Box::new(str::len);

    assert_eq!(Callable::call(&*boxed, ("four",)), 4);
}

#[test]
fn test_references_to_callables_are_callable() {
    let double = |value: u8| value * 2;
    let reference = &double;

    assert_eq!(Callable::call(&reference, (4,)), 8);
}

#[test]
fn test_apply_forwards_the_argument_pack() {
    assert_eq!(apply(&subtract, (9, 4)), 5);
    assert_eq!(fnfit::apply!(subtract, 9, 4), 5);
}

#[test]
fn test_result_of_names_the_output_type() {
    fn run<F: Callable<(i64, i64)>>(function: &F) -> ResultOf<F, (i64, i64)> {
        function.call((3, 1))
    }

    assert_eq!(run(&subtract), 2);
}

// =============================================================================
// Saturation predicate
// =============================================================================

#[test]
fn test_saturation_outcomes() {
    assert_type_eq_all!(OutcomeOf<ListOf<(u8, u16)>, ListOf<(u8, u16)>>, Ready);
    assert_type_eq_all!(
        OutcomeOf<ListOf<(u8, u16)>, ListOf<(u8,)>>,
        Pending<ListOf<(u16,)>>
    );
    assert_type_eq_all!(OutcomeOf<ListOf<(u8, u16)>, ()>, Pending<ListOf<(u8, u16)>>);
}

#[test]
fn test_is_saturated_in_const_context() {
    const COMPLETE: bool = is_saturated::<ListOf<(u8, u16)>, ListOf<(u8, u16)>>();
    const PREFIX: bool = is_saturated::<ListOf<(u8, u16)>, ListOf<(u8,)>>();

    assert!(COMPLETE);
    assert!(!PREFIX);
}

// =============================================================================
// Argument packs
// =============================================================================

#[test]
fn test_tuple_and_list_conversion() {
    let tuple = (1_u8, "two", 3.0_f32);
    let as_list = tuple.into_list();

    assert_eq!(as_list, list![1_u8, "two", 3.0_f32]);
    assert_eq!(as_list.into_tuple(), (1_u8, "two", 3.0_f32));
    assert_eq!(<(u8, u8, u8) as Tuple>::LEN, 3);
}

#[test]
fn test_append_joins_argument_lists() {
    let joined = list![1, 2].append(list![3]);

    assert_eq!(joined.into_tuple(), (1, 2, 3));
}
