//! Tests for sequence unpacking.
//!
//! `unpack(f)` calls `f` with the concatenated elements of its sequence
//! arguments. Tuples and arrays are sequences out of the box; other types
//! are registered by implementing `Unpack`.

#![cfg(feature = "unpack")]

use fnfit::{Callable, Unpack, list, unpack};
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any};

fn sum3(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

// =============================================================================
// Built-in sequences
// =============================================================================

#[rstest]
#[case::one_tuple(unpack(sum3).call(((1, 2, 3),)))]
#[case::split_tuples(unpack(sum3).call(((1,), (2, 3))))]
#[case::tuple_and_array(unpack(sum3).call(((1,), [2, 3])))]
#[case::arrays(unpack(sum3).call(([1], [2], [3])))]
#[case::with_empties(unpack(sum3).call(((), (1, 2), (), [3])))]
fn test_every_partition_gives_the_same_call(#[case] result: i32) {
    assert_eq!(result, 6);
}

#[test]
fn test_heterogeneous_elements_keep_their_types() {
    let render = |name: &str, count: usize, ratio: f32| format!("{name}:{count}:{ratio}");

    assert_eq!(unpack(render).call((("items", 3_usize), (0.5_f32,))), "items:3:0.5");
}

#[test]
fn test_owned_elements_are_moved() {
    let join = |left: String, right: String| left + &right;

    assert_eq!(
        unpack(join).call(([String::from("ab"), String::from("cd")],)),
        "abcd"
    );
}

#[test]
fn test_nullary_function_with_only_empty_sequences() {
    let answer = || "no arguments";

    assert_eq!(unpack(answer).call(()), "no arguments");
    assert_eq!(unpack(answer).call(((), ())), "no arguments");
}

#[test]
fn test_twelve_element_array() {
    let sum12 = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8, i: u8, j: u8, k: u8, l: u8| {
        [a, b, c, d, e, f, g, h, i, j, k, l].iter().map(|&x| u32::from(x)).sum::<u32>()
    };

    assert_eq!(unpack(sum12).call(([1_u8; 12],)), 12);
}

// =============================================================================
// User-registered sequences
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Unpack for Rgb {
    type Elements = (u8, (u8, (u8, ())));

    fn unpack(self) -> Self::Elements {
        list![self.red, self.green, self.blue]
    }
}

#[test]
fn test_registered_type_is_unpacked() {
    let hex = |red: u8, green: u8, blue: u8| format!("#{red:02x}{green:02x}{blue:02x}");
    let color = Rgb {
        red: 255,
        green: 128,
        blue: 0,
    };

    assert_eq!(unpack(hex).call((color,)), "#ff8000");
}

#[test]
fn test_registered_type_mixes_with_builtins() {
    let with_alpha = |red: u8, green: u8, blue: u8, alpha: f32| {
        format!("rgba({red}, {green}, {blue}, {alpha})")
    };
    let color = Rgb {
        red: 1,
        green: 2,
        blue: 3,
    };

    assert_eq!(unpack(with_alpha).call((color, (0.5_f32,))), "rgba(1, 2, 3, 0.5)");
}

// =============================================================================
// Registration
// =============================================================================

assert_impl_all!(Rgb: Unpack);
assert_impl_all!((u8, u16, u32): Unpack);
assert_impl_all!([String; 3]: Unpack);
assert_not_impl_any!(u8: Unpack);
assert_not_impl_any!(&'static str: Unpack);
