//! Sequence unpacking.
//!
//! [`unpack(f)`](unpack) turns `f` into a callable that takes *sequences*
//! instead of individual arguments and calls `f` with the elements of all
//! of them, concatenated left to right:
//!
//! ```text
//! unpack(f)((s1, s2)) == f(s1[0], s1[1], ..., s2[0], s2[1], ...)
//! ```
//!
//! Which types count as sequences is open: a type is unpackable exactly when
//! it implements [`Unpack`]. Tuples and arrays of up to twelve elements are
//! unpackable out of the box, and any other type can be registered by
//! implementing the trait.
//!
//! # Examples
//!
//! ```rust
//! use fnfit::{unpack, Callable};
//!
//! let sum = |a: i32, b: i32, c: i32| a + b + c;
//!
//! assert_eq!(unpack(sum).call(((1, 2, 3),)), 6);
//! assert_eq!(unpack(sum).call(((1,), [2, 3])), 6);
//! assert_eq!(unpack(sum).call(((), (1, 2), (), [3])), 6);
//! ```
//!
//! Registering a new sequence type:
//!
//! ```rust
//! use fnfit::{list, unpack, Callable, Unpack};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Unpack for Point {
//!     type Elements = (i32, (i32, ()));
//!
//!     fn unpack(self) -> Self::Elements {
//!         list![self.x, self.y]
//!     }
//! }
//!
//! let manhattan = |x: i32, y: i32| x.abs() + y.abs();
//! assert_eq!(unpack(manhattan).call((Point { x: -3, y: 4 },)), 7);
//! ```
//!
//! Passing a value that is not a sequence does not build:
//!
//! ```compile_fail
//! use fnfit::{unpack, Callable};
//!
//! let negate = |value: i32| -value;
//! let _ = unpack(negate).call((5,));
//! ```
//!
//! # Laws
//!
//! - **Concatenation**: `unpack(f)((s1, s2)) == f(s1..., s2...)`
//! - **Empty sequences** contribute no arguments
//! - **Single sequence**: `unpack(f)((t,)) == apply(f, t)` for a tuple `t`

use crate::callable::{Callable, ResultOf};
use crate::pack::{Append, Joined, List, Tuple, TupleOf, list_type, list_value};

/// A sequence whose elements can be spread into an argument list.
///
/// Implementing this trait is how a type is registered as unpackable. The
/// implementation returns the elements as an inductive list, first element
/// first.
pub trait Unpack {
    /// The elements, as an inductive list.
    type Elements: List;

    /// Splits the sequence into its elements.
    fn unpack(self) -> Self::Elements;
}

macro_rules! impl_unpack_tuple {
    ($($element:ident),*) => {
        impl<$($element),*> Unpack for ($($element,)*) {
            type Elements = list_type!($($element),*);

            #[inline]
            fn unpack(self) -> Self::Elements {
                self.into_list()
            }
        }
    };
}

macro_rules! element_type {
    ($element:ident, $ty:ty) => {
        $ty
    };
}

macro_rules! impl_unpack_array {
    ($length:literal; $($element:ident),*) => {
        impl<T> Unpack for [T; $length] {
            type Elements = list_type!($(element_type!($element, T)),*);

            #[inline]
            fn unpack(self) -> Self::Elements {
                let [$($element),*] = self;
                list_value!($($element),*)
            }
        }
    };
}

impl_unpack_tuple!();
impl_unpack_tuple!(A);
impl_unpack_tuple!(A, B);
impl_unpack_tuple!(A, B, C);
impl_unpack_tuple!(A, B, C, D);
impl_unpack_tuple!(A, B, C, D, E);
impl_unpack_tuple!(A, B, C, D, E, F);
impl_unpack_tuple!(A, B, C, D, E, F, G);
impl_unpack_tuple!(A, B, C, D, E, F, G, H);
impl_unpack_tuple!(A, B, C, D, E, F, G, H, I);
impl_unpack_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_unpack_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_unpack_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

impl_unpack_array!(0;);
impl_unpack_array!(1; a);
impl_unpack_array!(2; a, b);
impl_unpack_array!(3; a, b, c);
impl_unpack_array!(4; a, b, c, d);
impl_unpack_array!(5; a, b, c, d, e);
impl_unpack_array!(6; a, b, c, d, e, f);
impl_unpack_array!(7; a, b, c, d, e, f, g);
impl_unpack_array!(8; a, b, c, d, e, f, g, h);
impl_unpack_array!(9; a, b, c, d, e, f, g, h, i);
impl_unpack_array!(10; a, b, c, d, e, f, g, h, i, j);
impl_unpack_array!(11; a, b, c, d, e, f, g, h, i, j, k);
impl_unpack_array!(12; a, b, c, d, e, f, g, h, i, j, k, l);

/// Unpacks every sequence of a list and concatenates the elements.
pub trait Flatten {
    /// The concatenated elements.
    type Output;

    /// Unpacks the sequences left to right.
    fn flatten(self) -> Self::Output;
}

impl Flatten for () {
    type Output = ();

    #[inline]
    fn flatten(self) {}
}

impl<Head, Tail> Flatten for (Head, Tail)
where
    Head: Unpack,
    Tail: Flatten,
    Head::Elements: Append<Tail::Output>,
{
    type Output = Joined<Head::Elements, Tail::Output>;

    #[inline]
    fn flatten(self) -> Self::Output {
        let head = self.0.unpack();
        head.append(self.1.flatten())
    }
}

/// A callable that receives its arguments as sequences.
///
/// See [`unpack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unpacked<F> {
    function: F,
}

/// Makes `function` take sequences whose elements become its arguments.
pub const fn unpack<F>(function: F) -> Unpacked<F> {
    Unpacked { function }
}

type FlattenedArguments<Sequences> = TupleOf<<<Sequences as Tuple>::List as Flatten>::Output>;

impl<F, Sequences> Callable<Sequences> for Unpacked<F>
where
    Sequences: Tuple,
    Sequences::List: Flatten,
    <Sequences::List as Flatten>::Output: List,
    F: Callable<FlattenedArguments<Sequences>>,
{
    type Output = ResultOf<F, FlattenedArguments<Sequences>>;

    #[inline]
    fn call(&self, sequences: Sequences) -> Self::Output {
        let elements = sequences.into_list().flatten();
        self.function.call(elements.into_tuple())
    }
}
