//! Recursion and repetition.
//!
//! - [`fix`]: the fixed-point combinator, for anonymous recursive functions
//! - [`bounded_fix`]: a fixed point that reports an error instead of
//!   recursing past a depth limit
//! - [`static_fix`]: a fixed point over a [`Recursive`] body, without
//!   dynamic dispatch
//! - [`repeat`]: apply a function a fixed number of times
//! - [`repeat_while`]: apply a function while a predicate holds, with an
//!   explicit iteration limit
//!
//! # Examples
//!
//! ```rust
//! use fnfit::{fix, repeat, Callable};
//!
//! let fibonacci = fix(|recurse: &dyn Fn(u32) -> u64, n: u32| {
//!     if n < 2 { u64::from(n) } else { recurse(n - 1) + recurse(n - 2) }
//! });
//! assert_eq!(fibonacci.call((10,)), 55);
//!
//! let halve = |value: u32| value / 2;
//! assert_eq!(repeat(3).call((halve,)).call((80,)), 10);
//! ```
//!
//! # Laws
//!
//! - **Fix unfolding**: `fix(f)(xs...) == f(fix(f), xs...)`
//! - **Repeat zero**: `repeat(0)(f)(x) == x`
//! - **Repeat successor**: `repeat(n)(f)(x) == f(repeat(n - 1)(f)(x))`
//! - **Repeat-while**: `repeat_while(p)(f)(x) == x` when `!p(&x)`, and
//!   `repeat_while(p)(f)(f(x))` otherwise

mod fix;
mod repeat;

pub use fix::{BoundedFix, Fix, FixBody, Recursive, StaticFix, bounded_fix, fix, static_fix};
pub use repeat::{
    DEFAULT_ITERATION_LIMIT, Repeat, RepeatDecorator, RepeatWhile, RepeatWhileDecorator, repeat,
    repeat_while,
};
