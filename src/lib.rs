//! # fnfit
//!
//! Function adaptor combinators for Rust.
//!
//! ## Overview
//!
//! This library builds new callables out of existing ones. Every adaptor
//! decides what a call means from the types involved, so arity mismatches,
//! ambiguous overloads and over-supplied arguments are rejected when the
//! program is built rather than when it runs. It includes:
//!
//! - **Capability predicate**: [`Callable`], implemented by every `Fn` and by
//!   every adaptor, plus [`apply`]
//! - **Partial application**: [`partial`], an argument accumulator, and the
//!   [`pipable`] and [`infix`] call-syntax sugar
//! - **Unpacking**: [`unpack`], which spreads sequences into argument lists
//!   through the open [`Unpack`] protocol
//! - **Composition**: [`flow`], [`compose!`], [`pipe!`] and [`combine`]
//! - **Recursion**: the fixed-point combinator [`fix`], [`repeat`] and
//!   [`repeat_while`]
//! - **Auxiliary adaptors**: [`match_!`], [`decorate`], [`limit`], [`if_`],
//!   [`tap`], [`indirect`], [`protect`]/[`apply_eval`] and
//!   [`reverse_compress`]
//!
//! ## Feature Flags
//!
//! - `compose`: composition adaptors and macros
//! - `partial`: partial application, pipes and infix operators
//! - `unpack`: sequence unpacking
//! - `recursion`: fixed points and repetition
//! - `adaptor`: auxiliary adaptors
//! - `derive`: the [`lift`] attribute
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnfit::prelude::*;
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! let add_one = partial(add).call((1,));
//! let twice = repeat(2).call((add_one,));
//! let describe = flow(twice, |value: i32| format!("got {value}"));
//!
//! assert_eq!(describe.call((40,)), "got 42");
//! assert_eq!(unpack(add).call(([20, 22],)), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

extern crate self as fnfit;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fnfit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::*;
    pub use crate::error::*;
    pub use crate::pack::{Append, List, Tuple};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "partial")]
    pub use crate::partial::*;

    #[cfg(feature = "unpack")]
    pub use crate::unpack::*;

    #[cfg(feature = "recursion")]
    pub use crate::recursion::*;

    #[cfg(feature = "adaptor")]
    pub use crate::adaptor::*;

    #[cfg(feature = "derive")]
    pub use fnfit_derive::lift;
}

pub mod callable;
pub mod error;
pub mod pack;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "partial")]
pub mod partial;

#[cfg(feature = "unpack")]
pub mod unpack;

#[cfg(feature = "recursion")]
pub mod recursion;

#[cfg(feature = "adaptor")]
pub mod adaptor;

pub use callable::{Callable, ParamLimit, ResultOf, apply};
pub use error::{AdaptorError, IterationLimitExceeded, RecursionLimitExceeded};

#[cfg(feature = "compose")]
pub use compose::{combine, constant, flip, flow, identity};

#[cfg(feature = "partial")]
pub use partial::{Operand, Pipe, infix, partial, pipable};

#[cfg(feature = "unpack")]
pub use unpack::{Unpack, unpack};

#[cfg(feature = "recursion")]
pub use recursion::{DEFAULT_ITERATION_LIMIT, bounded_fix, fix, repeat, repeat_while, static_fix};

#[cfg(feature = "adaptor")]
pub use adaptor::{
    apply_eval, compress, compress_with, decorate, if_, indirect, limit, overload, protect,
    reverse_compress, reverse_compress_with, tap,
};

/// Declares a unit struct that calls a (possibly generic) function.
///
/// Generic functions cannot be passed around as values without fixing their
/// type parameters. `#[lift]` keeps the function and adds a struct of the
/// same name in `PascalCase` implementing [`Callable`] for every
/// instantiation the function supports, so one value can be called at many
/// types. The struct name can be given explicitly: `#[lift(Name)]`.
///
/// # Examples
///
/// ```rust
/// use fnfit::{lift, Callable};
///
/// #[lift]
/// fn describe<T: std::fmt::Debug>(value: T) -> String {
///     format!("<{value:?}>")
/// }
///
/// assert_eq!(Describe.call((1,)), "<1>");
/// assert_eq!(Describe.call(("one",)), "<\"one\">");
/// assert_eq!(describe(true), "<true>");
/// ```
#[cfg(feature = "derive")]
pub use fnfit_derive::lift;
