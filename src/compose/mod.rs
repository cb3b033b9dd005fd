//! Function composition.
//!
//! This module builds callables out of other callables without writing
//! closures by hand. Every composite is itself [`Callable`](crate::Callable),
//! so composites nest, can be partially applied, piped, unpacked, and so on.
//!
//! # Overview
//!
//! - [`flow`] / [`flow!`](crate::flow!): left-to-right composition (data flow order)
//! - [`compose!`]: right-to-left composition (mathematical order)
//! - [`pipe!`]: apply a chain of callables to a value immediately
//! - [`combine`] / [`combine!`](crate::combine!): apply one projection per argument, then a
//!   combining function to the projected values
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: ignores its arguments and returns a fixed value
//! - [`flip`]: swaps the arguments of a binary callable
//!
//! # Examples
//!
//! ## Flow (left-to-right)
//!
//! ```
//! use fnfit::{flow, Callable};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // flow!(f, g)(x) = g(f(x))
//! let pipeline = flow!(double, add_one);
//! assert_eq!(pipeline.call((5,)), 11);
//! ```
//!
//! ## Composition (right-to-left)
//!
//! ```
//! use fnfit::{compose, Callable};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed.call((5,)), 11);
//! ```
//!
//! ## Pipeline
//!
//! ```
//! use fnfit::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```
//!
//! ## Combine
//!
//! ```
//! use fnfit::{combine, Callable};
//!
//! let area = combine!(|w: u32, h: u32| w * h, |w: &str| w.len() as u32, |h: u32| h + 1);
//! assert_eq!(area.call(("abcd", 2)), 12);
//! ```
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `flow(flow(f, g), h) == flow(f, flow(g, h))`
//! - **Left Identity**: `flow(identity, f) == f`
//! - **Right Identity**: `flow(f, identity) == f`
//! - **Direction**: `compose!(f, g) == flow!(g, f)`
//!
//! ## Combine Laws
//!
//! - **Zip**: `combine(f, (g1, ..., gn))(x1, ..., xn) == f(g1(x1), ..., gn(xn))`
//! - **Order**: the projections run left to right
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

mod combine;
mod flow;
mod pipe_macro;
mod utils;

pub use combine::{Combine, ZipCall, combine};
pub use flow::{Flow, flow};
pub use utils::{Always, Flip, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export]).
// `flow!` and `combine!` share their names with functions of this module and
// are reached through the crate root.
pub use crate::compose;
pub use crate::pipe;
