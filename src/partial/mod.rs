//! Partial application and call-syntax sugar.
//!
//! - [`partial`]: an accumulator that collects arguments across calls until
//!   the wrapped callable can be invoked
//! - [`pipable`]: a callable that can also be the target of a pipe, taking
//!   the piped value as its first argument
//! - [`infix`]: a binary callable usable between its arguments
//!
//! All three decide what a call means from the types involved: whether the
//! supplied arguments complete the signature, leave a remainder, or can never
//! fit. The last case is rejected when the program is built.
//!
//! # Examples
//!
//! ```rust
//! use fnfit::{infix, partial, pipable, Callable, Operand, Pipe};
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! assert_eq!(partial(add).call((1,)).call((2,)), 3);
//! assert_eq!(1.pipe(&pipable(add).call((2,))), 3);
//! assert_eq!(Operand(1) << &infix(add) >> 2, 3);
//! ```
//!
//! # Laws
//!
//! - **Partial split**: `partial(f)(xs)(ys) == f(xs ++ ys)`
//! - **Pipe**: `x | pipable(f)(ys) == f(x, ys)`
//! - **Pipe transparency**: `pipable(f)(xs) == f(xs)` when `xs` is complete
//! - **Infix**: `x <op> y == f(x, y)`

mod accumulator;
mod infix;
mod pipable;

pub use accumulator::{Partial, Resolve, ResolveOnce, partial};
pub use infix::{Infix, InfixLeft, infix};
pub use pipable::{Operand, Pipable, Pipe, PipeClosure, PipeStep, pipable};
