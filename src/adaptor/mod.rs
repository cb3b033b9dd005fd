//! Auxiliary adaptors.
//!
//! - [`match_!`](crate::match_) / [`overload`]: pick a callable by argument type
//! - [`decorate`]: build decorators that receive the decorated call
//! - [`limit`]: attach an upper bound on the number of arguments
//! - [`if_`]: enable or disable a callable with a constant
//! - [`tap`]: run a side effect on a value and pass it on
//! - [`indirect`]: call through a pointer
//! - [`protect`] / [`apply_eval`]: force thunk arguments in order, except
//!   protected ones
//! - [`reverse_compress`] / [`compress`]: fold the argument list with a
//!   binary callable
//!
//! # Laws
//!
//! - **Decorate**: `decorate(f)(x)(g)(xs...) == f(x, g, xs...)`
//! - **Indirect**: `indirect(p)(xs...) == (*p)(xs...)`
//! - **Tap**: `tap(f)(x) == x`
//! - **Reverse compress**: `reverse_compress_with(f, z)(x, xs...) ==
//!   f(reverse_compress_with(f, z)(xs...), x)`
//! - **Compress**: `compress_with(f, z)(x, xs...) ==
//!   compress_with(f, f(z, x))(xs...)`

mod compress;
mod decorate;
mod eval;
mod indirect;
mod limit;
mod matching;
mod tap;

pub use compress::{
    Compress, CompressWith, FoldLeft, FoldRight, Reduce, ReduceLeft, ReverseCompress,
    ReverseCompressWith, compress, compress_with, reverse_compress, reverse_compress_with,
};
pub use decorate::{Decorate, Decorated, Decorator, decorate};
pub use eval::{Evaluate, EvaluateAll, Protect, apply_eval, protect};
pub use indirect::{Indirect, indirect};
pub use limit::{If, Limit, if_, limit};
pub use matching::{Here, Match, Select, There, overload};
pub use tap::{Tap, tap};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::match_;
