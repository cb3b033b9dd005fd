//! Procedural macros for fnfit.
//!
//! # Available Attribute Macros
//!
//! - [`macro@lift`]: Turns a (possibly generic) free function into a value
//!   that implements `fnfit::Callable`
//!
//! # Example
//!
//! ```rust,ignore
//! use fnfit::{lift, Callable};
//!
//! #[lift]
//! fn double<T: std::ops::Add<Output = T> + Copy>(value: T) -> T {
//!     value + value
//! }
//!
//! // Generated: `struct Double;` implementing `Callable<(T,)>` for every `T`
//! assert_eq!(Double.call((21,)), 42);
//! assert_eq!(Double.call((1.5,)), 3.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lift;

use proc_macro::TokenStream;

/// Declares a callable unit struct next to a free function.
///
/// The function is emitted unchanged. Next to it, the macro declares a unit
/// struct (named after the function in `PascalCase`, or as given in the
/// attribute) that implements `fnfit::Callable` with the function's
/// parameter types as the argument tuple and its return type as the output.
/// The function's generic parameters and `where` clause carry over to the
/// impl, so a generic function becomes a single polymorphic value.
///
/// # Syntax
///
/// ```rust,ignore
/// #[lift]            // struct name derived from the function name
/// #[lift(Name)]      // explicit struct name
/// ```
///
/// # Generated Code
///
/// For
///
/// ```rust,ignore
/// #[lift]
/// pub fn scale<T: Mul<Output = T>>(value: T, factor: T) -> T { value * factor }
/// ```
///
/// the macro generates:
///
/// ```rust,ignore
/// pub fn scale<T: Mul<Output = T>>(value: T, factor: T) -> T { value * factor }
///
/// #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// pub struct Scale;
///
/// impl<T: Mul<Output = T>> ::fnfit::Callable<(T, T,)> for Scale {
///     type Output = T;
///     fn call(&self, (__fnfit_argument_0, __fnfit_argument_1,): (T, T,)) -> T {
///         scale::<T>(__fnfit_argument_0, __fnfit_argument_1)
///     }
/// }
/// ```
///
/// # Restrictions
///
/// - Methods (functions with a `self` receiver) are rejected
/// - `async` and `unsafe` functions are rejected
/// - `impl Trait` in argument or return position is rejected; use a named
///   type parameter instead
/// - References in the return type need explicit lifetimes
/// - Every type parameter must appear in the parameter list
#[proc_macro_attribute]
pub fn lift(attribute: TokenStream, item: TokenStream) -> TokenStream {
    lift::lift_impl(attribute.into(), item.into()).into()
}
