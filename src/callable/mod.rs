//! The capability predicate.
//!
//! [`Callable<Args>`] answers the question every adaptor in this crate asks
//! before it commits to a call: "can this value be invoked with these
//! argument types, and what does it return?". The bound `F: Callable<Args>`
//! is the predicate and [`Callable::Output`] is the result type.
//!
//! Every `Fn(A1, ..., An) -> R` with up to twelve parameters is callable
//! with the tuple `(A1, ..., An)`, including `dyn Fn` trait objects. Every
//! adaptor in this crate is itself callable, so adaptors nest freely.
//!
//! # Examples
//!
//! ```rust
//! use fnfit::{apply, Callable, ResultOf};
//!
//! fn sum(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! assert_eq!(apply(&sum, (1, 2)), 3);
//! assert_eq!(fnfit::apply!(sum, 1, 2), 3);
//!
//! fn result_is_i32<F: Callable<(i32, i32), Output = i32>>(_: &F) {}
//! result_is_i32(&sum);
//!
//! let _: ResultOf<fn(u8) -> bool, (u8,)> = true;
//! ```
//!
//! # Laws
//!
//! - **Application**: `apply(&f, (xs...)) == f(xs...)`

mod capability;

pub use capability::{Arity, Outcome, OutcomeOf, ParamLimit, Pending, Ready, Saturate, is_saturated};

/// A value that can be invoked with the argument tuple `Args`.
///
/// The call borrows the callable, so a single instance can be invoked any
/// number of times and shared between threads when it is `Sync`.
pub trait Callable<Args> {
    /// The result of the call.
    type Output;

    /// Invokes the callable with a flat tuple of arguments.
    fn call(&self, arguments: Args) -> Self::Output;
}

/// The result type of calling `F` with `Args`.
pub type ResultOf<F, Args> = <F as Callable<Args>>::Output;

/// Calls `function` with the given argument tuple.
///
/// # Examples
///
/// ```rust
/// use fnfit::apply;
///
/// let greeting = |name: &str| format!("hello, {name}");
/// assert_eq!(apply(&greeting, ("world",)), "hello, world");
/// assert_eq!(apply(&|| 7, ()), 7);
/// ```
#[inline]
pub fn apply<F, Args>(function: &F, arguments: Args) -> F::Output
where
    F: Callable<Args> + ?Sized,
{
    function.call(arguments)
}

/// Calls a callable with a list of arguments instead of a tuple.
///
/// `apply!(f, a, b)` is `apply(&f, (a, b))`.
#[macro_export]
macro_rules! apply {
    ($function:expr $(, $argument:expr)* $(,)?) => {
        $crate::apply(&$function, ($($argument,)*))
    };
}

macro_rules! impl_callable_for_fn {
    ($($argument:ident),*) => {
        paste::paste! {
            impl<Function, Return, $($argument),*> Callable<($($argument,)*)> for Function
            where
                Function: ?Sized + Fn($($argument),*) -> Return,
            {
                type Output = Return;

                #[inline]
                fn call(&self, arguments: ($($argument,)*)) -> Return {
                    let ($([<$argument:lower>],)*) = arguments;
                    self($([<$argument:lower>]),*)
                }
            }
        }
    };
}

impl_callable_for_fn!();
impl_callable_for_fn!(A);
impl_callable_for_fn!(A, B);
impl_callable_for_fn!(A, B, C);
impl_callable_for_fn!(A, B, C, D);
impl_callable_for_fn!(A, B, C, D, E);
impl_callable_for_fn!(A, B, C, D, E, F);
impl_callable_for_fn!(A, B, C, D, E, F, G);
impl_callable_for_fn!(A, B, C, D, E, F, G, H);
impl_callable_for_fn!(A, B, C, D, E, F, G, H, I);
impl_callable_for_fn!(A, B, C, D, E, F, G, H, I, J);
impl_callable_for_fn!(A, B, C, D, E, F, G, H, I, J, K);
impl_callable_for_fn!(A, B, C, D, E, F, G, H, I, J, K, L);
