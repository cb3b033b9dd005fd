use std::marker::PhantomData;

use log::debug;

use crate::callable::Callable;
use crate::error::RecursionLimitExceeded;

/// A function that receives a handle to itself as its first argument.
///
/// `Signature` is the `fn` pointer type of the recursive call, for example
/// `fn(u64) -> u64` for a body of type
/// `Fn(&dyn Fn(u64) -> u64, u64) -> u64`. Implemented for bodies with up to
/// six parameters besides the handle.
pub trait FixBody<Signature> {}

/// The fixed point of a function body.
///
/// See [`fix`].
pub struct Fix<F, Signature> {
    function: F,
    signature: PhantomData<Signature>,
}

/// Creates the fixed point of `function`.
///
/// `function` takes a handle to the recursive function followed by its own
/// arguments. Calling the result with `xs` evaluates `function(self, xs...)`,
/// where `self` is a borrowed handle to the very same fixed point: the body
/// is never copied during the recursion, so state it captures is shared by
/// every level.
///
/// Recursion happens on the call stack. Its depth is the caller's
/// responsibility; [`bounded_fix`] reports an error instead of recursing past
/// a limit.
///
/// The handle is a `&dyn Fn`, so each recursive step costs one indirect
/// call. Implement [`Recursive`] and use [`static_fix`] for a statically
/// dispatched recursion.
///
/// # Examples
///
/// ```rust
/// use fnfit::{fix, Callable};
///
/// let factorial = fix(|recurse: &dyn Fn(u64) -> u64, n: u64| {
///     if n == 0 { 1 } else { n * recurse(n - 1) }
/// });
///
/// assert_eq!(factorial.call((5,)), 120);
/// ```
///
/// # Laws
///
/// - **Unfolding**: `fix(f)(xs...) == f(fix(f), xs...)`
pub fn fix<F, Signature>(function: F) -> Fix<F, Signature>
where
    F: FixBody<Signature>,
{
    Fix {
        function,
        signature: PhantomData,
    }
}

impl<F: Clone, Signature> Clone for Fix<F, Signature> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            signature: PhantomData,
        }
    }
}

impl<F: std::fmt::Debug, Signature> std::fmt::Debug for Fix<F, Signature> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Fix").field("function", &self.function).finish()
    }
}

/// A recursive function body with a statically dispatched self handle.
///
/// The closure form accepted by [`fix`] receives its handle as
/// `&dyn Fn`, so every recursive step is an indirect call. A type that
/// implements `Recursive` receives the handle as a generic `Recurse` and
/// [`static_fix`] resolves every step at build time.
///
/// `Args` is the argument tuple of one recursive call; the handle takes the
/// same tuple.
pub trait Recursive<Args> {
    /// The result of a call.
    type Output;

    /// Evaluates one level, calling `recurse` for the levels below it.
    fn body<Recurse>(&self, recurse: &Recurse, arguments: Args) -> Self::Output
    where
        Recurse: Fn(Args) -> Self::Output;
}

/// The fixed point of a [`Recursive`] body.
///
/// See [`static_fix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticFix<B> {
    body: B,
}

/// Creates the fixed point of a [`Recursive`] body.
///
/// Behaves like [`fix`] but the handle passed to the body is a concrete
/// closure type, so the recursion involves no dynamic dispatch.
///
/// # Examples
///
/// ```rust
/// use fnfit::recursion::{static_fix, Recursive};
/// use fnfit::Callable;
///
/// struct Fibonacci;
///
/// impl Recursive<(u64,)> for Fibonacci {
///     type Output = u64;
///
///     fn body<Recurse>(&self, recurse: &Recurse, (n,): (u64,)) -> u64
///     where
///         Recurse: Fn((u64,)) -> u64,
///     {
///         if n < 2 { n } else { recurse((n - 1,)) + recurse((n - 2,)) }
///     }
/// }
///
/// assert_eq!(static_fix(Fibonacci).call((10,)), 55);
/// ```
pub const fn static_fix<B>(body: B) -> StaticFix<B> {
    StaticFix { body }
}

impl<B> StaticFix<B> {
    /// Returns the wrapped body.
    pub fn into_inner(self) -> B {
        self.body
    }
}

impl<B, Args> Callable<Args> for StaticFix<B>
where
    B: Recursive<Args>,
{
    type Output = B::Output;

    fn call(&self, arguments: Args) -> Self::Output {
        let recurse = |arguments: Args| <Self as Callable<Args>>::call(self, arguments);
        self.body.body(&recurse, arguments)
    }
}

/// The fixed point of a fallible function body with a recursion limit.
///
/// See [`bounded_fix`].
pub struct BoundedFix<F, Signature> {
    function: F,
    max_depth: usize,
    signature: PhantomData<Signature>,
}

/// Creates a fixed point that refuses to recurse deeper than `max_depth`.
///
/// The body returns `Result<R, E>` and the handle it receives does too. The
/// outermost call has depth zero and every call through the handle adds one.
/// A call through the handle that would exceed `max_depth` does not run the
/// body and fails with [`RecursionLimitExceeded`] converted into `E`.
///
/// # Examples
///
/// ```rust
/// use fnfit::{bounded_fix, Callable, RecursionLimitExceeded};
///
/// let countdown = bounded_fix(
///     3,
///     |recurse: &dyn Fn(u32) -> Result<u32, RecursionLimitExceeded>, n: u32| {
///         if n == 0 { Ok(0) } else { recurse(n - 1).map(|rest| rest + 1) }
///     },
/// );
///
/// assert_eq!(countdown.call((3,)), Ok(3));
/// assert_eq!(countdown.call((4,)), Err(RecursionLimitExceeded { max_depth: 3 }));
/// ```
pub fn bounded_fix<F, Signature>(max_depth: usize, function: F) -> BoundedFix<F, Signature>
where
    F: FixBody<Signature>,
{
    BoundedFix {
        function,
        max_depth,
        signature: PhantomData,
    }
}

impl<F, Signature> BoundedFix<F, Signature> {
    /// Returns the configured recursion limit.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<F: Clone, Signature> Clone for BoundedFix<F, Signature> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            max_depth: self.max_depth,
            signature: PhantomData,
        }
    }
}

impl<F: std::fmt::Debug, Signature> std::fmt::Debug for BoundedFix<F, Signature> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BoundedFix")
            .field("function", &self.function)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

trait Descend<Args> {
    type Output;

    fn descend(&self, depth: usize, arguments: Args) -> Self::Output;
}

macro_rules! impl_fix {
    ($($argument:ident),*) => {
        paste::paste! {
            impl<Function, Return, $($argument),*> FixBody<fn($($argument),*) -> Return> for Function
            where
                Function: Fn(&dyn Fn($($argument),*) -> Return, $($argument),*) -> Return,
            {
            }

            impl<Function, Return, $($argument),*> Callable<($($argument,)*)>
                for Fix<Function, fn($($argument),*) -> Return>
            where
                Function: Fn(&dyn Fn($($argument),*) -> Return, $($argument),*) -> Return,
            {
                type Output = Return;

                fn call(&self, ($([<$argument:lower>],)*): ($($argument,)*)) -> Return {
                    let recurse = |$([<$argument:lower>]: $argument),*| {
                        <Self as Callable<($($argument,)*)>>::call(self, ($([<$argument:lower>],)*))
                    };
                    (self.function)(&recurse, $([<$argument:lower>]),*)
                }
            }

            impl<Function, Value, Error, $($argument),*> Descend<($($argument,)*)>
                for BoundedFix<Function, fn($($argument),*) -> Result<Value, Error>>
            where
                Function: Fn(
                    &dyn Fn($($argument),*) -> Result<Value, Error>,
                    $($argument),*
                ) -> Result<Value, Error>,
                Error: From<RecursionLimitExceeded>,
            {
                type Output = Result<Value, Error>;

                fn descend(
                    &self,
                    depth: usize,
                    ($([<$argument:lower>],)*): ($($argument,)*),
                ) -> Result<Value, Error> {
                    if depth > self.max_depth {
                        debug!(
                            "bounded fixed point stopped at depth {depth} (limit {})",
                            self.max_depth
                        );
                        return Err(RecursionLimitExceeded {
                            max_depth: self.max_depth,
                        }
                        .into());
                    }
                    let recurse = |$([<$argument:lower>]: $argument),*| {
                        self.descend(depth + 1, ($([<$argument:lower>],)*))
                    };
                    (self.function)(&recurse, $([<$argument:lower>]),*)
                }
            }

            impl<Function, Value, Error, $($argument),*> Callable<($($argument,)*)>
                for BoundedFix<Function, fn($($argument),*) -> Result<Value, Error>>
            where
                Function: Fn(
                    &dyn Fn($($argument),*) -> Result<Value, Error>,
                    $($argument),*
                ) -> Result<Value, Error>,
                Error: From<RecursionLimitExceeded>,
            {
                type Output = Result<Value, Error>;

                #[inline]
                fn call(&self, arguments: ($($argument,)*)) -> Result<Value, Error> {
                    self.descend(0, arguments)
                }
            }
        }
    };
}

impl_fix!();
impl_fix!(A);
impl_fix!(A, B);
impl_fix!(A, B, C);
impl_fix!(A, B, C, D);
impl_fix!(A, B, C, D, E);
impl_fix!(A, B, C, D, E, F);

// The signature marker is always Send and Sync
static_assertions::assert_impl_all!(Fix<fn(&dyn Fn(u64) -> u64, u64) -> u64, fn(u64) -> u64>: Send, Sync, Clone);
