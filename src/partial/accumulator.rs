use std::marker::PhantomData;

use crate::callable::{Arity, Callable, OutcomeOf, ParamLimit, Pending, Ready, ResultOf, Saturate};
use crate::pack::{Append, Joined, List, Nat, Tuple, TupleOf};

/// An argument accumulator.
///
/// Holds a callable, the arguments captured so far (as an inductive list),
/// and the part of the signature that is still missing. See
/// [`partial`](crate::partial::partial).
pub struct Partial<F, Remaining, Captured = ()> {
    function: F,
    captured: Captured,
    remaining: PhantomData<fn() -> Remaining>,
}

impl<F, Remaining, Captured> Partial<F, Remaining, Captured> {
    pub(crate) const fn from_parts(function: F, captured: Captured) -> Self {
        Self {
            function,
            captured,
            remaining: PhantomData,
        }
    }

    /// Returns the wrapped callable.
    pub const fn function(&self) -> &F {
        &self.function
    }

    /// Returns the arguments captured so far, first argument first.
    pub fn captured(&self) -> TupleOf<Captured>
    where
        Captured: List + Clone,
    {
        self.captured.clone().into_tuple()
    }

    /// Supplies more arguments, consuming the accumulator.
    ///
    /// Behaves like [`Callable::call`] but moves the captured arguments into
    /// the call instead of cloning them, so it also works when they are not
    /// `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnfit::partial;
    ///
    /// let join = |left: String, right: String| left + &right;
    /// let greeting = partial(join).call_once((String::from("hello, "),));
    ///
    /// assert_eq!(greeting.call_once((String::from("world"),)), "hello, world");
    /// ```
    pub fn call_once<Args>(
        self,
        arguments: Args,
    ) -> <OutcomeOf<Remaining, Args::List> as ResolveOnce<F, Captured, Args::List>>::Output
    where
        Args: Tuple,
        Remaining: Saturate<Args::List>,
        OutcomeOf<Remaining, Args::List>: ResolveOnce<F, Captured, Args::List>,
    {
        <OutcomeOf<Remaining, Args::List> as ResolveOnce<F, Captured, Args::List>>::resolve_once(
            self.function,
            self.captured,
            arguments.into_list(),
        )
    }
}

impl<F, Remaining, Captured> Clone for Partial<F, Remaining, Captured>
where
    F: Clone,
    Captured: Clone,
{
    fn clone(&self) -> Self {
        Self::from_parts(self.function.clone(), self.captured.clone())
    }
}

impl<F, Remaining, Captured> std::fmt::Debug for Partial<F, Remaining, Captured>
where
    F: std::fmt::Debug,
    Captured: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("function", &self.function)
            .field("captured", &self.captured)
            .finish()
    }
}

/// Creates an argument accumulator for `function`.
///
/// The signature is inferred from the single `Callable` impl of `function`.
/// For callables with several signatures, name it with a turbofish:
/// `partial::<_, (i32, i32)>(function)`.
///
/// Calling the accumulator with `ys`:
///
/// - completes the call when the captured arguments followed by `ys` match
///   the signature, and returns the result;
/// - otherwise returns a new accumulator that has captured `ys` as well, when
///   they are a proper prefix of what is still missing;
/// - does not build in any other case.
///
/// Each accumulator can be called any number of times; captured arguments
/// are cloned into every call.
///
/// # Examples
///
/// ```rust
/// use fnfit::{partial, Callable};
///
/// let volume = |width: u32, height: u32, depth: u32| width * height * depth;
///
/// let flat = partial(volume).call((2,));
/// let square = flat.call((3,));
///
/// assert_eq!(square.call((4,)), 24);
/// assert_eq!(square.call((5,)), 30);
/// assert_eq!(flat.call((1, 1)), 2);
/// assert_eq!(partial(volume).call((1, 2, 3)), 6);
/// ```
///
/// Supplying too many arguments is rejected:
///
/// ```compile_fail
/// use fnfit::{partial, Callable};
///
/// let sum = |first: i32, second: i32| first + second;
/// let _ = partial(sum).call((1, 2, 3));
/// ```
///
/// # Laws
///
/// - **Split**: `partial(f).call(xs).call(ys) == f(xs ++ ys)` for every split
///   of the argument list, including empty `xs` or `ys`
pub fn partial<F, Args>(function: F) -> Partial<F, Args::List>
where
    F: Callable<Args>,
    Args: Tuple,
{
    Partial::from_parts(function, ())
}

/// Finishes or extends a [`Partial`] according to a call outcome.
pub trait Resolve<F, Captured, Supplied> {
    /// The call result, or the extended accumulator.
    type Output;

    /// Resolves by reference, cloning what has to be kept.
    fn resolve(function: &F, captured: &Captured, supplied: Supplied) -> Self::Output;
}

/// By-value counterpart of [`Resolve`].
pub trait ResolveOnce<F, Captured, Supplied> {
    /// The call result, or the extended accumulator.
    type Output;

    /// Resolves by moving the callable and its captured arguments.
    fn resolve_once(function: F, captured: Captured, supplied: Supplied) -> Self::Output;
}

impl<F, Captured, Supplied> Resolve<F, Captured, Supplied> for Ready
where
    Captured: Clone + Append<Supplied>,
    Joined<Captured, Supplied>: List,
    F: Callable<TupleOf<Joined<Captured, Supplied>>>,
{
    type Output = ResultOf<F, TupleOf<Joined<Captured, Supplied>>>;

    #[inline]
    fn resolve(function: &F, captured: &Captured, supplied: Supplied) -> Self::Output {
        function.call(captured.clone().append(supplied).into_tuple())
    }
}

impl<F, Captured, Supplied, Rest> Resolve<F, Captured, Supplied> for Pending<Rest>
where
    F: Clone,
    Captured: Clone + Append<Supplied>,
{
    type Output = Partial<F, Rest, Joined<Captured, Supplied>>;

    #[inline]
    fn resolve(function: &F, captured: &Captured, supplied: Supplied) -> Self::Output {
        Partial::from_parts(function.clone(), captured.clone().append(supplied))
    }
}

impl<F, Captured, Supplied> ResolveOnce<F, Captured, Supplied> for Ready
where
    Captured: Append<Supplied>,
    Joined<Captured, Supplied>: List,
    F: Callable<TupleOf<Joined<Captured, Supplied>>>,
{
    type Output = ResultOf<F, TupleOf<Joined<Captured, Supplied>>>;

    #[inline]
    fn resolve_once(function: F, captured: Captured, supplied: Supplied) -> Self::Output {
        function.call(captured.append(supplied).into_tuple())
    }
}

impl<F, Captured, Supplied, Rest> ResolveOnce<F, Captured, Supplied> for Pending<Rest>
where
    Captured: Append<Supplied>,
{
    type Output = Partial<F, Rest, Joined<Captured, Supplied>>;

    #[inline]
    fn resolve_once(function: F, captured: Captured, supplied: Supplied) -> Self::Output {
        Partial::from_parts(function, captured.append(supplied))
    }
}

impl<F, Remaining, Captured, Args> Callable<Args> for Partial<F, Remaining, Captured>
where
    Args: Tuple,
    Remaining: Saturate<Args::List>,
    OutcomeOf<Remaining, Args::List>: Resolve<F, Captured, Args::List>,
{
    type Output = <OutcomeOf<Remaining, Args::List> as Resolve<F, Captured, Args::List>>::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        <OutcomeOf<Remaining, Args::List> as Resolve<F, Captured, Args::List>>::resolve(
            &self.function,
            &self.captured,
            arguments.into_list(),
        )
    }
}

/// The number of arguments the accumulator still needs.
impl<F, Remaining, Captured> ParamLimit for Partial<F, Remaining, Captured>
where
    Remaining: List,
{
    const PARAM_LIMIT: usize = Remaining::LEN;
}

/// The number of arguments a count-limited accumulator still accepts.
impl<F, N, Captured> ParamLimit for Partial<F, Arity<N>, Captured>
where
    N: Nat,
{
    const PARAM_LIMIT: usize = N::VALUE;
}

// Thread-safety follows the captured arguments
static_assertions::assert_impl_all!(Partial<fn(u8, u8) -> u8, (u8, ()), (u8, ())>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Partial<fn(u8, u8) -> u8, (u8, ()), (std::rc::Rc<u8>, ())>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    #[test]
    fn full_call_invokes_immediately() {
        assert_eq!(partial(subtract).call((10, 3)), 7);
    }

    #[test]
    fn captured_arguments_keep_call_order() {
        let from_ten = partial(subtract).call((10,));
        assert_eq!(from_ten.call((3,)), 7);
        assert_eq!(from_ten.captured(), (10,));
    }

    #[test]
    fn empty_call_returns_equivalent_accumulator() {
        let accumulator = partial(subtract).call(());
        assert_eq!(accumulator.call((5, 2)), 3);
    }

    #[test]
    fn param_limit_counts_missing_arguments() {
        let accumulator = partial(subtract);
        assert_eq!(param_limit_of(&accumulator), 2);
        assert_eq!(param_limit_of(&accumulator.call((1,))), 1);
    }

    #[test]
    fn zero_argument_signature_calls_with_empty_tuple() {
        let answer = || 42;
        assert_eq!(partial(answer).call(()), 42);
    }

    #[test]
    fn call_once_moves_non_clone_arguments() {
        struct Token(u8);
        let read = |token: Token, offset: u8| token.0 + offset;
        let pending = partial(read).call_once((Token(40),));
        assert_eq!(pending.call_once((2,)), 42);
    }

    #[test]
    fn debug_lists_captured_arguments() {
        #[derive(Debug, Clone, Copy)]
        struct Pair;
        impl Callable<(i32, i32)> for Pair {
            type Output = i32;
            fn call(&self, (first, second): (i32, i32)) -> i32 {
                first + second
            }
        }

        let accumulator = partial(Pair).call((1,));
        assert_eq!(
            format!("{accumulator:?}"),
            "Partial { function: Pair, captured: (1, ()) }"
        );
    }

    fn param_limit_of<P: ParamLimit>(_: &P) -> usize {
        P::PARAM_LIMIT
    }
}
