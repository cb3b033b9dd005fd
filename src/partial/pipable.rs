use std::marker::PhantomData;
use std::ops::BitOr;

use crate::callable::{Callable, ResultOf};
use crate::pack::{Compare, Equal, Greater, Length, List, ListOf, Tuple, TupleOf};

/// A callable that can also be used as a pipe stage.
///
/// See [`pipable`].
pub struct Pipable<F, Signature> {
    function: F,
    signature: PhantomData<fn() -> Signature>,
}

impl<F: Clone, Signature> Clone for Pipable<F, Signature> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            signature: PhantomData,
        }
    }
}

impl<F: Copy, Signature> Copy for Pipable<F, Signature> {}

impl<F: std::fmt::Debug, Signature> std::fmt::Debug for Pipable<F, Signature> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Pipable")
            .field("function", &self.function)
            .finish()
    }
}

/// Makes `function` usable on the right-hand side of a pipe.
///
/// Called with its full argument list, a pipable callable behaves exactly
/// like `function`. Called with one argument fewer, it returns a
/// [`PipeClosure`] that waits for the missing argument; the value piped into
/// the closure becomes the **first** argument:
///
/// ```text
/// x.pipe(&pipable(f).call((ys...))) == f(x, ys...)
/// ```
///
/// # Examples
///
/// ```rust
/// use fnfit::{pipable, Callable, Operand, Pipe};
///
/// let clamp = pipable(|value: i32, low: i32, high: i32| value.clamp(low, high));
///
/// assert_eq!(clamp.call((15, 0, 10)), 10);
/// assert_eq!(15.pipe(&clamp.call((0, 10))), 10);
/// assert_eq!(Operand(-3) | clamp.call((0, 10)), 0);
/// ```
///
/// A call that supplies more arguments than the signature has does not build:
///
/// ```compile_fail
/// use fnfit::{pipable, Callable};
///
/// let negate = pipable(|value: i32| -value);
/// let _ = negate.call((1, 2));
/// ```
pub const fn pipable<F, Args>(function: F) -> Pipable<F, ListOf<Args>>
where
    F: Callable<Args>,
    Args: Tuple,
{
    Pipable {
        function,
        signature: PhantomData,
    }
}

/// The pipe stage produced by calling a [`Pipable`] with all but its first
/// argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeClosure<F, Args> {
    function: F,
    arguments: Args,
}

impl<F, Args> PipeClosure<F, Args> {
    /// Returns the arguments that will follow the piped value.
    pub const fn arguments(&self) -> &Args {
        &self.arguments
    }
}

impl<F, Args, Value> Callable<(Value,)> for PipeClosure<F, Args>
where
    Args: Tuple + Clone,
    (Value, Args::List): List,
    F: Callable<TupleOf<(Value, Args::List)>>,
{
    type Output = ResultOf<F, TupleOf<(Value, Args::List)>>;

    #[inline]
    fn call(&self, (value,): (Value,)) -> Self::Output {
        self.function
            .call((value, self.arguments.clone().into_list()).into_tuple())
    }
}

/// Decides between a direct call and a pipe closure.
///
/// Implemented for the length orderings [`Equal`] (the signature is
/// complete) and [`Greater`] (the signature is longer than the arguments).
pub trait PipeStep<F, Args> {
    /// The call result or the pipe closure.
    type Output;

    /// Performs the step.
    fn step(function: &F, arguments: Args) -> Self::Output;
}

impl<F, Args> PipeStep<F, Args> for Equal
where
    F: Callable<Args>,
{
    type Output = F::Output;

    #[inline]
    fn step(function: &F, arguments: Args) -> Self::Output {
        function.call(arguments)
    }
}

impl<F, Args> PipeStep<F, Args> for Greater
where
    F: Clone,
{
    type Output = PipeClosure<F, Args>;

    #[inline]
    fn step(function: &F, arguments: Args) -> Self::Output {
        PipeClosure {
            function: function.clone(),
            arguments,
        }
    }
}

type StepOf<Signature, Args> =
    <<Signature as Length>::Length as Compare<<ListOf<Args> as Length>::Length>>::Ordering;

impl<F, Signature, Args> Callable<Args> for Pipable<F, Signature>
where
    Args: Tuple,
    Args::List: Length,
    Signature: Length,
    Signature::Length: Compare<<Args::List as Length>::Length>,
    StepOf<Signature, Args>: PipeStep<F, Args>,
{
    type Output = <StepOf<Signature, Args> as PipeStep<F, Args>>::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        <StepOf<Signature, Args> as PipeStep<F, Args>>::step(&self.function, arguments)
    }
}

/// Feeds a value into a one-argument callable.
///
/// Implemented for every sized type, so any value can start a pipeline.
///
/// # Examples
///
/// ```rust
/// use fnfit::Pipe;
///
/// let double = |value: i32| value * 2;
/// assert_eq!(21.pipe(&double), 42);
/// ```
pub trait Pipe: Sized {
    /// Calls `stage` with `self` as its only argument.
    #[inline]
    fn pipe<Stage>(self, stage: &Stage) -> Stage::Output
    where
        Stage: Callable<(Self,)>,
    {
        stage.call((self,))
    }
}

impl<T> Pipe for T {}

/// Wraps a value so it can start an operator expression.
///
/// `Operand(x) | stage` pipes `x` into `stage`; `Operand(x) << &op >> y`
/// applies an [`Infix`](crate::partial::Infix) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Operand<T>(pub T);

impl<T> Operand<T> {
    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, Stage> BitOr<Stage> for Operand<T>
where
    Stage: Callable<(T,)>,
{
    type Output = Stage::Output;

    #[inline]
    fn bitor(self, stage: Stage) -> Self::Output {
        stage.call((self.0,))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn append(text: String, suffix: &str) -> String {
        text + suffix
    }

    #[test]
    fn full_call_is_direct() {
        let stage = pipable(append);
        assert_eq!(stage.call((String::from("a"), "b")), "ab");
    }

    #[test]
    fn piped_value_becomes_first_argument() {
        let stage = pipable(append);
        let closure = stage.call(("!",));
        assert_eq!(String::from("hi").pipe(&closure), "hi!");
        assert_eq!(closure.arguments(), &("!",));
    }

    #[test]
    fn pipe_closures_chain() {
        let stage = pipable(append);
        let result = Operand(String::from("a")) | stage.call(("b",));
        let result = Operand(result) | stage.call(("c",));
        assert_eq!(result, "abc");
    }

    #[test]
    fn single_parameter_function_pipes_with_empty_call() {
        let increment = pipable(|value: u8| value + 1);
        assert_eq!(41_u8.pipe(&increment.call(())), 42);
        assert_eq!(41_u8.pipe(&increment), 42);
    }
}
