use crate::callable::Callable;
use crate::pack::Tuple;

/// Folds an argument list from the right with a binary callable.
pub trait FoldRight<F, State> {
    /// The folded value.
    type Output;

    /// Folds the tail first, then combines the result with the head.
    fn fold_right(self, function: &F, state: State) -> Self::Output;
}

impl<F, State> FoldRight<F, State> for () {
    type Output = State;

    #[inline]
    fn fold_right(self, _: &F, state: State) -> State {
        state
    }
}

impl<F, State, Head, Tail> FoldRight<F, State> for (Head, Tail)
where
    Tail: FoldRight<F, State>,
    F: Callable<(Tail::Output, Head)>,
{
    type Output = F::Output;

    #[inline]
    fn fold_right(self, function: &F, state: State) -> Self::Output {
        let (head, tail) = self;
        let rest = tail.fold_right(function, state);
        function.call((rest, head))
    }
}

/// Folds an argument list from the left with a binary callable.
pub trait FoldLeft<F, State> {
    /// The folded value.
    type Output;

    /// Combines the state with the head, then folds the tail.
    fn fold_left(self, function: &F, state: State) -> Self::Output;
}

impl<F, State> FoldLeft<F, State> for () {
    type Output = State;

    #[inline]
    fn fold_left(self, _: &F, state: State) -> State {
        state
    }
}

impl<F, State, Head, Tail> FoldLeft<F, State> for (Head, Tail)
where
    F: Callable<(State, Head)>,
    Tail: FoldLeft<F, F::Output>,
{
    type Output = Tail::Output;

    #[inline]
    fn fold_left(self, function: &F, state: State) -> Self::Output {
        let (head, tail) = self;
        let next = function.call((state, head));
        tail.fold_left(function, next)
    }
}

/// Folds a non-empty argument list from the right, seeded by its last
/// element.
pub trait Reduce<F> {
    /// The folded value.
    type Output;

    /// Performs the fold.
    fn reduce(self, function: &F) -> Self::Output;
}

impl<F, Head> Reduce<F> for (Head, ()) {
    type Output = Head;

    #[inline]
    fn reduce(self, _: &F) -> Head {
        self.0
    }
}

impl<F, Head, Next, Tail> Reduce<F> for (Head, (Next, Tail))
where
    (Next, Tail): Reduce<F>,
    F: Callable<(<(Next, Tail) as Reduce<F>>::Output, Head)>,
{
    type Output = F::Output;

    #[inline]
    fn reduce(self, function: &F) -> Self::Output {
        let (head, tail) = self;
        let rest = tail.reduce(function);
        function.call((rest, head))
    }
}

/// Folds a non-empty argument list from the left, seeded by its first
/// element.
pub trait ReduceLeft<F> {
    /// The folded value.
    type Output;

    /// Performs the fold.
    fn reduce_left(self, function: &F) -> Self::Output;
}

impl<F, Head, Tail> ReduceLeft<F> for (Head, Tail)
where
    Tail: FoldLeft<F, Head>,
{
    type Output = Tail::Output;

    #[inline]
    fn reduce_left(self, function: &F) -> Self::Output {
        let (head, tail) = self;
        tail.fold_left(function, head)
    }
}

/// A right fold over the argument list. See [`reverse_compress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReverseCompress<F> {
    function: F,
}

/// A right fold over the argument list with an initial state.
/// See [`reverse_compress_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReverseCompressWith<F, State> {
    function: F,
    state: State,
}

/// Folds the arguments from the right with a binary `function`.
///
/// The last argument seeds the fold:
///
/// ```text
/// reverse_compress(f)(x)          == x
/// reverse_compress(f)(x, xs...)   == f(reverse_compress(f)(xs...), x)
/// ```
///
/// Calling it without arguments does not build; use
/// [`reverse_compress_with`] to supply an initial state.
///
/// # Examples
///
/// ```rust
/// use fnfit::{reverse_compress, Callable};
///
/// let max = reverse_compress(|a: i32, b: i32| a.max(b));
/// assert_eq!(max.call((2, 3, 4, 5)), 5);
///
/// let spell = reverse_compress(|text: String, c: char| {
///     let mut text = text;
///     text.push(c);
///     text
/// });
/// assert_eq!(spell.call(('a', 'b', String::from("c"))), "cba");
/// ```
///
/// ```compile_fail
/// use fnfit::{reverse_compress, Callable};
///
/// let max = reverse_compress(|a: i32, b: i32| a.max(b));
/// let _ = max.call(());
/// ```
pub const fn reverse_compress<F>(function: F) -> ReverseCompress<F> {
    ReverseCompress { function }
}

/// Folds the arguments from the right, starting from `state`.
///
/// ```text
/// reverse_compress_with(f, z)()         == z
/// reverse_compress_with(f, z)(x, xs...) == f(reverse_compress_with(f, z)(xs...), x)
/// ```
///
/// # Examples
///
/// ```rust
/// use fnfit::{reverse_compress_with, Callable};
///
/// let digits = reverse_compress_with(|number: u32, digit: u32| number * 10 + digit, 0);
///
/// assert_eq!(digits.call((1, 2, 3)), 321);
/// assert_eq!(digits.call(()), 0);
/// ```
pub const fn reverse_compress_with<F, State>(function: F, state: State) -> ReverseCompressWith<F, State> {
    ReverseCompressWith { function, state }
}

impl<F, Args> Callable<Args> for ReverseCompress<F>
where
    Args: Tuple,
    Args::List: Reduce<F>,
{
    type Output = <Args::List as Reduce<F>>::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        arguments.into_list().reduce(&self.function)
    }
}

impl<F, State, Args> Callable<Args> for ReverseCompressWith<F, State>
where
    State: Clone,
    Args: Tuple,
    Args::List: FoldRight<F, State>,
{
    type Output = <Args::List as FoldRight<F, State>>::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        arguments
            .into_list()
            .fold_right(&self.function, self.state.clone())
    }
}

/// A left fold over the argument list. See [`compress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Compress<F> {
    function: F,
}

/// A left fold over the argument list with an initial state.
/// See [`compress_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressWith<F, State> {
    function: F,
    state: State,
}

/// Folds the arguments from the left with a binary `function`.
///
/// ```text
/// compress(f)(x)             == x
/// compress(f)(x, y, xs...)   == compress(f)(f(x, y), xs...)
/// ```
///
/// # Examples
///
/// ```rust
/// use fnfit::{compress, Callable};
///
/// let minus = compress(|a: i32, b: i32| a - b);
/// assert_eq!(minus.call((10, 3, 2)), 5);
/// ```
pub const fn compress<F>(function: F) -> Compress<F> {
    Compress { function }
}

/// Folds the arguments from the left, starting from `state`.
///
/// # Examples
///
/// ```rust
/// use fnfit::{compress_with, Callable};
///
/// let digits = compress_with(|number: u32, digit: u32| number * 10 + digit, 0);
/// assert_eq!(digits.call((1, 2, 3)), 123);
/// ```
pub const fn compress_with<F, State>(function: F, state: State) -> CompressWith<F, State> {
    CompressWith { function, state }
}

impl<F, Args> Callable<Args> for Compress<F>
where
    Args: Tuple,
    Args::List: ReduceLeft<F>,
{
    type Output = <Args::List as ReduceLeft<F>>::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        arguments.into_list().reduce_left(&self.function)
    }
}

impl<F, State, Args> Callable<Args> for CompressWith<F, State>
where
    State: Clone,
    Args: Tuple,
    Args::List: FoldLeft<F, State>,
{
    type Output = <Args::List as FoldLeft<F, State>>::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        arguments
            .into_list()
            .fold_left(&self.function, self.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_compress_single_argument_is_identity() {
        let max = reverse_compress(|a: i32, b: i32| a.max(b));
        assert_eq!(max.call((7,)), 7);
    }

    #[test]
    fn test_reverse_compress_folds_from_the_right() {
        let record = reverse_compress(|text: String, word: &str| text + word);
        assert_eq!(record.call(("a", "b", String::from("c"))), "cba");
    }

    #[test]
    fn test_reverse_compress_with_empty_is_state() {
        let sum = reverse_compress_with(|a: u8, b: u8| a + b, 9_u8);
        assert_eq!(sum.call(()), 9);
        assert_eq!(sum.call((1_u8, 2_u8)), 12);
    }

    #[test]
    fn test_compress_single_argument_is_identity() {
        let minus = compress(|a: i32, b: i32| a - b);
        assert_eq!(minus.call((4,)), 4);
    }

    #[test]
    fn test_compress_with_folds_from_the_left() {
        let record = compress_with(|text: String, word: &str| text + word, String::from(">"));
        assert_eq!(record.call(("a", "b", "c")), ">abc");
    }
}
