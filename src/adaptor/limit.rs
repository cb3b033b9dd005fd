use crate::callable::{Callable, ParamLimit};
use crate::pack::{Compare, Count, Length, ListOf, NotGreater, ToNat, Tuple};

#[cfg(feature = "partial")]
use crate::callable::Arity;
#[cfg(feature = "partial")]
use crate::partial::Partial;

/// A callable with an upper bound on its number of arguments.
///
/// See [`limit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limit<F, const N: usize> {
    function: F,
}

/// Attaches a parameter limit of `N` to `function`.
///
/// The result is callable like `function` with at most `N` arguments. A
/// call with more arguments has no [`Callable`] impl, so it fails to build
/// and an overload set built with [`match_!`](crate::match_) skips the case.
/// The limit is visible to generic code through [`ParamLimit`]. Limits from
/// 0 to 12 are supported.
///
/// # Examples
///
/// ```rust
/// use fnfit::{limit, Callable, ParamLimit};
///
/// let sum = limit::<2, _>(|a: i32, b: i32| a + b);
///
/// assert_eq!(sum.call((1, 2)), 3);
///
/// fn param_limit<P: ParamLimit>(_: &P) -> usize {
///     P::PARAM_LIMIT
/// }
/// assert_eq!(param_limit(&sum), 2);
/// ```
///
/// ```compile_fail
/// use fnfit::{limit, Callable, constant};
///
/// let answer = limit::<1, _>(constant(42));
/// let _ = answer.call((1, 2));
/// ```
///
/// An accumulator cannot collect more arguments than the limit:
///
/// ```compile_fail
/// use fnfit::{limit, partial, Callable};
///
/// let _ = partial(limit::<1, _>(|a: i32, b: i32| a + b)).call((1,));
/// ```
pub const fn limit<const N: usize, F>(function: F) -> Limit<F, N> {
    Limit { function }
}

impl<F, const N: usize> Limit<F, N> {
    /// Returns the wrapped callable.
    pub fn into_inner(self) -> F {
        self.function
    }
}

#[cfg(feature = "partial")]
impl<F, const N: usize> Limit<F, N>
where
    Count<N>: ToNat,
{
    /// Creates an argument accumulator that collects exactly `N` arguments.
    ///
    /// Unlike [`partial`](crate::partial::partial), the accumulator does not
    /// need to infer a signature, so it also works for callables with many
    /// signatures such as a generic `#[lift]` function. Argument types are
    /// checked when the `N`th argument arrives and the wrapped callable is
    /// called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnfit::{limit, Callable, ParamLimit};
    /// use std::ops::Add;
    ///
    /// #[derive(Clone, Copy)]
    /// struct Sum;
    ///
    /// impl<T: Add<Output = T>> Callable<(T, T)> for Sum {
    ///     type Output = T;
    ///
    ///     fn call(&self, (left, right): (T, T)) -> T {
    ///         left + right
    ///     }
    /// }
    ///
    /// let add = limit::<2, _>(Sum).partial();
    /// let add_ten = add.call((10,));
    ///
    /// assert_eq!(add_ten.call((5,)), 15);
    /// assert_eq!(add.call((1.5, 2.0)), 3.5);
    ///
    /// fn param_limit<P: ParamLimit>(_: &P) -> usize {
    ///     P::PARAM_LIMIT
    /// }
    /// assert_eq!(param_limit(&add_ten), 1);
    /// ```
    ///
    /// ```compile_fail
    /// use fnfit::{limit, constant, Callable};
    ///
    /// let _ = limit::<2, _>(constant(0)).partial().call((1, 2, 3));
    /// ```
    pub const fn partial(self) -> Partial<Self, Arity<<Count<N> as ToNat>::Numeral>> {
        Partial::from_parts(self, ())
    }
}

type LimitOrdering<Args, const N: usize> =
    <<ListOf<Args> as Length>::Length as Compare<<Count<N> as ToNat>::Numeral>>::Ordering;

impl<F, const N: usize, Args> Callable<Args> for Limit<F, N>
where
    Args: Tuple,
    Args::List: Length,
    Count<N>: ToNat,
    <Args::List as Length>::Length: Compare<<Count<N> as ToNat>::Numeral>,
    LimitOrdering<Args, N>: NotGreater,
    F: Callable<Args>,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        self.function.call(arguments)
    }
}

impl<F, const N: usize> ParamLimit for Limit<F, N> {
    const PARAM_LIMIT: usize = N;
}

/// A callable that exists only when `CONDITION` is `true`.
///
/// See [`if_`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct If<F, const CONDITION: bool> {
    function: F,
}

/// Makes `function` conditionally callable.
///
/// `if_::<true, _>(f)` is callable exactly like `f`. `if_::<false, _>(f)` is
/// not callable at all, which removes it from an overload set built with
/// [`match_!`](crate::match_).
///
/// # Examples
///
/// ```rust
/// use fnfit::{if_, match_, Callable};
///
/// const WIDE: bool = false;
///
/// let narrow = |value: i32| value;
/// let wide = |value: i32| i64::from(value) * 1_000;
/// let scale = match_!(if_::<WIDE, _>(wide), if_::<{ !WIDE }, _>(narrow));
///
/// assert_eq!(scale.call((7_i32,)), 7);
/// assert_eq!(if_::<true, _>(narrow).call((3,)), 3);
/// ```
///
/// ```compile_fail
/// use fnfit::{if_, Callable};
///
/// let disabled = if_::<false, _>(|value: i32| value);
/// let _ = disabled.call((1,));
/// ```
pub const fn if_<const CONDITION: bool, F>(function: F) -> If<F, CONDITION> {
    If { function }
}

impl<F, const CONDITION: bool> If<F, CONDITION> {
    /// Whether the wrapped callable is enabled.
    pub const ENABLED: bool = CONDITION;
}

impl<F, Args> Callable<Args> for If<F, true>
where
    F: Callable<Args>,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        self.function.call(arguments)
    }
}
