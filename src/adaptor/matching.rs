use std::marker::PhantomData;

use crate::callable::Callable;
use crate::pack::{ListOf, Tuple};

/// Index of the first case of an overload set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Here;

/// Index of a case after the first one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct There<Index>(PhantomData<Index>);

/// Selects the case of a list that accepts `Args`.
///
/// `Index` locates the case. It is inferred; when no case or more than one
/// case accepts `Args`, inference fails and the call does not build.
pub trait Select<Args, Index> {
    /// The result of the selected case.
    type Output;

    /// Calls the selected case.
    fn select(&self, arguments: Args) -> Self::Output;
}

impl<Head, Tail, Args> Select<Args, Here> for (Head, Tail)
where
    Head: Callable<Args>,
{
    type Output = Head::Output;

    #[inline]
    fn select(&self, arguments: Args) -> Self::Output {
        self.0.call(arguments)
    }
}

impl<Head, Tail, Args, Index> Select<Args, There<Index>> for (Head, Tail)
where
    Tail: Select<Args, Index>,
{
    type Output = Tail::Output;

    #[inline]
    fn select(&self, arguments: Args) -> Self::Output {
        self.1.select(arguments)
    }
}

/// An overload set: several callables tried by argument type.
///
/// See [`match_!`](crate::match_).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match<Cases> {
    cases: Cases,
}

/// Builds an overload set from a tuple of cases.
pub fn overload<Cases>(cases: Cases) -> Match<ListOf<Cases>>
where
    Cases: Tuple,
{
    Match {
        cases: cases.into_list(),
    }
}

impl<Cases> Match<Cases> {
    /// Calls the unique case that accepts `arguments`.
    ///
    /// Leave `Index` to inference.
    #[inline]
    pub fn call<Args, Index>(&self, arguments: Args) -> <Cases as Select<Args, Index>>::Output
    where
        Cases: Select<Args, Index>,
    {
        self.cases.select(arguments)
    }
}

/// Combines callables into an overload set.
///
/// `match_!(f1, ..., fn).call(args)` calls the one case whose parameter
/// types accept `args`. Cases are tried by type only, so a set whose cases
/// overlap for some argument list cannot be called with it: the call is
/// ambiguous and does not build. An argument list no case accepts does not
/// build either.
///
/// The result is a terminal adaptor: [`Match::call`] is an inherent method
/// because the index of the selected case is only known at the call site.
/// `Match` does not implement [`Callable`], so an overload set cannot be
/// passed to [`flow`](crate::compose::flow), [`partial`](crate::partial::partial),
/// [`pipe!`](crate::pipe) or [`unpack`](crate::unpack::unpack). Wrap the
/// call in a closure with fixed parameter types to do that:
///
/// ```rust
/// use fnfit::{flow, match_, Callable};
///
/// let size = match_!(|text: &str| text.len(), |count: usize| count);
/// let doubled = flow(move |text: &str| size.call((text,)), |length: usize| length * 2);
///
/// assert_eq!(doubled.call(("abc",)), 6);
/// ```
///
/// # Examples
///
/// ```rust
/// use fnfit::match_;
///
/// let describe = match_!(
///     |count: usize| format!("{count} items"),
///     |name: &str| format!("named {name}"),
///     |x: f64, y: f64| format!("point at {x}, {y}"),
/// );
///
/// assert_eq!(describe.call((3_usize,)), "3 items");
/// assert_eq!(describe.call(("box",)), "named box");
/// assert_eq!(describe.call((1.5, 2.0)), "point at 1.5, 2");
/// ```
///
/// ```compile_fail
/// use fnfit::match_;
///
/// let describe = match_!(|count: usize| count, |flag: bool| usize::from(flag));
/// // no case takes a string
/// let _ = describe.call(("text",));
/// ```
///
/// ```compile_fail
/// use fnfit::match_;
///
/// let ambiguous = match_!(|left: i32| left, |right: i32| right + 1);
/// let _ = ambiguous.call((1_i32,));
/// ```
#[macro_export]
macro_rules! match_ {
    ($($case:expr),+ $(,)?) => {
        $crate::adaptor::overload(($($case,)+))
    };
}
