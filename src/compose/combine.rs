//! Per-argument projection followed by a combining call.

use crate::callable::{Callable, ResultOf};
use crate::pack::{List, ListOf, Tuple, TupleOf};

/// A combining function together with one projection per argument.
///
/// See [`combine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Combine<F, Projections> {
    function: F,
    projections: Projections,
}

/// Applies each projection to its own argument, then `function` to the
/// projected values.
///
/// `combine(f, (g1, g2))` called with `(x1, x2)` evaluates
/// `f(g1(x1), g2(x2))`. The projections run left to right. The number of
/// arguments must equal the number of projections.
///
/// # Examples
///
/// ```rust
/// use fnfit::{combine, Callable};
///
/// let pair = |left: String, right: i32| format!("{left}={right}");
/// let labelled = combine(pair, (|key: &str| key.to_uppercase(), |value: i32| value * 10));
///
/// assert_eq!(labelled.call(("x", 4)), "X=40");
/// ```
///
/// ```compile_fail
/// use fnfit::{combine, Callable};
///
/// let sum = |left: i32, right: i32| left + right;
/// let id = |value: i32| value;
/// // two projections, three arguments
/// let _ = combine(sum, (id, id)).call((1, 2, 3));
/// ```
pub fn combine<F, Projections>(function: F, projections: Projections) -> Combine<F, ListOf<Projections>>
where
    Projections: Tuple,
{
    Combine {
        function,
        projections: projections.into_list(),
    }
}

/// `combine!(f, g1, ..., gn)` is `combine(f, (g1, ..., gn))`.
#[macro_export]
macro_rules! combine {
    ($function:expr $(, $projection:expr)* $(,)?) => {
        $crate::compose::combine($function, ($($projection,)*))
    };
}

/// Calls every callable of a list with the matching element of `Inputs`.
pub trait ZipCall<Inputs> {
    /// The list of results.
    type Output;

    /// Calls the head first, then the rest of the list.
    fn zip_call(&self, inputs: Inputs) -> Self::Output;
}

impl ZipCall<()> for () {
    type Output = ();

    #[inline]
    fn zip_call(&self, (): ()) {}
}

impl<Projection, Rest, Input, Inputs> ZipCall<(Input, Inputs)> for (Projection, Rest)
where
    Projection: Callable<(Input,)>,
    Rest: ZipCall<Inputs>,
{
    type Output = (Projection::Output, Rest::Output);

    #[inline]
    fn zip_call(&self, (input, inputs): (Input, Inputs)) -> Self::Output {
        let head = self.0.call((input,));
        let tail = self.1.zip_call(inputs);
        (head, tail)
    }
}

impl<F, Projections, Args> Callable<Args> for Combine<F, Projections>
where
    Args: Tuple,
    Projections: ZipCall<Args::List>,
    Projections::Output: List,
    F: Callable<TupleOf<Projections::Output>>,
{
    type Output = ResultOf<F, TupleOf<Projections::Output>>;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        let projected = self.projections.zip_call(arguments.into_list());
        self.function.call(projected.into_tuple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_combine_zips_projections_with_arguments() {
        let sum = |x: i32, y: i32| x + y;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        assert_eq!(combine(sum, (double, square)).call((3, 4)), 22);
    }

    #[test]
    fn test_combine_without_arguments() {
        let answer = || 42;
        assert_eq!(combine(answer, ()).call(()), 42);
    }

    #[test]
    fn test_combine_runs_projections_left_to_right() {
        let log = RefCell::new(Vec::new());
        let first = |x: i32| {
            log.borrow_mut().push("first");
            x
        };
        let second = |x: i32| {
            log.borrow_mut().push("second");
            x
        };
        let sum = |x: i32, y: i32| x + y;
        assert_eq!(combine!(sum, first, second).call((1, 2)), 3);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }
}
