use crate::callable::{Callable, ResultOf};
use crate::pack::{List, Tuple, TupleOf};

/// A decorator factory. See [`decorate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decorate<F> {
    function: F,
}

/// A decorator bound to its data, waiting for the function to decorate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decorator<F, Data> {
    function: F,
    data: Data,
}

/// A decorated function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decorated<F, Data, G> {
    function: F,
    data: Data,
    decorated: G,
}

/// Builds decorators out of a function that receives the decorated call.
///
/// `decorate(f).call((x,))` is a decorator; applied to `g` it yields a
/// callable that evaluates `f(x, g, xs...)` when called with `xs`. `f`
/// decides whether, when and how often `g` runs.
///
/// # Examples
///
/// ```rust
/// use fnfit::{decorate, Callable};
///
/// fn checked(limit: i32, function: fn(i32) -> i32, value: i32) -> Option<i32> {
///     (value <= limit).then(|| function(value))
/// }
///
/// fn square(value: i32) -> i32 {
///     value * value
/// }
///
/// let at_most_ten = decorate(checked).call((10,));
/// let safe_square = at_most_ten.call((square as fn(i32) -> i32,));
///
/// assert_eq!(safe_square.call((3,)), Some(9));
/// assert_eq!(safe_square.call((11,)), None);
/// ```
///
/// # Laws
///
/// - **Expansion**: `decorate(f)(x)(g)(xs...) == f(x, g, xs...)`
pub const fn decorate<F>(function: F) -> Decorate<F> {
    Decorate { function }
}

impl<F, Data> Callable<(Data,)> for Decorate<F>
where
    F: Clone,
{
    type Output = Decorator<F, Data>;

    #[inline]
    fn call(&self, (data,): (Data,)) -> Self::Output {
        Decorator {
            function: self.function.clone(),
            data,
        }
    }
}

impl<F, Data, G> Callable<(G,)> for Decorator<F, Data>
where
    F: Clone,
    Data: Clone,
{
    type Output = Decorated<F, Data, G>;

    #[inline]
    fn call(&self, (decorated,): (G,)) -> Self::Output {
        Decorated {
            function: self.function.clone(),
            data: self.data.clone(),
            decorated,
        }
    }
}

type DecoratedArguments<Data, G, Args> = TupleOf<(Data, (G, <Args as Tuple>::List))>;

impl<F, Data, G, Args> Callable<Args> for Decorated<F, Data, G>
where
    Data: Clone,
    G: Clone,
    Args: Tuple,
    (Data, (G, Args::List)): List,
    F: Callable<DecoratedArguments<Data, G, Args>>,
{
    type Output = ResultOf<F, DecoratedArguments<Data, G, Args>>;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        let forwarded = (
            self.data.clone(),
            (self.decorated.clone(), arguments.into_list()),
        );
        self.function.call(forwarded.into_tuple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_decorator_receives_data_function_and_arguments() {
        let calls = RefCell::new(Vec::new());
        let traced = |label: &'static str, function: fn(i32, i32) -> i32, a: i32, b: i32| {
            calls.borrow_mut().push(label);
            function(a, b)
        };
        let add: fn(i32, i32) -> i32 = |a, b| a + b;

        let decorated = decorate(traced).call(("add",)).call((add,));

        assert_eq!(decorated.call((2, 3)), 5);
        assert_eq!(decorated.call((4, 4)), 8);
        assert_eq!(*calls.borrow(), vec!["add", "add"]);
    }

    #[test]
    fn test_decorator_may_skip_the_decorated_function() {
        let never = |fallback: u8, _function: fn() -> u8| fallback;
        let panicking: fn() -> u8 = || unreachable!();
        let decorated = decorate(never).call((9_u8,)).call((panicking,));
        assert_eq!(decorated.call(()), 9);
    }
}
