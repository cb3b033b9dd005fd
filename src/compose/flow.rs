//! Sequential composition.

use crate::callable::Callable;

/// Two callables run one after the other.
///
/// `Flow::new(first, second)` called with `xs` evaluates
/// `second(first(xs...))`. `first` takes the whole argument list; `second`
/// takes the single value `first` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flow<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Flow<First, Second> {
    /// Chains `first` and `second`.
    pub const fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }

    /// Splits the chain into its two stages.
    pub fn into_parts(self) -> (First, Second) {
        (self.first, self.second)
    }
}

/// Composes two callables left to right.
///
/// # Examples
///
/// ```rust
/// use fnfit::{flow, Callable};
///
/// let parse = |text: &str| text.len();
/// let describe = |length: usize| format!("{length} bytes");
///
/// assert_eq!(flow(parse, describe).call(("four",)), "4 bytes");
/// ```
pub const fn flow<First, Second>(first: First, second: Second) -> Flow<First, Second> {
    Flow::new(first, second)
}

impl<First, Second, Args> Callable<Args> for Flow<First, Second>
where
    First: Callable<Args>,
    Second: Callable<(First::Output,)>,
{
    type Output = Second::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        let intermediate = self.first.call(arguments);
        self.second.call((intermediate,))
    }
}

/// Composes callables left to right.
///
/// `flow!(f, g, h)` calls `f` with the arguments, then `g` with the result,
/// then `h`. `flow!(f)` is `f` itself.
///
/// # Examples
///
/// ```
/// use fnfit::{flow, Callable};
///
/// let trim = |text: &'static str| text.trim();
/// let shout = |text: &str| text.to_uppercase();
/// let exclaim = |text: String| text + "!";
///
/// let loud = flow!(trim, shout, exclaim);
/// assert_eq!(loud.call(("  hey ",)), "HEY!");
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::Flow::new($first_function, $crate::flow!($($remaining_functions),+))
    };
}

/// Composes callables right to left.
///
/// `compose!(f, g, h)` calls `h` with the arguments, then `g` with the
/// result, then `f`, the same order as `f(g(h(x)))`.
///
/// # Examples
///
/// ```
/// use fnfit::{compose, Callable};
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let square = |x: i32| x * x;
///
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed.call((3,)), 19);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($inner_functions:expr),+ $(,)?) => {
        $crate::compose::Flow::new($crate::compose!($($inner_functions),+), $outer_function)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_single() {
        let double = |x: i32| x * 2;
        let pipeline = flow!(double);
        assert_eq!(pipeline(5), 10);
    }

    #[test]
    fn test_flow_passes_all_arguments_to_first_stage() {
        let sum = |x: i32, y: i32| x + y;
        let negate = |x: i32| -x;
        assert_eq!(flow(sum, negate).call((2, 3)), -5);
    }

    #[test]
    fn test_compose_two() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let composed = compose!(add_one, double);
        assert_eq!(composed.call((5,)), 11);
    }

    #[test]
    fn test_compose_is_reversed_flow() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        assert_eq!(
            compose!(add_one, double, square).call((3,)),
            flow!(square, double, add_one).call((3,))
        );
    }

    #[test]
    fn test_flow_zero_argument_first_stage() {
        let seed = || 7;
        let double = |x: i32| x * 2;
        assert_eq!(flow(seed, double).call(()), 14);
    }

    #[test]
    fn test_into_parts() {
        let (first, second) = flow(1_u8, 2_u8).into_parts();
        assert_eq!((first, second), (1, 2));
    }
}
