//! Immediate left-to-right application.

/// Applies callables to a value from left to right.
///
/// `pipe!(x, f, g, h)` evaluates `h(g(f(x)))`. Each stage may be any
/// one-argument [`Callable`](crate::Callable), adaptors included.
///
/// # Examples
///
/// ```
/// use fnfit::{pipe, pipable};
///
/// let double = |x: i32| x * 2;
/// let add = pipable(|x: i32, y: i32| x + y);
///
/// assert_eq!(pipe!(5), 5);
/// assert_eq!(pipe!(5, double), 10);
/// assert_eq!(pipe!(5, double, fnfit::Callable::call(&add, (1,))), 11);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $crate::apply(&$function, ($value,))
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($crate::apply(&$function, ($value,)), $($remaining_functions),+)
    };
}
