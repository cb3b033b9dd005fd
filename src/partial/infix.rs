use std::ops::{Shl, Shr};

use crate::callable::Callable;

use super::Operand;

/// A binary callable usable as an infix operator.
///
/// See [`infix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Infix<F> {
    function: F,
}

/// Makes a binary `function` usable between its two arguments.
///
/// `Operand(x) << &op >> y` evaluates to `function(x, y)`. The operator can
/// also be called directly with both arguments.
///
/// # Examples
///
/// ```rust
/// use fnfit::{infix, Callable, Operand};
///
/// let plus = infix(|left: i32, right: i32| left + right);
///
/// assert_eq!(Operand(3) << &plus >> 2, 5);
/// assert_eq!(plus.call((3, 2)), 5);
/// ```
pub const fn infix<F>(function: F) -> Infix<F> {
    Infix { function }
}

impl<F, Left, Right> Callable<(Left, Right)> for Infix<F>
where
    F: Callable<(Left, Right)>,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, arguments: (Left, Right)) -> Self::Output {
        self.function.call(arguments)
    }
}

/// An infix operator that has received its left operand.
#[derive(Debug, Clone, Copy)]
pub struct InfixLeft<'a, F, Left> {
    function: &'a F,
    left: Left,
}

impl<'a, F, T> Shl<&'a Infix<F>> for Operand<T> {
    type Output = InfixLeft<'a, F, T>;

    #[inline]
    fn shl(self, operator: &'a Infix<F>) -> Self::Output {
        InfixLeft {
            function: &operator.function,
            left: self.0,
        }
    }
}

impl<F, Left, Right> Shr<Right> for InfixLeft<'_, F, Left>
where
    F: Callable<(Left, Right)>,
{
    type Output = F::Output;

    #[inline]
    fn shr(self, right: Right) -> Self::Output {
        self.function.call((self.left, right))
    }
}

impl<F, Left, Right> Callable<(Right,)> for InfixLeft<'_, F, Left>
where
    Left: Clone,
    F: Callable<(Left, Right)>,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, (right,): (Right,)) -> Self::Output {
        self.function.call((self.left.clone(), right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_form_matches_direct_call() {
        let minus = infix(|left: i64, right: i64| left - right);
        assert_eq!(Operand(10) << &minus >> 4, 6);
        assert_eq!(minus.call((10, 4)), 6);
    }

    #[test]
    fn infix_chains_left_to_right() {
        let minus = infix(|left: i64, right: i64| left - right);
        let once = Operand(10) << &minus >> 4;
        assert_eq!(Operand(once) << &minus >> 1, 5);
    }

    #[test]
    fn left_half_is_reusable_as_callable() {
        let concat = infix(|left: String, right: &str| left + right);
        let prefix = Operand(String::from("pre")) << &concat;
        assert_eq!(prefix.call(("fix",)), "prefix");
        assert_eq!(prefix.call(("sent",)), "present");
    }
}
