use crate::callable::Callable;

/// A side-effecting pass-through. See [`tap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tap<F> {
    function: F,
}

/// Calls `function` with a reference to the value and returns the value.
///
/// `tap(f).call((x,))` runs `f(&x)` for its side effect and returns `x`
/// unchanged, which makes it convenient as a pipe stage.
///
/// # Examples
///
/// ```rust
/// use fnfit::{pipe, tap};
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let record = tap(|value: &i32| seen.borrow_mut().push(*value));
/// let double = |value: i32| value * 2;
///
/// assert_eq!(pipe!(3, record, double, record), 6);
/// assert_eq!(*seen.borrow(), vec![3, 6]);
/// ```
pub const fn tap<F>(function: F) -> Tap<F> {
    Tap { function }
}

impl<F, T> Callable<(T,)> for Tap<F>
where
    F: for<'a> Callable<(&'a T,)>,
{
    type Output = T;

    #[inline]
    fn call(&self, (value,): (T,)) -> T {
        self.function.call((&value,));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_tap_returns_its_argument() {
        let total = Cell::new(0);
        let accumulate = tap(|value: &u32| total.set(total.get() + value));
        assert_eq!(accumulate.call((4_u32,)), 4);
        assert_eq!(accumulate.call((5_u32,)), 5);
        assert_eq!(total.get(), 9);
    }

    #[test]
    fn test_tap_does_not_require_clone() {
        struct Opaque(u8);
        let inspect = tap(|value: &Opaque| assert_eq!(value.0, 1));
        assert_eq!(inspect.call((Opaque(1),)).0, 1);
    }
}
