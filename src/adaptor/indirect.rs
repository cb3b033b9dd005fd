use std::ops::Deref;

use crate::callable::Callable;

/// A callable reached through a pointer. See [`indirect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indirect<P> {
    pointer: P,
}

/// Calls through `pointer`.
///
/// `indirect(p).call(xs)` is `(*p)(xs...)`. Any [`Deref`] pointer works:
/// references, `Box`, `Rc`, `Arc`, and trait objects behind them.
///
/// # Examples
///
/// ```rust
/// use fnfit::{indirect, Callable};
/// use std::rc::Rc;
///
/// let shared: Rc<dyn Fn(i32) -> i32> = Rc::new(|value: i32| value + 1);
/// let through = indirect(Rc::clone(&shared));
///
/// assert_eq!(through.call((41,)), 42);
/// ```
pub const fn indirect<P>(pointer: P) -> Indirect<P> {
    Indirect { pointer }
}

impl<P> Indirect<P> {
    /// Returns the pointer.
    pub fn into_inner(self) -> P {
        self.pointer
    }
}

impl<P, Args> Callable<Args> for Indirect<P>
where
    P: Deref,
    P::Target: Callable<Args>,
{
    type Output = <P::Target as Callable<Args>>::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        self.pointer.deref().call(arguments)
    }
}
