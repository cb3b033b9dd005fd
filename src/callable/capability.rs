//! Type-level call outcomes.
//!
//! An adaptor that accumulates arguments needs more than a yes/no answer: it
//! has to know whether the arguments supplied so far complete the call or
//! leave a remainder. [`Saturate`] computes that answer as a type:
//!
//! | signature          | supplied          | outcome               |
//! |--------------------|-------------------|-----------------------|
//! | `()`               | `()`              | [`Ready`]             |
//! | `(H, T)`           | `()`              | `Pending<(H, T)>`     |
//! | `(H, T)`           | `(H, Rest)`       | outcome of `T` vs `Rest` |
//! | anything else      |                   | no impl (rejected)    |
//!
//! Over-supplying arguments or supplying the wrong type has no outcome at
//! all, so such calls fail to build.

use std::marker::PhantomData;

use crate::pack::{Succ, Zero};

/// The supplied arguments complete the signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ready;

/// The supplied arguments are a proper prefix; `Rest` is still needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pending<Rest>(PhantomData<Rest>);

/// Common interface of [`Ready`] and [`Pending`].
pub trait Outcome {
    /// Whether the call can be made now.
    const READY: bool;
}

impl Outcome for Ready {
    const READY: bool = true;
}

impl<Rest> Outcome for Pending<Rest> {
    const READY: bool = false;
}

/// Matches supplied arguments (an inductive list) against a signature.
///
/// # Examples
///
/// ```rust
/// use fnfit::callable::{Outcome, Pending, Saturate};
/// use static_assertions::assert_type_eq_all;
///
/// type Signature = (i32, (bool, ()));
///
/// assert_type_eq_all!(<Signature as Saturate<(i32, ())>>::Outcome, Pending<(bool, ())>);
/// assert!(<<Signature as Saturate<(i32, (bool, ()))>>::Outcome as Outcome>::READY);
/// ```
pub trait Saturate<Supplied> {
    /// [`Ready`] or [`Pending`].
    type Outcome: Outcome;
}

impl Saturate<()> for () {
    type Outcome = Ready;
}

impl<Head, Tail> Saturate<()> for (Head, Tail) {
    type Outcome = Pending<(Head, Tail)>;
}

impl<Head, Tail, Rest> Saturate<(Head, Rest)> for (Head, Tail)
where
    Tail: Saturate<Rest>,
{
    type Outcome = Tail::Outcome;
}

/// A signature known only by its number of parameters.
///
/// `N` is a Peano numeral. Any argument types are accepted until `N`
/// arguments have been supplied; one more argument has no outcome. This is
/// the signature of an accumulator over a callable whose parameter types
/// cannot be inferred but whose limit is known, see
/// [`Limit::partial`](crate::adaptor::Limit::partial).
///
/// ```rust
/// use fnfit::callable::{Arity, Pending, Ready, Saturate};
/// use fnfit::pack::{Succ, Zero};
/// use static_assertions::assert_type_eq_all;
///
/// type Two = Arity<Succ<Succ<Zero>>>;
///
/// assert_type_eq_all!(<Two as Saturate<(u8, ())>>::Outcome, Pending<Arity<Succ<Zero>>>);
/// assert_type_eq_all!(<Two as Saturate<(u8, (char, ()))>>::Outcome, Ready);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arity<N>(PhantomData<N>);

impl Saturate<()> for Arity<Zero> {
    type Outcome = Ready;
}

impl<N> Saturate<()> for Arity<Succ<N>> {
    type Outcome = Pending<Self>;
}

impl<N, Head, Rest> Saturate<(Head, Rest)> for Arity<Succ<N>>
where
    Arity<N>: Saturate<Rest>,
{
    type Outcome = <Arity<N> as Saturate<Rest>>::Outcome;
}

/// The outcome of supplying `Supplied` to `Signature`.
pub type OutcomeOf<Signature, Supplied> = <Signature as Saturate<Supplied>>::Outcome;

/// Returns whether `Supplied` completes `Signature`.
///
/// Both are inductive lists. A supplied list that neither completes nor
/// prefixes the signature does not build.
///
/// ```rust
/// use fnfit::callable::is_saturated;
///
/// assert!(is_saturated::<(u8, ()), (u8, ())>());
/// assert!(!is_saturated::<(u8, (u8, ())), (u8, ())>());
/// ```
///
/// ```compile_fail
/// use fnfit::callable::is_saturated;
///
/// // one argument too many
/// let _ = is_saturated::<(u8, ()), (u8, (u8, ()))>();
/// ```
pub const fn is_saturated<Signature, Supplied>() -> bool
where
    Signature: Saturate<Supplied>,
{
    <Signature::Outcome as Outcome>::READY
}

/// The maximum number of parameters an adaptor accepts.
///
/// Implemented by [`Partial`](crate::partial::Partial) (the number of
/// arguments it still needs) and by [`Limit`](crate::adaptor::Limit) (its
/// explicit limit). A `Limit` is not callable with more arguments than its
/// limit, and the accumulator built by
/// [`Limit::partial`](crate::adaptor::Limit::partial) stops accumulating
/// there.
pub trait ParamLimit {
    /// The limit.
    const PARAM_LIMIT: usize;
}
