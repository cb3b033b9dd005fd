//! Type-level lengths.
//!
//! List lengths are encoded as Peano numerals so that two lengths can be
//! compared by trait resolution. [`Compare`] has exactly one impl for each
//! shape of its two operands, so the ordering of any two lengths is
//! determined without overlap.

use std::marker::PhantomData;

/// The length of the empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

/// One more than `N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Succ<N>(PhantomData<N>);

/// Marker: the left operand is shorter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

/// Marker: both operands have the same length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Equal;

/// Marker: the left operand is longer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

/// Type-level length of an inductive list.
///
/// # Examples
///
/// ```rust
/// use fnfit::pack::{Length, Succ, Zero};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(u8, (u16, ())) as Length>::Length, Succ<Succ<Zero>>);
/// ```
pub trait Length {
    /// The length as a Peano numeral.
    type Length;
}

impl Length for () {
    type Length = Zero;
}

impl<Head, Tail> Length for (Head, Tail)
where
    Tail: Length,
{
    type Length = Succ<Tail::Length>;
}

/// Compares two Peano numerals.
pub trait Compare<Other> {
    /// One of [`Less`], [`Equal`] or [`Greater`].
    type Ordering;
}

impl Compare<Zero> for Zero {
    type Ordering = Equal;
}

impl<N> Compare<Succ<N>> for Zero {
    type Ordering = Less;
}

impl<N> Compare<Zero> for Succ<N> {
    type Ordering = Greater;
}

impl<N, M> Compare<Succ<M>> for Succ<N>
where
    N: Compare<M>,
{
    type Ordering = N::Ordering;
}

/// Orderings that allow the left operand as many elements as the right.
///
/// Implemented for [`Less`] and [`Equal`]; [`Greater`] has no impl, so a
/// bound `Ordering: NotGreater` rejects an overlong list.
pub trait NotGreater {}

impl NotGreater for Less {}

impl NotGreater for Equal {}

/// Runtime value of a Peano numeral.
pub trait Nat {
    /// The numeral as a `usize`.
    const VALUE: usize;
}

impl Nat for Zero {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for Succ<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// A `usize` constant lifted to the type level.
///
/// Counts from 0 to 12, the supported pack lengths, convert to Peano
/// numerals through [`ToNat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count<const N: usize>;

/// Conversion of a [`Count`] into its Peano numeral.
///
/// # Examples
///
/// ```rust
/// use fnfit::pack::{Count, Nat, Succ, ToNat, Zero};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<Count<2> as ToNat>::Numeral, Succ<Succ<Zero>>);
/// assert_eq!(<<Count<7> as ToNat>::Numeral as Nat>::VALUE, 7);
/// ```
pub trait ToNat {
    /// The Peano numeral.
    type Numeral: Nat;
}

impl ToNat for Count<0> {
    type Numeral = Zero;
}

macro_rules! impl_to_nat {
    ($($count:literal => $previous:literal),* $(,)?) => {
        $(
            impl ToNat for Count<$count> {
                type Numeral = Succ<<Count<$previous> as ToNat>::Numeral>;
            }
        )*
    };
}

impl_to_nat!(
    1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5,
    7 => 6, 8 => 7, 9 => 8, 10 => 9, 11 => 10, 12 => 11,
);
