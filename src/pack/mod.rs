//! Argument packs.
//!
//! Every adaptor in this crate receives its arguments as a flat tuple
//! `(A, B, C)`. Internally, packs are handled as inductive lists
//! `(A, (B, (C, ())))` so that they can be split, joined and measured by
//! ordinary trait recursion instead of one impl per arity.
//!
//! - [`Tuple`] / [`List`]: conversion between the two representations
//! - [`Append`]: concatenation of two lists, left elements first
//! - [`Length`] / [`Compare`]: type-level length and length comparison
//! - [`Count`] / [`ToNat`]: a `usize` constant as a type-level length
//!
//! Packs of up to twelve elements are supported.
//!
//! # Examples
//!
//! ```rust
//! use fnfit::list;
//! use fnfit::pack::{Append, List, Tuple};
//!
//! let left = (1, "two").into_list();
//! let right = list![3.0];
//!
//! assert_eq!(left.append(right).into_tuple(), (1, "two", 3.0));
//! ```
//!
//! # Laws
//!
//! - **Round trip**: `tuple.into_list().into_tuple() == tuple`
//! - **Left identity**: `().append(list) == list`
//! - **Order**: `left.append(right)` keeps every element of `left` before
//!   every element of `right`

mod length;

pub use length::{Compare, Count, Equal, Greater, Length, Less, Nat, NotGreater, Succ, ToNat, Zero};

/// A flat tuple that can be turned into an inductive list.
pub trait Tuple: Sized {
    /// The inductive list with the same elements in the same order.
    type List: List<Tuple = Self>;

    /// Number of elements.
    const LEN: usize;

    /// Converts the tuple into its list form.
    fn into_list(self) -> Self::List;
}

/// An inductive list `(Head, Tail)` terminated by `()`.
pub trait List: Sized {
    /// The flat tuple with the same elements in the same order.
    type Tuple;

    /// Number of elements.
    const LEN: usize;

    /// Converts the list back into a flat tuple.
    fn into_tuple(self) -> Self::Tuple;
}

/// Concatenation of inductive lists.
///
/// # Examples
///
/// ```rust
/// use fnfit::list;
/// use fnfit::pack::Append;
///
/// assert_eq!(list![1, 2].append(list![3]), list![1, 2, 3]);
/// assert_eq!(().append(list!['a']), list!['a']);
/// ```
pub trait Append<Rhs> {
    /// The joined list.
    type Output;

    /// Appends `rhs` after every element of `self`.
    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Append<Rhs> for () {
    type Output = Rhs;

    #[inline]
    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<Head, Tail, Rhs> Append<Rhs> for (Head, Tail)
where
    Tail: Append<Rhs>,
{
    type Output = (Head, Tail::Output);

    #[inline]
    fn append(self, rhs: Rhs) -> Self::Output {
        (self.0, self.1.append(rhs))
    }
}

/// The list produced by appending `Right` to `Left`.
pub type Joined<Left, Right> = <Left as Append<Right>>::Output;

/// The flat tuple form of a list.
pub type TupleOf<L> = <L as List>::Tuple;

/// The list form of a flat tuple.
pub type ListOf<T> = <T as Tuple>::List;

/// Builds an inductive list value.
///
/// `list![a, b, c]` expands to `(a, (b, (c, ())))`.
///
/// # Examples
///
/// ```rust
/// use fnfit::list;
///
/// let values = list![1, "two", 3.0];
/// assert_eq!(values, (1, ("two", (3.0, ()))));
/// assert_eq!(list![], ());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        ()
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        ($head, $crate::list!($($tail),*))
    };
}

macro_rules! list_type {
    () => { () };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        ($head, $crate::pack::list_type!($($tail),*))
    };
}

macro_rules! list_value {
    () => { () };
    ($head:ident $(, $tail:ident)* $(,)?) => {
        ($head, $crate::pack::list_value!($($tail),*))
    };
}

macro_rules! count {
    () => { 0usize };
    ($head:tt $($tail:tt)*) => { 1usize + $crate::pack::count!($($tail)*) };
}

pub(crate) use count;
pub(crate) use list_type;
pub(crate) use list_value;

macro_rules! impl_tuple_list {
    ($($element:ident),*) => {
        paste::paste! {
            impl<$($element),*> Tuple for ($($element,)*) {
                type List = list_type!($($element),*);

                const LEN: usize = count!($($element)*);

                #[inline]
                fn into_list(self) -> Self::List {
                    let ($([<$element:lower>],)*) = self;
                    list_value!($([<$element:lower>]),*)
                }
            }

            impl<$($element),*> List for list_type!($($element),*) {
                type Tuple = ($($element,)*);

                const LEN: usize = count!($($element)*);

                #[inline]
                fn into_tuple(self) -> Self::Tuple {
                    let list_value!($([<$element:lower>]),*) = self;
                    ($([<$element:lower>],)*)
                }
            }
        }
    };
}

impl_tuple_list!();
impl_tuple_list!(A);
impl_tuple_list!(A, B);
impl_tuple_list!(A, B, C);
impl_tuple_list!(A, B, C, D);
impl_tuple_list!(A, B, C, D, E);
impl_tuple_list!(A, B, C, D, E, F);
impl_tuple_list!(A, B, C, D, E, F, G);
impl_tuple_list!(A, B, C, D, E, F, G, H);
impl_tuple_list!(A, B, C, D, E, F, G, H, I);
impl_tuple_list!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_list!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_list!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_tuple_is_empty_list() {
        assert_eq!(().into_list(), ());
        assert_eq!(<() as Tuple>::LEN, 0);
    }

    #[test]
    fn tuple_round_trips_through_list() {
        let tuple = (1_u8, 'b', "c", 4.0_f64);
        let list = tuple.into_list();
        assert_eq!(list, (1_u8, ('b', ("c", (4.0_f64, ())))));
        assert_eq!(list.into_tuple(), tuple);
    }

    #[test]
    fn twelve_element_tuple_is_supported() {
        let tuple = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
        assert_eq!(<(i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32) as Tuple>::LEN, 12);
        assert_eq!(tuple.into_list().into_tuple(), tuple);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(-3, 9)]
    #[case(i32::MAX, i32::MIN)]
    fn append_places_left_first(#[case] first: i32, #[case] second: i32) {
        assert_eq!(list![first].append(list![second]).into_tuple(), (first, second));
        assert_eq!(().append(list![first, second]).into_tuple(), (first, second));
        assert_eq!(list![first, second].append(()).into_tuple(), (first, second));
    }

    #[test]
    fn append_keeps_left_before_right() {
        let joined = list![1, 2].append(list![3, 4]);
        assert_eq!(joined.into_tuple(), (1, 2, 3, 4));
    }

    #[test]
    fn list_macro_accepts_trailing_comma() {
        assert_eq!(list![1, 2,], (1, (2, ())));
    }
}
