//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

//! Equality and ordering.
//!
//! Every comparison, whichever operands it starts from, is reduced to a pair of
//! branch views (`Ok(&value)` or `Err(&error)`) and answered by [`equal`] and [`order`].
//! A raw value is viewed as a value-branch container, an [`Unexpected`] as an error-branch one.
//!
//! Value-branch containers sort before error-branch ones; within a branch, payloads decide.
//! `>`, `<=` and `>=` are never computed on their own: they follow from `==` and `<`.

use core::cmp::Ordering;

use crate::{Expected, Unexpected};

type View<'a, T, E> = core::result::Result<&'a T, &'a E>;

/// Same branch, equal payloads.
#[doc(hidden)]
pub fn equal<T: PartialEq, E: PartialEq>(a: View<'_, T, E>, b: View<'_, T, E>) -> bool {
    match (a, b) {
        (Ok(a), Ok(b)) => a == b,
        (Err(a), Err(b)) => a == b,
        _ => false,
    }
}

fn less<T: PartialOrd, E: PartialOrd>(a: View<'_, T, E>, b: View<'_, T, E>) -> bool {
    match (a, b) {
        (Ok(a), Ok(b)) => a < b,
        (Err(a), Err(b)) => a < b,
        (Ok(_), Err(_)) => true,
        (Err(_), Ok(_)) => false,
    }
}

/// `Equal` if [`equal`], `Less` if `a < b`, `Greater` otherwise.
#[doc(hidden)]
pub fn order<T: PartialOrd, E: PartialOrd>(a: View<'_, T, E>, b: View<'_, T, E>) -> Ordering {
    if equal(a, b) {
        Ordering::Equal
    } else if less(a, b) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Expected<T, E> {
    fn eq(&self, other: &Self) -> bool {
        equal(self.as_result(), other.as_result())
    }
}
impl<T: Eq, E: Eq> Eq for Expected<T, E> {}

impl<T: PartialOrd, E: PartialOrd> PartialOrd for Expected<T, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(order(self.as_result(), other.as_result()))
    }
    fn lt(&self, other: &Self) -> bool {
        less(self.as_result(), other.as_result())
    }
    fn gt(&self, other: &Self) -> bool {
        !(self == other) && !(self < other)
    }
    fn le(&self, other: &Self) -> bool {
        self == other || self < other
    }
    fn ge(&self, other: &Self) -> bool {
        self == other || self > other
    }
}
impl<T: Ord, E: Ord> Ord for Expected<T, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_result(), other.as_result()) {
            (Ok(a), Ok(b)) => a.cmp(b),
            (Err(a), Err(b)) => a.cmp(b),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
        }
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq<Unexpected<E>> for Expected<T, E> {
    fn eq(&self, other: &Unexpected<E>) -> bool {
        equal(self.as_result(), Err(other.value()))
    }
}
impl<T: PartialEq, E: PartialEq> PartialEq<Expected<T, E>> for Unexpected<E> {
    fn eq(&self, other: &Expected<T, E>) -> bool {
        equal(Err(self.value()), other.as_result())
    }
}
impl<T: PartialOrd, E: PartialOrd> PartialOrd<Unexpected<E>> for Expected<T, E> {
    fn partial_cmp(&self, other: &Unexpected<E>) -> Option<Ordering> {
        Some(order(self.as_result(), Err(other.value())))
    }
}
impl<T: PartialOrd, E: PartialOrd> PartialOrd<Expected<T, E>> for Unexpected<E> {
    fn partial_cmp(&self, other: &Expected<T, E>) -> Option<Ordering> {
        Some(order(Err(self.value()), other.as_result()))
    }
}

/// Implements all six comparison operators between `Expected<$ty, E>` and `$ty`, in both
/// operand orders.
///
/// A blanket implementation would overlap with the comparisons against [`Unexpected`], so
/// these are provided per type: for the primitive scalars, `&'static str` and `String` here,
/// and for your own types by invoking this macro.
///
/// ```
/// #[derive(PartialEq, PartialOrd)]
/// struct Meters(u32);
/// expected::impl_value_comparisons!(Meters);
///
/// let height = expected::Expected::<Meters, ()>::new(Meters(3));
/// assert!(height == Meters(3));
/// assert!(Meters(2) < height);
/// ```
#[macro_export]
macro_rules! impl_value_comparisons {
    ($($ty: ty),* $(,)?) => {$(
        impl<E: PartialEq> PartialEq<$ty> for $crate::Expected<$ty, E> {
            fn eq(&self, other: &$ty) -> bool {
                $crate::__private::equal(self.as_result(), ::core::result::Result::Ok(other))
            }
        }
        impl<E: PartialEq> PartialEq<$crate::Expected<$ty, E>> for $ty {
            fn eq(&self, other: &$crate::Expected<$ty, E>) -> bool {
                $crate::__private::equal(::core::result::Result::Ok(self), other.as_result())
            }
        }
        impl<E: PartialOrd> PartialOrd<$ty> for $crate::Expected<$ty, E> {
            fn partial_cmp(
                &self,
                other: &$ty,
            ) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some($crate::__private::order(
                    self.as_result(),
                    ::core::result::Result::Ok(other),
                ))
            }
        }
        impl<E: PartialOrd> PartialOrd<$crate::Expected<$ty, E>> for $ty {
            fn partial_cmp(
                &self,
                other: &$crate::Expected<$ty, E>,
            ) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some($crate::__private::order(
                    ::core::result::Result::Ok(self),
                    other.as_result(),
                ))
            }
        }
    )*};
}

impl_value_comparisons!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    &'static str
);
#[cfg(feature = "std")]
impl_value_comparisons!(std::string::String);
