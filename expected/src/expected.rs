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

use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};

use expected_storage::{Discriminant, VariantStorage};

use crate::error::{fault, AccessError};
use crate::Unexpected;

/// Either a value of type `T`, or an error of type `E`.
///
/// Both payloads share the same storage, and exactly one of them is alive at any time.
/// Accessing the branch that isn't alive through [`Self::value`], [`Self::error`],
/// [`Self::get_unexpected`] or dereferencing is a fault: it panics rather than ever reading
/// the inactive bytes. [`Self::try_value`], [`Self::ok_ref`] and friends are the non-faulting
/// alternatives.
///
/// Every assignment (including [`Clone::clone_from`]) builds a complete temporary first and
/// then [swaps](Self::swap) it in, so a container is never observed half-built.
///
/// `Expected<(), E>` is the "succeeded with no data" flavour; see [`Self::success`].
pub struct Expected<T, E> {
    discriminant: Discriminant,
    storage: VariantStorage<T, E>,
}

impl<T, E> Expected<T, E> {
    /// Constructs the value branch.
    pub const fn new(value: T) -> Self {
        Self {
            discriminant: Discriminant::Ok,
            storage: VariantStorage::ok(value),
        }
    }
    /// Constructs the error branch.
    pub const fn from_error(error: E) -> Self {
        Self {
            discriminant: Discriminant::Err,
            storage: VariantStorage::err(error),
        }
    }
    /// Constructs the error branch from a wrapped error.
    pub fn from_unexpected(unexpected: Unexpected<E>) -> Self {
        Self::from_error(unexpected.into_value())
    }
    /// Constructs the error branch from a wrapped error of a convertible type.
    pub fn from_unexpected_into<G: Into<E>>(unexpected: Unexpected<G>) -> Self {
        Self::from_error(unexpected.into_value().into())
    }

    /// Returns `true` if the value branch is alive.
    pub const fn has_value(&self) -> bool {
        self.discriminant.is_ok()
    }
    /// Returns `true` if the error branch is alive.
    pub const fn is_err(&self) -> bool {
        self.discriminant.is_err()
    }

    /// The value, if the value branch is alive.
    pub const fn ok_ref(&self) -> Option<&T> {
        if self.has_value() {
            Some(unsafe { self.storage.ok_ref() })
        } else {
            None
        }
    }
    /// The error, if the error branch is alive.
    pub const fn err_ref(&self) -> Option<&E> {
        if self.has_value() {
            None
        } else {
            Some(unsafe { self.storage.err_ref() })
        }
    }
    /// The value by mutable reference, if the value branch is alive.
    pub fn ok_mut(&mut self) -> Option<&mut T> {
        if self.has_value() {
            Some(unsafe { self.storage.ok_mut() })
        } else {
            None
        }
    }
    /// The error by mutable reference, if the error branch is alive.
    pub fn err_mut(&mut self) -> Option<&mut E> {
        if self.has_value() {
            None
        } else {
            Some(unsafe { self.storage.err_mut() })
        }
    }
    /// Views `self` as a standard [`Result`](core::result::Result) of references.
    #[allow(clippy::missing_errors_doc)]
    pub const fn as_result(&self) -> core::result::Result<&T, &E> {
        if self.has_value() {
            Ok(unsafe { self.storage.ok_ref() })
        } else {
            Err(unsafe { self.storage.err_ref() })
        }
    }
    /// Views `self` as a standard [`Result`](core::result::Result) of mutable references.
    #[allow(clippy::missing_errors_doc)]
    pub fn as_result_mut(&mut self) -> core::result::Result<&mut T, &mut E> {
        if self.has_value() {
            Ok(unsafe { self.storage.ok_mut() })
        } else {
            Err(unsafe { self.storage.err_mut() })
        }
    }
    /// Converts into a standard [`Result`](core::result::Result), moving the active payload out.
    #[allow(clippy::missing_errors_doc)]
    pub fn into_result(self) -> core::result::Result<T, E> {
        let mut this = ManuallyDrop::new(self);
        // `this` is never dropped, so the payload moved out here is only dropped by the caller.
        unsafe {
            if this.has_value() {
                Ok(this.storage.take_ok())
            } else {
                Err(this.storage.take_err())
            }
        }
    }

    /// # Errors
    /// [`AccessError::ValueOnError`] if the error branch is alive.
    pub const fn try_value(&self) -> Result<&T, AccessError> {
        match self.ok_ref() {
            Some(value) => Ok(value),
            None => Err(AccessError::ValueOnError),
        }
    }
    /// # Errors
    /// [`AccessError::ErrorOnValue`] if the value branch is alive.
    pub const fn try_error(&self) -> Result<&E, AccessError> {
        match self.err_ref() {
            Some(error) => Ok(error),
            None => Err(AccessError::ErrorOnValue),
        }
    }

    /// The value.
    ///
    /// # Panics
    /// If the error branch is alive.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.ok_ref() {
            Some(value) => value,
            None => fault::<T, E>(AccessError::ValueOnError),
        }
    }
    /// The value, mutably.
    ///
    /// # Panics
    /// If the error branch is alive.
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self.ok_mut() {
            Some(value) => value,
            None => fault::<T, E>(AccessError::ValueOnError),
        }
    }
    /// Moves the value out.
    ///
    /// # Panics
    /// If the error branch is alive.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.into_result() {
            Ok(value) => value,
            Err(_) => fault::<T, E>(AccessError::ValueOnError),
        }
    }
    /// The error.
    ///
    /// # Panics
    /// If the value branch is alive.
    #[track_caller]
    pub fn error(&self) -> &E {
        match self.err_ref() {
            Some(error) => error,
            None => fault::<T, E>(AccessError::ErrorOnValue),
        }
    }
    /// The error, mutably.
    ///
    /// # Panics
    /// If the value branch is alive.
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match self.err_mut() {
            Some(error) => error,
            None => fault::<T, E>(AccessError::ErrorOnValue),
        }
    }
    /// Moves the error out.
    ///
    /// # Panics
    /// If the value branch is alive.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.into_result() {
            Ok(_) => fault::<T, E>(AccessError::ErrorOnValue),
            Err(error) => error,
        }
    }
    /// A copy of the error, wrapped.
    ///
    /// # Panics
    /// If the value branch is alive.
    #[track_caller]
    pub fn get_unexpected(&self) -> Unexpected<E>
    where
        E: Clone,
    {
        Unexpected::new(self.error().clone())
    }

    /// A copy of the value if there is one, `fallback` converted to `T` otherwise.
    ///
    /// The conversion only runs when the error branch is alive.
    pub fn value_or<U: Into<T>>(&self, fallback: U) -> T
    where
        T: Clone,
    {
        match self.ok_ref() {
            Some(value) => value.clone(),
            None => fallback.into(),
        }
    }
    /// Like [`Self::value_or`], but only evaluates the fallback when the error branch is alive.
    pub fn value_or_else<U: Into<T>, F: FnOnce() -> U>(&self, fallback: F) -> T
    where
        T: Clone,
    {
        match self.ok_ref() {
            Some(value) => value.clone(),
            None => fallback().into(),
        }
    }
    /// Like [`Self::value_or`], moving the value out instead of copying it.
    pub fn into_value_or<U: Into<T>>(self, fallback: U) -> T {
        match self.into_result() {
            Ok(value) => value,
            Err(_) => fallback.into(),
        }
    }

    /// Exchanges the contents of `self` and `other`, branches included.
    pub fn swap(&mut self, other: &mut Self) {
        match (self.discriminant, other.discriminant) {
            (Discriminant::Ok, Discriminant::Ok) => unsafe {
                core::mem::swap(self.storage.ok_mut(), other.storage.ok_mut())
            },
            (Discriminant::Err, Discriminant::Err) => unsafe {
                core::mem::swap(self.storage.err_mut(), other.storage.err_mut())
            },
            (Discriminant::Ok, Discriminant::Err) => unsafe { Self::swap_across(self, other) },
            (Discriminant::Err, Discriminant::Ok) => unsafe { Self::swap_across(other, self) },
        }
    }
    /// # Safety
    /// `holding_value` must have its value branch alive, `holding_error` its error branch.
    unsafe fn swap_across(holding_value: &mut Self, holding_error: &mut Self) {
        // The error must be out before its storage is reused for the value.
        let error = holding_error.storage.take_err();
        holding_error.storage.write_ok(holding_value.storage.take_ok());
        holding_value.storage.write_err(error);
        holding_value.discriminant = holding_value.discriminant.flipped();
        holding_error.discriminant = holding_error.discriminant.flipped();
    }

    /// Replaces the contents of `self` with `source`'s, dropping the previous payload.
    pub fn assign(&mut self, source: Self) {
        let mut temporary = source;
        temporary.swap(self);
    }
    /// Replaces the contents of `self` with `value`.
    pub fn assign_value(&mut self, value: T) {
        self.assign(Self::new(value))
    }
    /// Replaces the contents of `self` with the wrapped error.
    pub fn assign_unexpected(&mut self, unexpected: Unexpected<E>) {
        self.assign(Self::from_unexpected(unexpected))
    }
}

impl<E> Expected<(), E> {
    /// Constructs the "succeeded with no data" branch.
    pub const fn success() -> Self {
        Self::new(())
    }
    /// Checks that the value branch is alive.
    ///
    /// # Panics
    /// If the error branch is alive.
    #[track_caller]
    pub fn check(&self) {
        self.value();
    }
}

/// Exchanges the contents of `a` and `b`, see [`Expected::swap`].
pub fn swap<T, E>(a: &mut Expected<T, E>, b: &mut Expected<T, E>) {
    a.swap(b)
}

impl<T, E> Drop for Expected<T, E> {
    fn drop(&mut self) {
        if VariantStorage::<T, E>::IS_TRIVIAL {
            return;
        }
        unsafe {
            if self.has_value() {
                self.storage.drop_ok()
            } else {
                self.storage.drop_err()
            }
        }
    }
}

impl<T: Default, E> Default for Expected<T, E> {
    fn default() -> Self {
        Self {
            discriminant: Discriminant::Ok,
            storage: VariantStorage::default(),
        }
    }
}

impl<T: Clone, E: Clone> Clone for Expected<T, E> {
    fn clone(&self) -> Self {
        match self.as_result() {
            Ok(value) => Self::new(value.clone()),
            Err(error) => Self::from_error(error.clone()),
        }
    }
    fn clone_from(&mut self, source: &Self) {
        self.assign(source.clone())
    }
}

impl<T, E> core::fmt::Debug for Expected<T, E>
where
    T: core::fmt::Debug,
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_result().fmt(f)
    }
}

impl<T, E> Deref for Expected<T, E> {
    type Target = T;
    #[track_caller]
    fn deref(&self) -> &T {
        self.value()
    }
}
impl<T, E> DerefMut for Expected<T, E> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T, E> From<Unexpected<E>> for Expected<T, E> {
    fn from(value: Unexpected<E>) -> Self {
        Self::from_unexpected(value)
    }
}
impl<T, E> From<core::result::Result<T, E>> for Expected<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::new(value),
            Err(error) => Self::from_error(error),
        }
    }
}
impl<T, E> From<Expected<T, E>> for core::result::Result<T, E> {
    fn from(value: Expected<T, E>) -> Self {
        value.into_result()
    }
}
impl<T, E> From<&Expected<T, E>> for bool {
    fn from(value: &Expected<T, E>) -> Self {
        value.has_value()
    }
}
