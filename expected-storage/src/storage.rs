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

use core::mem::{needs_drop, ManuallyDrop};
use core::ptr;

/// Either a `T` or an `E`, laid out in the same bytes.
///
/// The storage never knows which branch is alive: the owner tracks that with a
/// [`Discriminant`](crate::Discriminant), and must only call the accessors of the branch
/// it last wrote.
///
/// Two destruction paths exist, picked at compile time through [`Self::IS_TRIVIAL`]:
/// - when neither `T` nor `E` has drop glue, destroying a branch is a no-op and the whole
///   storage may be built and read inside `const` evaluation;
/// - otherwise, [`Self::drop_ok`] and [`Self::drop_err`] run the payload's destructor in
///   place.
///
/// Dropping a `VariantStorage` never drops its payload.
#[repr(C)]
pub union VariantStorage<T, E> {
    ok: ManuallyDrop<T>,
    err: ManuallyDrop<E>,
}

impl<T, E> VariantStorage<T, E> {
    /// `true` when neither branch has drop glue, in which case destroying a branch is free.
    pub const IS_TRIVIAL: bool = !needs_drop::<T>() && !needs_drop::<E>();

    /// Storage whose value branch holds `value`.
    pub const fn ok(value: T) -> Self {
        Self {
            ok: ManuallyDrop::new(value),
        }
    }
    /// Storage whose error branch holds `value`.
    pub const fn err(value: E) -> Self {
        Self {
            err: ManuallyDrop::new(value),
        }
    }

    /// # Safety
    /// The value branch must be alive.
    pub const unsafe fn ok_ref(&self) -> &T {
        &*(ptr::addr_of!(self.ok) as *const T)
    }
    /// # Safety
    /// The error branch must be alive.
    pub const unsafe fn err_ref(&self) -> &E {
        &*(ptr::addr_of!(self.err) as *const E)
    }
    /// # Safety
    /// The value branch must be alive.
    pub unsafe fn ok_mut(&mut self) -> &mut T {
        &mut self.ok
    }
    /// # Safety
    /// The error branch must be alive.
    pub unsafe fn err_mut(&mut self) -> &mut E {
        &mut self.err
    }

    /// Moves the value out, leaving the storage vacant.
    ///
    /// # Safety
    /// The value branch must be alive, and is considered dead afterwards: it must be
    /// neither read nor dropped again before a branch is written.
    pub unsafe fn take_ok(&mut self) -> T {
        ptr::read(self.ok_ref())
    }
    /// Moves the error out, leaving the storage vacant.
    ///
    /// # Safety
    /// The error branch must be alive, and is considered dead afterwards.
    pub unsafe fn take_err(&mut self) -> E {
        ptr::read(self.err_ref())
    }

    /// Constructs `value` in place in the value branch.
    ///
    /// # Safety
    /// The storage must be vacant: whatever was alive must have been taken or dropped,
    /// since it will be overwritten without running its destructor.
    pub unsafe fn write_ok(&mut self, value: T) {
        ptr::write(ptr::addr_of_mut!(self.ok), ManuallyDrop::new(value))
    }
    /// Constructs `value` in place in the error branch.
    ///
    /// # Safety
    /// The storage must be vacant.
    pub unsafe fn write_err(&mut self, value: E) {
        ptr::write(ptr::addr_of_mut!(self.err), ManuallyDrop::new(value))
    }

    /// Runs the value's destructor in place.
    ///
    /// # Safety
    /// The value branch must be alive, and is vacant afterwards.
    pub unsafe fn drop_ok(&mut self) {
        if needs_drop::<T>() {
            ManuallyDrop::drop(&mut self.ok)
        }
    }
    /// Runs the error's destructor in place.
    ///
    /// # Safety
    /// The error branch must be alive, and is vacant afterwards.
    pub unsafe fn drop_err(&mut self) {
        if needs_drop::<E>() {
            ManuallyDrop::drop(&mut self.err)
        }
    }
}

impl<T: Default, E> Default for VariantStorage<T, E> {
    fn default() -> Self {
        Self::ok(T::default())
    }
}
