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

/// An error payload, tagged as such.
///
/// This is how an [`Expected`](crate::Expected) is told to start out in its error branch,
/// and what [`Expected::get_unexpected`](crate::Expected::get_unexpected) hands back.
/// Equality, ordering and hashing are exactly those of `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unexpected<E> {
    value: E,
}

impl<E> Unexpected<E> {
    /// Wraps `value`.
    pub const fn new(value: E) -> Self {
        Self { value }
    }
    /// The wrapped error.
    pub const fn value(&self) -> &E {
        &self.value
    }
    /// The wrapped error, mutably.
    pub fn value_mut(&mut self) -> &mut E {
        &mut self.value
    }
    /// Unwraps the error.
    pub fn into_value(self) -> E {
        self.value
    }
}

/// Wraps `value` as an error, so that it may be used to build or compare against an
/// [`Expected`](crate::Expected).
///
/// ```
/// let oops = expected::wrap("oops");
/// assert_eq!(*oops.value(), "oops");
/// ```
pub const fn wrap<E>(value: E) -> Unexpected<E> {
    Unexpected::new(value)
}
