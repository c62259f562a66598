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

/// Which branch of a [`VariantStorage`](crate::VariantStorage) currently holds a live object.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discriminant {
    Err = 0,
    Ok = 1,
}

impl Discriminant {
    /// Returns `true` if the value branch is alive.
    pub const fn is_ok(self) -> bool {
        matches!(self, Discriminant::Ok)
    }
    /// Returns `true` if the error branch is alive.
    pub const fn is_err(self) -> bool {
        !self.is_ok()
    }
    /// The tag of the other branch.
    pub const fn flipped(self) -> Self {
        match self {
            Discriminant::Ok => Discriminant::Err,
            Discriminant::Err => Discriminant::Ok,
        }
    }
}
