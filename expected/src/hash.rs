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

use core::hash::{BuildHasher, Hash, Hasher};

use crate::Expected;

/// Hashes the active payload alone: the branch itself isn't fed to the hasher.
///
/// A value and an error with equal hashes may therefore collide, which is harmless since
/// equality still tells the branches apart.
impl<T: Hash, E: Hash> Hash for Expected<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.as_result() {
            Ok(value) => value.hash(state),
            Err(error) => error.hash(state),
        }
    }
}

/// Projects an [`Expected`] to a hash code, for hash tables keyed by something other than
/// [`Hash`] itself.
///
/// The code is that of the active payload, except that a zero-sized value (such as the `()`
/// of `Expected<(), E>`) always hashes to `0`.
#[derive(Debug, Clone, Default)]
pub struct HashAdapter<S> {
    build: S,
}

impl<S: BuildHasher> HashAdapter<S> {
    pub const fn new(build: S) -> Self {
        Self { build }
    }
    pub fn hash<T: Hash, E: Hash>(&self, expected: &Expected<T, E>) -> u64 {
        match expected.as_result() {
            Ok(_) if core::mem::size_of::<T>() == 0 => 0,
            Ok(value) => self.build.hash_one(value),
            Err(error) => self.build.hash_one(error),
        }
    }
}

#[cfg(feature = "std")]
impl HashAdapter<std::collections::hash_map::RandomState> {
    /// An adapter seeded like [`std::collections::HashMap`]'s default hasher.
    pub fn random() -> Self {
        Self::default()
    }
}
