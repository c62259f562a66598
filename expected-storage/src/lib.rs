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

//! The raw memory behind [`expected::Expected`](https://docs.rs/expected).
//!
//! [`VariantStorage`] is a union that holds either a `T` or an `E` in the same
//! bytes, and [`Discriminant`] is the tag that remembers which one is alive.
//! Neither checks anything: every accessor that touches a branch is `unsafe`,
//! and keeping the tag and the union in agreement is the owner's job.

#![cfg_attr(not(test), no_std)]

mod discriminant;
mod storage;

pub use discriminant::Discriminant;
pub use storage::VariantStorage;
