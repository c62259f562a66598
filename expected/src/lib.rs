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

//! A value-or-error container.
//!
//! [`Expected<T, E>`] holds either a `T` or an `E` in a single storage region, and is meant
//! to be returned by fallible functions. Errors are plain data: build them with [`wrap`],
//! [`make_error_result`] or [`Expected::from_error`], and inspect them with
//! [`Expected::error`].
//!
//! ```
//! use expected::{wrap, Expected};
//!
//! fn parse(input: &str) -> Expected<u32, &'static str> {
//!     match input.parse() {
//!         Ok(value) => Expected::new(value),
//!         Err(_) => wrap("not a number").into(),
//!     }
//! }
//!
//! let mut a = parse("42");
//! let mut b = parse("forty-two");
//! assert_eq!(a.value_or(99u32), 42);
//! assert_eq!(b.value_or(99u32), 99);
//! assert!(a < b);
//!
//! a.swap(&mut b);
//! assert_eq!(*a.error(), "not a number");
//! assert_eq!(*b, 42);
//! ```
//!
//! Asking a container for the branch it doesn't hold faults; see [`AccessError`] for the
//! checked accessors that don't.
//!
//! Features:
//! - `std` (default): [`HashAdapter::random`], and `std::error::Error` for [`AccessError`].
//! - `tracing`: faults are logged through `tracing::error!` before panicking.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod cmp;
mod error;
mod expected;
mod factory;
mod hash;
mod unexpected;

pub use error::AccessError;
pub use expected::{swap, Expected};
pub use factory::{
    make_error_result, make_error_result_from, make_result, make_result_as, make_void_result,
    Nullopt, NULLOPT,
};
pub use hash::HashAdapter;
pub use unexpected::{wrap, Unexpected};

#[doc(hidden)]
pub mod __private {
    pub use crate::cmp::{equal, order};
}
