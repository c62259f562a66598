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

use crate::{Expected, Unexpected};

/// The error type of containers that never name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nullopt;
pub const NULLOPT: Nullopt = Nullopt;

/// A value-branch container whose error type is [`Nullopt`].
pub const fn make_result<T>(value: T) -> Expected<T, Nullopt> {
    Expected::new(value)
}
/// A value-branch container with an explicit error type: `make_result_as::<MyError, _>(42)`.
pub const fn make_result_as<E, T>(value: T) -> Expected<T, E> {
    Expected::new(value)
}
/// A "succeeded with no data" container.
pub const fn make_void_result() -> Expected<(), Nullopt> {
    Expected::success()
}
/// An error-branch container: `make_error_result::<u32, _>("oops")`.
pub const fn make_error_result<T, E>(error: E) -> Expected<T, E> {
    Expected::from_error(error)
}
/// An error-branch container whose error is built from a convertible `U`.
pub fn make_error_result_from<T, E, U: Into<E>>(error: U) -> Expected<T, E> {
    Expected::from_unexpected_into(Unexpected::new(error))
}
