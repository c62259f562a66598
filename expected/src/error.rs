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

/// The ways an [`Expected`](crate::Expected) can be asked for a branch it doesn't hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AccessError {
    /// The value was requested while the error branch is alive.
    #[error("accessed the value of an Expected holding an error")]
    ValueOnError,
    /// The error was requested while the value branch is alive.
    #[error("accessed the error of an Expected holding a value")]
    ErrorOnValue,
}

/// Faults on a misuse of an [`Expected`](crate::Expected).
///
/// Never returns: with `panic = "abort"`, this terminates the process on the spot.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fault<T, E>(kind: AccessError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        value_type = core::any::type_name::<T>(),
        error_type = core::any::type_name::<E>(),
        "{kind}"
    );
    panic!(
        "{kind} (Expected<{}, {}>)",
        core::any::type_name::<T>(),
        core::any::type_name::<E>()
    )
}
