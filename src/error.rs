// Copyright 2025 the quadbench Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Two of these are not faults at all. [`InvalidInput`] and [`Signal`] are the
//! failure shapes whose cost is being measured; every one of them is caught
//! by a dispatcher in [`convention`](crate::convention) and turned into a
//! number. Only [`BenchError`] can reach a caller.

use crate::solver::RootSet;
use thiserror::Error;

/// All three coefficients are (approximately) zero.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("invalid parameters: a, b and c are all zero")]
pub struct InvalidInput;

/// Failure channel of [`solve_through_error`](crate::solve_through_error).
///
/// Both outcomes come back as `Err`; the roots ride along in
/// [`Signal::Solved`].
#[derive(Error, Clone, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "callers must match both shapes, that is the point"
)]
pub enum Signal {
    /// The equation is degenerate.
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
    /// The equation was solved; these are its real roots.
    #[error("solved with {} real root(s)", .0.len())]
    Solved(RootSet),
}

/// Errors that stop a benchmark from running.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BenchError {
    /// The sweep would start at zero inputs and never grow.
    #[error("sweep must start at a non-zero size")]
    EmptySweep,

    /// The sweep end is below its start, so nothing would run.
    #[error("sweep end {to} is below its start {from}")]
    InvertedSweep {
        /// First size.
        from: u64,
        /// Last size.
        to: u64,
    },

    /// A worker pool of zero threads was requested.
    #[error("worker count must be at least one")]
    NoWorkers,

    /// The equality tolerance is not a positive finite number.
    #[error("epsilon must be positive and finite, got {0}")]
    BadEpsilon(f64),

    /// The rayon pool could not be built.
    #[cfg(feature = "rayon")]
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
