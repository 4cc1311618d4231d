// Copyright 2025 the quadbench Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch over the error-signaling strategies being compared.

use core::fmt;

use crate::common::sum_roots;
use crate::error::Signal;
use crate::{solve_checked, solve_silent, solve_through_error, Coefficients};

/// How the solver reports a degenerate equation back to its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(
    clippy::exhaustive_enums,
    reason = "the set of strategies under comparison is fixed"
)]
pub enum CallingConvention {
    /// An empty root set, as an ordinary return value.
    SilentAbsence,
    /// A `Result` whose error is [`InvalidInput`](crate::InvalidInput).
    PropagatedError,
    /// Every outcome, roots included, travels through a [`Signal`] error.
    ResultChannel,
}

impl CallingConvention {
    /// All conventions, in the order a sweep runs them.
    pub const ALL: [Self; 3] = [
        Self::SilentAbsence,
        Self::PropagatedError,
        Self::ResultChannel,
    ];

    /// The heading printed above this convention's results.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SilentAbsence => "No exception",
            Self::PropagatedError => "Normal",
            Self::ResultChannel => "Full exception",
        }
    }

    /// Solve one equation and reduce the outcome to a single number.
    ///
    /// The result is the sum of the real roots, or `0.0` when there are none
    /// or the equation is degenerate. It is the same for every convention;
    /// only the path taken to reach it differs.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadbench::{CallingConvention, Coefficients, DEFAULT_EPSILON};
    ///
    /// let eq = Coefficients::new(1.0, -3.0, 2.0);
    /// for convention in CallingConvention::ALL {
    ///     assert_eq!(convention.roots_sum(eq, DEFAULT_EPSILON), 3.0);
    /// }
    /// ```
    #[inline]
    pub fn roots_sum(self, eq: Coefficients, eps: f64) -> f64 {
        match self {
            Self::SilentAbsence => roots_sum_silent(eq, eps),
            Self::PropagatedError => roots_sum_checked(eq, eps),
            Self::ResultChannel => roots_sum_through_error(eq, eps),
        }
    }
}

impl fmt::Display for CallingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn roots_sum_silent(eq: Coefficients, eps: f64) -> f64 {
    sum_roots(&solve_silent(eq.a, eq.b, eq.c, eps))
}

fn roots_sum_checked(eq: Coefficients, eps: f64) -> f64 {
    match solve_checked(eq.a, eq.b, eq.c, eps) {
        Ok(roots) => sum_roots(&roots),
        Err(_) => 0.0,
    }
}

fn roots_sum_through_error(eq: Coefficients, eps: f64) -> f64 {
    match solve_through_error(eq.a, eq.b, eq.c, eps) {
        Err(Signal::Solved(roots)) => sum_roots(&roots),
        Err(Signal::Invalid(_)) | Ok(()) => 0.0,
    }
}
