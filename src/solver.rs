// Copyright 2025 the quadbench Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic equation solving, in three calling conventions.

use arrayvec::ArrayVec;

use crate::common::approx_eq;
#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::error::{InvalidInput, Signal};

/// Real roots of one equation: none, one, or two.
pub type RootSet = ArrayVec<f64, 2>;

/// Find real roots of the quadratic equation a x² + b x + c = 0.
///
/// Equality with zero is decided by [`approx_eq`] with tolerance `eps`, so
/// small leading coefficients make the equation linear, and a discriminant
/// within `eps` of zero yields a single double root.
///
/// * `a ≈ 0` and `b ≈ 0`: no roots, whatever `c` is.
/// * `a ≈ 0`: the linear root `-c / b`.
/// * discriminant `≈ 0`: `-b / (2a)`.
/// * discriminant `< 0`: no roots.
/// * otherwise `(-b + √d) / 2a` followed by `(-b - √d) / 2a`.
///
/// # Examples
///
/// ```
/// use quadbench::{solve_roots, DEFAULT_EPSILON};
///
/// // x² - 3x + 2 = (x - 1)(x - 2)
/// let roots = solve_roots(1.0, -3.0, 2.0, DEFAULT_EPSILON);
/// assert_eq!(roots.as_slice(), &[2.0, 1.0]);
/// ```
pub fn solve_roots(a: f64, b: f64, c: f64, eps: f64) -> RootSet {
    let mut result = RootSet::new();
    if approx_eq(a, 0.0, eps) {
        if !approx_eq(b, 0.0, eps) {
            result.push(-c / b);
        }
        return result;
    }
    let disc = b * b - 4.0 * a * c;
    if approx_eq(disc, 0.0, eps) {
        result.push(-b / (2.0 * a));
    } else if disc > 0.0 {
        let sq = disc.sqrt();
        result.push((-b + sq) / (2.0 * a));
        result.push((-b - sq) / (2.0 * a));
    }
    result
}

/// Whether all three coefficients are within `eps` of zero.
///
/// This is the one input the wrappers below treat differently.
#[inline]
pub fn is_degenerate(a: f64, b: f64, c: f64, eps: f64) -> bool {
    approx_eq(a, 0.0, eps) && approx_eq(b, 0.0, eps) && approx_eq(c, 0.0, eps)
}

/// Solve, reporting a degenerate equation as an empty root set.
pub fn solve_silent(a: f64, b: f64, c: f64, eps: f64) -> RootSet {
    if is_degenerate(a, b, c, eps) {
        return RootSet::new();
    }
    solve_roots(a, b, c, eps)
}

/// Solve, reporting a degenerate equation as [`InvalidInput`].
///
/// # Errors
///
/// Returns [`InvalidInput`] when `a`, `b` and `c` are all approximately zero.
pub fn solve_checked(a: f64, b: f64, c: f64, eps: f64) -> Result<RootSet, InvalidInput> {
    if is_degenerate(a, b, c, eps) {
        return Err(InvalidInput);
    }
    Ok(solve_roots(a, b, c, eps))
}

/// Solve, returning the roots through the error channel.
///
/// This never returns `Ok`. A solved equation comes back as
/// [`Signal::Solved`], a degenerate one as [`Signal::Invalid`].
///
/// # Errors
///
/// Always; see above.
pub fn solve_through_error(a: f64, b: f64, c: f64, eps: f64) -> Result<(), Signal> {
    if is_degenerate(a, b, c, eps) {
        return Err(InvalidInput.into());
    }
    Err(Signal::Solved(solve_roots(a, b, c, eps)))
}
