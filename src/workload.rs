// Copyright 2025 the quadbench Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic equation coefficients.

use core::ops::Range;

/// Coefficients of the quadratic equation a x² + b x + c = 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coefficients {
    /// Quadratic coefficient.
    pub a: f64,
    /// Linear coefficient.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Coefficients {
    /// Create coefficients from their values.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Coefficients { a, b, c }
    }

    /// The coefficients of the `index`th equation of a workload.
    ///
    /// Each coefficient cycles with a different period (2000, 200 and 20)
    /// and is centred on zero:
    ///
    /// * `a = (index mod 2000 - 1000) / 33`
    /// * `b = (index mod 200 - 100) / 22`
    /// * `c = (index mod 20 - 10) / 11`
    ///
    /// # Examples
    ///
    /// ```
    /// use quadbench::Coefficients;
    ///
    /// let first = Coefficients::from_index(0);
    /// assert_eq!(first, Coefficients::new(-1000.0 / 33.0, -100.0 / 22.0, -10.0 / 11.0));
    /// assert_eq!(Coefficients::from_index(2000), first);
    /// ```
    #[inline]
    pub fn from_index(index: u64) -> Self {
        Coefficients {
            a: centred(index, 2000, 33.0),
            b: centred(index, 200, 22.0),
            c: centred(index, 20, 11.0),
        }
    }

    /// Whether all three coefficients are within `eps` of zero.
    #[inline]
    pub fn is_degenerate(self, eps: f64) -> bool {
        crate::is_degenerate(self.a, self.b, self.c, eps)
    }
}

impl From<(f64, f64, f64)> for Coefficients {
    #[inline]
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Coefficients::new(a, b, c)
    }
}

#[inline]
fn centred(index: u64, period: u64, scale: f64) -> f64 {
    // Both operands are below 2^53, so the conversion is exact.
    ((index % period) as f64 - (period / 2) as f64) / scale
}

/// The coefficient stream for a range of indices.
///
/// ```
/// use quadbench::{workload, Coefficients};
///
/// let eqs: Vec<_> = workload(10..12).collect();
/// assert_eq!(eqs, [Coefficients::from_index(10), Coefficients::from_index(11)]);
/// ```
pub fn workload(indices: Range<u64>) -> impl Iterator<Item = Coefficients> + Clone {
    indices.map(Coefficients::from_index)
}

#[cfg(test)]
mod tests {
    use crate::workload::*;
    use crate::DEFAULT_EPSILON;

    #[test]
    fn first_equation() {
        let eq = Coefficients::from_index(0);
        assert_eq!(eq.a, -1000.0 / 33.0);
        assert_eq!(eq.b, -100.0 / 22.0);
        assert_eq!(eq.c, -10.0 / 11.0);
        assert!(eq.b * eq.b - 4.0 * eq.a * eq.c < 0.0);
    }

    #[test]
    fn pure_function_of_index() {
        let first = Coefficients::from_index(1000);
        for _ in 0..10 {
            assert_eq!(Coefficients::from_index(1000), first);
        }
        assert_eq!(first, Coefficients::new(0.0, -100.0 / 22.0, -10.0 / 11.0));
    }

    #[test]
    fn period_is_2000() {
        for i in 0..4000 {
            assert_eq!(Coefficients::from_index(i), Coefficients::from_index(i + 2000));
        }
    }

    #[test]
    fn no_degenerate_indices() {
        // `a` vanishes at 1000 (mod 2000) where `b` is -100/22, and `b`
        // vanishes at 100 (mod 200) which is never 1000 (mod 2000).
        let linear: Vec<u64> = (0..2000)
            .filter(|&i| Coefficients::from_index(i).a.abs() < DEFAULT_EPSILON)
            .collect();
        assert_eq!(linear, [1000]);
        assert!(!(0..2000).any(|i| Coefficients::from_index(i).is_degenerate(DEFAULT_EPSILON)));
    }

    #[test]
    fn ranges() {
        let eqs: Vec<_> = workload(0..5).collect();
        assert_eq!(eqs.len(), 5);
        assert_eq!(eqs[3], Coefficients::from_index(3));
        assert_eq!(workload(7..7).count(), 0);
    }
}
