// Copyright 2025 the quadbench Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

/// Tolerance used by [`approx_eq`] unless a [`BenchConfig`] overrides it.
///
/// This is an absolute difference, so it is not scale-invariant: two large
/// values that differ only in their last bits still compare unequal, and two
/// tiny values of different magnitude compare equal.
///
/// [`BenchConfig`]: crate::BenchConfig
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("quadbench requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn sqrt(self) -> Self => sqrt;
}

/// Returns `true` when `a` and `b` differ by strictly less than `eps`.
///
/// # Examples
///
/// ```
/// use quadbench::common::{approx_eq, DEFAULT_EPSILON};
///
/// assert!(approx_eq(1.0, 1.000001, DEFAULT_EPSILON));
/// assert!(!approx_eq(1.0, 1.00001, DEFAULT_EPSILON));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Left-to-right sum of a slice of roots.
///
/// Empty input sums to `0.0`, which is how "no roots" turns into a zero
/// contribution.
#[inline]
pub fn sum_roots(roots: &[f64]) -> f64 {
    roots.iter().fold(0.0, |acc, r| acc + r)
}
