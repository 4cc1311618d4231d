// Copyright 2025 the quadbench Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cost of error signaling, measured on quadratic equations.
//!
//! The quadbench library solves a large, deterministic stream of quadratic
//! equations under three [calling conventions](CallingConvention) that differ
//! only in how a degenerate equation (all coefficients zero) is reported:
//!
//! * [`solve_silent`] returns an empty root set.
//! * [`solve_checked`] returns `Err(InvalidInput)`.
//! * [`solve_through_error`] never returns `Ok`; the roots themselves come back
//!   as [`Signal::Solved`]. This is an anti-pattern, and measuring what it
//!   costs is the reason it exists.
//!
//! Every convention reduces each equation to the sum of its roots, so all
//! three produce the same checksum. A [`Driver`] times passes over the
//! workload, sequentially or on a worker pool, over a doubling sweep of pass
//! sizes.
//!
//! # Examples
//!
//! ```
//! use quadbench::{BenchConfig, CallingConvention, Driver, ExecutionMode};
//!
//! let sequential = Driver::new(BenchConfig::default()).unwrap();
//! let parallel = Driver::new(BenchConfig::default().mode(ExecutionMode::Parallel)).unwrap();
//!
//! let convention = CallingConvention::ResultChannel;
//! let a = sequential.run(4096, convention);
//! let b = parallel.run(4096, convention);
//! // Parallel merges happen in any order, so only nearly equal.
//! assert!((a.checksum - b.checksum).abs() < 1e-6);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default; without it,
//! and with `libm` enabled, the solver and workload still build in `no_std`
//! environments, but the [`Driver`] does not.
//!
//! The `rayon` feature (default) runs parallel passes on a rayon thread pool
//! rather than on plain scoped threads. The `serde` feature derives
//! serialization for the data types.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("quadbench requires either the `std` or `libm` feature");

pub mod common;
mod convention;
#[cfg(feature = "std")]
mod driver;
mod error;
mod solver;
mod workload;

pub use crate::common::DEFAULT_EPSILON;
pub use crate::convention::*;
#[cfg(feature = "std")]
pub use crate::driver::*;
pub use crate::error::*;
pub use crate::solver::*;
pub use crate::workload::*;
