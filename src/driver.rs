// Copyright 2025 the quadbench Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed passes over the workload, and the sweep of pass sizes.

use core::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::{debug, info};

use crate::{workload, BenchError, CallingConvention, Coefficients, DEFAULT_EPSILON};

/// Whether a pass runs on one thread or on a worker pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "there are exactly two modes")]
pub enum ExecutionMode {
    /// One thread, indices in order. Repeated runs are bit-identical.
    #[default]
    Sequential,
    /// A fixed pool of workers merging into one locked sum.
    ///
    /// The order of the merges varies between runs, so the last bits of the
    /// checksum may too.
    Parallel,
}

/// Parameters of a benchmark.
///
/// ```
/// use quadbench::{BenchConfig, ExecutionMode};
///
/// let config = BenchConfig::default()
///     .sweep(1024, 8192)
///     .mode(ExecutionMode::Parallel)
///     .threads(4);
/// assert_eq!(config.sizes().collect::<Vec<_>>(), [1024, 2048, 4096, 8192]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct BenchConfig {
    /// Smallest number of equations in a pass.
    pub from: u64,
    /// Largest number of equations in a pass. Sizes double from `from`
    /// while they do not exceed this.
    pub to: u64,
    /// Absolute tolerance of every "approximately zero" test.
    pub epsilon: f64,
    /// Sequential or parallel passes.
    pub mode: ExecutionMode,
    /// Worker count for parallel passes. `None` uses one worker per
    /// available hardware thread.
    pub threads: Option<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            from: 4096,
            to: 4096 * 512,
            epsilon: DEFAULT_EPSILON,
            mode: ExecutionMode::Sequential,
            threads: None,
        }
    }
}

impl BenchConfig {
    /// Set the first and last pass sizes.
    #[must_use]
    pub fn sweep(mut self, from: u64, to: u64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Set the equality tolerance.
    #[must_use]
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the execution mode.
    #[must_use]
    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the worker count for parallel passes.
    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Pass sizes of the sweep: `from`, `2 * from`, `4 * from`, ... up to and
    /// including `to`.
    pub fn sizes(&self) -> Sizes {
        Sizes {
            next: (self.from != 0).then_some(self.from),
            to: self.to,
        }
    }

    /// Check that the configuration describes a runnable benchmark.
    ///
    /// # Errors
    ///
    /// See the variants of [`BenchError`] other than `ThreadPool`.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.from == 0 {
            return Err(BenchError::EmptySweep);
        }
        if self.to < self.from {
            return Err(BenchError::InvertedSweep {
                from: self.from,
                to: self.to,
            });
        }
        if self.threads == Some(0) {
            return Err(BenchError::NoWorkers);
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(BenchError::BadEpsilon(self.epsilon));
        }
        Ok(())
    }
}

/// Iterator over the pass sizes of a sweep, from [`BenchConfig::sizes`].
#[derive(Clone, Debug)]
pub struct Sizes {
    next: Option<u64>,
    to: u64,
}

impl Iterator for Sizes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let n = self.next.filter(|&n| n <= self.to)?;
        self.next = n.checked_mul(2);
        Some(n)
    }
}

/// Outcome of one timed pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct RunResult {
    /// Number of equations solved.
    pub n: u64,
    /// Wall-clock time of the pass, in milliseconds.
    pub elapsed_ms: f64,
    /// Sum of every root found.
    pub checksum: f64,
    /// Convention the pass exercised.
    pub convention: CallingConvention,
    /// How the pass was scheduled.
    pub mode: ExecutionMode,
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{:.3}\t{}", self.n, self.elapsed_ms, self.checksum)
    }
}

/// The accumulator parallel workers merge into.
///
/// Every [`add`](Self::add) takes the lock, so no update is lost regardless
/// of how many threads add at once.
#[derive(Debug, Default)]
pub struct SharedSum {
    total: Mutex<f64>,
}

impl SharedSum {
    /// Add `value` to the total.
    pub fn add(&self, value: f64) {
        // A panic elsewhere cannot leave an `f64` half-written.
        let mut total = self.total.lock().unwrap_or_else(PoisonError::into_inner);
        *total += value;
    }

    /// The accumulated total.
    pub fn into_inner(self) -> f64 {
        self.total
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs timed passes according to a [`BenchConfig`].
#[derive(Debug)]
pub struct Driver {
    config: BenchConfig,
    #[cfg(feature = "rayon")]
    pool: Option<rayon::ThreadPool>,
}

impl Driver {
    /// Validate `config` and, for parallel mode, start the worker pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the pool cannot
    /// be started.
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        #[cfg(feature = "rayon")]
        let pool = match config.mode {
            ExecutionMode::Sequential => None,
            ExecutionMode::Parallel => Some(
                rayon::ThreadPoolBuilder::new()
                    // Zero lets rayon pick the hardware concurrency.
                    .num_threads(config.threads.unwrap_or(0))
                    .thread_name(|i| format!("quadbench-{i}"))
                    .build()?,
            ),
        };
        debug!(?config, "driver ready");
        Ok(Driver {
            config,
            #[cfg(feature = "rayon")]
            pool,
        })
    }

    /// The configuration this driver was built with.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Solve the first `n` equations of the workload under `convention`,
    /// timing the whole pass.
    pub fn run(&self, n: u64, convention: CallingConvention) -> RunResult {
        let eps = self.config.epsilon;
        let start = Instant::now();
        let checksum = match self.config.mode {
            ExecutionMode::Sequential => run_sequential(n, convention, eps),
            ExecutionMode::Parallel => self.run_parallel(n, convention, eps),
        };
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(n, %convention, elapsed_ms, checksum, "pass finished");
        RunResult {
            n,
            elapsed_ms,
            checksum,
            convention,
            mode: self.config.mode,
        }
    }

    /// Run one pass per size of the sweep, handing each result to `report`
    /// as soon as it is available.
    pub fn sweep(&self, convention: CallingConvention, mut report: impl FnMut(&RunResult)) {
        info!(
            %convention,
            mode = ?self.config.mode,
            from = self.config.from,
            to = self.config.to,
            "sweep"
        );
        for n in self.config.sizes() {
            report(&self.run(n, convention));
        }
    }

    #[cfg(feature = "rayon")]
    fn run_parallel(&self, n: u64, convention: CallingConvention, eps: f64) -> f64 {
        let Some(pool) = &self.pool else {
            return run_scoped(n, worker_count(self.config.threads), convention, eps);
        };
        let sum = SharedSum::default();
        pool.install(|| {
            (0..n).into_par_iter().for_each(|i| {
                let local = convention.roots_sum(Coefficients::from_index(i), eps);
                sum.add(local);
            });
        });
        sum.into_inner()
    }

    #[cfg(not(feature = "rayon"))]
    fn run_parallel(&self, n: u64, convention: CallingConvention, eps: f64) -> f64 {
        run_scoped(n, worker_count(self.config.threads), convention, eps)
    }
}

fn run_sequential(n: u64, convention: CallingConvention, eps: f64) -> f64 {
    let mut sum = 0.0;
    for eq in workload(0..n) {
        sum += convention.roots_sum(eq, eps);
    }
    sum
}

/// Parallel pass on scoped threads; worker `w` takes indices `w`,
/// `w + workers`, `w + 2 * workers`, ...
fn run_scoped(n: u64, workers: usize, convention: CallingConvention, eps: f64) -> f64 {
    let sum = SharedSum::default();
    std::thread::scope(|s| {
        for w in 0..workers as u64 {
            let sum = &sum;
            s.spawn(move || {
                for i in (w..n).step_by(workers) {
                    let local = convention.roots_sum(Coefficients::from_index(i), eps);
                    sum.add(local);
                }
            });
        }
    });
    sum.into_inner()
}

fn worker_count(threads: Option<usize>) -> usize {
    threads.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(usize::from)
            .unwrap_or(1)
    })
}
