// Copyright 2025 the quadbench Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs the full sweep for every calling convention and prints one
//! `n<TAB>elapsed_ms<TAB>checksum` line per pass.

use std::error::Error;
use std::io::{self, Write};

use quadbench::{BenchConfig, CallingConvention, Driver};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    // Diagnostics go to stderr so stdout carries only results.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let driver = Driver::new(BenchConfig::default())?;
    let mut out = io::stdout().lock();
    for convention in CallingConvention::ALL {
        let mut status = Ok(());
        info!("-------- {} --------", convention.label());
        driver.sweep(convention, |result| {
            if status.is_ok() {
                status = writeln!(out, "{result}");
            }
        });
        status?;
        out.flush()?;
    }
    Ok(())
}
