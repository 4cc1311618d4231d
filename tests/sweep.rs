// Copyright 2025 the quadbench Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-sweep behavior through the public API.

use quadbench::{
    workload, BenchConfig, CallingConvention, Driver, ExecutionMode, RunResult, DEFAULT_EPSILON,
};

fn collect(driver: &Driver, convention: CallingConvention) -> Vec<RunResult> {
    let mut results = Vec::new();
    driver.sweep(convention, |r| results.push(*r));
    results
}

#[test]
fn full_sequential_sweep_is_bit_identical() {
    let driver = Driver::new(BenchConfig::default()).unwrap();
    let first = collect(&driver, CallingConvention::SilentAbsence);
    let second = collect(&driver, CallingConvention::SilentAbsence);
    assert_eq!(first.len(), 10);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.n, b.n);
        assert_eq!(a.checksum.to_bits(), b.checksum.to_bits(), "n = {}", a.n);
        assert!(a.elapsed_ms >= 0.0);
    }
}

#[test]
fn parallel_sweep_tracks_sequential() {
    let config = BenchConfig::default().sweep(4096, 4096 * 16);
    let seq = Driver::new(config).unwrap();
    let par = Driver::new(config.mode(ExecutionMode::Parallel).threads(3)).unwrap();
    for convention in CallingConvention::ALL {
        let expected = collect(&seq, convention);
        let got = collect(&par, convention);
        assert_eq!(expected.len(), got.len());
        for (e, g) in expected.iter().zip(&got) {
            assert_eq!(e.n, g.n);
            assert_eq!(g.mode, ExecutionMode::Parallel);
            // Reassociating n terms moves the sum by at most ~n ulps of Σ|term|.
            let magnitude: f64 = workload(0..e.n)
                .map(|eq| convention.roots_sum(eq, DEFAULT_EPSILON).abs())
                .sum();
            let tol = e.n as f64 * f64::EPSILON * magnitude;
            assert!(
                (e.checksum - g.checksum).abs() <= tol,
                "{convention} n = {}: {} vs {}",
                e.n,
                e.checksum,
                g.checksum
            );
        }
    }
}

#[test]
fn output_lines() {
    let driver = Driver::new(BenchConfig::default().sweep(4096, 8192)).unwrap();
    let lines: Vec<String> = collect(&driver, CallingConvention::PropagatedError)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(lines.len(), 2);
    for (line, n) in lines.iter().zip(["4096", "8192"]) {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 3, "{line:?}");
        assert_eq!(fields[0], n);
        assert!(fields[1].parse::<f64>().is_ok());
        assert!(fields[2].parse::<f64>().is_ok());
    }
}
