// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for quadruple search over arbitrary bounds.
//!
//! Bounds are arbitrary `i64`s, so sums near the extremes would overflow
//! in naive arithmetic. The range is clamped to a handful of values so each
//! run stays fast; the position of that range is not.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quadsift::{find_quadruples, find_quadruples_pruned};

#[derive(Debug, Arbitrary)]
struct Input {
    low: i64,
    width: u8,
    target: i64,
}

fuzz_target!(|input: Input| {
    let high = input.low.saturating_add(i64::from(input.width % 16));

    let brute: Vec<[i64; 4]> = find_quadruples(input.low, high, input.target)
        .map(|q| q.as_array())
        .collect();
    let pruned: Vec<[i64; 4]> = find_quadruples_pruned(input.low, high, input.target)
        .map(|q| q.as_array())
        .collect();

    assert_eq!(brute, pruned);

    let target = i128::from(input.target);
    for pair in brute.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    for [w, x, y, z] in brute {
        assert!(input.low <= w && w <= x && x <= y && y <= z && z <= high);
        assert_eq!(i128::from(w) + i128::from(x) + i128::from(y) + i128::from(z), target);
    }
});
