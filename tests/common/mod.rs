//! Shared test utilities and fixtures.

#![allow(dead_code)]

use quadsift::Quadruple;

/// The buffer from the demo driver.
pub const DEMO_INPUT: &[u8] = b"22 45";

/// Every non-decreasing quadruple of digits summing to 30, in emission order.
pub const DIGITS_TO_30: [[i64; 4]; 9] = [
    [3, 9, 9, 9],
    [4, 8, 9, 9],
    [5, 7, 9, 9],
    [5, 8, 8, 9],
    [6, 6, 9, 9],
    [6, 7, 8, 9],
    [6, 8, 8, 8],
    [7, 7, 7, 9],
    [7, 7, 8, 8],
];

/// Collect quadruples as plain arrays for easy comparison.
pub fn as_arrays(quads: impl IntoIterator<Item = Quadruple>) -> Vec<[i64; 4]> {
    quads.into_iter().map(|q| q.as_array()).collect()
}

/// Sort a quadruple's components into its canonical (non-decreasing) form.
pub fn canonical(mut values: [i64; 4]) -> [i64; 4] {
    values.sort_unstable();
    values
}
