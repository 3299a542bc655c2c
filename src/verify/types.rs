// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for invariant violations.
//!
//! The core operations are total, so nothing in the hot path returns this.
//! It shows up at the edges: building a [`Quadruple`](crate::Quadruple) by
//! hand, or asking a [`SearchBound`](crate::SearchBound) to be strict about
//! an empty range instead of quietly producing nothing.

use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Lower bound is above the upper bound.
    InvalidRange { low: i64, high: i64 },
    /// `values[position] > values[position + 1]`.
    NotNonDecreasing { position: usize, values: [i64; 4] },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::InvalidRange { low, high } => {
                write!(f, "invalid range: low {} > high {}", low, high)
            }
            InvariantError::NotNonDecreasing { position, values } => {
                write!(
                    f,
                    "quadruple {:?} not non-decreasing: values[{}] {} > values[{}] {}",
                    values,
                    position,
                    values[*position],
                    position + 1,
                    values[*position + 1]
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}
