// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: quadruples, search bounds, and compaction reports.
//!
//! Nothing here has identity beyond its value. A [`Quadruple`] is built per
//! match and thrown away; a [`SearchBound`] is plain configuration; a
//! [`Compaction`] is a snapshot handed to the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::verify::InvariantError;

/// Default inclusive lower bound for each quadruple component.
pub const DEFAULT_LOW: i64 = 0;

/// Default inclusive upper bound for each quadruple component.
pub const DEFAULT_HIGH: i64 = 9;

/// Default target sum.
pub const DEFAULT_TARGET: i64 = 30;

/// Default byte removed by the compactor (ASCII space).
pub const DEFAULT_SKIP: u8 = b' ';

/// An ordered 4-tuple with `w <= x <= y <= z`.
///
/// Fields are private so the ordering holds for every value that exists.
/// Serializes as a 4-element array, e.g. `[3, 9, 9, 9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "[i64; 4]")]
pub struct Quadruple {
    w: i64,
    x: i64,
    y: i64,
    z: i64,
}

impl Quadruple {
    /// Build a quadruple, rejecting any decreasing step.
    pub fn new(w: i64, x: i64, y: i64, z: i64) -> Result<Self, InvariantError> {
        let values = [w, x, y, z];
        if let Some(position) = values.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(InvariantError::NotNonDecreasing { position, values });
        }
        Ok(Self { w, x, y, z })
    }

    /// Build without checking. Callers in this crate guarantee the ordering
    /// by construction (each range starts at the previous component).
    #[inline]
    pub(crate) fn from_ordered(w: i64, x: i64, y: i64, z: i64) -> Self {
        debug_assert!(w <= x && x <= y && y <= z);
        Self { w, x, y, z }
    }

    #[inline]
    pub fn w(&self) -> i64 {
        self.w
    }

    #[inline]
    pub fn x(&self) -> i64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> i64 {
        self.z
    }

    pub fn as_array(&self) -> [i64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Component sum, widened so four `i64` values cannot overflow.
    pub fn sum(&self) -> i128 {
        self.as_array().iter().map(|&v| i128::from(v)).sum()
    }
}

impl From<Quadruple> for [i64; 4] {
    fn from(q: Quadruple) -> Self {
        q.as_array()
    }
}

impl TryFrom<[i64; 4]> for Quadruple {
    type Error = InvariantError;

    fn try_from(values: [i64; 4]) -> Result<Self, Self::Error> {
        let [w, x, y, z] = values;
        Quadruple::new(w, x, y, z)
    }
}

impl fmt::Display for Quadruple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.w, self.x, self.y, self.z)
    }
}

/// Closed component range `[low, high]` plus the sum every match must hit.
///
/// `low > high` is a legal, empty bound. Use [`SearchBound::validate`] to
/// treat it as an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBound {
    pub low: i64,
    pub high: i64,
    pub target: i64,
}

impl SearchBound {
    pub fn new(low: i64, high: i64, target: i64) -> Self {
        Self { low, high, target }
    }

    /// Strict check: `low <= high`.
    pub fn validate(&self) -> Result<(), InvariantError> {
        if self.low > self.high {
            return Err(InvariantError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Whether `value` lies in `[low, high]`.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl Default for SearchBound {
    fn default() -> Self {
        Self::new(DEFAULT_LOW, DEFAULT_HIGH, DEFAULT_TARGET)
    }
}

/// Before/after snapshot of one compaction, for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compaction {
    /// Bytes as given.
    pub input: Vec<u8>,
    /// Bytes that survived, in original order.
    pub output: Vec<u8>,
    /// The byte that was filtered out.
    pub skip: u8,
    /// Number of bytes removed (`input.len() - output.len()`).
    pub removed: usize,
    /// Capacity of the buffer after compaction. Equal to the input buffer's
    /// capacity, since the allocation is reused.
    pub capacity: usize,
}
