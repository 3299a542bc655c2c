// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Enumeration of non-decreasing quadruples with a fixed sum.
//!
//! Four composed ranges, each starting where the previous component left
//! off:
//!
//! ```text
//! w in low..=high
//! └─ x in w..=high
//!    └─ y in x..=high
//!       └─ z in y..=high      keep if w + x + y + z == target
//! ```
//!
//! Because every inner range starts at the outer value, `w <= x <= y <= z`
//! holds by construction, and the nesting order is exactly lexicographic
//! order. Nothing is materialized: the result is a lazy iterator, and
//! cloning it before the first `next()` gives an independent restart.
//!
//! Sums are computed in `i128`, so any `i64` bounds are safe.

use std::iter::FusedIterator;

use tracing::debug;

use crate::types::{Quadruple, SearchBound};
use crate::verify::contracts::{check_lexicographic_step, check_quadruple_in_bound};

/// Lazy iterator over matching quadruples in lexicographic order.
///
/// Wraps the composed ranges and checks each emitted value against the
/// bound and the previous emission (debug builds only).
#[derive(Debug, Clone)]
pub struct Quadruples<I> {
    inner: I,
    bound: SearchBound,
    last: Option<Quadruple>,
}

impl<I> Quadruples<I> {
    fn new(inner: I, bound: SearchBound) -> Self {
        Self {
            inner,
            bound,
            last: None,
        }
    }

    /// The bound this search enumerates.
    pub fn bound(&self) -> SearchBound {
        self.bound
    }
}

impl<I: Iterator<Item = Quadruple>> Iterator for Quadruples<I> {
    type Item = Quadruple;

    fn next(&mut self) -> Option<Quadruple> {
        let q = self.inner.next()?;
        check_quadruple_in_bound(&q, &self.bound);
        if let Some(prev) = &self.last {
            check_lexicographic_step(prev, &q);
        }
        self.last = Some(q);
        Some(q)
    }
}

impl<I: FusedIterator<Item = Quadruple>> FusedIterator for Quadruples<I> {}

/// Every `(w, x, y, z)` with `low <= w <= x <= y <= z <= high` and
/// `w + x + y + z == target`, in lexicographic order.
///
/// Brute force: all `O((high - low)^4)` candidates are visited. `low > high`
/// yields nothing.
///
/// # Example
///
/// ```
/// use quadsift::find_quadruples;
///
/// let first = find_quadruples(0, 9, 30).next().unwrap();
/// assert_eq!(first.as_array(), [3, 9, 9, 9]);
/// ```
pub fn find_quadruples(
    low: i64,
    high: i64,
    target: i64,
) -> Quadruples<impl FusedIterator<Item = Quadruple> + Clone> {
    debug!(low, high, target, pruned = false, "quadruple search");
    let sum = i128::from(target);

    let inner = (low..=high).flat_map(move |w| {
        (w..=high).flat_map(move |x| {
            (x..=high).flat_map(move |y| {
                (y..=high).filter_map(move |z| {
                    let q = Quadruple::from_ordered(w, x, y, z);
                    (q.sum() == sum).then_some(q)
                })
            })
        })
    });

    Quadruples::new(inner, SearchBound::new(low, high, target))
}

/// Same sequence as [`find_quadruples`], but each range stops as soon as
/// the smallest sum it could still produce exceeds `target`.
///
/// With `w` fixed, the smallest completion is `w + x + x + x` at the next
/// level, and so on down. Each of these lower bounds grows with the range
/// variable, so `take_while` cuts exactly the hopeless tail.
pub fn find_quadruples_pruned(
    low: i64,
    high: i64,
    target: i64,
) -> Quadruples<impl FusedIterator<Item = Quadruple> + Clone> {
    debug!(low, high, target, pruned = true, "quadruple search");
    let sum = i128::from(target);

    let inner = (low..=high)
        .take_while(move |&w| 4 * i128::from(w) <= sum)
        .flat_map(move |w| {
            let w_sum = i128::from(w);
            (w..=high)
                .take_while(move |&x| w_sum + 3 * i128::from(x) <= sum)
                .flat_map(move |x| {
                    let wx_sum = w_sum + i128::from(x);
                    (x..=high)
                        .take_while(move |&y| wx_sum + 2 * i128::from(y) <= sum)
                        .flat_map(move |y| {
                            let wxy_sum = wx_sum + i128::from(y);
                            (y..=high)
                                .take_while(move |&z| wxy_sum + i128::from(z) <= sum)
                                .filter(move |&z| wxy_sum + i128::from(z) == sum)
                                .map(move |z| Quadruple::from_ordered(w, x, y, z))
                        })
                })
        });

    Quadruples::new(inner, SearchBound::new(low, high, target))
}

impl SearchBound {
    /// Enumerate this bound with [`find_quadruples`].
    pub fn quadruples(&self) -> Quadruples<impl FusedIterator<Item = Quadruple> + Clone> {
        find_quadruples(self.low, self.high, self.target)
    }

    /// Enumerate this bound with [`find_quadruples_pruned`].
    pub fn quadruples_pruned(&self) -> Quadruples<impl FusedIterator<Item = Quadruple> + Clone> {
        find_quadruples_pruned(self.low, self.high, self.target)
    }
}
