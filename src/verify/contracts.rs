// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for compaction and quadruple enumeration.
//!
//! Debug-mode assertions that mirror the properties the test suite checks.
//! They compile to nothing in release builds (`debug_assert!`), and panic
//! with a `Contract violation:` message in debug builds.
//!
//! | Contract Function                    | Property                                  |
//! |--------------------------------------|-------------------------------------------|
//! | `check_compaction_preserves_order`   | output = input with every `skip` deleted  |
//! | `check_no_skip_remaining`            | no `skip` byte survives                   |
//! | `check_quadruple_in_bound`           | components in range, sum hits target      |
//! | `check_lexicographic_step`           | strictly increasing emission order        |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)

use crate::types::{Quadruple, SearchBound};

// ============================================================================
// COMPACTION CONTRACTS
// ============================================================================

/// Check that `output` is exactly `input` with every `skip` removed.
///
/// # Panics (debug builds only)
/// Panics if a kept byte is missing, reordered, or a non-skip byte was dropped.
#[inline]
pub fn check_compaction_preserves_order(input: &[u8], output: &[u8], skip: u8) {
    if cfg!(debug_assertions) {
        let mut kept = input.iter().filter(|&&b| b != skip);
        for (i, &b) in output.iter().enumerate() {
            let expected = kept.next();
            debug_assert!(
                expected == Some(&b),
                "Contract violation: compaction order - output[{}] = {:#04x}, expected {:?}",
                i,
                b,
                expected
            );
        }
        debug_assert!(
            kept.next().is_none(),
            "Contract violation: compaction dropped a byte other than {:#04x}",
            skip
        );
    }
}

/// Check that no `skip` byte survives compaction.
#[inline]
pub fn check_no_skip_remaining(output: &[u8], skip: u8) {
    debug_assert!(
        !output.contains(&skip),
        "Contract violation: skip byte {:#04x} survived compaction at position {:?}",
        skip,
        output.iter().position(|&b| b == skip)
    );
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check that an emitted quadruple lies in the bound and hits the target.
#[inline]
pub fn check_quadruple_in_bound(q: &Quadruple, bound: &SearchBound) {
    debug_assert!(
        bound.contains(q.w()) && bound.contains(q.z()),
        "Contract violation: quadruple ({}) outside [{}, {}]",
        q,
        bound.low,
        bound.high
    );
    debug_assert!(
        q.sum() == i128::from(bound.target),
        "Contract violation: quadruple ({}) sums to {}, target {}",
        q,
        q.sum(),
        bound.target
    );
}

/// Check that `next` strictly follows `prev` in lexicographic order.
///
/// Strictness also rules out duplicates.
#[inline]
pub fn check_lexicographic_step(prev: &Quadruple, next: &Quadruple) {
    debug_assert!(
        prev < next,
        "Contract violation: emission order - ({}) emitted before ({})",
        prev,
        next
    );
}
