// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded search: every non-decreasing quadruple that hits a target sum.
//!
//! Two entry points produce the same sequence. `find_quadruples` visits the
//! whole candidate space; `find_quadruples_pruned` stops each range once the
//! target is out of reach. The property suite checks they never disagree.

mod quadruples;

pub use quadruples::*;
