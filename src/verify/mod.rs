// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: error types and runtime contracts.
//!
//! 1. **Validated construction** (`Quadruple::new`, `SearchBound::validate`)
//!    reports an [`InvariantError`] instead of building a bad value.
//!
//! 2. **Runtime contracts** that panic in debug builds when an invariant is
//!    violated. Zero-cost in release, but catch bugs when tests run.

mod types;
pub mod contracts;

pub use types::*;
