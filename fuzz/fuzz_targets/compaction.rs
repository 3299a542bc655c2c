// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for byte compaction.
//!
//! The in-place forms overwrite the buffer they read from. If the write
//! cursor ever got ahead of the read cursor, the output would contain
//! bytes that were never in the input at that position.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quadsift::{compact, compact_in_place, compact_slice};

fuzz_target!(|data: &[u8]| {
    let Some((&skip, input)) = data.split_first() else {
        return;
    };

    // Property 1: allocating form is a filter
    let expected: Vec<u8> = input.iter().copied().filter(|&b| b != skip).collect();
    assert_eq!(compact(input, skip), expected);

    // Property 2: in-place form agrees and keeps the allocation
    let mut buf = input.to_vec();
    let capacity = buf.capacity();
    let removed = compact_in_place(&mut buf, skip);
    assert_eq!(buf, expected);
    assert_eq!(removed, input.len() - expected.len());
    assert_eq!(buf.capacity(), capacity);

    // Property 3: slice view agrees
    let mut storage = input.to_vec();
    assert_eq!(compact_slice(&mut storage, skip), expected.as_slice());
});
