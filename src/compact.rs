// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Order-preserving removal of a byte value, in place or into a new buffer.
//!
//! All forms share one engine, [`compact_slice_by`]: a read cursor walks the
//! buffer front to back, and every kept element is copied down to a write
//! cursor. The write cursor only advances when the read cursor does, so
//! `write <= read` always holds and no element is overwritten before it has
//! been read.
//!
//! # Aliasing
//!
//! The in-place forms reuse the caller's storage. After the call only the
//! returned prefix is meaningful:
//!
//! ```text
//! before:  [ '2' '2' ' ' '4' '5' ]
//! after:   [ '2' '2' '4' '5' | '5' ]
//!            └── returned ──┘  └ stale, unspecified
//! ```

use tracing::debug;

use crate::verify::contracts::{check_compaction_preserves_order, check_no_skip_remaining};

/// Keep the elements for which `keep` returns true, moving them to the front
/// of `buf` in their original order. Returns the number kept.
///
/// Elements at `buf[kept..]` are left in an unspecified (but initialized)
/// state.
pub fn compact_slice_by<T: Copy>(buf: &mut [T], mut keep: impl FnMut(&T) -> bool) -> usize {
    let mut write = 0;
    for read in 0..buf.len() {
        let value = buf[read];
        if keep(&value) {
            buf[write] = value;
            write += 1;
        }
    }
    write
}

/// Remove every `skip` byte from `buf` in place, returning the compacted
/// prefix as a view into the same storage.
///
/// Bytes beyond the returned length are stale. Callers must not read them
/// as if they still held the original input.
pub fn compact_slice(buf: &mut [u8], skip: u8) -> &mut [u8] {
    let input_len = buf.len();
    let kept = compact_slice_by(buf, |&b| b != skip);
    debug!(input_len, kept, skip, "compacted slice");

    let out = &mut buf[..kept];
    check_no_skip_remaining(out, skip);
    out
}

/// Remove every `skip` byte from `buf`, truncating it to the new length.
///
/// The allocation is kept, so `buf.capacity()` is unchanged. Returns the
/// number of bytes removed.
pub fn compact_in_place(buf: &mut Vec<u8>, skip: u8) -> usize {
    let input_len = buf.len();
    let kept = compact_slice(buf, skip).len();
    buf.truncate(kept);
    input_len - kept
}

/// Copy the bytes of `input` that are not `skip` into a new vector.
///
/// `input` is left untouched.
pub fn compact(input: &[u8], skip: u8) -> Vec<u8> {
    let output: Vec<u8> = input.iter().copied().filter(|&b| b != skip).collect();
    debug!(
        input_len = input.len(),
        kept = output.len(),
        skip,
        "compacted into new buffer"
    );

    check_compaction_preserves_order(input, &output, skip);
    output
}
