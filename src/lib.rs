//! In-place byte compaction and bounded quadruple-sum enumeration.
//!
//! Two independent, stateless procedures:
//!
//! - **Compaction** removes every occurrence of one byte from a sequence,
//!   keeping the survivors in order. It can write into a new buffer or
//!   reuse the input's storage with a forward read/write cursor pair.
//! - **Quadruple search** lazily enumerates every `(w, x, y, z)` with
//!   `low <= w <= x <= y <= z <= high` summing to a target, in
//!   lexicographic order.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐
//! │  compact.rs  │     │  search/         │
//! │ (compact,    │     │ (find_quadruples,│
//! │  in place)   │     │  pruned variant) │
//! └──────────────┘     └──────────────────┘
//!        │                      │
//!        ▼                      ▼
//! ┌──────────────────────────────────────────┐
//! │  types.rs (Quadruple, SearchBound,       │
//! │            Compaction)                   │
//! │  verify/  (InvariantError, contracts)    │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Neither procedure prints anything. Formatting lives in the binary's
//! `cli::display` module.
//!
//! # Usage
//!
//! ```
//! use quadsift::{compact, compact_in_place, find_quadruples};
//!
//! assert_eq!(compact(b"22 45", b' '), b"2245");
//!
//! let mut buf = b"22 45".to_vec();
//! assert_eq!(compact_in_place(&mut buf, b' '), 1);
//! assert_eq!(buf, b"2245");
//!
//! assert_eq!(find_quadruples(0, 9, 30).count(), 9);
//! ```

// Module declarations
mod compact;
pub mod search;
mod types;
pub mod verify;

// Re-exports for public API
pub use compact::{compact, compact_in_place, compact_slice, compact_slice_by};
pub use search::{find_quadruples, find_quadruples_pruned, Quadruples};
pub use types::{
    Compaction, Quadruple, SearchBound, DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_SKIP, DEFAULT_TARGET,
};
pub use verify::InvariantError;

/// Compact `input` into its own buffer and describe what happened.
///
/// The buffer is compacted in place, so `capacity` reports the allocation
/// inherited from `input`.
pub fn compaction_report(input: Vec<u8>, skip: u8) -> Compaction {
    let original = input.clone();
    let mut buf = input;
    let removed = compact_in_place(&mut buf, skip);
    Compaction {
        input: original,
        capacity: buf.capacity(),
        output: buf,
        skip,
        removed,
    }
}
