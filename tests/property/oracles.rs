//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations. They share no code with the
//! crate, so agreement is meaningful.

use std::collections::BTreeSet;

/// Compaction by rebuilding: push every byte that is not `skip`.
pub fn oracle_compact(input: &[u8], skip: u8) -> Vec<u8> {
    let mut out = Vec::new();
    for &b in input {
        if b != skip {
            out.push(b);
        }
    }
    out
}

/// Every 4-tuple over `[low, high]`, sorted into canonical form, kept if it
/// hits the target. Duplicates collapse in the set.
///
/// Visits `(high - low + 1)^4` tuples, so keep the range small.
pub fn oracle_quadruple_set(low: i64, high: i64, target: i64) -> BTreeSet<[i64; 4]> {
    let mut found = BTreeSet::new();
    if low > high {
        return found;
    }
    let values: Vec<i64> = (low..=high).collect();
    for &a in &values {
        for &b in &values {
            for &c in &values {
                for &d in &values {
                    if i128::from(a) + i128::from(b) + i128::from(c) + i128::from(d)
                        == i128::from(target)
                    {
                        let mut q = [a, b, c, d];
                        q.sort_unstable();
                        found.insert(q);
                    }
                }
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_compact() {
        assert_eq!(oracle_compact(b"22 45", b' '), b"2245");
    }

    #[test]
    fn test_oracle_quadruple_set_digits() {
        assert_eq!(oracle_quadruple_set(0, 9, 30).len(), 9);
        assert!(oracle_quadruple_set(0, 9, 30).contains(&[7, 7, 8, 8]));
        assert!(oracle_quadruple_set(9, 0, 30).is_empty());
    }
}
