//! Constant-time byte-sequence equality.

use subtle::ConstantTimeEq;

/// Compare two byte sequences in time independent of where they differ.
///
/// Both inputs are zero-padded to their common maximum length before the
/// comparison and the length check is folded in afterwards as a
/// constant-time choice, so neither a content difference nor a length
/// mismatch causes an early exit.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let width = a.len().max(b.len());
    let mut lhs = vec![0u8; width];
    let mut rhs = vec![0u8; width];
    lhs[..a.len()].copy_from_slice(a);
    rhs[..b.len()].copy_from_slice(b);

    (lhs.as_slice().ct_eq(rhs.as_slice()) & a.len().ct_eq(&b.len())).into()
}
