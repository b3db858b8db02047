//! Identifier sequencer.
//!
//! Derives deterministic pallet-number sequences from a starting identifier
//! like `P001`. The parse is anchored: one or more letters followed by one
//! or more digits, nothing else. Embedded or out-of-order characters are
//! rejected rather than silently filtered out.

use crate::error::{PalletError, Result};

/// Upper bound on a single batch. Oversized requests are a validation
/// error, not a slow success.
pub const MAX_BATCH: usize = 1000;

/// Generate `count` identifiers starting at `start`, zero-padded to the
/// width of the starting number. Width grows naturally past the padding,
/// so `P998` + 3 yields `P998, P999, P1000`.
///
/// Pure and deterministic; fails before producing anything.
pub fn generate_sequence(start: &str, count: usize) -> Result<Vec<String>> {
    if count == 0 || count > MAX_BATCH {
        return Err(PalletError::InvalidFormat(format!(
            "batch count must be between 1 and {}, got {}",
            MAX_BATCH, count
        )));
    }

    let (prefix, digits) = split_identifier(start)?;
    let width = digits.len();
    let n: u64 = digits.parse().map_err(|_| {
        // Unreachable for sane widths, but the numeric body could still
        // overflow u64.
        PalletError::InvalidFormat(format!("numeric body too large: {}", digits))
    })?;
    n.checked_add(count as u64 - 1).ok_or_else(|| {
        PalletError::InvalidFormat(format!("sequence starting at {} overflows", start))
    })?;

    Ok((0..count as u64)
        .map(|i| format!("{}{:0width$}", prefix, n + i, width = width))
        .collect())
}

/// Split `start` into (upper-cased alphabetic prefix, digit body).
fn split_identifier(start: &str) -> Result<(String, &str)> {
    let s = start.trim();
    let invalid =
        || PalletError::InvalidFormat(format!("expected letters followed by digits, got {:?}", s));

    let digit_pos = s.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
    let (prefix, digits) = s.split_at(digit_pos);

    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    Ok((prefix.to_ascii_uppercase(), digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_zero_padded_sequence() {
        let ids = generate_sequence("P001", 3).unwrap();
        assert_eq!(ids, vec!["P001", "P002", "P003"]);
    }

    #[test]
    fn prefix_is_upper_cased() {
        let ids = generate_sequence("plt09", 2).unwrap();
        assert_eq!(ids, vec!["PLT09", "PLT10"]);
    }

    #[test]
    fn width_grows_past_padding() {
        let ids = generate_sequence("P998", 3).unwrap();
        assert_eq!(ids, vec!["P998", "P999", "P1000"]);
    }

    #[test]
    fn preserves_leading_zero_width() {
        let ids = generate_sequence("AB0007", 2).unwrap();
        assert_eq!(ids, vec!["AB0007", "AB0008"]);
    }

    #[test]
    fn sequence_is_strictly_increasing_and_unique() {
        let ids = generate_sequence("X090", 20).unwrap();
        assert_eq!(ids.len(), 20);
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for bad in ["", "123", "P", "P-001", "P0A1", "1P0", "P 01", "Ü01"] {
            assert!(
                matches!(
                    generate_sequence(bad, 1),
                    Err(PalletError::InvalidFormat(_))
                ),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn rejects_zero_and_oversized_counts() {
        assert!(generate_sequence("P001", 0).is_err());
        assert!(generate_sequence("P001", MAX_BATCH).is_ok());
        assert!(generate_sequence("P001", MAX_BATCH + 1).is_err());
    }

    #[test]
    fn rejects_numeric_overflow() {
        assert!(generate_sequence("P18446744073709551615", 2).is_err());
        assert!(generate_sequence("P99999999999999999999999", 1).is_err());
    }
}
