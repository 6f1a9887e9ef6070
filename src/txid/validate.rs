//! Shape checks for transaction IDs.
//!
//! These only look at characters. `CS-20241399-256199-1234` passes
//! [`is_valid_long`]; see [`TransactionId::issued_at`](super::TransactionId::issued_at)
//! for reading the date back.

use super::PREFIX;

const LONG_GROUPS: [usize; 3] = [8, 6, 4];
const SHORT_GROUPS: [usize; 2] = [4, 4];

/// `PREFIX-` followed by 8 digits, `-`, 6 digits, `-`, 4 digits, and nothing else.
#[must_use]
pub fn is_valid_long(s: &str) -> bool {
    has_shape(s, &LONG_GROUPS)
}

/// `PREFIX-` followed by 4 digits, `-`, 4 digits, and nothing else.
#[must_use]
pub fn is_valid_short(s: &str) -> bool {
    has_shape(s, &SHORT_GROUPS)
}

fn has_shape(s: &str, groups: &[usize]) -> bool {
    let Some(rest) = s.strip_prefix(PREFIX).and_then(|r| r.strip_prefix('-')) else {
        return false;
    };
    let mut parts = rest.split('-');
    groups.iter().all(|&len| parts.next().is_some_and(|part| is_digits(part, len)))
        && parts.next().is_none()
}

fn is_digits(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
}
