// Pair analysis and byte substitution

use crate::core::constants::{SUB_BYTE_MAX, SUB_BYTE_MIN};
use std::collections::HashMap;

/// Finds the most frequent pair of adjacent bytes.
///
/// Occurrences are counted at every index, so they may overlap ("aaa" holds
/// two occurrences of `(a, a)`). Returns `None` for inputs shorter than two
/// bytes and for inputs where no pair occurs more than once. Ties resolve to
/// the first pair that reached the winning count in scan order, keeping the
/// output deterministic.
pub fn find_best_pair(data: &[u8]) -> Option<(u8, u8)> {
    if data.len() < 2 {
        return None;
    }

    let mut counts: HashMap<(u8, u8), u32> = HashMap::new();
    let mut best_pair = (data[0], data[1]);
    let mut best_count = 0u32;

    for window in data.windows(2) {
        let pair = (window[0], window[1]);
        let count = counts.entry(pair).or_insert(0);
        *count += 1;
        if *count > best_count {
            best_count = *count;
            best_pair = pair;
        }
    }

    // A pair must repeat to be worth the substitution.
    if best_count > 1 {
        Some(best_pair)
    } else {
        None
    }
}

/// Finds a byte value in `[SUB_BYTE_MIN, SUB_BYTE_MAX]` that occurs nowhere
/// in the data, scanning the range in ascending order.
///
/// `None` means every value in the range is already taken and substitution
/// is skipped; the compressor treats that as a fallback, not a failure.
pub fn find_substitution_byte(data: &[u8], pair: (u8, u8)) -> Option<u8> {
    let mut used = [false; 256];
    for &byte in data {
        used[byte as usize] = true;
    }
    used[pair.0 as usize] = true;
    used[pair.1 as usize] = true;

    (SUB_BYTE_MIN..=SUB_BYTE_MAX).find(|&candidate| !used[candidate as usize])
}

/// Replaces every non-overlapping, left-to-right occurrence of `pair` with
/// the single byte `sub_byte`, producing a new buffer.
///
/// Scanning advances past a replaced pair, so its second byte is never
/// reconsidered as the start of another match.
pub fn substitute_pair(data: &[u8], pair: (u8, u8), sub_byte: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < data.len() {
        if i + 1 < data.len() && data[i] == pair.0 && data[i + 1] == pair.1 {
            out.push(sub_byte);
            i += 2;
        } else {
            out.push(data[i]);
            i += 1;
        }
    }
    out
}

/// Expands every occurrence of `sub_byte` back into the original pair.
pub fn expand_substitution(data: &[u8], sub_byte: u8, pair: (u8, u8)) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 2);
    for &byte in data {
        if byte == sub_byte {
            out.push(pair.0);
            out.push(pair.1);
        } else {
            out.push(byte);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_pair_counts_overlapping_occurrences() {
        // (A,A) x4 beats (B,C) x2
        assert_eq!(find_best_pair(b"AAAAABCABC"), Some((b'A', b'A')));
    }

    #[test]
    fn best_pair_requires_a_repeat() {
        assert_eq!(find_best_pair(b"abcdef"), None);
    }

    #[test]
    fn best_pair_needs_two_bytes() {
        assert_eq!(find_best_pair(b""), None);
        assert_eq!(find_best_pair(b"x"), None);
    }

    #[test]
    fn best_pair_tie_break_is_first_to_reach_count() {
        // (a,b) and (c,d) both occur twice; (a,b) hits 2 first.
        assert_eq!(find_best_pair(b"abcdabcd"), Some((b'a', b'b')));
    }

    #[test]
    fn substitution_byte_skips_used_values() {
        let mut data = vec![b'A'; 4];
        data.push(0x80);
        data.push(0x81);
        assert_eq!(find_substitution_byte(&data, (b'A', b'A')), Some(0x82));
    }

    #[test]
    fn substitution_byte_none_when_range_exhausted() {
        let data: Vec<u8> = (SUB_BYTE_MIN..=SUB_BYTE_MAX).collect();
        assert_eq!(find_substitution_byte(&data, (0x80, 0x81)), None);
    }

    #[test]
    fn substitution_byte_never_returns_the_marker() {
        // Everything except 0xFF is taken, so there is no candidate left.
        let data: Vec<u8> = (0u8..=254).collect();
        assert_eq!(find_substitution_byte(&data, (0, 1)), None);
    }

    #[test]
    fn substitute_is_non_overlapping_left_to_right() {
        // "AAAA" collapses to two substitutes, "AAA" to one plus a literal.
        assert_eq!(substitute_pair(b"AAAA", (b'A', b'A'), 0x80), vec![0x80, 0x80]);
        assert_eq!(
            substitute_pair(b"AAA", (b'A', b'A'), 0x80),
            vec![0x80, b'A']
        );
    }

    #[test]
    fn substitute_and_expand_are_inverse() {
        let data = b"AAAAABCABC";
        let substituted = substitute_pair(data, (b'A', b'A'), 0x80);
        assert_eq!(
            substituted,
            vec![0x80, 0x80, b'A', b'B', b'C', b'A', b'B', b'C']
        );
        assert_eq!(
            expand_substitution(&substituted, 0x80, (b'A', b'A')),
            data.to_vec()
        );
    }
}
