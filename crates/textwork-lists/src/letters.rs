//! Alphabetic marker codec over the bijective base-26 sequence
//! `a, b, …, z, aa, ab, …, az, ba, …, zz, aaa, …` (1-based).

/// Decode a letter token to its 1-based ordinal. Case-insensitive; `None` for
/// empty input, non-letters, or ordinals that overflow `u64`.
pub fn decode(letters: &str) -> Option<u64> {
    if letters.is_empty() {
        return None;
    }
    letters.bytes().try_fold(0u64, |acc, b| {
        if !b.is_ascii_alphabetic() {
            return None;
        }
        let digit = u64::from(b.to_ascii_lowercase() - b'a' + 1);
        acc.checked_mul(26)?.checked_add(digit)
    })
}

/// Encode a 1-based ordinal as lowercase letters. Zero encodes to the empty
/// string.
pub fn encode(mut ordinal: u64) -> String {
    let mut letters = Vec::new();
    while ordinal > 0 {
        ordinal -= 1;
        letters.push(b'a' + (ordinal % 26) as u8);
        ordinal /= 26;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}
