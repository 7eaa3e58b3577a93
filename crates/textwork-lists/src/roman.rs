//! Roman numeral codec.
//!
//! Both directions work on lowercase text; callers apply [`Case`] as a final
//! formatting step.
//!
//! [`Case`]: crate::Case

const SUBTRACTIVE_TABLE: [(u64, &str); 13] = [
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

fn symbol_value(symbol: char) -> Option<u64> {
    match symbol.to_ascii_lowercase() {
        'i' => Some(1),
        'v' => Some(5),
        'x' => Some(10),
        'l' => Some(50),
        'c' => Some(100),
        'd' => Some(500),
        'm' => Some(1000),
        _ => None,
    }
}

/// Decode a numeral by scanning left to right. When the next symbol is worth
/// more than the current one the pair counts as `next - current` and both are
/// consumed; otherwise the current symbol is added on its own.
///
/// Non-canonical input still decodes (`"iiv"` is 5); anything outside the
/// Roman alphabet, or the empty string, is `None`.
pub fn decode(numeral: &str) -> Option<u64> {
    let values = numeral
        .chars()
        .map(symbol_value)
        .collect::<Option<Vec<_>>>()?;
    if values.is_empty() {
        return None;
    }

    let mut total = 0u64;
    let mut i = 0;
    while i < values.len() {
        let current = values[i];
        match values.get(i + 1) {
            Some(&next) if next > current => {
                total += next - current;
                i += 2;
            }
            _ => {
                total += current;
                i += 1;
            }
        }
    }
    Some(total)
}

/// Encode by greedy largest-value-first substitution. Zero encodes to the
/// empty string; values past 3999 repeat `m`.
pub fn encode(mut value: u64) -> String {
    let mut numeral = String::new();
    for (step, symbols) in SUBTRACTIVE_TABLE {
        while value >= step {
            numeral.push_str(symbols);
            value -= step;
        }
    }
    numeral
}
