//! Marker vocabulary: kinds, glyphs, case, and the lexical predicates the
//! classifier and resolver share.

/// Bullet glyphs recognised as list markers.
pub const BULLET_GLYPHS: [char; 8] = ['*', '-', '•', '▪', '▫', '◦', '‣', '⁃'];

/// Glyph a typed asterisk is rewritten to when a list is continued.
pub const ROUND_BULLET: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkerKind {
    Bullet,
    Decimal,
    Letter,
    Roman,
}

impl MarkerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerKind::Bullet => "bullet",
            MarkerKind::Decimal => "decimal",
            MarkerKind::Letter => "letter",
            MarkerKind::Roman => "roman",
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Letter case of a marker. A marker is `Upper` when it equals its own
/// uppercase form, so `"II."` is upper and `"Ii."` is lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
}

impl Case {
    pub fn of(text: &str) -> Self {
        if text == text.to_uppercase() {
            Case::Upper
        } else {
            Case::Lower
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Case::Lower => text.to_ascii_lowercase(),
            Case::Upper => text.to_ascii_uppercase(),
        }
    }
}

/// Strip the trailing period from an ordered marker (`"iv."` -> `"iv"`).
pub(crate) fn token(marker: &str) -> &str {
    marker.strip_suffix('.').unwrap_or(marker)
}

pub(crate) fn is_bullet(marker: &str) -> bool {
    let mut chars = marker.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if BULLET_GLYPHS.contains(&ch))
}

pub(crate) fn is_decimal(marker: &str) -> bool {
    let digits = token(marker);
    marker.ends_with('.') && !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `[a-zA-Z]+\.`
pub(crate) fn is_alpha(marker: &str) -> bool {
    let letters = token(marker);
    marker.ends_with('.') && !letters.is_empty() && letters.bytes().all(|b| b.is_ascii_alphabetic())
}

/// `[ivxlcdmIVXLCDM]+\.`
pub(crate) fn is_roman_symbols(marker: &str) -> bool {
    let symbols = token(marker);
    marker.ends_with('.')
        && !symbols.is_empty()
        && symbols.bytes().all(|b| b"ivxlcdmIVXLCDM".contains(&b))
}

/// Single `c`, `d`, `l`, or `m` (any case): valid Roman numerals that read as
/// letters far more often than as 100, 500, 50, or 1000.
pub(crate) fn is_letter_biased(marker: &str) -> bool {
    matches!(
        token(marker).as_bytes(),
        [b'c' | b'd' | b'l' | b'm' | b'C' | b'D' | b'L' | b'M']
    ) && marker.ends_with('.')
}
