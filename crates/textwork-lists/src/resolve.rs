//! Decides what kind of marker a token is.
//!
//! Bullets and decimals are syntactically obvious. Alphabetic tokens drawn
//! from the Roman symbols (`i.`, `c.`, `xiv.`) are ambiguous: a bias table
//! picks a default and the nearest same-depth sibling can override it when the
//! two form a consecutive pair.

use crate::context::find_sibling_marker;
use crate::marker::{
    MarkerKind, is_alpha, is_bullet, is_decimal, is_letter_biased, is_roman_symbols, token,
};
use crate::roman;

/// Kind a marker gets without looking at any other line.
///
/// Single `c`/`d`/`l`/`m` lean to Letter, every other Roman-symbol token leans
/// to Roman, and remaining alphabetic tokens are letters.
pub fn bias_kind(marker: &str) -> MarkerKind {
    if is_bullet(marker) {
        MarkerKind::Bullet
    } else if is_decimal(marker) {
        MarkerKind::Decimal
    } else if is_roman_symbols(marker) && !is_letter_biased(marker) {
        MarkerKind::Roman
    } else {
        MarkerKind::Letter
    }
}

/// Resolve the kind of `marker`, found on `lines[line_index]` at `indent`.
pub fn resolve_kind<S: AsRef<str>>(
    marker: &str,
    indent: usize,
    line_index: usize,
    lines: &[S],
) -> MarkerKind {
    let candidate = bias_kind(marker);
    if !matches!(candidate, MarkerKind::Letter | MarkerKind::Roman) {
        return candidate;
    }

    let Some(sibling) = find_sibling_marker(lines, line_index, indent) else {
        return candidate;
    };

    let mut kind = candidate;
    if follows_roman(sibling.marker, marker) {
        kind = MarkerKind::Roman;
    }
    if follows_letter(sibling.marker, marker) {
        kind = MarkerKind::Letter;
    }

    if kind != candidate {
        log::debug!(
            "{:?} resolved as {} after sibling {:?} (bias said {})",
            marker,
            kind,
            sibling.marker,
            candidate
        );
    }
    kind
}

/// `previous` is an unambiguous Roman numeral and `current` is worth one more.
fn follows_roman(previous: &str, current: &str) -> bool {
    if !is_roman_symbols(previous) || is_letter_biased(previous) || !is_roman_symbols(current) {
        return false;
    }
    match (roman::decode(token(previous)), roman::decode(token(current))) {
        (Some(prev), Some(curr)) => curr == prev + 1,
        _ => false,
    }
}

/// `previous` is a single letter and `current` starts with the character
/// right after it. Case-sensitive: `h.` does not vouch for `I.`.
fn follows_letter(previous: &str, current: &str) -> bool {
    if !is_single_letter(previous) {
        return false;
    }
    match (token(previous).chars().next(), token(current).chars().next()) {
        (Some(prev), Some(curr)) => u32::from(curr) == u32::from(prev) + 1,
        _ => false,
    }
}

fn is_single_letter(marker: &str) -> bool {
    is_alpha(marker) && token(marker).chars().count() == 1
}
