use crate::marker::{Case, MarkerKind, ROUND_BULLET, token};
use crate::{letters, roman};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Following item at the same depth (Enter).
    Next,
    /// First item one level deeper (Tab).
    DemoteChild,
    /// First item one level shallower when no parent-level item exists to
    /// continue from (Shift+Tab).
    PromoteParent,
}

/// Compute the marker that replaces `marker` when moving in `direction`.
///
/// `kind` must come from [`resolve_kind`](crate::resolve_kind); this function
/// does not second-guess it.
pub fn step(marker: &str, kind: MarkerKind, direction: Direction) -> String {
    match direction {
        Direction::Next => next_marker(marker, kind),
        Direction::DemoteChild => match kind {
            MarkerKind::Bullet => marker.to_string(),
            MarkerKind::Decimal => "a.".to_string(),
            MarkerKind::Letter => "i.".to_string(),
            MarkerKind::Roman => "1.".to_string(),
        },
        Direction::PromoteParent => match kind {
            MarkerKind::Bullet => marker.to_string(),
            MarkerKind::Decimal => "i.".to_string(),
            MarkerKind::Roman => "a.".to_string(),
            MarkerKind::Letter => "1.".to_string(),
        },
    }
}

fn next_marker(marker: &str, kind: MarkerKind) -> String {
    match kind {
        MarkerKind::Bullet => {
            if marker == "*" {
                ROUND_BULLET.to_string()
            } else {
                marker.to_string()
            }
        }
        MarkerKind::Decimal => format!("{}.", increment_digits(token(marker))),
        MarkerKind::Letter => match letters::decode(token(marker)) {
            Some(ordinal) => {
                let next = letters::encode(ordinal.saturating_add(1));
                format!("{}.", Case::of(marker).apply(&next))
            }
            None => marker.to_string(),
        },
        MarkerKind::Roman => match roman::decode(token(marker)) {
            Some(value) => {
                let next = roman::encode(value.saturating_add(1));
                format!("{}.", Case::of(marker).apply(&next))
            }
            None => marker.to_string(),
        },
    }
}

/// Add one to a decimal digit string of any length. Leading zeros are
/// dropped, so `"007"` becomes `"8"`.
fn increment_digits(digits: &str) -> String {
    let mut out: Vec<char> = digits.trim_start_matches('0').chars().collect();
    let mut carry = true;
    for digit in out.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, '1');
    }
    out.into_iter().collect()
}
