//! List-item recognition and marker sequencing for plain-text outlines.
//!
//! The engine works on immutable slices of lines and never caches anything
//! between calls: every operation re-derives what it needs from the text it
//! is given.
//!
//! ```rust
//! use textwork_lists::{MarkerKind, classify, resolve_kind};
//!
//! let lines = ["i. first", "ii. second"];
//! let item = classify(lines[1]).unwrap();
//! assert_eq!(item.marker, "ii.");
//! assert_eq!(resolve_kind(item.marker, item.indent, 1, &lines), MarkerKind::Roman);
//! ```

pub mod classify;
pub mod context;
pub mod letters;
pub mod marker;
pub mod outline;
pub mod resolve;
pub mod roman;
pub mod step;

pub use classify::{ListLine, classify, is_blank};
pub use context::{Sibling, find_sibling_marker};
pub use marker::{BULLET_GLYPHS, Case, MarkerKind};
pub use outline::{
    Continuation, ContinueOptions, GlyphReplacement, continue_item, demote_item, promote_item,
};
pub use resolve::{bias_kind, resolve_kind};
pub use step::{Direction, step};
