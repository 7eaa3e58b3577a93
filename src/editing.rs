//! Editor-facing keypress handlers on top of the list engine.
//!
//! Handlers read the document through [`TextBuffer`], decide what to do, and
//! describe it as an [`EditPlan`] or as a [`NativeCommand`] the host should run
//! instead. [`execute`] does both against any buffer.

mod buffer;
mod handlers;
mod native;
mod stamp;

pub use buffer::{Document, Position, Range, TextBuffer, TextEdit};
pub use handlers::{Command, EditPlan, Outcome, enter, execute, shift_tab, tab};
pub use native::NativeCommand;
pub use stamp::{Placement, STAMP_FORMAT, date_stamp, stamp_line};
