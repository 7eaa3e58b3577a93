//! Per-line view of how list items are recognized, for `textwork inspect`.

use std::fmt::Write;

use serde::Serialize;
use textwork_lists::{MarkerKind, classify, resolve_kind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport<'a> {
    /// 1-based line number.
    pub line: usize,
    pub indent: usize,
    pub marker: &'a str,
    pub kind: MarkerKind,
    pub content: &'a str,
}

/// Classify every list line, resolving each marker's kind in context.
pub fn inspect<'a>(lines: &[&'a str]) -> Vec<ItemReport<'a>> {
    lines
        .iter()
        .copied()
        .enumerate()
        .filter_map(|(idx, line)| {
            let item = classify(line)?;
            Some(ItemReport {
                line: idx + 1,
                indent: item.indent,
                marker: item.marker,
                kind: resolve_kind(item.marker, item.indent, idx, lines),
                content: item.content,
            })
        })
        .collect()
}

pub fn render(reports: &[ItemReport<'_>]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(
            out,
            "{:>4}: {:<7} {:<6} indent={} {:?}",
            report.line, report.kind, report.marker, report.indent, report.content
        );
    }
    out
}
