//! Row-level primitives: joining cells into lines and splitting documents
//! back into lines.
//!
//! Header and data rows share one join/terminate primitive so the two can
//! never disagree on column count or termination. These helpers are kept
//! private to keep the public API focused on record semantics.

use crate::format::Format;
use crate::layout::Layout;

/// Join pre-encoded cells with the delimiter and append the line ending.
pub(crate) fn finish_row<S: AsRef<str>>(cells: &[S], fmt: &Format) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(&fmt.delimiter);
        }
        line.push_str(cell.as_ref());
    }
    line.push_str(&fmt.line_ending);
    line
}

/// Render one record as a data row, columns in layout order.
pub(crate) fn encode_record<T: 'static>(layout: &Layout<T>, record: &T, fmt: &Format) -> String {
    let cells: Vec<String> = layout
        .fields()
        .iter()
        .map(|spec| (spec.encode)(record, fmt))
        .collect();
    finish_row(&cells, fmt)
}

/// Render the header row from the layout's labels.
pub(crate) fn encode_header<T: 'static>(layout: &Layout<T>, fmt: &Format) -> String {
    finish_row(layout.labels(), fmt)
}

/// Split a document into logical lines on the configured line ending.
///
/// A document produced by this crate terminates every row, which leaves one
/// empty trailing segment after the split; that segment is dropped. Interior
/// empty lines are preserved and will surface as malformed rows downstream.
pub(crate) fn split_lines<'a>(text: &'a str, fmt: &Format) -> Vec<&'a str> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<&str> = text.split(fmt.line_ending.as_str()).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
