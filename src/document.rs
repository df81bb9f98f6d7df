//! Document-level entry points: whole collections and single rows, in both
//! directions.
//!
//! # Design notes
//! - The per-type layout is resolved once through
//!   [`layout_of`](crate::layout_of); every call here reuses the cached
//!   layout, so the introspection cost is paid on first contact with a type.
//! - Header skipping discards exactly the first line, nothing cleverer.
//! - Empty input text decodes to an empty `Vec`. (The legacy system this
//!   models produced a single default-valued record for empty input; that
//!   quirk is deliberately not reproduced.)
//! - A data line with fewer columns than the layout is a malformed-row
//!   error annotated with its record number. Extra trailing columns are
//!   ignored.

use crate::format::Format;
use crate::layout::{Layout, layout_of};
use crate::record::DelimitedRecord;
use crate::row::{encode_header, encode_record, split_lines};
use anyhow::{Context, Result, bail};

/// Serialize a collection into delimited text.
///
/// Emits the header row first when `include_header` is `true`, then one data
/// row per record in input order. Output always holds exactly
/// `records.len()` data rows; an empty collection with a header yields just
/// the header line.
///
/// ```
/// use tabrec::{delimited_record, to_delimited_text, Format};
///
/// #[derive(Default)]
/// struct Point { x: i32, y: i32 }
///
/// delimited_record!(Point { x: i32 [1], y: i32 [2] });
///
/// let text = to_delimited_text(&[Point { x: 3, y: 4 }], true, &Format::default());
/// assert_eq!(text, "x\ty\n3\t4\n");
/// ```
pub fn to_delimited_text<T: DelimitedRecord>(
    records: &[T],
    include_header: bool,
    fmt: &Format,
) -> String {
    let layout = layout_of::<T>();
    let mut out = String::new();
    if include_header {
        out.push_str(&encode_header(&layout, fmt));
    }
    for record in records {
        out.push_str(&encode_record(&layout, record, fmt));
    }
    out
}

/// Render the header row for `T`, labels in column order, terminated.
pub fn to_header_row<T: DelimitedRecord>(fmt: &Format) -> String {
    encode_header(&layout_of::<T>(), fmt)
}

/// Render one record as a single terminated data row.
pub fn to_data_row<T: DelimitedRecord>(record: &T, fmt: &Format) -> String {
    encode_record(&layout_of::<T>(), record, fmt)
}

/// Parse delimited text back into a collection.
///
/// Splits on the configured line ending, discards exactly the first line
/// when `has_header` is `true`, and decodes each remaining line with
/// [`from_data_row`] semantics. Record numbering in error contexts is
/// 1-based over the data lines.
///
/// # Errors
/// Returns an error if any data line has fewer columns than `T`'s layout.
/// Cell-level parse failures do not error; they yield the field type's
/// default value.
pub fn from_delimited_text<T: DelimitedRecord + Default>(
    text: &str,
    has_header: bool,
    fmt: &Format,
) -> Result<Vec<T>> {
    let layout = layout_of::<T>();
    let mut lines = split_lines(text, fmt);
    if has_header && !lines.is_empty() {
        lines.remove(0);
    }
    let mut out = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let record = decode_line(&layout, line, fmt)
            .with_context(|| format!("parse record #{}", i + 1))?;
        out.push(record);
    }
    Ok(out)
}

/// Parse one data line into a record.
///
/// Accepts the line with or without its terminator: at most one trailing
/// [`line_ending`](Format::line_ending) is stripped before splitting, so
/// [`to_data_row`] output decodes back directly. Starts from
/// `T::default()` and applies each column through the field's codec, so
/// fields beyond the layout keep their default values.
///
/// # Errors
/// Returns an error if the line has fewer columns than `T`'s layout.
pub fn from_data_row<T: DelimitedRecord + Default>(line: &str, fmt: &Format) -> Result<T> {
    let line = line.strip_suffix(fmt.line_ending.as_str()).unwrap_or(line);
    decode_line(&layout_of::<T>(), line, fmt)
}

fn decode_line<T: DelimitedRecord + Default>(
    layout: &Layout<T>,
    line: &str,
    fmt: &Format,
) -> Result<T> {
    let tokens: Vec<&str> = line.split(fmt.delimiter.as_str()).collect();
    if tokens.len() < layout.len() {
        bail!(
            "malformed row: {} columns, expected {}",
            tokens.len(),
            layout.len()
        );
    }
    let mut record = T::default();
    for (spec, token) in layout.fields().iter().zip(tokens) {
        (spec.apply)(&mut record, token, fmt);
    }
    Ok(record)
}
