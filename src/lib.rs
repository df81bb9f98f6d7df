//! # Tabrec
//!
//! **Metadata-driven delimited text serialization** for typed record
//! collections. Tabrec turns slices of plain structs into TSV/CSV-like text
//! and back, driven entirely by declarative per-field metadata (an explicit
//! column order, an optional header label) rather than by field declaration
//! order or hand-written mapping code.
//!
//! ## Key Features
//!
//! - **Declarative columns** - register fields once with
//!   [`delimited_record!`]; unregistered fields never serialize or parse
//! - **Explicit ordering** - column position comes from the declared order,
//!   not from struct layout; ties keep declaration order
//! - **Header labels** - optional per-field display names for the header row
//! - **Cached resolution** - each type's column layout is resolved once per
//!   process and memoized by `TypeId`, safely under concurrent first access
//! - **Pluggable format** - delimiter, line ending, delimiter replacement,
//!   and date-time rendering travel in an explicit [`Format`] value
//! - **Total decoding** - unparseable cells degrade to default values;
//!   structurally short rows error with their record number
//!
//! ## Quick Start
//!
//! ```
//! use tabrec::{delimited_record, from_delimited_text, to_delimited_text, Format};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Person {
//!     full_name: String,
//!     id: u32,
//! }
//!
//! delimited_record! {
//!     Person {
//!         full_name: String [2, "Full Name"],
//!         id: u32 [1],
//!     }
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let fmt = Format::default();
//! let people = vec![Person { full_name: "Kyle Gobel".into(), id: 10101 }];
//!
//! let text = to_delimited_text(&people, true, &fmt);
//! assert_eq!(text, "id\tFull Name\n10101\tKyle Gobel\n");
//!
//! let back: Vec<Person> = from_delimited_text(&text, true, &fmt)?;
//! assert_eq!(back, people);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Tabrec resolves metadata lazily and memoizes it:
//! 1. [`delimited_record!`] registers a declaration-ordered field table for
//!    the type (name, order, label, value type, codec glue)
//! 2. On first use, [`layout_of`] stable-sorts the table by column order and
//!    caches the resulting [`Layout`] under the type's `TypeId`
//! 3. Encode walks the layout, rendering each field through [`FieldValue`]
//!    and joining with the [`Format`] delimiter; decode walks the same
//!    layout, so write and read positions can never diverge
//!
//! The layout cache is format-independent: it stores only structure (order
//! and labels), so swapping [`Format`] between calls takes effect
//! immediately with no invalidation.
//!
//! ## Module Overview
//!
//! - [`format`] - the [`Format`] settings value and default date rendering
//! - [`layout`] - field metadata, resolution, and the per-type cache
//! - [`record`] - the [`DelimitedRecord`] trait and registration macro
//! - [`value`] - the [`FieldValue`] cell codec
//! - [`document`] - whole-document and single-row entry points

pub mod document;
pub mod format;
pub mod layout;
pub mod record;
mod row;
pub mod value;

// General re-exports
pub use document::{from_data_row, from_delimited_text, to_data_row, to_delimited_text, to_header_row};
pub use format::{DateTimeEncoder, Format, round_trip_datetime};
pub use layout::{FieldSpec, Layout, TypeTag, layout_of};
pub use record::DelimitedRecord;
pub use value::FieldValue;
