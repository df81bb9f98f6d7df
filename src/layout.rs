//! Field metadata resolution and the per-type layout cache.
//!
//! This module provides:
//! - [`TypeTag`]: a lightweight runtime type identifier attached to each
//!   field so diagnostics can name the value type without carrying generics.
//! - [`FieldSpec`]: the declarative metadata for one serializable field --
//!   column order, header label, value type, and the encode/apply glue.
//! - [`Layout`]: the resolved, order-sorted field list shared by the encode
//!   and decode paths. Both sides index columns through the same layout, so
//!   the position a value is written at is always the position it is read
//!   back from.
//! - [`layout_of`]: the process-wide memoization of layouts keyed by
//!   `TypeId`. Resolution runs at most once per type per process; repeated
//!   calls return the same `Arc`.
//!
//! Sorting is stable and ascending by declared order. Order values need not
//! be contiguous or unique; ties keep declaration order so output stays
//! deterministic.

use crate::format::Format;
use crate::record::DelimitedRecord;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

/// A lightweight runtime type tag for debugging and diagnostics.
///
/// Carries the `TypeId` and a readable type name so field metadata can be
/// inspected without a generic parameter.
///
/// ```
/// use tabrec::TypeTag;
/// let tag = TypeTag::of::<u32>();
/// assert_eq!(tag.name, "u32");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeTag {
    /// Stable Rust type identifier.
    pub id: TypeId,
    /// Human-readable type name (best-effort).
    pub name: &'static str,
}

impl TypeTag {
    /// Construct a tag for `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
}

/// Declarative metadata for one serializable field of `T`.
///
/// Produced by the [`delimited_record!`](crate::delimited_record) macro.
/// Fields of `T` without a spec are invisible to serialization and parsing
/// in both directions.
pub struct FieldSpec<T> {
    /// Field name as declared on the struct.
    pub name: &'static str,
    /// Column position; rows are sorted ascending by this value.
    pub order: i32,
    /// Header label override. `None` falls back to `name`.
    pub label: Option<&'static str>,
    /// Runtime tag of the field's value type.
    pub value_type: TypeTag,
    /// Render the field's current value as one delimiter-free cell.
    pub encode: fn(&T, &Format) -> String,
    /// Overwrite the field from one cell of text.
    pub apply: fn(&mut T, &str, &Format),
}

impl<T> FieldSpec<T> {
    /// Header label: the override if present, else the field name.
    pub fn header_label(&self) -> &'static str {
        self.label.unwrap_or(self.name)
    }
}

/// The resolved column layout for a record type: its field specs sorted by
/// declared order (stable on ties) plus the derived header labels.
///
/// Immutable once built; [`layout_of`] builds it at most once per type.
pub struct Layout<T: 'static> {
    fields: Vec<&'static FieldSpec<T>>,
    labels: Vec<&'static str>,
}

impl<T: 'static> Layout<T> {
    fn resolve(specs: &'static [FieldSpec<T>]) -> Self {
        let mut fields: Vec<&'static FieldSpec<T>> = specs.iter().collect();
        // Stable sort: equal orders keep declaration order.
        fields.sort_by_key(|f| f.order);
        let labels = fields.iter().map(|f| f.header_label()).collect();
        Self { fields, labels }
    }

    /// Field specs in column order.
    pub fn fields(&self) -> &[&'static FieldSpec<T>] {
        &self.fields
    }

    /// Header labels in column order.
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Number of columns. Zero is valid and produces empty rows.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the type declares no serializable fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

type LayoutMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

static LAYOUTS: OnceLock<RwLock<LayoutMap>> = OnceLock::new();

/// Resolve (or fetch the cached) column layout for `T`.
///
/// The first call per type sorts the declared field table and stores the
/// result under `T`'s `TypeId`; every later call returns a clone of the same
/// `Arc`. Concurrent first calls may both resolve, but the first insert wins
/// and the results are identical by construction, so no caller ever sees a
/// partially built layout.
///
/// The cached structure is format-independent: it holds only field order and
/// labels, never a joined header line, so changing [`Format`] between calls
/// needs no cache invalidation.
pub fn layout_of<T: DelimitedRecord>() -> Arc<Layout<T>> {
    let cache = LAYOUTS.get_or_init(|| RwLock::new(HashMap::new()));
    let key = TypeId::of::<T>();

    if let Some(hit) = cache.read().unwrap().get(&key) {
        return downcast_layout::<T>(hit);
    }

    let resolved: Arc<dyn Any + Send + Sync> = Arc::new(Layout::<T>::resolve(T::fields()));
    let mut map = cache.write().unwrap();
    let entry = map.entry(key).or_insert(resolved);
    downcast_layout::<T>(entry)
}

fn downcast_layout<T: DelimitedRecord>(entry: &Arc<dyn Any + Send + Sync>) -> Arc<Layout<T>> {
    Arc::clone(entry)
        .downcast::<Layout<T>>()
        .unwrap_or_else(|_| unreachable!("layout cache entry keyed by TypeId::of::<T>()"))
}
