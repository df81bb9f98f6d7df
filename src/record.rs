//! Record registration: the [`DelimitedRecord`] trait and the
//! [`delimited_record!`](crate::delimited_record) macro that implements it.
//!
//! Rust has no runtime field reflection, so participation is declared
//! explicitly: each record type registers its serializable fields once,
//! naming the field, its value type, its column order, and optionally a
//! header label. Unregistered fields never serialize or parse.

use crate::layout::FieldSpec;

/// A type with a declared delimited-column layout.
///
/// Implement via [`delimited_record!`](crate::delimited_record) rather than
/// by hand; the macro keeps the field table, the value codec, and the
/// decoder's field assignments in sync.
pub trait DelimitedRecord: Sized + 'static {
    /// The declared field table, in declaration order (unsorted).
    ///
    /// Column sorting is the resolver's job; see
    /// [`layout_of`](crate::layout_of).
    fn fields() -> &'static [FieldSpec<Self>];
}

/// Declare which fields of a struct participate in delimited serialization.
///
/// Each entry is `field: ValueType [order]` or
/// `field: ValueType [order, "Header Label"]`. The value type must
/// implement [`FieldValue`](crate::FieldValue), the order is an `i32`
/// column position (sorted ascending, ties kept in declaration order), and
/// the label overrides the field name in the header row.
///
/// Struct fields left out of the list are invisible to both serialization
/// and parsing. An empty field list is valid: the type's rows are empty but
/// still terminated.
///
/// ```
/// use tabrec::{delimited_record, to_header_row, Format};
///
/// #[derive(Default)]
/// struct City {
///     name: String,
///     population: u64,
///     notes: String, // not serialized
/// }
///
/// delimited_record! {
///     City {
///         population: u64 [2],
///         name: String [1, "City"],
///     }
/// }
///
/// let header = to_header_row::<City>(&Format::default());
/// assert_eq!(header, "City\tpopulation\n");
/// ```
#[macro_export]
macro_rules! delimited_record {
    (@label) => {
        ::core::option::Option::None
    };
    (@label $label:literal) => {
        ::core::option::Option::Some($label)
    };
    ($ty:ty {
        $( $field:ident : $vty:ty [ $order:expr $(, $label:literal)? ] ),* $(,)?
    }) => {
        impl $crate::DelimitedRecord for $ty {
            fn fields() -> &'static [$crate::FieldSpec<Self>] {
                static FIELDS: ::std::sync::OnceLock<::std::vec::Vec<$crate::FieldSpec<$ty>>> =
                    ::std::sync::OnceLock::new();
                FIELDS
                    .get_or_init(|| {
                        ::std::vec![
                            $(
                                $crate::FieldSpec {
                                    name: ::core::stringify!($field),
                                    order: $order,
                                    label: $crate::delimited_record!(@label $($label)?),
                                    value_type: $crate::TypeTag::of::<$vty>(),
                                    encode: |record: &$ty, fmt: &$crate::Format| {
                                        $crate::FieldValue::encode(&record.$field, fmt)
                                    },
                                    apply: |record: &mut $ty, token: &str, fmt: &$crate::Format| {
                                        record.$field = <$vty as $crate::FieldValue>::decode(token, fmt);
                                    },
                                }
                            ),*
                        ]
                    })
                    .as_slice()
            }
        }
    };
}
