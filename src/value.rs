//! Per-value codec between typed field values and cell text.
//!
//! [`FieldValue`] is the closed capability table the decoder consults: a
//! field type participates in delimited serialization exactly when it
//! implements this trait. A type with no impl fails at compile time inside
//! the [`delimited_record!`](crate::delimited_record) expansion -- there is
//! no runtime "unsupported type" path.
//!
//! Decode policy: cell-level parse failures degrade silently to the type's
//! default value rather than erroring. Structural problems (a row with too
//! few columns) are reported by the document layer instead; see
//! [`from_delimited_text`](crate::from_delimited_text).

use crate::format::Format;
use chrono::{DateTime, NaiveDateTime, Utc};
use paste::paste;

/// A value that can occupy one cell of a delimited row.
///
/// `encode` must never emit the configured delimiter (use
/// [`Format::sanitize`]); `decode` must be total -- it returns the type's
/// default on unparseable input instead of failing.
pub trait FieldValue: Sized + 'static {
    /// Render this value as one cell of text, delimiter-free.
    fn encode(&self, fmt: &Format) -> String;

    /// Rebuild a value from one cell of text.
    ///
    /// Empty or unparseable tokens yield the type's default value.
    fn decode(token: &str, fmt: &Format) -> Self;
}

/// `String` cells pass through decoding untouched: the token *is* the
/// value. Encoding still sanitizes, since the string may contain the
/// delimiter.
impl FieldValue for String {
    fn encode(&self, fmt: &Format) -> String {
        fmt.sanitize(self)
    }

    fn decode(token: &str, _fmt: &Format) -> Self {
        token.to_string()
    }
}

macro_rules! display_parse_value {
    ($($ty:ident),+ $(,)?) => {
        $(
            paste! {
                #[doc = "`" $ty "` cells: `Display` out, `str::parse` in, default value on parse failure."]
                impl FieldValue for $ty {
                    fn encode(&self, fmt: &Format) -> String {
                        fmt.sanitize(&self.to_string())
                    }

                    fn decode(token: &str, _fmt: &Format) -> Self {
                        token.parse().unwrap_or_default()
                    }
                }
            }
        )+
    };
}

display_parse_value!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool);

/// Timestamps encode through [`Format::encode_datetime`] and decode from
/// `%Y-%m-%dT%H:%M:%S%.f` (the fraction is optional), falling back to the
/// Unix epoch when the token does not parse.
impl FieldValue for DateTime<Utc> {
    fn encode(&self, fmt: &Format) -> String {
        (fmt.encode_datetime)(self)
    }

    fn decode(token: &str, _fmt: &Format) -> Self {
        NaiveDateTime::parse_from_str(token, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .unwrap_or_default()
    }
}

/// Optional cells use the empty string as the absence sentinel: `None`
/// encodes to `""` and an empty token decodes to `None`. Non-empty tokens
/// follow the inner type's policy, so an unparseable token still becomes
/// `Some(default)` rather than `None`.
impl<T: FieldValue> FieldValue for Option<T> {
    fn encode(&self, fmt: &Format) -> String {
        match self {
            Some(value) => value.encode(fmt),
            None => String::new(),
        }
    }

    fn decode(token: &str, fmt: &Format) -> Self {
        if token.is_empty() {
            None
        } else {
            Some(T::decode(token, fmt))
        }
    }
}
