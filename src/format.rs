//! Output format settings for delimited text.
//!
//! A [`Format`] bundles everything about the wire shape that is *not*
//! per-type metadata: the column delimiter, the line ending, the
//! replacement text for delimiter occurrences inside values, and the
//! date-time rendering function. It is a plain owned value passed to every
//! encode/decode call, so two calls can use different formats without any
//! global state or cache invalidation -- the per-type field layout is
//! format-independent.

use chrono::{DateTime, Timelike, Utc};

/// Renders a UTC timestamp into its cell text.
pub type DateTimeEncoder = fn(&DateTime<Utc>) -> String;

/// Wire-shape settings shared by every row of a document.
///
/// The default is tab-separated values with `\n` line endings, a single
/// space as the in-value delimiter replacement, and round-trip ISO-8601
/// timestamps (see [`round_trip_datetime`]).
///
/// ```
/// use tabrec::Format;
///
/// let fmt = Format::default().with_delimiter("|").with_line_ending("\r\n");
/// assert_eq!(fmt.delimiter, "|");
/// ```
#[derive(Clone, Debug)]
pub struct Format {
    /// Column separator. Values never contain it after encoding.
    pub delimiter: String,
    /// Terminator appended to every row, header included.
    pub line_ending: String,
    /// Substituted for each delimiter occurrence inside a value. This is a
    /// lossy one-way safeguard, not an escape: the original text is not
    /// recoverable on decode.
    pub delimiter_replacement: String,
    /// Date-time cell renderer. Read at encode time, so swapping it out
    /// affects subsequent rows without touching cached field layouts.
    pub encode_datetime: DateTimeEncoder,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            delimiter: "\t".to_string(),
            line_ending: "\n".to_string(),
            delimiter_replacement: " ".to_string(),
            encode_datetime: round_trip_datetime,
        }
    }
}

impl Format {
    /// Comma-separated preset; everything else as [`Format::default`].
    pub fn csv() -> Self {
        Self::default().with_delimiter(",")
    }

    /// Replace the column delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Replace the row terminator.
    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    /// Replace the in-value delimiter substitute.
    pub fn with_delimiter_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.delimiter_replacement = replacement.into();
        self
    }

    /// Replace the date-time renderer.
    pub fn with_datetime_encoder(mut self, encoder: DateTimeEncoder) -> Self {
        self.encode_datetime = encoder;
        self
    }

    /// Strip the delimiter out of a value's text.
    ///
    /// Every occurrence of [`delimiter`](Self::delimiter) is replaced with
    /// [`delimiter_replacement`](Self::delimiter_replacement), so the
    /// rendered cell can never introduce a spurious column split. Returns
    /// the input unchanged (modulo allocation) when no delimiter occurs.
    pub fn sanitize(&self, text: &str) -> String {
        if text.contains(self.delimiter.as_str()) {
            text.replace(self.delimiter.as_str(), &self.delimiter_replacement)
        } else {
            text.to_string()
        }
    }
}

/// Default timestamp rendering: ISO-8601 with seven fractional digits,
/// e.g. `1985-11-29T00:00:00.0000000`.
///
/// Seven digits is a 100-nanosecond resolution, which round-trips through
/// [`FieldValue::decode`](crate::FieldValue::decode) for any `DateTime<Utc>`
/// whose nanoseconds are a multiple of 100.
pub fn round_trip_datetime(dt: &DateTime<Utc>) -> String {
    format!(
        "{}.{:07}",
        dt.format("%Y-%m-%dT%H:%M:%S"),
        dt.nanosecond() / 100
    )
}
