//! dtfmt - date/time formatting and parsing helpers
//!
//! Formats instants into strings and parses strings back into instants using
//! a fixed vocabulary of `yyyy-MM-dd`-style layouts. Strings arriving without
//! a known layout are matched against an ordered table of patterns, so most
//! callers never name a layout at all. Formatters are cached per thread,
//! keyed by layout, timezone and locale.
//!
//! Failures never escape as errors from the high-level entry points: blank
//! input, an unrecognized shape, and a semantic parse failure all come back
//! as `None`, with a `tracing` diagnostic for the latter two.
//!
//! ```
//! use chrono_tz::Tz;
//!
//! let instant = dtfmt::parse("2020-01-01 12:00:00").unwrap();
//! assert_eq!(dtfmt::format(instant).as_deref(), Some("2020-01-01 12:00:00"));
//! assert_eq!(
//!     dtfmt::convert_timezone("2020-01-01 12:00:00", chrono_tz::Asia::Shanghai, Tz::UTC).as_deref(),
//!     Some("2020-01-01 04:00:00"),
//! );
//! ```

mod cache;
mod convert;
mod error;
mod format;
mod layout;
mod locale;
mod parse;

pub use cache::{
    formatter_for, formatter_for_locale, formatter_for_tz, formatter_for_tz_locale, CachedFormatter,
};
pub use convert::{convert_timezone, convert_timezone_layout, convert_timezone_layouts};
pub use error::{LayoutError, ParseDateError};
pub use format::{
    format, format_layout, format_layout_locale, format_layout_tz, format_layout_tz_locale,
    format_naive, format_naive_date, format_naive_iso, format_tz, format_tz_locale,
};
pub use layout::{
    detect_layout, supported_layouts, to_strftime, DATE_COMPACT, ISO_DATE, ISO_DATETIME,
    ISO_DATETIME_SHORT, UTC_DATETIME, UTC_DATETIME_MILLIS,
};
pub use locale::{locale_for_timezone, DateLocale};
pub use parse::{
    parse, parse_layout, parse_layout_locale, parse_layout_tz, parse_layout_tz_locale, parse_tz,
    parse_tz_locale,
};

/// Drop every formatter cached by the calling thread.
///
/// The next call rebuilds whatever it needs; this exists to bound memory on
/// long-lived worker threads, typically at the end of a request or task.
pub fn reset_cache() {
    cache::reset();
}
