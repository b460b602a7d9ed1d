//! Timezone conversion of date strings.
//!
//! A two-step pipeline: parse the text as a wall clock in the source
//! timezone, then render the resulting instant in the destination timezone.
//! Any failure in the parse step propagates as `None`.

use chrono_tz::Tz;

use crate::format::{format_layout_tz, format_tz};
use crate::parse::{is_blank, parse_layout_tz, parse_tz};

/// Re-express a date string in another timezone, auto-detecting the source
/// layout and rendering with the default layout.
///
/// # Examples
/// ```
/// use chrono_tz::Tz;
///
/// assert_eq!(
///     dtfmt::convert_timezone("2020-01-01 12:00:00", chrono_tz::Asia::Shanghai, Tz::UTC).as_deref(),
///     Some("2020-01-01 04:00:00"),
/// );
/// ```
pub fn convert_timezone(text: &str, src: Tz, dest: Tz) -> Option<String> {
    if is_blank(text) {
        return None;
    }
    let instant = parse_tz(text, src)?;
    format_tz(instant, dest)
}

/// Re-express a date string in another timezone, keeping the same layout on
/// both sides.
pub fn convert_timezone_layout(text: &str, layout: &str, src: Tz, dest: Tz) -> Option<String> {
    if is_blank(text) {
        return None;
    }
    let instant = parse_layout_tz(text, layout, src)?;
    format_layout_tz(instant, layout, dest)
}

/// Re-express a date string in another timezone with distinct source and
/// destination layouts.
pub fn convert_timezone_layouts(
    text: &str,
    src_layout: &str,
    dest_layout: &str,
    src: Tz,
    dest: Tz,
) -> Option<String> {
    if is_blank(text) {
        return None;
    }
    let instant = parse_layout_tz(text, src_layout, src)?;
    format_layout_tz(instant, dest_layout, dest)
}
