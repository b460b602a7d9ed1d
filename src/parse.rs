//! Parsing entry points.
//!
//! Parsing never raises: blank input, an undetectable layout, and a semantic
//! parse failure all collapse to `None`. Detection misses log at info level,
//! real parse failures at error level with the text and configuration in
//! play.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{error, info};

use crate::cache::{self, CachedFormatter};
use crate::error::LayoutError;
use crate::layout::{detect_layout, ISO_DATETIME};
use crate::locale::DateLocale;

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn run(
    formatter: Result<Rc<CachedFormatter>, LayoutError>,
    text: &str,
    layout: &str,
    timezone: Option<Tz>,
    locale: Option<DateLocale>,
) -> Option<DateTime<Utc>> {
    let formatter = match formatter {
        Ok(formatter) => formatter,
        Err(err) => {
            error!(layout, %err, "cannot build formatter");
            return None;
        }
    };
    match formatter.parse(text) {
        Ok(instant) => Some(instant),
        Err(err) => {
            error!(
                text,
                layout,
                timezone = timezone.map(|tz| tz.name()),
                locale = locale.map(|locale| locale.country()),
                %err,
                "failed to parse date string"
            );
            None
        }
    }
}

fn detect(text: &str) -> Option<&'static str> {
    match detect_layout(text) {
        Some(layout) => Some(layout),
        None => {
            info!(text, "no matching layout found");
            None
        }
    }
}

/// Parse a date string by auto-detecting its layout, with the default
/// timezone and locale.
///
/// # Examples
/// ```
/// assert!(dtfmt::parse("2020-01-01 12:00:00").is_some());
/// assert!(dtfmt::parse("not-a-date").is_none());
/// assert!(dtfmt::parse("   ").is_none());
/// ```
pub fn parse(text: &str) -> Option<DateTime<Utc>> {
    if is_blank(text) {
        return None;
    }
    let layout = detect(text)?;
    run(cache::formatter_for(layout), text, layout, None, None)
}

/// Parse a date string with an explicit layout, default timezone and locale.
pub fn parse_layout(text: &str, layout: &str) -> Option<DateTime<Utc>> {
    if is_blank(text) {
        return None;
    }
    run(cache::formatter_for(layout), text, layout, None, None)
}

/// Parse a date string by auto-detecting its layout, interpreting the wall
/// clock in an explicit timezone.
pub fn parse_tz(text: &str, timezone: Tz) -> Option<DateTime<Utc>> {
    if is_blank(text) {
        return None;
    }
    let layout = detect(text)?;
    run(
        cache::formatter_for_tz(layout, timezone),
        text,
        layout,
        Some(timezone),
        None,
    )
}

/// Parse a date string with an explicit layout and timezone.
pub fn parse_layout_tz(text: &str, layout: &str, timezone: Tz) -> Option<DateTime<Utc>> {
    if is_blank(text) {
        return None;
    }
    run(
        cache::formatter_for_tz(layout, timezone),
        text,
        layout,
        Some(timezone),
        None,
    )
}

/// Parse a date string with an explicit layout and locale; the timezone is
/// left to the system default.
pub fn parse_layout_locale(text: &str, layout: &str, locale: DateLocale) -> Option<DateTime<Utc>> {
    if is_blank(text) {
        return None;
    }
    run(
        cache::formatter_for_locale(layout, locale),
        text,
        layout,
        None,
        Some(locale),
    )
}

/// Parse a date string with the default ISO date-time layout in an explicit
/// timezone and locale. No auto-detection.
pub fn parse_tz_locale(text: &str, timezone: Tz, locale: DateLocale) -> Option<DateTime<Utc>> {
    parse_layout_tz_locale(text, ISO_DATETIME, timezone, locale)
}

/// Parse a date string with everything pinned: layout, timezone and locale.
pub fn parse_layout_tz_locale(
    text: &str,
    layout: &str,
    timezone: Tz,
    locale: DateLocale,
) -> Option<DateTime<Utc>> {
    if is_blank(text) {
        return None;
    }
    run(
        cache::formatter_for_tz_locale(layout, timezone, locale),
        text,
        layout,
        Some(timezone),
        Some(locale),
    )
}
