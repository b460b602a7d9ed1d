//! Formatting entry points.
//!
//! Each function resolves a cached formatter and renders the instant in its
//! timezone and locale. A layout that fails translation degrades to `None`
//! with an error-level log line; nothing here returns an error to the caller.

use std::fmt::Write;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tracing::error;

use crate::cache::{self, CachedFormatter};
use crate::error::LayoutError;
use crate::layout::{to_strftime, ISO_DATETIME};
use crate::locale::DateLocale;

fn run(
    formatter: Result<Rc<CachedFormatter>, LayoutError>,
    date: DateTime<Utc>,
    layout: &str,
) -> Option<String> {
    match formatter {
        Ok(formatter) => Some(formatter.format_instant(date)),
        Err(err) => {
            error!(layout, %err, "cannot build formatter");
            None
        }
    }
}

/// Format an instant with the default layout (`yyyy-MM-dd HH:mm:ss`),
/// timezone (Asia/Shanghai) and locale (Chinese).
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2020, 1, 1, 4, 0, 0).unwrap();
/// assert_eq!(dtfmt::format(instant).as_deref(), Some("2020-01-01 12:00:00"));
/// ```
pub fn format(date: DateTime<Utc>) -> Option<String> {
    format_layout(date, ISO_DATETIME)
}

/// Format an instant with an explicit layout, default timezone and locale.
pub fn format_layout(date: DateTime<Utc>, layout: &str) -> Option<String> {
    run(cache::formatter_for(layout), date, layout)
}

/// Format an instant with an explicit layout and locale; the timezone is
/// left to the system default.
pub fn format_layout_locale(date: DateTime<Utc>, layout: &str, locale: DateLocale) -> Option<String> {
    run(cache::formatter_for_locale(layout, locale), date, layout)
}

/// Format an instant with the default layout in an explicit timezone.
pub fn format_tz(date: DateTime<Utc>, timezone: Tz) -> Option<String> {
    format_layout_tz(date, ISO_DATETIME, timezone)
}

/// Format an instant with an explicit layout and timezone; the locale is
/// implied by the timezone where known.
pub fn format_layout_tz(date: DateTime<Utc>, layout: &str, timezone: Tz) -> Option<String> {
    run(cache::formatter_for_tz(layout, timezone), date, layout)
}

/// Format an instant with the default layout in an explicit timezone and
/// locale.
pub fn format_tz_locale(date: DateTime<Utc>, timezone: Tz, locale: DateLocale) -> Option<String> {
    format_layout_tz_locale(date, ISO_DATETIME, timezone, locale)
}

/// Format an instant with everything pinned: layout, timezone and locale.
pub fn format_layout_tz_locale(
    date: DateTime<Utc>,
    layout: &str,
    timezone: Tz,
    locale: DateLocale,
) -> Option<String> {
    run(
        cache::formatter_for_tz_locale(layout, timezone, locale),
        date,
        layout,
    )
}

/// Format a plain date with an explicit layout.
///
/// Plain values carry no timezone and are rendered statelessly, without the
/// cache. A layout that demands time-of-day fields yields `None`.
pub fn format_naive_date(date: NaiveDate, layout: &str) -> Option<String> {
    let strftime = translate(layout)?;
    render_naive(date.format(&strftime), layout)
}

/// Format a plain date-time with an explicit layout, statelessly.
pub fn format_naive(datetime: NaiveDateTime, layout: &str) -> Option<String> {
    let strftime = translate(layout)?;
    render_naive(datetime.format(&strftime), layout)
}

/// Format a plain date-time with the default ISO date-time layout.
pub fn format_naive_iso(datetime: NaiveDateTime) -> Option<String> {
    format_naive(datetime, ISO_DATETIME)
}

fn translate(layout: &str) -> Option<String> {
    match to_strftime(layout) {
        Ok(strftime) => Some(strftime),
        Err(err) => {
            error!(layout, %err, "cannot translate layout");
            None
        }
    }
}

fn render_naive(formatted: impl std::fmt::Display, layout: &str) -> Option<String> {
    let mut out = String::new();
    match write!(out, "{formatted}") {
        Ok(()) => Some(out),
        Err(_) => {
            error!(layout, "layout requires fields the value does not carry");
            None
        }
    }
}
