//! Per-thread formatter caching.
//!
//! Formatters are cached per thread in a bounded LRU map keyed by layout
//! plus the timezone and locale dimensions that affect output. The storage
//! is `thread_local!`, so no formatter is ever observed by two threads; the
//! `Rc` handles make that a compile-time guarantee.

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use chrono::format::ParseErrorKind;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use lru::LruCache;

use crate::error::{LayoutError, ParseDateError};
use crate::layout::to_strftime;
use crate::locale::{locale_for_timezone, DateLocale};

/// Timezone used when a formatter is not given one explicitly.
pub(crate) const DEFAULT_TZ: Tz = chrono_tz::Asia::Shanghai;

/// Per-thread capacity; least-recently-used entries are evicted beyond this.
const CACHE_SIZE: usize = 100;

thread_local! {
    static FORMATTERS: RefCell<LruCache<String, Rc<CachedFormatter>>> =
        RefCell::new(LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));
}

/// A compiled formatter bound to one (layout, timezone, locale) combination.
///
/// `timezone` of `None` means the system-local zone ("timezone not forced"),
/// `locale` of `None` means unlocalized output.
#[derive(Debug)]
pub struct CachedFormatter {
    layout: String,
    strftime: String,
    timezone: Option<Tz>,
    locale: Option<DateLocale>,
}

impl CachedFormatter {
    fn new(
        layout: &str,
        timezone: Option<Tz>,
        locale: Option<DateLocale>,
    ) -> Result<Self, LayoutError> {
        Ok(CachedFormatter {
            layout: layout.to_string(),
            strftime: to_strftime(layout)?,
            timezone,
            locale,
        })
    }

    /// The layout string this formatter was built from.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Render an instant in this formatter's timezone and locale.
    pub fn format_instant(&self, instant: DateTime<Utc>) -> String {
        match self.timezone {
            Some(tz) => self.render(instant.with_timezone(&tz)),
            None => self.render(instant.with_timezone(&Local)),
        }
    }

    fn render<T>(&self, value: DateTime<T>) -> String
    where
        T: TimeZone,
        T::Offset: std::fmt::Display,
    {
        match self.locale {
            Some(locale) => value
                .format_localized(&self.strftime, locale.chrono_locale())
                .to_string(),
            None => value.format(&self.strftime).to_string(),
        }
    }

    /// Parse a date string and resolve it to an instant in this formatter's
    /// timezone. Date-only layouts resolve to midnight; on a DST ambiguity
    /// the earlier instant wins.
    pub fn parse(&self, text: &str) -> Result<DateTime<Utc>, ParseDateError> {
        let naive = match NaiveDateTime::parse_from_str(text, &self.strftime) {
            Ok(datetime) => datetime,
            // Date-only layouts leave the time fields unset; retry as a bare
            // date at midnight. Any other failure is a real parse error.
            Err(err) if err.kind() == ParseErrorKind::NotEnough => {
                NaiveDate::parse_from_str(text, &self.strftime)?.and_time(NaiveTime::MIN)
            }
            Err(err) => return Err(err.into()),
        };
        let resolved = match self.timezone {
            Some(tz) => tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            None => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        };
        resolved.ok_or(ParseDateError::NonexistentLocalTime)
    }
}

fn get_or_build(
    key_tail: &str,
    layout: &str,
    timezone: Option<Tz>,
    locale: Option<DateLocale>,
) -> Result<Rc<CachedFormatter>, LayoutError> {
    FORMATTERS.with(|cell| {
        let mut cache = cell.borrow_mut();
        let key = format!("{layout}{key_tail}");
        if let Some(formatter) = cache.get(&key) {
            return Ok(Rc::clone(formatter));
        }
        let formatter = Rc::new(CachedFormatter::new(layout, timezone, locale)?);
        cache.put(key, Rc::clone(&formatter));
        Ok(formatter)
    })
}

/// Formatter for a layout with the default timezone (Asia/Shanghai) and
/// locale (Chinese). Cached under the layout alone.
pub fn formatter_for(layout: &str) -> Result<Rc<CachedFormatter>, LayoutError> {
    get_or_build("", layout, Some(DEFAULT_TZ), Some(DateLocale::China))
}

/// Formatter for a layout in an explicit timezone; the locale is implied by
/// the timezone where the lookup knows it. Cached under layout + timezone id.
pub fn formatter_for_tz(layout: &str, timezone: Tz) -> Result<Rc<CachedFormatter>, LayoutError> {
    get_or_build(
        timezone.name(),
        layout,
        Some(timezone),
        locale_for_timezone(timezone),
    )
}

/// Formatter for a layout in an explicit locale; the timezone is left to the
/// system default. Cached under layout + country code.
pub fn formatter_for_locale(
    layout: &str,
    locale: DateLocale,
) -> Result<Rc<CachedFormatter>, LayoutError> {
    get_or_build(locale.country(), layout, None, Some(locale))
}

/// Formatter with both timezone and locale pinned. Cached under layout +
/// timezone id + country code.
pub fn formatter_for_tz_locale(
    layout: &str,
    timezone: Tz,
    locale: DateLocale,
) -> Result<Rc<CachedFormatter>, LayoutError> {
    let key_tail = format!("{}{}", timezone.name(), locale.country());
    get_or_build(&key_tail, layout, Some(timezone), Some(locale))
}

/// Drop every formatter cached by the calling thread.
pub fn reset() {
    FORMATTERS.with(|cell| cell.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_returns_same_instance_for_same_key() {
        reset();
        let first = formatter_for("yyyy-MM-dd").unwrap();
        let second = formatter_for("yyyy-MM-dd").unwrap();
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_timezone_dimension_separates_keys() {
        reset();
        let shanghai = formatter_for_tz("yyyy-MM-dd HH:mm:ss", DEFAULT_TZ).unwrap();
        let utc = formatter_for_tz("yyyy-MM-dd HH:mm:ss", Tz::UTC).unwrap();
        assert!(!Rc::ptr_eq(&shanghai, &utc));

        let instant = Utc.with_ymd_and_hms(2020, 1, 1, 4, 0, 0).unwrap();
        assert_eq!(shanghai.format_instant(instant), "2020-01-01 12:00:00");
        assert_eq!(utc.format_instant(instant), "2020-01-01 04:00:00");
    }

    #[test]
    fn test_reset_forces_reconstruction() {
        let before = formatter_for("yyyy-MM-dd").unwrap();
        reset();
        let after = formatter_for("yyyy-MM-dd").unwrap();
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(before.layout(), after.layout());
    }

    #[test]
    fn test_invalid_layout_is_not_cached() {
        assert!(formatter_for("yyyy-XX").is_err());
        assert!(formatter_for("yyyy-XX").is_err());
    }
}
