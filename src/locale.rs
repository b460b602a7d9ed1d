//! Locale selection.

use chrono::format::Locale;
use chrono_tz::Tz;

/// Locales the helpers know how to format for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// Simplified Chinese (the default).
    #[default]
    China,
    /// US English.
    English,
}

impl DateLocale {
    /// Country code used as the locale component of a cache key.
    pub fn country(&self) -> &'static str {
        match self {
            DateLocale::China => "CN",
            DateLocale::English => "US",
        }
    }

    pub(crate) fn chrono_locale(&self) -> Locale {
        match self {
            DateLocale::China => Locale::zh_CN,
            DateLocale::English => Locale::en_US,
        }
    }
}

/// Locale implied by a timezone.
///
/// Returns `None` for timezones outside the lookup; callers fall back to
/// unlocalized formatting.
pub fn locale_for_timezone(timezone: Tz) -> Option<DateLocale> {
    match timezone {
        Tz::Asia__Shanghai => Some(DateLocale::China),
        Tz::GMT | Tz::UTC => Some(DateLocale::English),
        _ => None,
    }
}
