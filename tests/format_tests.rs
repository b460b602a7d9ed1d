use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use dtfmt::DateLocale;
use pretty_assertions::assert_eq;

#[test]
fn format_uses_default_layout_and_shanghai_timezone() {
    let instant = Utc.with_ymd_and_hms(2020, 1, 1, 4, 0, 0).unwrap();
    assert_eq!(dtfmt::format(instant).as_deref(), Some("2020-01-01 12:00:00"));
}

#[test]
fn format_layout_renders_single_digit_tokens_unpadded() {
    // 01:05:06 UTC is 09:05:06 in Shanghai.
    let instant = Utc.with_ymd_and_hms(2020, 3, 4, 1, 5, 6).unwrap();
    assert_eq!(
        dtfmt::format_layout(instant, "yyyy-M-d H:mm").as_deref(),
        Some("2020-3-4 9:05")
    );
    assert_eq!(
        dtfmt::format_layout(instant, "yyyyMMdd").as_deref(),
        Some("20200304")
    );
}

#[test]
fn format_tz_renders_in_target_zone() {
    let instant = Utc.with_ymd_and_hms(2020, 1, 1, 4, 0, 0).unwrap();
    assert_eq!(
        dtfmt::format_tz(instant, Tz::UTC).as_deref(),
        Some("2020-01-01 04:00:00")
    );
    assert_eq!(
        dtfmt::format_tz(instant, chrono_tz::Asia::Shanghai).as_deref(),
        Some("2020-01-01 12:00:00")
    );
}

#[test]
fn format_textual_month_follows_locale() {
    let instant = Utc.with_ymd_and_hms(2018, 9, 5, 12, 0, 0).unwrap();
    assert_eq!(
        dtfmt::format_layout_tz_locale(instant, "d-MMM-yy", Tz::UTC, DateLocale::English)
            .as_deref(),
        Some("5-Sep-18")
    );
}

#[test]
fn format_utc_suffixed_layout() {
    let instant = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(
        dtfmt::format_layout_tz(instant, dtfmt::UTC_DATETIME, Tz::UTC).as_deref(),
        Some("2020-01-01T12:00:00Z")
    );
}

#[test]
fn format_invalid_layout_returns_none() {
    let instant = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(dtfmt::format_layout(instant, "yyyy-QQ"), None);
    assert_eq!(dtfmt::format_layout(instant, ""), None);
}

#[test]
fn format_naive_date_with_date_layout() {
    let date = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
    assert_eq!(
        dtfmt::format_naive_date(date, "yyyy/MM/dd").as_deref(),
        Some("2020/06/15")
    );
}

#[test]
fn format_naive_date_with_time_tokens_returns_none() {
    let date = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
    assert_eq!(dtfmt::format_naive_date(date, "yyyy-MM-dd HH:mm:ss"), None);
}

#[test]
fn format_naive_datetime_iso() {
    let datetime = NaiveDate::from_ymd_opt(2020, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    assert_eq!(
        dtfmt::format_naive_iso(datetime).as_deref(),
        Some("2020-01-02 03:04:05")
    );
    assert_eq!(
        dtfmt::format_naive(datetime, "yyyy-MM-dd HH:mm").as_deref(),
        Some("2020-01-02 03:04")
    );
}
