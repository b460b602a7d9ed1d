use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use dtfmt::DateLocale;

const SHANGHAI: Tz = chrono_tz::Asia::Shanghai;

/// Every numeric layout in the detection table must round-trip at the
/// precision it carries: date-only layouts lose time-of-day, minute layouts
/// lose seconds.
#[test]
fn every_numeric_layout_round_trips() {
    let instant = SHANGHAI
        .with_ymd_and_hms(2021, 12, 13, 14, 15, 16)
        .unwrap()
        .with_timezone(&Utc);

    for layout in dtfmt::supported_layouts() {
        if layout.contains("MMM") {
            // Textual month names go through the locale; covered below.
            continue;
        }
        let text = dtfmt::format_layout(instant, layout)
            .unwrap_or_else(|| panic!("layout {layout} failed to format"));
        let back = dtfmt::parse_layout(&text, layout)
            .unwrap_or_else(|| panic!("layout {layout} failed to re-parse {text:?}"));

        let wall = back.with_timezone(&SHANGHAI);
        let original = instant.with_timezone(&SHANGHAI);
        assert_eq!(wall.date_naive(), original.date_naive(), "layout {layout}");
        if layout.contains('H') {
            assert_eq!(wall.hour(), original.hour(), "layout {layout}");
            assert_eq!(wall.minute(), original.minute(), "layout {layout}");
        } else {
            assert_eq!(wall.hour(), 0, "layout {layout}");
        }
        if layout.contains("ss") {
            assert_eq!(wall.second(), original.second(), "layout {layout}");
        }
    }
}

/// Formatted output of every numeric layout must be picked up again by
/// auto-detection and resolve to the same instant.
#[test]
fn formatted_output_survives_auto_detection() {
    let instant = SHANGHAI
        .with_ymd_and_hms(2021, 12, 13, 14, 15, 16)
        .unwrap()
        .with_timezone(&Utc);

    for layout in dtfmt::supported_layouts() {
        if layout.contains("MMM") {
            continue;
        }
        let text = dtfmt::format_layout(instant, layout).unwrap();
        let explicit = dtfmt::parse_layout(&text, layout);
        let detected = dtfmt::parse(&text);
        assert!(detected.is_some(), "layout {layout} output {text:?} not detected");
        // Detection may legitimately pick a different but equivalent layout
        // (e.g. a two-digit day also fits the padded pattern); the instant
        // must agree regardless.
        assert_eq!(detected, explicit, "layout {layout} output {text:?}");
    }
}

#[test]
fn textual_layout_round_trips_in_english() {
    let instant = Utc.with_ymd_and_hms(2018, 9, 5, 12, 0, 0).unwrap();
    let text =
        dtfmt::format_layout_tz_locale(instant, "d-MMM-yy", Tz::UTC, DateLocale::English).unwrap();
    assert_eq!(text, "5-Sep-18");

    let back: DateTime<Utc> = dtfmt::parse_layout_tz(&text, "d-MMM-yy", Tz::UTC).unwrap();
    assert_eq!(back.date_naive(), instant.date_naive());
}

#[test]
fn millisecond_layout_round_trips() {
    let instant = Utc
        .with_ymd_and_hms(2020, 1, 1, 12, 0, 0)
        .unwrap()
        .with_nanosecond(123_000_000)
        .unwrap();
    let text = dtfmt::format_layout_tz(instant, dtfmt::UTC_DATETIME_MILLIS, Tz::UTC).unwrap();
    assert_eq!(text, "2020-01-01T12:00:00.123");
    let back = dtfmt::parse_layout_tz(&text, dtfmt::UTC_DATETIME_MILLIS, Tz::UTC).unwrap();
    assert_eq!(back, instant);
}
