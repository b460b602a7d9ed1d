//! Layout vocabulary: token translation and auto-detection.
//!
//! Layouts use the conventional `yyyy-MM-dd HH:mm:ss` token vocabulary and
//! are translated to chrono strftime strings before use. Auto-detection runs
//! an ordered table of anchored patterns against the whole input and picks
//! the layout of the first match.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LayoutError;

/// Default layout: full ISO date-time with seconds.
pub const ISO_DATETIME: &str = "yyyy-MM-dd HH:mm:ss";
/// ISO date-time without seconds.
pub const ISO_DATETIME_SHORT: &str = "yyyy-MM-dd HH:mm";
/// Bare ISO date.
pub const ISO_DATE: &str = "yyyy-MM-dd";
/// Compact numeric date.
pub const DATE_COMPACT: &str = "yyyyMMdd";
/// UTC-suffixed timestamp.
pub const UTC_DATETIME: &str = "yyyy-MM-dd'T'HH:mm:ss'Z'";
/// Millisecond-precision timestamp.
pub const UTC_DATETIME_MILLIS: &str = "yyyy-MM-dd'T'HH:mm:ss.SSS";

/// Translate a layout string into a chrono strftime format.
///
/// Runs of the same letter form a token (`yyyy`, `MM`, `d`, …); text between
/// single quotes is literal, with `''` standing for one quote. Letters that
/// do not form a known token are an error.
///
/// # Examples
/// ```
/// use dtfmt::to_strftime;
///
/// assert_eq!(to_strftime("yyyy-MM-dd").unwrap(), "%Y-%m-%d");
/// assert_eq!(to_strftime("yyyy-M-d H:mm").unwrap(), "%Y-%-m-%-d %-H:%M");
/// assert!(to_strftime("yyyy-QQ").is_err());
/// ```
pub fn to_strftime(layout: &str) -> Result<String, LayoutError> {
    if layout.is_empty() {
        return Err(LayoutError::EmptyLayout);
    }
    let chars: Vec<char> = layout.chars().collect();
    let mut out = String::with_capacity(layout.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            // '' outside a quoted section is a literal quote.
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            let start = i;
            i += 1;
            loop {
                match chars.get(i) {
                    None => return Err(LayoutError::UnterminatedQuote { position: start }),
                    Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                        out.push('\'');
                        i += 2;
                    }
                    Some('\'') => {
                        i += 1;
                        break;
                    }
                    Some(&ch) => {
                        push_literal(&mut out, ch);
                        i += 1;
                    }
                }
            }
            continue;
        }
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i] == c {
                i += 1;
            }
            out.push_str(token_for(c, i - start, start)?);
            continue;
        }
        push_literal(&mut out, c);
        i += 1;
    }
    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn token_for(token: char, run: usize, position: usize) -> Result<&'static str, LayoutError> {
    let mapped = match (token, run) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', 3) => "%3f",
        ('a', _) => "%p",
        ('E', n) if n >= 4 => "%A",
        ('E', _) => "%a",
        ('Z', _) => "%z",
        _ => return Err(LayoutError::UnsupportedToken { position, token }),
    };
    Ok(mapped)
}

struct LayoutDescriptor {
    pattern: Regex,
    layout: &'static str,
}

/// Ordered auto-detection table. First full match wins, and several patterns
/// are subsets of others, so the order is part of the contract: full ISO
/// date-time with seconds, bare ISO date, the remaining single-digit ISO
/// date-time variants, ISO date-times without seconds, slash-separated
/// date-times with seconds, the remaining bare dates, then the compact and
/// textual forms.
static LAYOUTS: LazyLock<Vec<LayoutDescriptor>> = LazyLock::new(|| {
    let table: &[(&str, &str)] = &[
        (r"^\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2}$", "yyyy-MM-dd HH:mm:ss"),
        (r"^\d{4}-\d{2}-\d{2}$", "yyyy-MM-dd"),
        (r"^\d{4}-\d{2}-\d{1}\s+\d{2}:\d{2}:\d{2}$", "yyyy-MM-d HH:mm:ss"),
        (r"^\d{4}-\d{1}-\d{2}\s+\d{2}:\d{2}:\d{2}$", "yyyy-M-dd HH:mm:ss"),
        (r"^\d{4}-\d{1}-\d{1}\s+\d{2}:\d{2}:\d{2}$", "yyyy-M-d HH:mm:ss"),
        (r"^\d{4}-\d{1}-\d{1}\s+\d{1}:\d{2}:\d{2}$", "yyyy-M-d H:mm:ss"),
        (r"^\d{4}-\d{2}-\d{1}\s+\d{1}:\d{2}:\d{2}$", "yyyy-MM-d H:mm:ss"),
        (r"^\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}$", "yyyy-MM-dd HH:mm"),
        (r"^\d{4}-\d{2}-\d{1}\s+\d{2}:\d{2}$", "yyyy-MM-d HH:mm"),
        (r"^\d{4}-\d{1}-\d{2}\s+\d{2}:\d{2}$", "yyyy-M-dd HH:mm"),
        (r"^\d{4}-\d{1}-\d{1}\s+\d{2}:\d{2}$", "yyyy-M-d HH:mm"),
        (r"^\d{4}-\d{2}-\d{2}\s+\d{1}:\d{2}$", "yyyy-MM-dd H:mm"),
        (r"^\d{4}-\d{2}-\d{1}\s+\d{1}:\d{2}$", "yyyy-MM-d H:mm"),
        (r"^\d{4}-\d{1}-\d{2}\s+\d{1}:\d{2}$", "yyyy-M-dd H:mm"),
        (r"^\d{4}-\d{1}-\d{1}\s+\d{1}:\d{2}$", "yyyy-M-d H:mm"),
        (r"^\d{2}/\d{2}/\d{4}\s+\d{2}:\d{2}:\d{2}$", "MM/dd/yyyy HH:mm:ss"),
        (r"^\d{4}/\d{2}/\d{2}\s+\d{2}:\d{2}:\d{2}$", "yyyy/MM/dd HH:mm:ss"),
        (r"^\d{4}/\d{2}/\d{1}\s+\d{2}:\d{2}:\d{2}$", "yyyy/MM/d HH:mm:ss"),
        (r"^\d{4}/\d{1}/\d{2}\s+\d{2}:\d{2}:\d{2}$", "yyyy/M/dd HH:mm:ss"),
        (r"^\d{4}/\d{1}/\d{1}\s+\d{2}:\d{2}:\d{2}$", "yyyy/M/d HH:mm:ss"),
        (r"^\d{2}/\d{2}/\d{4}\s+\d{1}:\d{2}:\d{2}$", "MM/dd/yyyy H:mm:ss"),
        (r"^\d{4}/\d{2}/\d{2}\s+\d{1}:\d{2}:\d{2}$", "yyyy/MM/dd H:mm:ss"),
        (r"^\d{4}/\d{2}/\d{1}\s+\d{1}:\d{2}:\d{2}$", "yyyy/MM/d H:mm:ss"),
        (r"^\d{4}/\d{1}/\d{2}\s+\d{1}:\d{2}:\d{2}$", "yyyy/M/dd H:mm:ss"),
        (r"^\d{4}/\d{1}/\d{1}\s+\d{1}:\d{2}:\d{2}$", "yyyy/M/d H:mm:ss"),
        (r"^\d{4}-\d{2}-\d{1}$", "yyyy-MM-d"),
        (r"^\d{4}-\d{1}-\d{2}$", "yyyy-M-dd"),
        (r"^\d{4}-\d{1}-\d{1}$", "yyyy-M-d"),
        (r"^\d{2}/\d{2}/\d{4}$", "MM/dd/yyyy"),
        (r"^\d{2}/\d{1}/\d{4}$", "MM/d/yyyy"),
        (r"^\d{1}/\d{2}/\d{4}$", "M/dd/yyyy"),
        (r"^\d{1}/\d{1}/\d{4}$", "M/d/yyyy"),
        (r"^\d{2}-\d{2}-\d{4}$", "MM-dd-yyyy"),
        (r"^\d{2}-\d{1}-\d{4}$", "MM-d-yyyy"),
        (r"^\d{1}-\d{2}-\d{4}$", "M-dd-yyyy"),
        (r"^\d{1}-\d{1}-\d{4}$", "M-d-yyyy"),
        (r"^\d{4}/\d{2}/\d{2}$", "yyyy/MM/dd"),
        (r"^\d{4}/\d{2}/\d{1}$", "yyyy/MM/d"),
        (r"^\d{4}/\d{1}/\d{2}$", "yyyy/M/dd"),
        (r"^\d{4}/\d{1}/\d{1}$", "yyyy/M/d"),
        (r"^\d{8}$", "yyyyMMdd"),
        (r"^\d{1,2}-[A-Za-z]{3}-\d{2}$", "d-MMM-yy"),
    ];
    table
        .iter()
        .map(|&(pattern, layout)| LayoutDescriptor {
            pattern: Regex::new(pattern).unwrap(),
            layout,
        })
        .collect()
});

/// Pick the layout for a date string by scanning the detection table.
///
/// The whole string must match; substrings do not count. Returns `None` when
/// nothing matches, which is a normal outcome for arbitrary input.
///
/// # Examples
/// ```
/// use dtfmt::detect_layout;
///
/// assert_eq!(detect_layout("2020-01-01 12:00:00"), Some("yyyy-MM-dd HH:mm:ss"));
/// assert_eq!(detect_layout("2020-1-1"), Some("yyyy-M-d"));
/// assert_eq!(detect_layout("not-a-date"), None);
/// ```
pub fn detect_layout(text: &str) -> Option<&'static str> {
    LAYOUTS
        .iter()
        .find(|descriptor| descriptor.pattern.is_match(text))
        .map(|descriptor| descriptor.layout)
}

/// All layouts the auto-detection table knows about, in priority order.
pub fn supported_layouts() -> impl Iterator<Item = &'static str> {
    LAYOUTS.iter().map(|descriptor| descriptor.layout)
}
