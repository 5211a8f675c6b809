//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Moment.js / dayjs tokens and their chrono equivalents, longest first
const TOKENS: [(&str, &str); 23] = [
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("dddd", "%A"),
    ("MMM", "%b"),
    ("ddd", "%a"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("ZZ", "%z"),
    ("M", "%-m"),
    ("D", "%-d"),
    ("H", "%-H"),
    ("h", "%-I"),
    ("m", "%-M"),
    ("s", "%-S"),
    ("A", "%p"),
    ("a", "%P"),
    ("Z", "%:z"),
];

/// Format a date using a Moment.js/dayjs-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY/MM/DD") // -> "2024/01/05"
/// format_date(&date, "YYYY/M/D")   // -> "2024/1/5"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Format a date for a `<time datetime=...>` attribute
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
}

/// Convert Moment.js format to chrono format
///
/// Text inside `[...]` is copied literally, as in Moment.js.
fn moment_to_chrono_format(format: &str) -> String {
    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while !rest.is_empty() {
        if let Some(escaped) = rest.strip_prefix('[') {
            if let Some(end) = escaped.find(']') {
                push_literal(&mut result, &escaped[..end]);
                rest = &escaped[end + 1..];
                continue;
            }
        }

        for (token, replacement) in TOKENS {
            if let Some(after) = rest.strip_prefix(token) {
                result.push_str(replacement);
                rest = after;
                continue 'outer;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            push_literal(&mut result, c.encode_utf8(&mut [0; 4]));
        }
        rest = chars.as_str();
    }

    result
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date, "YYYY/MM/DD"), "2024/01/05");
        assert_eq!(format_date(&date, "YYYY/M/D"), "2024/1/5");
        assert_eq!(format_date(&date, "YYYY-MM-DD HH:mm:ss"), "2024-01-05 10:30:00");
        assert_eq!(format_date(&date, "MMMM D, YYYY"), "January 5, 2024");
    }

    #[test]
    fn test_literal_text() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date, "YYYY年M月D日"), "2024年3月9日");
        assert_eq!(format_date(&date, "[Day] D"), "Day 9");
        assert_eq!(format_date(&date, "100% YYYY"), "100% 2024");
    }

    #[test]
    fn test_date_xml() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(date_xml(&date), "2024-01-15T10:30:00.000+00:00");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(moment_to_chrono_format("YYYY/M/D"), "%Y/%-m/%-d");
    }
}
