//! Calendar date parsing for document fields.

use chrono::NaiveDate;

use super::patterns::{DATE_DAY_FIRST, DATE_ISO, DATE_MONTH_FIRST, DATE_US_DASH, DATE_US_SLASH};

/// Parse a date string into a calendar date.
///
/// Accepted shapes, in priority order: ISO `YYYY-MM-DD`, numeric US
/// `M/D/YYYY` and `M/D/YY`, dash-numeric US `MM-DD-YYYY`, and natural
/// month forms (`"January 15, 2026"`, `"Jan 15, 2026"`, `"15 January 2026"`).
///
/// A true calendar date is constructed, so month/day overflow (`02/30/2026`)
/// and out-of-range months reject rather than rolling into the next month.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(caps) = DATE_ISO.captures(s) {
        return build_date(caps[1].parse().ok()?, &caps[2], &caps[3]);
    }

    if let Some(caps) = DATE_US_SLASH.captures(s) {
        return build_date(expand_year(&caps[3])?, &caps[1], &caps[2]);
    }

    if let Some(caps) = DATE_US_DASH.captures(s) {
        return build_date(caps[3].parse().ok()?, &caps[1], &caps[2]);
    }

    if let Some(caps) = DATE_MONTH_FIRST.captures(s) {
        let month = month_number(&caps[1])?;
        return NaiveDate::from_ymd_opt(caps[3].parse().ok()?, month, caps[2].parse().ok()?);
    }

    if let Some(caps) = DATE_DAY_FIRST.captures(s) {
        let month = month_number(&caps[2])?;
        return NaiveDate::from_ymd_opt(caps[3].parse().ok()?, month, caps[1].parse().ok()?);
    }

    None
}

fn build_date(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Two-digit years pivot at 50: `00-49` map to 20xx, `50-99` to 19xx.
fn expand_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() == 2 {
        Some(if year <= 49 { 2000 + year } else { 1900 + year })
    } else {
        Some(year)
    }
}

fn month_number(name: &str) -> Option<u32> {
    match name.to_ascii_lowercase().as_str() {
        "january" | "jan" => Some(1),
        "february" | "feb" => Some(2),
        "march" | "mar" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sept" | "sep" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(parse_date("2026-01-15"), Some(ymd(2026, 1, 15)));
        assert_eq!(parse_date("1999-12-31"), Some(ymd(1999, 12, 31)));
    }

    #[test]
    fn test_parse_date_us_slash() {
        assert_eq!(parse_date("1/15/2026"), Some(ymd(2026, 1, 15)));
        assert_eq!(parse_date("12/1/2026"), Some(ymd(2026, 12, 1)));
    }

    #[test]
    fn test_parse_date_two_digit_year_pivot() {
        assert_eq!(parse_date("1/15/26"), Some(ymd(2026, 1, 15)));
        assert_eq!(parse_date("6/30/49"), Some(ymd(2049, 6, 30)));
        assert_eq!(parse_date("7/4/50"), Some(ymd(1950, 7, 4)));
        assert_eq!(parse_date("12/31/99"), Some(ymd(1999, 12, 31)));
    }

    #[test]
    fn test_parse_date_us_dash() {
        assert_eq!(parse_date("01-15-2026"), Some(ymd(2026, 1, 15)));
    }

    #[test]
    fn test_parse_date_month_names() {
        assert_eq!(parse_date("January 15, 2026"), Some(ymd(2026, 1, 15)));
        assert_eq!(parse_date("Jan 15, 2026"), Some(ymd(2026, 1, 15)));
        assert_eq!(parse_date("Jan. 15 2026"), Some(ymd(2026, 1, 15)));
        assert_eq!(parse_date("Sept 5, 2026"), Some(ymd(2026, 9, 5)));
        assert_eq!(parse_date("15 January 2026"), Some(ymd(2026, 1, 15)));
    }

    #[test]
    fn test_parse_date_rejects_calendar_overflow() {
        assert_eq!(parse_date("02/30/2026"), None);
        assert_eq!(parse_date("2026-02-30"), None);
        assert_eq!(parse_date("4/31/2026"), None);
        assert_eq!(parse_date("2/29/2025"), None);
        assert_eq!(parse_date("2/29/2024"), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_parse_date_rejects_out_of_range() {
        assert_eq!(parse_date("13/1/2026"), None);
        assert_eq!(parse_date("2026-13-01"), None);
        assert_eq!(parse_date("0/10/2026"), None);
    }

    #[test]
    fn test_parse_date_unparseable() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("Frosty 15, 2026"), None);
        assert_eq!(parse_date("2026/01/15 extra"), None);
    }
}
