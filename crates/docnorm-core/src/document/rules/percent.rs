//! Percentage parsing for rate fields.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::CURRENCY_CORE;

/// Parse a percentage string into percent units.
///
/// A `%` or `percent` suffix marks the value as already being in percent
/// units. A bare value at or below 1 is read as a fraction of one and scaled
/// by 100 (`0.045` becomes `4.5`); a bare value above 1 is already percent.
/// The threshold is ambiguous for exactly `1` (read as 100%); downstream
/// consumers rely on this cutoff, so it is preserved as-is.
pub fn parse_percentage(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let lower = s.to_ascii_lowercase();
    let (numeric, explicit) = if let Some(stripped) = lower.strip_suffix('%') {
        (stripped.trim_end(), true)
    } else if let Some(stripped) = lower.strip_suffix("percent") {
        (stripped.trim_end(), true)
    } else {
        (lower.as_str(), false)
    };

    if numeric.is_empty() || !CURRENCY_CORE.is_match(numeric.trim_start_matches('-')) {
        return None;
    }
    let value = Decimal::from_str(&numeric.replace(',', "")).ok()?;

    if explicit || value > Decimal::ONE {
        Some(value)
    } else {
        Some(value * Decimal::ONE_HUNDRED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_percentage_suffixed() {
        assert_eq!(parse_percentage("4.5%"), Some(dec("4.5")));
        assert_eq!(parse_percentage("4.5 %"), Some(dec("4.5")));
        assert_eq!(parse_percentage("0.5%"), Some(dec("0.5")));
        assert_eq!(parse_percentage("4.5 percent"), Some(dec("4.5")));
        assert_eq!(parse_percentage("3 PERCENT"), Some(dec("3")));
    }

    #[test]
    fn test_parse_percentage_fraction_of_one() {
        assert_eq!(parse_percentage("0.045"), Some(dec("4.5")));
        assert_eq!(parse_percentage("0.5"), Some(dec("50")));
    }

    #[test]
    fn test_parse_percentage_bare_above_one() {
        assert_eq!(parse_percentage("4.5"), Some(dec("4.5")));
        assert_eq!(parse_percentage("50"), Some(dec("50")));
    }

    #[test]
    fn test_parse_percentage_threshold_reads_one_as_full() {
        assert_eq!(parse_percentage("1"), Some(dec("100")));
        assert_eq!(parse_percentage("1.01"), Some(dec("1.01")));
    }

    #[test]
    fn test_parse_percentage_unparseable() {
        assert_eq!(parse_percentage(""), None);
        assert_eq!(parse_percentage("n/a"), None);
        assert_eq!(parse_percentage("%"), None);
        assert_eq!(parse_percentage("high percent"), None);
    }
}
