//! Currency amount parsing and formatting.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{CURRENCY_CODE, CURRENCY_CORE};

/// Parse a currency string into a decimal amount.
///
/// Tolerates a leading `$`/`€`/`£` symbol, comma thousands separators, a
/// trailing three-letter currency code, and surrounding whitespace.
/// Parenthesized values and a leading minus both denote negative amounts.
/// Input with no isolable numeric core yields `None`, never zero.
pub fn parse_currency(raw: &str) -> Option<Decimal> {
    let mut s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let mut negative = false;
    if s.len() >= 2 && s.starts_with('(') && s.ends_with(')') {
        negative = true;
        s = s[1..s.len() - 1].trim();
    }
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest.trim_start();
    }

    s = s.trim_start_matches(['$', '€', '£']).trim_start();

    // Sign may also follow the symbol, as in "$-500"
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest.trim_start();
    }

    if let Some(code) = CURRENCY_CODE.find(s) {
        s = s[..code.start()].trim_end();
    }
    s = s.trim_end_matches(['$', '€', '£']).trim_end();

    if !CURRENCY_CORE.is_match(s) {
        return None;
    }

    let mut normalized: String = s.chars().filter(|c| *c != ',').collect();
    if normalized.starts_with('.') {
        normalized.insert(0, '0');
    }
    let amount = Decimal::from_str(&normalized).ok()?;

    Some(if negative { -amount } else { amount })
}

/// Format an amount in US currency style (`$1,234.56`).
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let s = format!("{:.2}", rounded.abs());
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    if negative {
        format!("-${}.{}", formatted, decimal_part)
    } else {
        format!("${}.{}", formatted, decimal_part)
    }
}
