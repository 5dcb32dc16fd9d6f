//! Postal address parsing.
//!
//! Comma-segment heuristics: street lines that themselves contain commas,
//! and cities whose name is also a state name ("Washington"), can misparse.
//! These are known limitations of the segment-counting approach.

use crate::models::field::ParsedAddress;

use super::patterns::{UNIT_SEGMENT, UNIT_TRAILING, ZIP_TRAILING};
use super::states::normalize_state;

/// Parse a postal address into street, unit, city, state, and ZIP.
///
/// The input is split on commas. The final segment is checked for a trailing
/// ZIP (5-digit or ZIP+4) preceded by a state token (full name or
/// abbreviation); the segment before that is the city and everything earlier
/// joins into the street line, with a unit designator split out when one is
/// recognized. Missing pieces come back as empty strings; only a completely
/// empty input yields `None`.
pub fn parse_address(raw: &str) -> Option<ParsedAddress> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut segments: Vec<String> = trimmed
        .split(',')
        .map(|seg| seg.trim().to_string())
        .filter(|seg| !seg.is_empty())
        .collect();
    if segments.is_empty() {
        return None;
    }

    let mut city = String::new();
    let mut state = String::new();
    let mut zip = String::new();

    let last = segments[segments.len() - 1].clone();
    let (prefix, found_zip) = match ZIP_TRAILING.captures(&last) {
        Some(caps) => (caps[1].trim().to_string(), Some(caps[2].to_string())),
        None => (last.clone(), None),
    };
    let (leftover, found_state) = split_state(&prefix);

    if found_zip.is_some() || !found_state.is_empty() {
        zip = found_zip.unwrap_or_default();
        state = found_state;
        segments.pop();
        if !leftover.is_empty() {
            city = leftover;
        } else if let Some(prev) = segments.pop() {
            city = prev;
        }
    } else if segments.len() > 1 {
        city = segments.pop().unwrap_or_default();
    }

    let mut unit: Option<String> = None;
    segments.retain(|seg| {
        if unit.is_none() && UNIT_SEGMENT.is_match(seg) {
            unit = Some(seg.clone());
            false
        } else {
            true
        }
    });
    if unit.is_none() {
        for seg in segments.iter_mut() {
            if let Some(m) = UNIT_TRAILING.find(seg) {
                if m.start() > 0 {
                    unit = Some(seg[m.start()..].trim().to_string());
                    *seg = seg[..m.start()].trim_end().to_string();
                    break;
                }
            }
        }
    }

    let street = segments.join(", ");

    Some(ParsedAddress {
        street,
        unit,
        city,
        state,
        zip,
    })
}

/// Pull a state token off the end of a segment, trying multi-word state
/// names (up to three tokens) before single tokens.
fn split_state(prefix: &str) -> (String, String) {
    let tokens: Vec<&str> = prefix.split_whitespace().collect();
    let max = tokens.len().min(3);
    for take in (1..=max).rev() {
        let candidate = tokens[tokens.len() - take..].join(" ");
        if let Some(abbr) = normalize_state(&candidate) {
            return (tokens[..tokens.len() - take].join(" "), abbr.to_string());
        }
    }
    (prefix.to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_address_full() {
        let addr = parse_address("123 Main St, Apt 4, Boston, MA 02101").unwrap();
        assert_eq!(addr.street, "123 Main St");
        assert_eq!(addr.unit.as_deref(), Some("Apt 4"));
        assert_eq!(addr.city, "Boston");
        assert_eq!(addr.state, "MA");
        assert_eq!(addr.zip, "02101");
    }

    #[test]
    fn test_parse_address_unit_embedded_in_street() {
        let addr = parse_address("789 Pine Rd Unit 2B, Denver, CO 80203").unwrap();
        assert_eq!(addr.street, "789 Pine Rd");
        assert_eq!(addr.unit.as_deref(), Some("Unit 2B"));
        assert_eq!(addr.city, "Denver");
    }

    #[test]
    fn test_parse_address_full_state_name() {
        let addr = parse_address("456 Oak Ave, Springfield, Illinois 62704").unwrap();
        assert_eq!(addr.state, "IL");
        assert_eq!(addr.city, "Springfield");
        assert_eq!(addr.zip, "62704");
    }

    #[test]
    fn test_parse_address_multiword_state() {
        let addr = parse_address("1 Liberty Plaza, New York, New York 10006").unwrap();
        assert_eq!(addr.city, "New York");
        assert_eq!(addr.state, "NY");
    }

    #[test]
    fn test_parse_address_zip_plus_four() {
        let addr = parse_address("10 Elm St, Portland, OR 97201-1234").unwrap();
        assert_eq!(addr.zip, "97201-1234");
        assert_eq!(addr.state, "OR");
    }

    #[test]
    fn test_parse_address_city_and_state_in_one_segment() {
        let addr = parse_address("123 Main St, Boston MA 02101").unwrap();
        assert_eq!(addr.street, "123 Main St");
        assert_eq!(addr.city, "Boston");
        assert_eq!(addr.state, "MA");
    }

    #[test]
    fn test_parse_address_missing_zip() {
        let addr = parse_address("1 Elm St, Boston, MA").unwrap();
        assert_eq!(addr.city, "Boston");
        assert_eq!(addr.state, "MA");
        assert_eq!(addr.zip, "");
    }

    #[test]
    fn test_parse_address_missing_state() {
        let addr = parse_address("1 Elm St, Cambridge 02139").unwrap();
        assert_eq!(addr.street, "1 Elm St");
        assert_eq!(addr.city, "Cambridge");
        assert_eq!(addr.state, "");
        assert_eq!(addr.zip, "02139");
    }

    #[test]
    fn test_parse_address_street_only() {
        let addr = parse_address("123 Main St").unwrap();
        assert_eq!(addr.street, "123 Main St");
        assert_eq!(addr.city, "");
        assert_eq!(addr.state, "");
        assert_eq!(addr.zip, "");
    }

    #[test]
    fn test_parse_address_city_without_zip_or_state() {
        let addr = parse_address("123 Main St, Boston").unwrap();
        assert_eq!(addr.street, "123 Main St");
        assert_eq!(addr.city, "Boston");
    }

    #[test]
    fn test_parse_address_empty() {
        assert_eq!(parse_address(""), None);
        assert_eq!(parse_address("  "), None);
        assert_eq!(parse_address(" , , "), None);
    }
}
