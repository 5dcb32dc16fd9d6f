//! Personal name parsing.

use crate::models::field::ParsedName;

/// Generational suffixes matched case-insensitively at the trailing position.
const SUFFIXES: &[(&str, &str)] = &[
    ("jr", "Jr"),
    ("sr", "Sr"),
    ("ii", "II"),
    ("iii", "III"),
    ("iv", "IV"),
    ("v", "V"),
];

/// Parse a personal name into its components.
///
/// A comma marks `"LAST, FIRST"` ordering; otherwise the name is read as
/// natural `First [Middle] Last [Suffix]` order. With two or more tokens
/// after suffix removal the last token is the surname, the first the given
/// name, and anything between becomes a single middle name. All components
/// are title-cased and `full` is the canonical rendering. Empty input
/// yields `None`.
pub fn parse_name(raw: &str) -> Option<ParsedName> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some((surname, given)) = s.split_once(',') {
        let mut tokens: Vec<&str> = given.split_whitespace().collect();
        if tokens.is_empty() {
            return parse_natural(surname);
        }
        let suffix = if tokens.len() > 1 {
            take_suffix(&mut tokens)
        } else {
            None
        };
        let first = title_case(tokens[0]);
        let middle = (tokens.len() > 1).then(|| title_case(&tokens[1..].join(" ")));
        let last = title_case(surname.trim());
        Some(assemble(first, middle, last, suffix))
    } else {
        parse_natural(s)
    }
}

fn parse_natural(s: &str) -> Option<ParsedName> {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    let suffix = if tokens.len() > 1 {
        take_suffix(&mut tokens)
    } else {
        None
    };

    let (first, middle, last) = match tokens.len() {
        1 => (title_case(tokens[0]), None, String::new()),
        n => (
            title_case(tokens[0]),
            (n > 2).then(|| title_case(&tokens[1..n - 1].join(" "))),
            title_case(tokens[n - 1]),
        ),
    };
    Some(assemble(first, middle, last, suffix))
}

fn assemble(
    first: String,
    middle: Option<String>,
    last: String,
    suffix: Option<String>,
) -> ParsedName {
    let mut parts: Vec<&str> = Vec::with_capacity(4);
    if !first.is_empty() {
        parts.push(&first);
    }
    if let Some(m) = middle.as_deref() {
        parts.push(m);
    }
    if !last.is_empty() {
        parts.push(&last);
    }
    if let Some(sfx) = suffix.as_deref() {
        parts.push(sfx);
    }
    let full = parts.join(" ");

    ParsedName {
        first,
        middle,
        last,
        suffix,
        full,
    }
}

fn take_suffix(tokens: &mut Vec<&str>) -> Option<String> {
    let canonical = canonical_suffix(tokens.last()?)?;
    tokens.pop();
    Some(canonical)
}

fn canonical_suffix(token: &str) -> Option<String> {
    let bare = token.trim_end_matches('.');
    let lower = bare.to_ascii_lowercase();
    let canon = SUFFIXES.iter().find(|(key, _)| *key == lower)?.1;
    Some(if token.ends_with('.') {
        format!("{canon}.")
    } else {
        canon.to_string()
    })
}

/// Title-case a string, uppercasing after hyphens and apostrophes so
/// `O'BRIEN` and `SMITH-JONES` render naturally.
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(word_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn word_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut boundary = true;
    for c in word.chars() {
        if boundary {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        boundary = c == '-' || c == '\'';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_name_last_first() {
        let name = parse_name("SMITH, JOHN").unwrap();
        assert_eq!(name.first, "John");
        assert_eq!(name.last, "Smith");
        assert_eq!(name.middle, None);
        assert_eq!(name.full, "John Smith");
    }

    #[test]
    fn test_parse_name_natural_order() {
        let name = parse_name("John Doe").unwrap();
        assert_eq!(name.first, "John");
        assert_eq!(name.last, "Doe");
        assert_eq!(name.full, "John Doe");
    }

    #[test]
    fn test_parse_name_middle() {
        let name = parse_name("john ronald reuel tolkien").unwrap();
        assert_eq!(name.first, "John");
        assert_eq!(name.middle.as_deref(), Some("Ronald Reuel"));
        assert_eq!(name.last, "Tolkien");
        assert_eq!(name.full, "John Ronald Reuel Tolkien");
    }

    #[test]
    fn test_parse_name_suffix_with_period() {
        let name = parse_name("John Doe Jr.").unwrap();
        assert_eq!(name.suffix.as_deref(), Some("Jr."));
        assert_eq!(name.last, "Doe");
        assert_eq!(name.full, "John Doe Jr.");
    }

    #[test]
    fn test_parse_name_suffix_without_period() {
        let name = parse_name("henry ford iii").unwrap();
        assert_eq!(name.suffix.as_deref(), Some("III"));
        assert_eq!(name.full, "Henry Ford III");
    }

    #[test]
    fn test_parse_name_suffix_in_last_first_order() {
        let name = parse_name("DOE, JANE ANN JR").unwrap();
        assert_eq!(name.first, "Jane");
        assert_eq!(name.middle.as_deref(), Some("Ann"));
        assert_eq!(name.last, "Doe");
        assert_eq!(name.suffix.as_deref(), Some("Jr"));
    }

    #[test]
    fn test_parse_name_title_casing() {
        assert_eq!(parse_name("JOHN DOE").unwrap().full, "John Doe");
        assert_eq!(parse_name("mary o'brien").unwrap().last, "O'Brien");
        assert_eq!(parse_name("JANE SMITH-JONES").unwrap().last, "Smith-Jones");
    }

    #[test]
    fn test_parse_name_single_token() {
        let name = parse_name("Madonna").unwrap();
        assert_eq!(name.first, "Madonna");
        assert_eq!(name.last, "");
        assert_eq!(name.full, "Madonna");
    }

    #[test]
    fn test_parse_name_empty() {
        assert_eq!(parse_name(""), None);
        assert_eq!(parse_name("   "), None);
    }
}
