//! US state name normalization.

/// Canonical abbreviation and full name for the 50 states plus DC.
/// Compiled-in, immutable process-wide data.
const STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Normalize a state name or abbreviation to its canonical two-letter code.
///
/// Accepts the full name or the abbreviation, case-insensitively, with a
/// trailing period tolerated. Unrecognized input yields `None`.
pub fn normalize_state(raw: &str) -> Option<&'static str> {
    let s = raw.trim().trim_end_matches('.');
    if s.is_empty() {
        return None;
    }

    if s.len() == 2 {
        let upper = s.to_ascii_uppercase();
        return STATES
            .iter()
            .find(|(abbr, _)| *abbr == upper)
            .map(|(abbr, _)| *abbr);
    }

    STATES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(s))
        .map(|(abbr, _)| *abbr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_state_full_name() {
        assert_eq!(normalize_state("California"), Some("CA"));
        assert_eq!(normalize_state("california"), Some("CA"));
        assert_eq!(normalize_state("NEW YORK"), Some("NY"));
        assert_eq!(normalize_state("District of Columbia"), Some("DC"));
    }

    #[test]
    fn test_normalize_state_abbreviation() {
        assert_eq!(normalize_state("CA"), Some("CA"));
        assert_eq!(normalize_state("ma"), Some("MA"));
        assert_eq!(normalize_state(" TX "), Some("TX"));
        assert_eq!(normalize_state("Va."), Some("VA"));
    }

    #[test]
    fn test_normalize_state_unrecognized() {
        assert_eq!(normalize_state("XX"), None);
        assert_eq!(normalize_state("Narnia"), None);
        assert_eq!(normalize_state(""), None);
    }
}
