//! Social Security Number masking and validity checking.

/// Mask an SSN to the canonical `****` + last-4 form.
///
/// All non-digit characters are stripped first, so separators and mask
/// placeholders (`XXX-XX-6789`, `****6789`) are tolerated and re-masked to
/// the canonical form. Fewer than 4 usable digits yields `None`.
pub fn mask_ssn(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return None;
    }
    Some(format!("****{}", &digits[digits.len() - 4..]))
}

/// Check a full unmasked SSN against SSA issuance rules.
///
/// Rejects anything that is not exactly 9 digits, area numbers `000`, `666`
/// and `900-999`, group number `00`, and serial number `0000`.
pub fn validate_ssn(ssn: &str) -> bool {
    let digits: String = ssn.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 9 {
        return false;
    }

    let area = &digits[0..3];
    let group = &digits[3..5];
    let serial = &digits[5..9];

    if area == "000" || area == "666" {
        return false;
    }
    if area.parse::<u32>().unwrap_or(0) >= 900 {
        return false;
    }
    if group == "00" || serial == "0000" {
        return false;
    }

    true
}

/// Format a 9-digit SSN with dashes (`XXX-XX-XXXX`); other input is echoed.
pub fn format_ssn(ssn: &str) -> String {
    let digits: String = ssn.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 9 {
        return ssn.to_string();
    }
    format!("{}-{}-{}", &digits[0..3], &digits[3..5], &digits[5..9])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_ssn_full() {
        assert_eq!(mask_ssn("123-45-6789"), Some("****6789".to_string()));
        assert_eq!(mask_ssn("123456789"), Some("****6789".to_string()));
        assert_eq!(mask_ssn("123 45 6789"), Some("****6789".to_string()));
    }

    #[test]
    fn test_mask_ssn_already_masked() {
        assert_eq!(mask_ssn("****6789"), Some("****6789".to_string()));
        assert_eq!(mask_ssn("XXX-XX-6789"), Some("****6789".to_string()));
        assert_eq!(mask_ssn("xxx-xx-6789"), Some("****6789".to_string()));
    }

    #[test]
    fn test_mask_ssn_too_short() {
        assert_eq!(mask_ssn("678"), None);
        assert_eq!(mask_ssn("***-**-8"), None);
        assert_eq!(mask_ssn(""), None);
        assert_eq!(mask_ssn("no digits"), None);
    }

    #[test]
    fn test_validate_ssn_accepts_issuable() {
        assert!(validate_ssn("234-56-7890"));
        assert!(validate_ssn("234567890"));
        assert!(validate_ssn("001-01-0001"));
    }

    #[test]
    fn test_validate_ssn_rejects_ssa_ranges() {
        assert!(!validate_ssn("000-00-0000"));
        assert!(!validate_ssn("000-12-3456"));
        assert!(!validate_ssn("666-12-3456"));
        assert!(!validate_ssn("900-12-3456"));
        assert!(!validate_ssn("999-12-3456"));
        assert!(!validate_ssn("234-00-7890"));
        assert!(!validate_ssn("234-56-0000"));
    }

    #[test]
    fn test_validate_ssn_rejects_wrong_length() {
        assert!(!validate_ssn("123-45-678"));
        assert!(!validate_ssn("1234567890"));
        assert!(!validate_ssn(""));
    }

    #[test]
    fn test_format_ssn() {
        assert_eq!(format_ssn("123456789"), "123-45-6789");
        assert_eq!(format_ssn("123-45-6789"), "123-45-6789");
        assert_eq!(format_ssn("****6789"), "****6789");
    }
}
