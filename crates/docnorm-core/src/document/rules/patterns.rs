//! Common regex patterns for raw field parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Currency: US-grouped integer part with optional fraction
    pub static ref CURRENCY_CORE: Regex = Regex::new(
        r"^(?:(?:\d{1,3}(?:,\d{3})*|\d+)(?:\.\d+)?|\.\d+)$"
    ).unwrap();

    pub static ref CURRENCY_CODE: Regex = Regex::new(
        r"(?i)[a-z]{3}$"
    ).unwrap();

    // Date shapes, tried in priority order
    pub static ref DATE_ISO: Regex = Regex::new(
        r"^(\d{4})-(\d{1,2})-(\d{1,2})$"
    ).unwrap();

    pub static ref DATE_US_SLASH: Regex = Regex::new(
        r"^(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})$"
    ).unwrap();

    pub static ref DATE_US_DASH: Regex = Regex::new(
        r"^(\d{1,2})-(\d{1,2})-(\d{4})$"
    ).unwrap();

    // "January 15, 2026" / "Jan. 15 2026"
    pub static ref DATE_MONTH_FIRST: Regex = Regex::new(
        r"^([A-Za-z]+)\.?\s+(\d{1,2})(?:\s*,\s*|\s+)(\d{4})$"
    ).unwrap();

    // "15 January 2026"
    pub static ref DATE_DAY_FIRST: Regex = Regex::new(
        r"^(\d{1,2})\s+([A-Za-z]+)\.?,?\s+(\d{4})$"
    ).unwrap();

    // Trailing 5-digit or ZIP+4 postal code
    pub static ref ZIP_TRAILING: Regex = Regex::new(
        r"^(.*?)[\s,]*(\d{5}(?:-\d{4})?)$"
    ).unwrap();

    // A comma segment that is nothing but a unit designator
    pub static ref UNIT_SEGMENT: Regex = Regex::new(
        r"(?i)^(?:(?:apt|apartment|unit|suite|ste|bldg|building|fl|floor|rm|room)\.?\s*#?|#)\s*[A-Za-z0-9-]+$"
    ).unwrap();

    // A unit designator embedded at the end of a street line
    pub static ref UNIT_TRAILING: Regex = Regex::new(
        r"(?i)(?:\b(?:apt|apartment|unit|suite|ste|bldg|building|fl|floor|rm|room)\.?\s*#?|#)\s*[A-Za-z0-9-]+\s*$"
    ).unwrap();
}
