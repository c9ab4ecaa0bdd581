//! Extraction primitives shared by sequencing, validation, and intake.

use regex::Regex;
use std::sync::LazyLock;

/// Rank assigned to an item whose priority, pod, or rack cannot be parsed.
///
/// Strictly greater than any value observed in real tier labels or
/// location strings, so unparseable items always sort after parseable
/// ones at the same composite-key position.
pub const UNRANKED: u32 = 999;

/// Tier labels: an optional single prefix letter, then digits ("P0", "p12").
static PRIORITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[a-z]?(\d+)\s*$").expect("priority regex is valid"));

/// The token "pod" followed by optional whitespace and digits, anywhere in
/// the text.
static POD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pod\s*(\d+)").expect("pod regex is valid"));

/// The token "rack" followed by optional whitespace and digits.
static RACK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)rack\s*(\d+)").expect("rack regex is valid"));

/// Digits at the start of the text, unit suffixes ignored ("42U" -> 42).
static LEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)").expect("leading-number regex is valid"));

/// Structural email shape: something@something.something, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Parses the numeric suffix of a priority tier label.
///
/// `"P0"` -> `Some(0)`, `"p12"` -> `Some(12)`, `"URGENT"` -> `None`.
pub fn priority_value(tier: &str) -> Option<u32> {
    capture_number(&PRIORITY_RE, tier)
}

/// Extracts the pod number from free-form location text.
pub fn pod_number(location: &str) -> Option<u32> {
    capture_number(&POD_RE, location)
}

/// Extracts the rack number from free-form location text.
pub fn rack_number(location: &str) -> Option<u32> {
    capture_number(&RACK_RE, location)
}

/// Extracts a number from the start of the text, ignoring any unit suffix.
///
/// Accepts the bare forms intake produces (`"7"`, `"42U"`) where the
/// `pod`/`rack` token is implied by the field the text came from.
pub fn leading_number(text: &str) -> Option<u32> {
    capture_number(&LEADING_RE, text)
}

/// Whether the text is shaped like an email address.
///
/// A structural check only; deliverability is not this crate's concern.
pub fn email_like(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

fn capture_number(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_value_tiers() {
        assert_eq!(priority_value("P0"), Some(0));
        assert_eq!(priority_value("p3"), Some(3));
        assert_eq!(priority_value(" P4 "), Some(4));
        assert_eq!(priority_value("P12"), Some(12));
    }

    #[test]
    fn test_priority_value_bare_number() {
        assert_eq!(priority_value("2"), Some(2));
    }

    #[test]
    fn test_priority_value_unparseable() {
        assert_eq!(priority_value("URGENT"), None);
        assert_eq!(priority_value(""), None);
        assert_eq!(priority_value("P"), None);
        assert_eq!(priority_value("high"), None);
    }

    #[test]
    fn test_pod_number_case_insensitive() {
        assert_eq!(pod_number("POD 7"), Some(7));
        assert_eq!(pod_number("pod 7"), Some(7));
        assert_eq!(pod_number("Pod   7"), Some(7));
    }

    #[test]
    fn test_pod_number_embedded() {
        assert_eq!(pod_number("Pod 7, Rack 42U"), Some(7));
        assert_eq!(pod_number("pod12"), Some(12));
    }

    #[test]
    fn test_pod_number_absent() {
        assert_eq!(pod_number("Rack 42U"), None);
        assert_eq!(pod_number(""), None);
    }

    #[test]
    fn test_rack_number() {
        assert_eq!(rack_number("Pod 7, Rack 42U"), Some(42));
        assert_eq!(rack_number("rack 15"), Some(15));
        assert_eq!(rack_number("Pod 3"), None);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("42U"), Some(42));
        assert_eq!(leading_number(" 7"), Some(7));
        assert_eq!(leading_number("U42"), None);
    }

    #[test]
    fn test_overflowing_digits_rejected() {
        // Numbers that do not fit u32 degrade to None, not a panic.
        assert_eq!(pod_number("Pod 99999999999999999999"), None);
    }

    #[test]
    fn test_email_like() {
        assert!(email_like("tech@example.com"));
        assert!(!email_like("tech@example"));
        assert!(!email_like("not an email"));
        assert!(!email_like("a b@example.com"));
    }
}
