//! Phone number buckets

use serde::Serialize;

use super::{by_parity, score};
use crate::types::IntelValue;

/// Spam likelihood above this score is High
pub const HIGH_SPAM_ABOVE: u8 = 60;

/// Digit prefixes checked in order; the first match wins
pub const COUNTRY_PREFIXES: &[(&str, &str)] =
    &[("92", "Pakistan"), ("1", "United States / Canada")];

const UNKNOWN_COUNTRY: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineType {
    Mobile,
    Landline,
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineType::Mobile => write!(f, "Mobile"),
            LineType::Landline => write!(f, "Landline"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpamLikelihood {
    Low,
    High,
}

impl SpamLikelihood {
    pub fn from_score(score: u8) -> Self {
        if score > HIGH_SPAM_ABOVE {
            SpamLikelihood::High
        } else {
            SpamLikelihood::Low
        }
    }
}

impl std::fmt::Display for SpamLikelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpamLikelihood::Low => write!(f, "Low"),
            SpamLikelihood::High => write!(f, "High"),
        }
    }
}

/// Fabricated intel for a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneIntel {
    /// Digits only, as scored
    pub digits: String,
    pub country: &'static str,
    pub line_type: LineType,
    pub spam_likelihood: SpamLikelihood,
    pub score: u8,
}

impl PhoneIntel {
    pub fn fields(&self) -> Vec<(&'static str, IntelValue)> {
        vec![
            ("digits", self.digits.clone().into()),
            ("country", self.country.into()),
            ("line_type", self.line_type.to_string().into()),
            ("spam_likelihood", self.spam_likelihood.to_string().into()),
            ("score", self.score.into()),
        ]
    }
}

/// Keep only ASCII digits
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Classify a phone number; `None` if it is blank
///
/// Input without any digits still yields a record, scored from the empty
/// digit string.
pub fn classify_phone(phone: &str) -> Option<PhoneIntel> {
    let phone = phone.trim();
    if phone.is_empty() {
        return None;
    }

    let digits = digits_only(phone);
    let score = score(&digits);
    let country = COUNTRY_PREFIXES
        .iter()
        .find(|(prefix, _)| digits.starts_with(prefix))
        .map_or(UNKNOWN_COUNTRY, |(_, country)| *country);

    Some(PhoneIntel {
        country,
        line_type: by_parity(score, LineType::Mobile, LineType::Landline),
        spam_likelihood: SpamLikelihood::from_score(score),
        score,
        digits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pakistan_number() {
        let intel = classify_phone("+92 300 1234567").unwrap();
        assert_eq!(intel.digits, "923001234567");
        assert_eq!(intel.country, "Pakistan");
        assert_eq!(intel.score, 18);
        assert_eq!(intel.line_type, LineType::Mobile);
        assert_eq!(intel.spam_likelihood, SpamLikelihood::Low);
    }

    #[test]
    fn test_north_american_number() {
        let intel = classify_phone("+1 (555) 123-4567").unwrap();
        assert_eq!(intel.digits, "15551234567");
        assert_eq!(intel.country, "United States / Canada");
        assert_eq!(intel.score, 72);
        assert_eq!(intel.spam_likelihood, SpamLikelihood::High);
    }

    #[test]
    fn test_formatting_does_not_change_score() {
        let a = classify_phone("+923001234567").unwrap();
        let b = classify_phone("92-300-123-4567").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_country() {
        assert_eq!(classify_phone("4420").unwrap().country, "Unknown");
        assert_eq!(classify_phone("0092300").unwrap().country, "Unknown");
    }

    #[test]
    fn test_no_digits() {
        let intel = classify_phone("call me").unwrap();
        assert_eq!(intel.digits, "");
        assert_eq!(intel.score, 0);
        assert_eq!(intel.country, "Unknown");
        assert_eq!(intel.line_type, LineType::Mobile);
    }

    #[test]
    fn test_spam_threshold() {
        assert_eq!(SpamLikelihood::from_score(60), SpamLikelihood::Low);
        assert_eq!(SpamLikelihood::from_score(61), SpamLikelihood::High);
    }

    #[test]
    fn test_blank_is_absent() {
        assert!(classify_phone("").is_none());
        assert!(classify_phone("   ").is_none());
    }
}
