//! Email buckets

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::score;
use crate::types::IntelValue;

/// Breach risk above this score is Elevated
pub const ELEVATED_BREACH_ABOVE: u8 = 65;

/// Baseline confidence percentage
const CONFIDENCE_BASE: u8 = 50;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email shape regex is hardcoded and valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BreachRisk {
    Normal,
    Elevated,
}

impl BreachRisk {
    pub fn from_score(score: u8) -> Self {
        if score > ELEVATED_BREACH_ABOVE {
            BreachRisk::Elevated
        } else {
            BreachRisk::Normal
        }
    }
}

impl std::fmt::Display for BreachRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreachRisk::Normal => write!(f, "Normal"),
            BreachRisk::Elevated => write!(f, "Elevated"),
        }
    }
}

/// Fabricated intel for an email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailIntel {
    pub email: String,
    pub provider: String,
    pub breach_risk: BreachRisk,
    pub format_valid: bool,
    /// Percentage in `50..100`
    pub confidence: u8,
    pub score: u8,
}

impl EmailIntel {
    pub fn fields(&self) -> Vec<(&'static str, IntelValue)> {
        vec![
            ("email", self.email.clone().into()),
            ("provider", self.provider.clone().into()),
            ("breach_risk", self.breach_risk.to_string().into()),
            ("format_valid", self.format_valid.into()),
            ("confidence", self.confidence.into()),
            ("score", self.score.into()),
        ]
    }
}

/// Classify an email address; `None` if it is blank
pub fn classify_email(email: &str) -> Option<EmailIntel> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return None;
    }

    let score = score(&email);
    let provider = match email.split_once('@') {
        Some((_, provider)) if !provider.is_empty() => provider.to_string(),
        _ => "unknown".to_string(),
    };

    Some(EmailIntel {
        provider,
        breach_risk: BreachRisk::from_score(score),
        format_valid: EMAIL_SHAPE.is_match(&email),
        confidence: CONFIDENCE_BASE + score % 50,
        score,
        email,
    })
}
