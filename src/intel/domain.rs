//! Domain buckets

use serde::Serialize;

use super::{by_parity, pick_label, score};
use crate::types::IntelValue;

/// Risk above this score is High
pub const HIGH_RISK_ABOVE: u8 = 70;
/// Risk above this score (and not High) is Medium
pub const MEDIUM_RISK_ABOVE: u8 = 40;

/// Hosting hint, selected by `score % 3`
pub const HOSTING_LABELS: &[&str] = &["Cloud hosted", "Shared hosting", "Dedicated infrastructure"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score > HIGH_RISK_ABOVE {
            RiskLevel::High
        } else if score > MEDIUM_RISK_ABOVE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Fabricated intel for a domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainIntel {
    pub domain: String,
    pub tld: String,
    pub risk: RiskLevel,
    pub dns_stability: &'static str,
    pub hosting: &'static str,
    pub score: u8,
}

impl DomainIntel {
    pub fn fields(&self) -> Vec<(&'static str, IntelValue)> {
        vec![
            ("domain", self.domain.clone().into()),
            ("tld", self.tld.clone().into()),
            ("risk", self.risk.to_string().into()),
            ("dns_stability", self.dns_stability.into()),
            ("hosting", self.hosting.into()),
            ("score", self.score.into()),
        ]
    }
}

/// Classify a domain; `None` if it is blank
pub fn classify_domain(domain: &str) -> Option<DomainIntel> {
    let domain = domain.trim().to_lowercase();
    if domain.is_empty() {
        return None;
    }

    let score = score(&domain);
    Some(DomainIntel {
        tld: extract_tld(&domain).to_string(),
        risk: RiskLevel::from_score(score),
        dns_stability: by_parity(score, "Stable", "Inconsistent"),
        hosting: pick_label(score, HOSTING_LABELS),
        score,
        domain,
    })
}

/// Text after the last dot, or `"unknown"`
fn extract_tld(domain: &str) -> &str {
    match domain.rsplit_once('.') {
        Some((_, tld)) if !tld.is_empty() => tld,
        _ => "unknown",
    }
}
