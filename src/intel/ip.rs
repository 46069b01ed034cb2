//! IP address buckets

use serde::Serialize;

use super::{pick_label, score};
use crate::types::IntelValue;

pub const SUSPICIOUS_ABOVE: u8 = 75;
pub const MONITOR_ABOVE: u8 = 45;

/// Geo hint, selected by `score % 4`
pub const GEO_HINTS: &[&str] = &["North America", "Europe", "South Asia", "Middle East"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IpVersion {
    #[serde(rename = "IPv4")]
    V4,
    #[serde(rename = "IPv6")]
    V6,
}

impl IpVersion {
    /// Any colon means IPv6; no further parsing is done
    pub fn detect(ip: &str) -> Self {
        if ip.contains(':') {
            IpVersion::V6
        } else {
            IpVersion::V4
        }
    }
}

impl std::fmt::Display for IpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reputation {
    Clean,
    Monitor,
    Suspicious,
}

impl Reputation {
    pub fn from_score(score: u8) -> Self {
        if score > SUSPICIOUS_ABOVE {
            Reputation::Suspicious
        } else if score > MONITOR_ABOVE {
            Reputation::Monitor
        } else {
            Reputation::Clean
        }
    }
}

impl std::fmt::Display for Reputation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reputation::Clean => write!(f, "Clean"),
            Reputation::Monitor => write!(f, "Monitor"),
            Reputation::Suspicious => write!(f, "Suspicious"),
        }
    }
}

/// Fabricated intel for an IP address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpIntel {
    pub ip: String,
    pub version: IpVersion,
    pub reputation: Reputation,
    pub geo_hint: &'static str,
    pub score: u8,
}

impl IpIntel {
    pub fn fields(&self) -> Vec<(&'static str, IntelValue)> {
        vec![
            ("ip", self.ip.clone().into()),
            ("version", self.version.to_string().into()),
            ("reputation", self.reputation.to_string().into()),
            ("geo_hint", self.geo_hint.into()),
            ("score", self.score.into()),
        ]
    }
}

/// Classify an IP address; `None` if it is blank
pub fn classify_ip(ip: &str) -> Option<IpIntel> {
    let ip = ip.trim();
    if ip.is_empty() {
        return None;
    }

    let score = score(ip);
    Some(IpIntel {
        ip: ip.to_string(),
        version: IpVersion::detect(ip),
        reputation: Reputation::from_score(score),
        geo_hint: pick_label(score, GEO_HINTS),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4() {
        let intel = classify_ip(" 8.8.8.8 ").unwrap();
        assert_eq!(intel.ip, "8.8.8.8");
        assert_eq!(intel.version, IpVersion::V4);
        assert_eq!(intel.score, 62);
        assert_eq!(intel.reputation, Reputation::Monitor);
        assert_eq!(intel.geo_hint, "South Asia");
    }

    #[test]
    fn test_ipv6() {
        let intel = classify_ip("2001:db8::1").unwrap();
        assert_eq!(intel.version, IpVersion::V6);
        assert_eq!(intel.score, 72);
        assert_eq!(intel.geo_hint, "North America");

        assert_eq!(classify_ip("::1").unwrap().version, IpVersion::V6);
    }

    #[test]
    fn test_clean_reputation() {
        let intel = classify_ip("1.1.1.1").unwrap();
        assert_eq!(intel.score, 34);
        assert_eq!(intel.reputation, Reputation::Clean);
    }

    #[test]
    fn test_reputation_thresholds() {
        assert_eq!(Reputation::from_score(45), Reputation::Clean);
        assert_eq!(Reputation::from_score(46), Reputation::Monitor);
        assert_eq!(Reputation::from_score(75), Reputation::Monitor);
        assert_eq!(Reputation::from_score(76), Reputation::Suspicious);
    }

    #[test]
    fn test_version_serializes_as_label() {
        let json = serde_json::to_value(classify_ip("::1").unwrap()).unwrap();
        assert_eq!(json["version"], "IPv6");
    }

    #[test]
    fn test_blank_is_absent() {
        assert!(classify_ip("").is_none());
        assert!(classify_ip(" \n").is_none());
    }
}
