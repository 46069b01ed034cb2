//! Deterministic scoring and per-field intel buckets
//!
//! Everything here is fabricated locally from a toy score. The thresholds and
//! label tables are fixed lookup constants, kept stable so that the same
//! input always renders the same record.

pub mod domain;
pub mod email;
pub mod ip;
pub mod phone;

pub use domain::{classify_domain, DomainIntel, RiskLevel};
pub use email::{classify_email, BreachRisk, EmailIntel};
pub use ip::{classify_ip, IpIntel, IpVersion, Reputation};
pub use phone::{classify_phone, LineType, PhoneIntel, SpamLikelihood};

use crate::types::{InputKind, IntelValue};
use serde::Serialize;

/// Modulus applied to the character sum
pub const SCORE_MODULUS: u64 = 100;

/// Score a string: sum of its Unicode scalar values, modulo 100
///
/// Case-sensitive and order-insensitive. `score("")` is 0.
pub fn score(text: &str) -> u8 {
    let sum: u64 = text.chars().map(|c| u64::from(u32::from(c))).sum();
    // always < 100
    (sum % SCORE_MODULUS) as u8
}

/// Label for even scores vs odd scores
pub(crate) fn by_parity<T>(score: u8, even: T, odd: T) -> T {
    if score % 2 == 0 {
        even
    } else {
        odd
    }
}

/// Pick `labels[score % labels.len()]`
pub(crate) fn pick_label(score: u8, labels: &'static [&'static str]) -> &'static str {
    labels
        .get(usize::from(score) % labels.len().max(1))
        .copied()
        .unwrap_or("unknown")
}

/// Intel record for one classified input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IntelRecord {
    Domain(DomainIntel),
    Email(EmailIntel),
    Phone(PhoneIntel),
    Ip(IpIntel),
}

impl IntelRecord {
    /// The input kind this record describes
    pub fn kind(&self) -> InputKind {
        match self {
            IntelRecord::Domain(_) => InputKind::Domain,
            IntelRecord::Email(_) => InputKind::Email,
            IntelRecord::Phone(_) => InputKind::Phone,
            IntelRecord::Ip(_) => InputKind::Ip,
        }
    }

    /// Score the record was derived from
    pub fn score(&self) -> u8 {
        match self {
            IntelRecord::Domain(r) => r.score,
            IntelRecord::Email(r) => r.score,
            IntelRecord::Phone(r) => r.score,
            IntelRecord::Ip(r) => r.score,
        }
    }

    /// Ordered field name/value pairs for display
    pub fn fields(&self) -> Vec<(&'static str, IntelValue)> {
        match self {
            IntelRecord::Domain(r) => r.fields(),
            IntelRecord::Email(r) => r.fields(),
            IntelRecord::Phone(r) => r.fields(),
            IntelRecord::Ip(r) => r.fields(),
        }
    }

    /// Look up a single field by name
    pub fn get(&self, name: &str) -> Option<IntelValue> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}

/// Classify `input` as `kind`; `None` for usernames and empty input
pub fn classify(kind: InputKind, input: &str) -> Option<IntelRecord> {
    let record = match kind {
        InputKind::Username => None,
        InputKind::Domain => classify_domain(input).map(IntelRecord::Domain),
        InputKind::Email => classify_email(input).map(IntelRecord::Email),
        InputKind::Phone => classify_phone(input).map(IntelRecord::Phone),
        InputKind::Ip => classify_ip(input).map(IntelRecord::Ip),
    };

    if let Some(ref r) = record {
        tracing::debug!(kind = %kind, score = r.score(), "Classified input");
    }
    record
}
