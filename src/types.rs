//! Core types and structures for pivot-forge

use crate::config_error;
use crate::error::{PivotForgeError, Result};
use crate::variants::{DEFAULT_MAX_VARIANTS, DEFAULT_SUFFIXES};
use serde::Serialize;
use std::str::FromStr;

/// Environment variable overriding the variant cap
pub const ENV_MAX_VARIANTS: &str = "PIVOT_FORGE_MAX_VARIANTS";
/// Environment variable overriding the suffix table (comma-separated)
pub const ENV_SUFFIXES: &str = "PIVOT_FORGE_SUFFIXES";
/// Environment variable holding the tracing filter
pub const ENV_LOG: &str = "PIVOT_FORGE_LOG";

/// Upper bound accepted for the variant cap
pub const MAX_VARIANTS_LIMIT: usize = 100;

/// Kind of value an investigator can pivot on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Username,
    Domain,
    Email,
    Phone,
    Ip,
}

impl InputKind {
    pub const ALL: [InputKind; 5] = [
        InputKind::Username,
        InputKind::Domain,
        InputKind::Email,
        InputKind::Phone,
        InputKind::Ip,
    ];

    /// Whether the kind produces an intel record
    pub fn is_classifiable(&self) -> bool {
        !matches!(self, InputKind::Username)
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Username => write!(f, "username"),
            InputKind::Domain => write!(f, "domain"),
            InputKind::Email => write!(f, "email"),
            InputKind::Phone => write!(f, "phone"),
            InputKind::Ip => write!(f, "ip"),
        }
    }
}

impl FromStr for InputKind {
    type Err = PivotForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "username" | "user" | "handle" => Ok(InputKind::Username),
            "domain" => Ok(InputKind::Domain),
            "email" | "mail" => Ok(InputKind::Email),
            "phone" | "tel" => Ok(InputKind::Phone),
            "ip" => Ok(InputKind::Ip),
            other => Err(PivotForgeError::validation(format!(
                "Unknown input kind '{}'. Expected one of: username, domain, email, phone, ip",
                other
            ))),
        }
    }
}

/// A single derived value inside an intel record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IntelValue {
    Number(u32),
    Flag(bool),
    Label(String),
}

impl std::fmt::Display for IntelValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntelValue::Number(n) => write!(f, "{}", n),
            IntelValue::Flag(b) => write!(f, "{}", if *b { "yes" } else { "no" }),
            IntelValue::Label(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for IntelValue {
    fn from(s: &str) -> Self {
        IntelValue::Label(s.to_string())
    }
}

impl From<String> for IntelValue {
    fn from(s: String) -> Self {
        IntelValue::Label(s)
    }
}

impl From<u32> for IntelValue {
    fn from(n: u32) -> Self {
        IntelValue::Number(n)
    }
}

impl From<u8> for IntelValue {
    fn from(n: u8) -> Self {
        IntelValue::Number(u32::from(n))
    }
}

impl From<bool> for IntelValue {
    fn from(b: bool) -> Self {
        IntelValue::Flag(b)
    }
}

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, Serialize)]
pub struct ForgeConfig {
    pub max_variants: usize,
    pub suffixes: Vec<String>,
    pub log_filter: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            max_variants: DEFAULT_MAX_VARIANTS,
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            log_filter: "warn".to_string(),
        }
    }
}

impl ForgeConfig {
    /// Build configuration from `PIVOT_FORGE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_VARIANTS) {
            let max = raw.trim().parse::<usize>().map_err(|e| {
                config_error!("{} must be a number, got '{}': {}", ENV_MAX_VARIANTS, raw, e)
            })?;
            if max == 0 || max > MAX_VARIANTS_LIMIT {
                return Err(config_error!(
                    "{} must be between 1 and {}, got {}",
                    ENV_MAX_VARIANTS,
                    MAX_VARIANTS_LIMIT,
                    max
                ));
            }
            config.max_variants = max;
        }

        if let Some(raw) = lookup(ENV_SUFFIXES) {
            config.suffixes = parse_suffix_list(&raw)?;
        }

        if let Some(raw) = lookup(ENV_LOG) {
            if !raw.trim().is_empty() {
                config.log_filter = raw.trim().to_string();
            }
        }

        Ok(config)
    }
}

/// Parse a comma-separated suffix list; empty entries stand for the bare base
fn parse_suffix_list(raw: &str) -> Result<Vec<String>> {
    let mut suffixes = Vec::new();
    for entry in raw.split(',') {
        let suffix = entry.trim().to_lowercase();
        if suffix.chars().any(char::is_whitespace) {
            return Err(config_error!(
                "{} entries cannot contain whitespace: '{}'",
                ENV_SUFFIXES,
                entry
            ));
        }
        if !suffixes.contains(&suffix) {
            suffixes.push(suffix);
        }
    }
    Ok(suffixes)
}
