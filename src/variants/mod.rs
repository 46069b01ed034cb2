//! Username variant generation
//!
//! Turns a seed handle into a bounded set of candidate handles that can be
//! checked across platforms.

mod generator;

pub use generator::{generate_variants, normalize_seed, VariantGenerator};

/// Separators placed between the base and a suffix
pub const DEFAULT_SEPARATORS: &[&str] = &["", ".", "_", "-"];

/// Suffix tokens appended to the base
pub const DEFAULT_SUFFIXES: &[&str] = &["", "786", "007", "pk", "real", "official", "2026"];

/// Default cap on the number of variants returned
pub const DEFAULT_MAX_VARIANTS: usize = 30;

/// Characters stripped when they dangle at the end of a candidate
const TRAILING_SEPARATORS: &[char] = &['.', '_', '-'];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Tables that drive variant generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantConfig {
    pub separators: Vec<String>,
    pub suffixes: Vec<String>,
    pub max_results: usize,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            max_results: DEFAULT_MAX_VARIANTS,
        }
    }
}

impl VariantConfig {
    /// Config with default separators and the given suffixes and cap
    pub fn with_suffixes(suffixes: Vec<String>, max_results: usize) -> Self {
        Self {
            suffixes,
            max_results,
            ..Default::default()
        }
    }

    /// Number of candidates built before dedup and truncation
    pub fn candidate_count(&self) -> usize {
        // base, vowel-stripped and reversed forms come first
        3 + self.separators.len() * self.suffixes.len()
    }
}

impl From<&crate::types::ForgeConfig> for VariantConfig {
    fn from(config: &crate::types::ForgeConfig) -> Self {
        Self::with_suffixes(config.suffixes.clone(), config.max_variants)
    }
}
