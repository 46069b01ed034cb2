//! Variant generator

use std::collections::HashSet;

use super::{VariantConfig, TRAILING_SEPARATORS, VOWELS};

/// Generator for handle variants
#[derive(Debug, Clone, Default)]
pub struct VariantGenerator {
    config: VariantConfig,
}

impl VariantGenerator {
    /// Create a generator with the default tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom tables
    pub fn with_config(config: VariantConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Upper bound of distinct variants for the current tables
    pub fn max_possible(&self) -> usize {
        self.config.candidate_count().min(self.config.max_results)
    }

    /// Generate variants capped at the configured maximum
    pub fn generate(&self, seed: &str) -> Vec<String> {
        self.generate_capped(seed, self.config.max_results)
    }

    /// Generate variants capped at `max_results`
    ///
    /// Order is insertion order: base, vowel-stripped base, reversed base,
    /// then every separator/suffix pairing. Each pairing is normalized like the
    /// seed, so custom tables cannot reintroduce case or whitespace. Duplicates
    /// and empty strings are dropped before truncation.
    pub fn generate_capped(&self, seed: &str, max_results: usize) -> Vec<String> {
        let base = normalize_seed(seed);
        if base.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let mut candidates = Vec::with_capacity(self.config.candidate_count());
        candidates.push(base.clone());
        candidates.push(strip_vowels(&base));
        candidates.push(base.chars().rev().collect());

        for sep in &self.config.separators {
            for suffix in &self.config.suffixes {
                let joined = normalize_seed(&format!("{}{}{}", base, sep, suffix));
                candidates.push(trim_trailing_separator(joined));
            }
        }

        let mut seen = HashSet::with_capacity(candidates.len());
        let variants: Vec<String> = candidates
            .into_iter()
            .filter(|c| !c.is_empty())
            .filter(|c| seen.insert(c.clone()))
            .take(max_results)
            .collect();

        tracing::debug!(base = %base, count = variants.len(), max_results, "Generated variants");
        variants
    }
}

/// Generate variants for `seed` with the default tables
pub fn generate_variants(seed: &str, max_results: usize) -> Vec<String> {
    VariantGenerator::new().generate_capped(seed, max_results)
}

/// Trim, lowercase and remove all whitespace
pub fn normalize_seed(seed: &str) -> String {
    seed.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn strip_vowels(base: &str) -> String {
    base.chars().filter(|c| !VOWELS.contains(c)).collect()
}

/// Drop one dangling separator, e.g. `"name."` from an empty suffix
fn trim_trailing_separator(mut candidate: String) -> String {
    if candidate.ends_with(TRAILING_SEPARATORS) {
        candidate.pop();
    }
    candidate
}

impl From<VariantConfig> for VariantGenerator {
    fn from(config: VariantConfig) -> Self {
        Self::with_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(variants: &[String], cap: usize) {
        assert!(variants.len() <= cap);
        let unique: HashSet<&String> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len(), "duplicates in {:?}", variants);
        for v in variants {
            assert!(!v.is_empty());
            assert_eq!(v, &v.to_lowercase());
            assert!(!v.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn test_normalize_seed() {
        assert_eq!(normalize_seed("  Me elad \t"), "meelad");
        assert_eq!(normalize_seed("A B\nC"), "abc");
        assert_eq!(normalize_seed("   "), "");
    }

    #[test]
    fn test_empty_seed() {
        assert!(generate_variants("", 30).is_empty());
        assert!(generate_variants(" \t\n ", 30).is_empty());
    }

    #[test]
    fn test_known_variants() {
        let variants = generate_variants("Me elad", 30);
        let reversed: String = "meelad".chars().rev().collect();
        let expected = ["meelad", "meelad786", "meelad.786", "meelad_pk", "mld", reversed.as_str()];
        for e in expected {
            assert!(variants.iter().any(|v| v == e), "missing {} in {:?}", e, variants);
        }
        assert_eq!(reversed, "daleem");
        assert_well_formed(&variants, 30);
    }

    #[test]
    fn test_insertion_order() {
        let variants = generate_variants("meelad", 30);
        assert_eq!(&variants[..5], &["meelad", "mld", "daleem", "meelad786", "meelad007"]);
        // "meelad." trims back to "meelad" and is deduplicated
        assert_eq!(variants.iter().filter(|v| *v == "meelad").count(), 1);
        assert_eq!(variants.len(), 27);
    }

    #[test]
    fn test_cap_applies() {
        let variants = generate_variants("someone", 5);
        assert_eq!(variants.len(), 5);
        assert!(generate_variants("someone", 0).is_empty());
    }

    #[test]
    fn test_all_vowels_and_palindrome() {
        let variants = generate_variants("aeiou", 30);
        assert!(!variants.iter().any(|v| v.is_empty()));
        assert_well_formed(&variants, 30);

        let variants = generate_variants("abba", 30);
        assert_eq!(variants.iter().filter(|v| *v == "abba").count(), 1);
    }

    #[test]
    fn test_seed_ending_with_separator() {
        let variants = generate_variants("name_", 30);
        assert_eq!(variants[0], "name_");
        // "name_" + "" + "" loses its trailing underscore
        assert!(variants.contains(&"name".to_string()));
        assert_well_formed(&variants, 30);
    }

    #[test]
    fn test_deterministic() {
        let generator = VariantGenerator::new();
        assert_eq!(generator.generate("Shadow Fox"), generator.generate("Shadow Fox"));
    }

    #[test]
    fn test_custom_tables() {
        let generator = VariantGenerator::with_config(VariantConfig {
            separators: vec!["".to_string(), "-".to_string()],
            suffixes: vec!["".to_string(), "dev".to_string()],
            max_results: 10,
        });
        assert_eq!(generator.generate("ab"), vec!["ab", "b", "ba", "abdev", "ab-dev"]);
        assert_eq!(generator.max_possible(), 7);
    }

    #[test]
    fn test_custom_tables_are_normalized() {
        let generator = VariantGenerator::with_config(VariantConfig {
            separators: vec!["".to_string(), " ".to_string()],
            suffixes: vec!["".to_string(), "Real Deal".to_string()],
            max_results: 30,
        });
        let variants = generator.generate("meelad");
        assert_eq!(variants, vec!["meelad", "mld", "daleem", "meeladrealdeal"]);
        assert_well_formed(&variants, 30);
    }

    #[test]
    fn test_unicode_seed() {
        let variants = generate_variants("Ünïcode Ω", 30);
        assert_eq!(variants[0], "ünïcodeω");
        assert_eq!(variants[2], "ωedocïnü");
        assert_well_formed(&variants, 30);
    }
}
