use std::collections::HashSet;

use super::tokenizer::Tokenizer;

/// Share of the target's unique tokens a candidate must contain
pub const STRICT_OVERLAP_THRESHOLD: f64 = 0.6;

/// Targets with at most this many tokens pass on a single shared token
pub const SHORT_TITLE_TOKENS: usize = 2;

/// Token-overlap title agreement between the two catalogs
pub struct TitleMatcher;

impl TitleMatcher {
    /// True when either candidate title shares at least 60% of the target's
    /// tokens, or shares any token with a target of two tokens or fewer.
    pub fn strict_match(target: &str, english: Option<&str>, romaji: Option<&str>) -> bool {
        let target_tokens = Tokenizer::token_set(Some(target));
        if target_tokens.is_empty() {
            return false;
        }

        [english, romaji]
            .into_iter()
            .flatten()
            .any(|candidate| Self::strict_candidate(&target_tokens, candidate))
    }

    /// True when any target token appears in either candidate title
    pub fn loose_match(target: &str, english: Option<&str>, romaji: Option<&str>) -> bool {
        let target_tokens = Tokenizer::tokenize(Some(target));
        if target_tokens.is_empty() {
            return false;
        }

        [english, romaji].into_iter().flatten().any(|candidate| {
            let candidate_tokens = Tokenizer::token_set(Some(candidate));
            target_tokens
                .iter()
                .any(|token| candidate_tokens.contains(token))
        })
    }

    /// Fraction of the target's unique tokens present in `candidate`
    pub fn overlap_ratio(target: &str, candidate: &str) -> f64 {
        let target_tokens = Tokenizer::token_set(Some(target));
        if target_tokens.is_empty() {
            return 0.0;
        }
        let shared = Self::shared_count(&target_tokens, candidate);
        shared as f64 / target_tokens.len() as f64
    }

    fn strict_candidate(target_tokens: &HashSet<String>, candidate: &str) -> bool {
        let shared = Self::shared_count(target_tokens, candidate);
        let ratio = shared as f64 / target_tokens.len() as f64;

        ratio >= STRICT_OVERLAP_THRESHOLD
            || (target_tokens.len() <= SHORT_TITLE_TOKENS && shared >= 1)
    }

    fn shared_count(target_tokens: &HashSet<String>, candidate: &str) -> usize {
        let candidate_tokens = Tokenizer::token_set(Some(candidate));
        target_tokens.intersection(&candidate_tokens).count()
    }
}
