use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Runs of whitespace, colon, period, hyphen, underscore or slash
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s:._/\-]+").expect("separator pattern is valid"));

/// Splits titles into lowercase comparison tokens
pub struct Tokenizer;

impl Tokenizer {
    /// Ordered, lowercase, non-empty tokens of `title`
    pub fn tokenize(title: Option<&str>) -> Vec<String> {
        let Some(title) = title else {
            return Vec::new();
        };

        let tokens: Vec<String> = SEPARATORS
            .split(&title.to_lowercase())
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        log::trace!("Tokenized '{}' into {:?}", title, tokens);
        tokens
    }

    /// Unique tokens of `title`
    pub fn token_set(title: Option<&str>) -> HashSet<String> {
        Self::tokenize(title).into_iter().collect()
    }
}
