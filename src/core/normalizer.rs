//! Review text normalization.
//!
//! Turns a raw review into canonical lowercase tokens: punctuation becomes
//! whitespace, hyphenated words are joined, and numeric content is replaced by
//! the sentinel token `num`.

use crate::domain::model::TokenSequence;
use regex::Regex;
use std::sync::LazyLock;

/// Sentinel that stands in for any numeric content.
pub const NUM_TOKEN: &str = "num";

static NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::new);

/// Normalizes `text` into space-joined canonical tokens.
pub fn normalize(text: &str) -> String {
    NORMALIZER.normalize(text)
}

/// Normalizes `text` and returns the tokens.
pub fn tokenize(text: &str) -> TokenSequence {
    NORMALIZER.tokenize(text)
}

pub fn tokenize_all<S: AsRef<str>>(reviews: &[S]) -> Vec<TokenSequence> {
    reviews.iter().map(|review| tokenize(review.as_ref())).collect()
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    separators: Regex,
    // Boundary rewrites, tried in order and anchored at the token start.
    letters_digits_letters: Regex,
    digits_letters_digits: Regex,
    digits_letters: Regex,
    letters_digits: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            separators: compile(r"[^a-z0-9'-]+"),
            letters_digits_letters: compile(r"^([a-z']+)([0-9]+)([a-z']+)"),
            digits_letters_digits: compile(r"^([0-9]+)([a-z']+)([0-9]+)"),
            digits_letters: compile(r"^([0-9]+)([a-z']+)"),
            letters_digits: compile(r"^([a-z']+)([0-9]+)"),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        self.canonical_tokens(text).join(" ")
    }

    pub fn tokenize(&self, text: &str) -> TokenSequence {
        TokenSequence::new(self.canonical_tokens(text))
    }

    fn canonical_tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let spaced = self.separators.replace_all(&lowered, " ");
        // "--" has to go before single hyphens are stripped
        let joined = spaced.replace("--", " ").replace('-', "");

        let mut tokens: Vec<String> = Vec::new();
        for candidate in joined.split_whitespace() {
            for token in self.rewrite_boundaries(candidate) {
                let token = if is_all_digits(&token) {
                    NUM_TOKEN.to_string()
                } else {
                    token
                };
                if token == NUM_TOKEN && tokens.last().is_some_and(|last| last == NUM_TOKEN) {
                    continue;
                }
                tokens.push(token);
            }
        }
        tokens
    }

    /// Splits digit/letter boundaries of a single token.
    fn rewrite_boundaries(&self, token: &str) -> Vec<String> {
        if let Some(caps) = self.letters_digits_letters.captures(token) {
            return vec![format!("{}{}{}", &caps[1], &caps[2], &caps[3])];
        }
        if let Some(caps) = self.digits_letters_digits.captures(token) {
            return vec![
                NUM_TOKEN.to_string(),
                caps[2].to_string(),
                NUM_TOKEN.to_string(),
            ];
        }
        if let Some(caps) = self.digits_letters.captures(token) {
            return vec![NUM_TOKEN.to_string(), caps[2].to_string()];
        }
        if let Some(caps) = self.letters_digits.captures(token) {
            return vec![caps[1].to_string(), NUM_TOKEN.to_string()];
        }
        vec![token.to_string()]
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("normalizer patterns are valid")
}

fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
