use crate::domain::model::{FrequencyTable, TokenSequence};
use crate::utils::error::{Result, SentimentError};
use std::collections::HashMap;

/// Builds per-class frequency tables and trims the most frequent tokens,
/// which stand in for a stopword list.
pub struct VocabularyBuilder;

impl VocabularyBuilder {
    /// Counts every token occurrence in `corpus`, then removes the `cutoff`
    /// most frequent distinct tokens.
    ///
    /// Among tokens with equal counts the one seen first in the corpus is
    /// removed first. A cutoff at or above the number of distinct tokens
    /// yields an empty table.
    pub fn build(corpus: &[TokenSequence], cutoff: i64) -> Result<FrequencyTable> {
        let cutoff = usize::try_from(cutoff).map_err(|_| {
            SentimentError::invalid_argument(format!(
                "vocabulary cutoff must not be negative (got {})",
                cutoff
            ))
        })?;

        // token -> (count, first seen position)
        let mut counts: HashMap<String, (u64, usize)> = HashMap::new();
        for token in corpus.iter().flat_map(TokenSequence::iter) {
            let next_position = counts.len();
            counts
                .entry(token.to_string())
                .or_insert((0, next_position))
                .0 += 1;
        }

        let mut ranked: Vec<(String, u64, usize)> = counts
            .into_iter()
            .map(|(token, (count, position))| (token, count, position))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        if tracing::enabled!(tracing::Level::DEBUG) {
            let removed: Vec<&str> = ranked
                .iter()
                .take(cutoff)
                .map(|(token, _, _)| token.as_str())
                .collect();
            tracing::debug!(
                "Trimming {} most frequent tokens: {:?}",
                removed.len(),
                removed
            );
        }

        let kept: HashMap<String, u64> = ranked
            .into_iter()
            .skip(cutoff)
            .map(|(token, count, _)| (token, count))
            .collect();

        Ok(FrequencyTable::from_map(kept))
    }
}
