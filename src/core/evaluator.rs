use crate::core::scorer::SentimentModel;
use crate::domain::model::{ConfusionCounts, TokenSequence};
use crate::utils::error::{Result, SentimentError};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Accumulates confusion counts from index-aligned score sequences.
///
/// A positive-labeled review counts as a true positive when its positive score
/// is greater than or equal to its negative score. A negative-labeled review
/// counts as a true negative only when its negative score is strictly greater.
pub fn evaluate(
    pos_pos: &[f64],
    pos_neg: &[f64],
    neg_pos: &[f64],
    neg_neg: &[f64],
) -> Result<ConfusionCounts> {
    if pos_pos.len() != pos_neg.len() {
        return Err(SentimentError::invalid_argument(format!(
            "positive test scores differ in length: {} vs {}",
            pos_pos.len(),
            pos_neg.len()
        )));
    }
    if neg_pos.len() != neg_neg.len() {
        return Err(SentimentError::invalid_argument(format!(
            "negative test scores differ in length: {} vs {}",
            neg_pos.len(),
            neg_neg.len()
        )));
    }

    let mut counts = ConfusionCounts::default();
    for (positive, negative) in pos_pos.iter().zip(pos_neg) {
        if positive >= negative {
            counts.true_positive += 1;
        } else {
            counts.false_positive += 1;
        }
    }
    for (positive, negative) in neg_pos.iter().zip(neg_neg) {
        if negative > positive {
            counts.true_negative += 1;
        } else {
            counts.false_negative += 1;
        }
    }
    Ok(counts)
}

/// Scores labeled test reviews against a shared model on blocking workers.
pub struct Evaluator {
    model: Arc<SentimentModel>,
    workers: usize,
}

impl Evaluator {
    pub fn new(model: Arc<SentimentModel>, workers: usize) -> Self {
        Self {
            model,
            workers: workers.max(1),
        }
    }

    pub async fn run(
        &self,
        positive: Vec<TokenSequence>,
        negative: Vec<TokenSequence>,
    ) -> Result<ConfusionCounts> {
        let (pos_pos, pos_neg) = self.score_all(positive).await?;
        let (neg_pos, neg_neg) = self.score_all(negative).await?;

        let counts = evaluate(&pos_pos, &pos_neg, &neg_pos, &neg_neg)?;
        tracing::debug!("Evaluation counts: {}", counts);
        Ok(counts)
    }

    /// Returns the positive and negative score of every review, in input order.
    pub async fn score_all(&self, reviews: Vec<TokenSequence>) -> Result<(Vec<f64>, Vec<f64>)> {
        if reviews.is_empty() {
            return Ok((Vec::new(), Vec::new()));
        }

        let chunk_size = reviews.len().div_ceil(self.workers);
        let mut tasks = JoinSet::new();
        let mut remaining = reviews;
        let mut chunk_index = 0;
        while !remaining.is_empty() {
            let rest = remaining.split_off(chunk_size.min(remaining.len()));
            let chunk = std::mem::replace(&mut remaining, rest);
            let model = Arc::clone(&self.model);
            tasks.spawn_blocking(move || {
                let scores: Vec<(f64, f64)> =
                    chunk.iter().map(|review| model.scores(review)).collect();
                (chunk_index, scores)
            });
            chunk_index += 1;
        }

        tracing::debug!("Scoring across {} worker chunks", chunk_index);

        let mut chunks: Vec<Option<Vec<(f64, f64)>>> = vec![None; chunk_index];
        while let Some(joined) = tasks.join_next().await {
            let (index, scores) = joined.map_err(|e| SentimentError::TaskError {
                message: e.to_string(),
            })?;
            chunks[index] = Some(scores);
        }

        Ok(chunks.into_iter().flatten().flatten().unzip())
    }
}
