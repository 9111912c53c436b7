use crate::domain::model::Sentiment;

/// Single-review decision: positive only when its score is strictly higher.
///
/// Ties go to `Negative`. Bulk evaluation counts ties differently, see
/// [`crate::core::evaluator::evaluate`].
pub fn classify(positive_score: f64, negative_score: f64) -> Sentiment {
    if positive_score > negative_score {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    }
}
