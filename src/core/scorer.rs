use crate::core::classifier::classify;
use crate::core::normalizer::tokenize;
use crate::core::vocabulary::VocabularyBuilder;
use crate::domain::model::{FrequencyTable, Sentiment, TokenSequence};
use crate::domain::ports::{ReviewClassifier, ScoringMode};
use crate::utils::error::{Result, SentimentError};

/// Relative-frequency priors `(positive, negative)` from corpus sizes.
pub fn class_probability(positive: usize, negative: usize) -> Result<(f64, f64)> {
    let total = positive + negative;
    if total == 0 {
        return Err(SentimentError::invalid_argument(
            "cannot compute class priors from an empty training corpus",
        ));
    }
    let total = total as f64;
    Ok((positive as f64 / total, negative as f64 / total))
}

/// Prior and vocabulary of one sentiment class.
#[derive(Debug, Clone)]
pub struct ClassModel {
    prior: f64,
    vocabulary: FrequencyTable,
    denominator: f64,
}

impl ClassModel {
    pub fn new(prior: f64, vocabulary: FrequencyTable) -> Self {
        let denominator = vocabulary.len() as u64 + vocabulary.total();
        // an empty vocabulary gives every token likelihood 1
        let denominator = denominator.max(1) as f64;
        Self {
            prior,
            vocabulary,
            denominator,
        }
    }

    pub fn prior(&self) -> f64 {
        self.prior
    }

    pub fn vocabulary(&self) -> &FrequencyTable {
        &self.vocabulary
    }

    /// Laplace-smoothed `P(token | class)`.
    pub fn likelihood(&self, token: &str) -> f64 {
        (self.vocabulary.count(token) + 1) as f64 / self.denominator
    }

    /// `prior * Π likelihood(token)`. An empty review scores exactly the prior.
    pub fn score(&self, review: &TokenSequence) -> f64 {
        review
            .iter()
            .fold(self.prior, |score, token| score * self.likelihood(token))
    }

    /// Natural log of [`ClassModel::score`], accumulated as a sum.
    pub fn log_score(&self, review: &TokenSequence) -> f64 {
        review
            .iter()
            .fold(self.prior.ln(), |score, token| score + self.likelihood(token).ln())
    }

    pub fn score_with(&self, review: &TokenSequence, mode: ScoringMode) -> f64 {
        match mode {
            ScoringMode::Product => self.score(review),
            ScoringMode::LogSpace => self.log_score(review),
        }
    }
}

/// The positive and negative class models trained from one corpus.
#[derive(Debug, Clone)]
pub struct SentimentModel {
    positive: ClassModel,
    negative: ClassModel,
    mode: ScoringMode,
}

impl SentimentModel {
    pub fn new(positive: ClassModel, negative: ClassModel, mode: ScoringMode) -> Self {
        Self {
            positive,
            negative,
            mode,
        }
    }

    /// Builds both class models from normalized training reviews.
    pub fn train(
        positive: &[TokenSequence],
        negative: &[TokenSequence],
        cutoff: i64,
        mode: ScoringMode,
    ) -> Result<Self> {
        let (positive_prior, negative_prior) = class_probability(positive.len(), negative.len())?;
        let positive_vocabulary = VocabularyBuilder::build(positive, cutoff)?;
        let negative_vocabulary = VocabularyBuilder::build(negative, cutoff)?;

        tracing::debug!(
            "Trained model: positive prior {:.4} ({} tokens), negative prior {:.4} ({} tokens), cutoff {}",
            positive_prior,
            positive_vocabulary.len(),
            negative_prior,
            negative_vocabulary.len(),
            cutoff
        );

        Ok(Self::new(
            ClassModel::new(positive_prior, positive_vocabulary),
            ClassModel::new(negative_prior, negative_vocabulary),
            mode,
        ))
    }

    pub fn positive(&self) -> &ClassModel {
        &self.positive
    }

    pub fn negative(&self) -> &ClassModel {
        &self.negative
    }

    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// `(positive score, negative score)` for one review.
    pub fn scores(&self, review: &TokenSequence) -> (f64, f64) {
        (
            self.positive.score_with(review, self.mode),
            self.negative.score_with(review, self.mode),
        )
    }

    pub fn classify_tokens(&self, review: &TokenSequence) -> Sentiment {
        let (positive, negative) = self.scores(review);
        classify(positive, negative)
    }
}

impl ReviewClassifier for SentimentModel {
    fn classify_review(&self, text: &str) -> Sentiment {
        self.classify_tokens(&tokenize(text))
    }
}
