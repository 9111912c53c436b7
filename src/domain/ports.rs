use crate::domain::model::{LabeledCorpus, Sentiment};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[async_trait]
pub trait CorpusLoader: Send + Sync {
    async fn load(&self, source: &str) -> Result<LabeledCorpus>;
}

pub trait ReviewClassifier: Send + Sync {
    fn classify_review(&self, text: &str) -> Sentiment;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ScoringMode {
    /// Direct product of likelihoods.
    #[default]
    Product,
    /// Sum of log likelihoods. Decisions match `Product` while the product
    /// stays above zero; after underflow this mode still separates the scores.
    LogSpace,
}

pub trait AnalyzerSettings: Send + Sync {
    fn training_path(&self) -> &str;
    fn testing_path(&self) -> Option<&str>;
    fn query_cutoff(&self) -> i64;
    fn evaluation_cutoff(&self) -> i64;
    fn workers(&self) -> usize;
    fn scoring_mode(&self) -> ScoringMode;
    fn shell_enabled(&self) -> bool;
    fn json_report(&self) -> bool;
}
