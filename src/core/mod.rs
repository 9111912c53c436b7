pub mod analyzer;
pub mod classifier;
pub mod evaluator;
pub mod normalizer;
pub mod scorer;
pub mod vocabulary;

pub use crate::domain::model::{ConfusionCounts, FrequencyTable, LabeledCorpus, Sentiment, TokenSequence};
pub use crate::domain::ports::{AnalyzerSettings, CorpusLoader, ReviewClassifier, ScoringMode};
pub use crate::utils::error::Result;
