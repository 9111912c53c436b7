use crate::core::evaluator::Evaluator;
use crate::core::normalizer::tokenize_all;
use crate::core::scorer::SentimentModel;
use crate::core::{AnalyzerSettings, CorpusLoader};
use crate::domain::model::{ConfusionCounts, LabeledCorpus, TokenSequence};
use crate::utils::error::Result;
use std::sync::Arc;

/// A labeled corpus after normalization.
#[derive(Debug, Clone, Default)]
pub struct NormalizedCorpus {
    pub positive: Vec<TokenSequence>,
    pub negative: Vec<TokenSequence>,
}

impl From<&LabeledCorpus> for NormalizedCorpus {
    fn from(corpus: &LabeledCorpus) -> Self {
        Self {
            positive: tokenize_all(&corpus.positive),
            negative: tokenize_all(&corpus.negative),
        }
    }
}

pub struct SentimentAnalyzer<L: CorpusLoader, S: AnalyzerSettings> {
    loader: L,
    settings: S,
}

impl<L: CorpusLoader, S: AnalyzerSettings> SentimentAnalyzer<L, S> {
    pub fn new(loader: L, settings: S) -> Self {
        Self { loader, settings }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub async fn load_training(&self) -> Result<NormalizedCorpus> {
        self.load_normalized(self.settings.training_path()).await
    }

    /// Loads the test corpus, or `None` when no test file is configured.
    pub async fn load_testing(&self) -> Result<Option<NormalizedCorpus>> {
        match self.settings.testing_path() {
            Some(path) => Ok(Some(self.load_normalized(path).await?)),
            None => Ok(None),
        }
    }

    async fn load_normalized(&self, source: &str) -> Result<NormalizedCorpus> {
        let corpus = self.loader.load(source).await?;
        tracing::info!(
            "📥 Loaded {} reviews from {} ({} positive, {} negative, {} skipped)",
            corpus.len(),
            source,
            corpus.positive.len(),
            corpus.negative.len(),
            corpus.skipped.len()
        );
        Ok(NormalizedCorpus::from(&corpus))
    }

    /// Model used for ad-hoc queries.
    pub fn train_query_model(&self, training: &NormalizedCorpus) -> Result<SentimentModel> {
        self.train(training, self.settings.query_cutoff())
    }

    /// Model used for the bulk evaluation.
    pub fn train_evaluation_model(&self, training: &NormalizedCorpus) -> Result<SentimentModel> {
        self.train(training, self.settings.evaluation_cutoff())
    }

    fn train(&self, training: &NormalizedCorpus, cutoff: i64) -> Result<SentimentModel> {
        let model = SentimentModel::train(
            &training.positive,
            &training.negative,
            cutoff,
            self.settings.scoring_mode(),
        )?;
        tracing::info!(
            "🧠 Trained model with cutoff {}: {} positive / {} negative vocabulary entries",
            cutoff,
            model.positive().vocabulary().len(),
            model.negative().vocabulary().len()
        );
        Ok(model)
    }

    pub async fn evaluate(
        &self,
        model: SentimentModel,
        testing: NormalizedCorpus,
    ) -> Result<ConfusionCounts> {
        let evaluator = Evaluator::new(Arc::new(model), self.settings.workers());
        let counts = evaluator.run(testing.positive, testing.negative).await?;
        tracing::info!(
            "📊 Evaluated {} reviews: {} correct",
            counts.total(),
            counts.correct()
        );
        Ok(counts)
    }

    /// Trains the evaluation model and scores the test corpus with it.
    pub async fn run_evaluation(&self) -> Result<Option<ConfusionCounts>> {
        let Some(testing) = self.load_testing().await? else {
            tracing::info!("No testing corpus configured, skipping evaluation");
            return Ok(None);
        };
        let training = self.load_training().await?;
        let model = self.train_evaluation_model(&training)?;
        Ok(Some(self.evaluate(model, testing).await?))
    }
}
