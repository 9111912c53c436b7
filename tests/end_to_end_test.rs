use anyhow::Result;
use review_sentiment::core::normalizer::tokenize_all;
use review_sentiment::core::{ReviewClassifier, ScoringMode};
use review_sentiment::{
    FileCorpusLoader, InteractiveShell, Sentiment, SentimentAnalyzer, SentimentError,
    SentimentModel, TomlConfig,
};
use tempfile::TempDir;

const TRAINING: &str = "\
Great phone, works perfectly.\t1
I love this headset, great sound!\t1
Excellent value -- highly recommended.\t1
Battery lasts 2 days, great product.\t1
this line has no label
Terrible quality, broke after 2 weeks.\t0
Waste of money, terrible sound.\t0
Do not buy, the worst product ever.\t0
";

const TESTING: &str = "\
Great sound and excellent battery\t1
love it\t1
terrible, waste of money\t0
the worst\t0
";

fn write_corpora(dir: &TempDir) -> Result<()> {
    std::fs::write(dir.path().join("TRAINING.txt"), TRAINING)?;
    std::fs::write(dir.path().join("TESTING.txt"), TESTING)?;
    Ok(())
}

fn settings(extra: &str) -> Result<TomlConfig> {
    let content = format!(
        "[corpus]\ntraining = \"TRAINING.txt\"\ntesting = \"TESTING.txt\"\n{}",
        extra
    );
    Ok(TomlConfig::from_toml_str(&content)?)
}

#[test]
fn test_two_review_training_set() {
    let positive = tokenize_all(&["good good"]);
    let negative = tokenize_all(&["bad bad"]);
    let model = SentimentModel::train(&positive, &negative, 0, ScoringMode::Product).unwrap();

    assert_eq!(model.classify_review("good"), Sentiment::Positive);
    assert_eq!(model.classify_review("bad"), Sentiment::Negative);
}

#[tokio::test]
async fn test_file_corpora_evaluation() -> Result<()> {
    let dir = TempDir::new()?;
    write_corpora(&dir)?;

    let analyzer = SentimentAnalyzer::new(
        FileCorpusLoader::new(dir.path()),
        settings("[model]\nevaluation_cutoff = 0\n[evaluation]\nworkers = 2\n")?,
    );

    let counts = analyzer.run_evaluation().await?.expect("testing corpus configured");
    assert_eq!(counts.true_positive + counts.false_positive, 2);
    assert_eq!(counts.true_negative + counts.false_negative, 2);
    assert_eq!(counts.accuracy(), Some(1.0));
    Ok(())
}

#[tokio::test]
async fn test_scoring_modes_agree() -> Result<()> {
    let dir = TempDir::new()?;
    write_corpora(&dir)?;

    let product = SentimentAnalyzer::new(FileCorpusLoader::new(dir.path()), settings("")?)
        .run_evaluation()
        .await?;
    let log_space = SentimentAnalyzer::new(
        FileCorpusLoader::new(dir.path()),
        settings("[model]\nscoring = \"log_space\"\n")?,
    )
    .run_evaluation()
    .await?;

    assert_eq!(product, log_space);
    Ok(())
}

#[tokio::test]
async fn test_malformed_lines_are_skipped() -> Result<()> {
    let dir = TempDir::new()?;
    write_corpora(&dir)?;

    let analyzer = SentimentAnalyzer::new(FileCorpusLoader::new(dir.path()), settings("")?);
    let training = analyzer.load_training().await?;
    assert_eq!(training.positive.len(), 4);
    assert_eq!(training.negative.len(), 3);
    assert_eq!(
        training.positive[3].as_text(),
        "battery lasts num days great product"
    );
    Ok(())
}

#[tokio::test]
async fn test_negative_cutoff_aborts_evaluation() -> Result<()> {
    let dir = TempDir::new()?;
    write_corpora(&dir)?;

    let analyzer = SentimentAnalyzer::new(
        FileCorpusLoader::new(dir.path()),
        settings("[model]\nevaluation_cutoff = -5\n")?,
    );
    let result = analyzer.run_evaluation().await;
    assert!(matches!(result, Err(SentimentError::InvalidArgument { .. })));
    Ok(())
}

#[tokio::test]
async fn test_shell_with_trained_query_model() -> Result<()> {
    let dir = TempDir::new()?;
    write_corpora(&dir)?;

    let analyzer = SentimentAnalyzer::new(
        FileCorpusLoader::new(dir.path()),
        settings("[model]\nquery_cutoff = 0\n")?,
    );
    let training = analyzer.load_training().await?;
    let model = analyzer.train_query_model(&training)?;

    let mut shell = InteractiveShell::new("excellent headset\nterrible waste\n\n".as_bytes(), Vec::new());
    assert_eq!(shell.run(&model)?, 2);

    let output = String::from_utf8(shell.into_output())?;
    let labels: Vec<&str> = output
        .lines()
        .filter(|line| *line == "Positive" || *line == "Negative")
        .collect();
    assert_eq!(labels, vec!["Positive", "Negative"]);
    Ok(())
}
