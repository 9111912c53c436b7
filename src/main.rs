use clap::Parser;
use review_sentiment::core::AnalyzerSettings;
use review_sentiment::utils::error::ErrorSeverity;
use review_sentiment::utils::{logger, validation::Validate};
use review_sentiment::{
    CliConfig, ConfusionCounts, FileCorpusLoader, InteractiveShell, SentimentAnalyzer,
    SentimentError, TomlConfig,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => {
            // 載入 TOML 配置
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            logger::init_cli_logger(cli.verbose || config.verbose(), config.log_format());
            tracing::info!("📁 Loaded configuration from: {}", path);
            run(config).await
        }
        None => {
            logger::init_cli_logger(cli.verbose, cli.log_format);
            if cli.verbose {
                tracing::debug!("CLI config: {:?}", cli);
            }
            run(cli).await
        }
    }
}

async fn run<S>(settings: S) -> anyhow::Result<()>
where
    S: AnalyzerSettings + Validate,
{
    tracing::info!("Starting review-sentiment");

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let analyzer = SentimentAnalyzer::new(FileCorpusLoader::default(), settings);

    let outcome = match analyze(&analyzer).await {
        Ok(Some(counts)) => report(analyzer.settings(), &counts),
        Ok(None) => Ok(()),
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

/// Trains on the training corpus, answers ad-hoc queries, then evaluates.
async fn analyze<S: AnalyzerSettings>(
    analyzer: &SentimentAnalyzer<FileCorpusLoader, S>,
) -> Result<Option<ConfusionCounts>, SentimentError> {
    let training = analyzer.load_training().await?;

    if analyzer.settings().shell_enabled() {
        let model = Arc::new(analyzer.train_query_model(&training)?);
        let shell = InteractiveShell::new(
            std::io::BufReader::new(std::io::stdin()),
            std::io::stdout(),
        );
        let (classified, _) = shell.run_blocking(model).await?;
        tracing::info!("💬 Classified {} ad-hoc reviews", classified);
    }

    let Some(testing) = analyzer.load_testing().await? else {
        tracing::info!("No testing corpus configured, skipping evaluation");
        return Ok(None);
    };
    let model = analyzer.train_evaluation_model(&training)?;
    Ok(Some(analyzer.evaluate(model, testing).await?))
}

fn report<S: AnalyzerSettings>(settings: &S, counts: &ConfusionCounts) -> Result<(), SentimentError> {
    if settings.json_report() {
        println!("{}", counts.to_json()?);
        return Ok(());
    }

    println!(
        "Accuracy calculated for {} data: (In the form true positive, false positive, true negative, false negative)",
        settings.testing_path().unwrap_or_default()
    );
    println!("{}", counts);
    if let Some(accuracy) = counts.accuracy() {
        println!("✅ Accuracy: {:.2}%", accuracy * 100.0);
    }
    Ok(())
}
