pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{AnalyzerSettings, ScoringMode};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "review-sentiment")]
#[command(about = "Naive-Bayes sentiment classifier for short reviews")]
pub struct CliConfig {
    #[arg(long, default_value = "TRAINING.txt", help = "Labeled training reviews")]
    pub training: String,

    #[arg(long, default_value = "TESTING.txt", help = "Labeled reviews to evaluate against")]
    pub testing: String,

    #[arg(long, help = "Skip the bulk evaluation")]
    pub skip_evaluation: bool,

    #[arg(long, default_value = "3", allow_negative_numbers = true)]
    pub query_cutoff: i64,

    #[arg(long, default_value = "10", allow_negative_numbers = true)]
    pub evaluation_cutoff: i64,

    #[arg(long, default_value = "4", help = "Scoring workers used by the evaluation")]
    pub workers: usize,

    #[arg(long, value_enum, default_value_t = ScoringMode::Product)]
    pub scoring: ScoringMode,

    #[arg(long, help = "Do not prompt for ad-hoc reviews")]
    pub no_shell: bool,

    #[arg(long, help = "Print the evaluation report as JSON")]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Load settings from a TOML file instead of the flags above")]
    pub config: Option<String>,
}

#[cfg(feature = "cli")]
impl AnalyzerSettings for CliConfig {
    fn training_path(&self) -> &str {
        &self.training
    }

    fn testing_path(&self) -> Option<&str> {
        if self.skip_evaluation {
            None
        } else {
            Some(&self.testing)
        }
    }

    fn query_cutoff(&self) -> i64 {
        self.query_cutoff
    }

    fn evaluation_cutoff(&self) -> i64 {
        self.evaluation_cutoff
    }

    fn workers(&self) -> usize {
        self.workers
    }

    fn scoring_mode(&self) -> ScoringMode {
        self.scoring
    }

    fn shell_enabled(&self) -> bool {
        !self.no_shell
    }

    fn json_report(&self) -> bool {
        self.json
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("training", &self.training)?;
        if !self.skip_evaluation {
            validate_path("testing", &self.testing)?;
        }
        validate_positive_number("workers", self.workers, 1)?;
        Ok(())
    }
}
