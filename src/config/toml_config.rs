use crate::core::{AnalyzerSettings, ScoringMode};
use crate::utils::error::{Result, SentimentError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_QUERY_CUTOFF: i64 = 3;
const DEFAULT_EVALUATION_CUTOFF: i64 = 10;
const DEFAULT_WORKERS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub corpus: CorpusConfig,
    pub model: Option<ModelConfig>,
    pub evaluation: Option<EvaluationConfig>,
    pub shell: Option<ShellConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    pub training: Option<String>,
    pub testing: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub query_cutoff: Option<i64>,
    pub evaluation_cutoff: Option<i64>,
    pub scoring: Option<ScoringMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub workers: Option<usize>,
    pub json_report: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SentimentError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CORPUS_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SentimentError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let training = validate_required_field("corpus.training", &self.corpus.training)?;
        validate_path("corpus.training", training)?;

        if let Some(testing) = &self.corpus.testing {
            validate_path("corpus.testing", testing)?;
        }

        if let Some(workers) = self.evaluation.as_ref().and_then(|e| e.workers) {
            validate_positive_number("evaluation.workers", workers, 1)?;
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.as_ref().and_then(|l| l.format).unwrap_or_default()
    }
}

impl AnalyzerSettings for TomlConfig {
    fn training_path(&self) -> &str {
        self.corpus.training.as_deref().unwrap_or_default()
    }

    fn testing_path(&self) -> Option<&str> {
        self.corpus.testing.as_deref()
    }

    fn query_cutoff(&self) -> i64 {
        self.model
            .as_ref()
            .and_then(|m| m.query_cutoff)
            .unwrap_or(DEFAULT_QUERY_CUTOFF)
    }

    fn evaluation_cutoff(&self) -> i64 {
        self.model
            .as_ref()
            .and_then(|m| m.evaluation_cutoff)
            .unwrap_or(DEFAULT_EVALUATION_CUTOFF)
    }

    fn workers(&self) -> usize {
        self.evaluation
            .as_ref()
            .and_then(|e| e.workers)
            .unwrap_or(DEFAULT_WORKERS)
    }

    fn scoring_mode(&self) -> ScoringMode {
        self.model.as_ref().and_then(|m| m.scoring).unwrap_or_default()
    }

    fn shell_enabled(&self) -> bool {
        self.shell.as_ref().map(|s| s.enabled).unwrap_or(true)
    }

    fn json_report(&self) -> bool {
        self.evaluation
            .as_ref()
            .and_then(|e| e.json_report)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
