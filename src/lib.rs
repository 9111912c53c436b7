pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::FileCorpusLoader;
pub use app::InteractiveShell;
pub use crate::core::{
    analyzer::SentimentAnalyzer, normalizer::normalize, scorer::SentimentModel, ConfusionCounts,
    Sentiment,
};
pub use utils::error::{Result, SentimentError};
