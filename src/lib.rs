pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ArtifactClassifier, HttpStorage, LocalStorage};
pub use config::AppConfig;
pub use crate::core::{analyzer::SentimentAnalyzer, batch::BatchPipeline, engine::BatchEngine, text::clean_text};
pub use domain::model::{Analysis, Prediction, Reaction, SentimentLabel};
pub use domain::ports::TextClassifier;
pub use utils::error::{Result, SentimentError};
