pub mod analyzer;
pub mod batch;
pub mod engine;
pub mod text;

pub use crate::domain::model::{Analysis, Prediction, Reaction, SentimentLabel};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, TextClassifier};
pub use crate::utils::error::Result;
