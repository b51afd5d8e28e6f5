use crate::domain::model::{BatchResult, SentimentLabel, TweetRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Maps already-normalized text to a binary sentiment label.
pub trait TextClassifier: Send + Sync {
    fn classify(&self, normalized: &str) -> Result<SentimentLabel>;

    fn positive_probability(&self, _normalized: &str) -> Result<Option<f64>> {
        Ok(None)
    }

    /// Label and positive-class probability together; override when both come from one pass.
    fn classify_with_confidence(&self, normalized: &str) -> Result<(SentimentLabel, Option<f64>)> {
        Ok((self.classify(normalized)?, self.positive_probability(normalized)?))
    }
}

impl<T: TextClassifier + ?Sized> TextClassifier for &T {
    fn classify(&self, normalized: &str) -> Result<SentimentLabel> {
        (**self).classify(normalized)
    }

    fn positive_probability(&self, normalized: &str) -> Result<Option<f64>> {
        (**self).positive_probability(normalized)
    }

    fn classify_with_confidence(&self, normalized: &str) -> Result<(SentimentLabel, Option<f64>)> {
        (**self).classify_with_confidence(normalized)
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn artifact_base(&self) -> &str;
    fn model_artifact(&self) -> &str;
    fn vectorizer_artifact(&self) -> &str;
    fn text_column(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<TweetRecord>>;
    async fn transform(&self, records: Vec<TweetRecord>) -> Result<BatchResult>;
    async fn load(&self, result: BatchResult) -> Result<String>;
}
